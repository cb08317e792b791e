mod home;
mod not_found;
mod track;

pub use home::Home;
pub use not_found::NotFound;
pub use track::Track;
