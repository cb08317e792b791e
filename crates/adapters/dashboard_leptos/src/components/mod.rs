mod animated_counter;
mod loading;
mod nav;
mod shipment_details;
mod stat_card;

pub use animated_counter::{AnimatedCounter, SharedCounter};
pub use loading::Loading;
pub use nav::Nav;
pub use shipment_details::ShipmentDetails;
pub use stat_card::StatCard;
