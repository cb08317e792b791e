use std::sync::Arc;

use bayanchor_domain::counter::EasedCounter;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use components::{Nav, SharedCounter};
use pages::{Home, NotFound, Track};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context::<SharedCounter>(Arc::new(EasedCounter::default()));

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("track") view=Track/>
                    <Route path=path!("track/:number") view=Track/>
                </Routes>
            </main>
        </Router>
    }
}
