//! Landing page with the headline statistics.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::components::{Loading, StatCard};

#[component]
pub fn Home() -> impl IntoView {
    let stats = LocalResource::new(api::fetch_stats);

    view! {
        <div>
            <section class="hero">
                <h1>"Freight that arrives on time"</h1>
                <p>"Road, sea and air shipping across the globe."</p>
                <A href="/track">"Track a shipment \u{2192}"</A>
            </section>

            <section class="stats">
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        stats.read().as_ref().map(|result| match result {
                            Ok(list) => view! {
                                <div class="stat-grid">
                                    {list
                                        .iter()
                                        .cloned()
                                        .map(|stat| view! { <StatCard stat=stat/> })
                                        .collect_view()}
                                </div>
                            }.into_any(),
                            Err(err) => view! {
                                <p class="error">{"Failed to load statistics: "} {err.to_string()}</p>
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
