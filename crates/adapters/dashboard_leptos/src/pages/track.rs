//! Tracking page: a lookup form and, once a number is given, its details.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{Loading, ShipmentDetails};

#[component]
pub fn Track() -> impl IntoView {
    let params = use_params_map();
    let number = move || params.read().get("number").unwrap_or_default();

    let details = LocalResource::new(move || {
        let number = number();
        async move {
            if number.trim().is_empty() {
                None
            } else {
                Some(api::fetch_shipment_details(&number).await)
            }
        }
    });

    let (input, set_input) = signal(number());
    let navigate = use_navigate();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = input.get_untracked();
        let value = value.trim();
        if !value.is_empty() {
            navigate(&format!("/track/{value}"), Default::default());
        }
    };

    view! {
        <div>
            <h1>"Track your shipment"</h1>
            <form class="track-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="e.g. BAY-20250307-001"
                    prop:value=input
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit">"Track"</button>
            </form>

            <Suspense fallback=move || view! { <Loading message="Looking up shipment\u{2026}"/> }>
                {move || {
                    details.read().as_ref().map(|result| match result {
                        None => view! {
                            <p class="hint">"Enter a tracking number to see its shipment details."</p>
                        }.into_any(),
                        Some(Ok(shipment)) => view! {
                            <ShipmentDetails details=shipment.clone()/>
                        }.into_any(),
                        Some(Err(err)) => view! {
                            <p class="error">{"Failed to load shipment: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
