//! Collapsible card with the sender, receiver, package and carrier of a
//! shipment.

use bayanchor_domain::disclosure::Disclosure;
use bayanchor_domain::presenter::{PartyView, ShipmentDetailsView};
use leptos::prelude::*;

#[component]
fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="field">
            <p class="field-label">{label}</p>
            <p class="field-value">{value}</p>
        </div>
    }
}

#[component]
fn PartyCard(heading: &'static str, party: PartyView) -> impl IntoView {
    let phone = party
        .phone
        .map(|phone| view! { <p class="party-phone">{phone}</p> });

    view! {
        <div class="party">
            <div class="section-heading">{heading}</div>
            <p class="party-name">{party.name}</p>
            <p class="party-address">{party.address}</p>
            {phone}
        </div>
    }
}

/// Shipment details card. Starts expanded; the header toggles it.
#[component]
pub fn ShipmentDetails(details: ShipmentDetailsView) -> impl IntoView {
    let (disclosure, set_disclosure) = signal(Disclosure::default());

    let toggle = move |_| set_disclosure.update(|state| *state = state.toggle());
    let is_open = move || disclosure.get().is_open();
    let chevron_style = move || {
        format!(
            "transform: rotate({}deg)",
            disclosure.get().chevron_rotation()
        )
    };

    let ShipmentDetailsView {
        tracking_number,
        sender,
        receiver,
        package,
        carrier,
        created,
        last_updated,
        service_type,
        shipment_mode,
    } = details;

    view! {
        <section class="card shipment-details" data-state=move || disclosure.get().to_string()>
            <button
                class="disclosure-header"
                on:click=toggle
                aria-expanded=move || is_open().to_string()
            >
                <div class="disclosure-title">
                    <h3>"Shipment Details"</h3>
                    <p>"Sender, receiver & package info"</p>
                </div>
                <span class="chevron" style=chevron_style>"\u{2304}"</span>
            </button>

            <div class="disclosure-body" hidden=move || !is_open()>
                <p class="tracking-number">{tracking_number}</p>

                <div class="parties">
                    <PartyCard heading="Sender" party=sender/>
                    <PartyCard heading="Receiver" party=receiver/>
                </div>

                <div class="package">
                    <div class="section-heading">"Package Details"</div>
                    <div class="grid">
                        <Field label="Weight" value=package.weight/>
                        <Field label="Length" value=package.length/>
                        <Field label="Width" value=package.width/>
                        <Field label="Height" value=package.height/>
                        <Field label="Quantity" value=package.quantity/>
                        <Field label="Declared Value" value=package.declared_value/>
                    </div>
                    <Field label="Description" value=package.description/>
                </div>

                <div class="carrier">
                    <div class="section-heading">"Carrier Information"</div>
                    <div class="grid">
                        <Field label="Carrier" value=carrier.name/>
                        <Field label="Reference" value=carrier.reference/>
                        <Field label="Mode" value=carrier.mode/>
                    </div>
                </div>

                <div class="timeline grid">
                    <Field label="Created" value=created/>
                    <Field label="Last Updated" value=last_updated/>
                    <Field label="Service Type" value=service_type/>
                    <Field label="Shipment Mode" value=shipment_mode/>
                </div>
            </div>
        </section>
    }
}
