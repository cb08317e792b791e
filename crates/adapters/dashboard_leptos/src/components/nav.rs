use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <a class="brand" href="/">"Bayanchor"</a>
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/track">"Track a shipment"</a></li>
            </ul>
        </nav>
    }
}
