//! Stat card component for displaying a labelled, animated figure.

use std::time::Duration;

use bayanchor_domain::stat::Stat;
use leptos::prelude::*;

use super::AnimatedCounter;

/// Gap between the entrance of two consecutive cards.
const STAGGER_STEP: Duration = Duration::from_millis(150);

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "globe" => "\u{1F310}",
        "package" => "\u{1F4E6}",
        "clock" => "\u{23F1}",
        "headset" => "\u{1F3A7}",
        "truck" => "\u{1F69A}",
        "ship" => "\u{1F6A2}",
        "plane" => "\u{2708}",
        _ => "\u{2022}",
    }
}

/// A card with an optional icon, a counting value and an uppercase label.
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let delay = stat.stagger(STAGGER_STEP);
    let style = format!("animation-delay: {}ms", delay.as_millis());
    let icon = stat.icon.as_deref().map(|name| {
        view! { <div class="stat-icon" title=name.to_string()>{icon_glyph(name)}</div> }
    });
    let label = stat.label_text();

    view! {
        <div class="stat-card" style=style>
            {icon}
            <AnimatedCounter stat=stat start_after=delay/>
            <span class="stat-label">{label}</span>
        </div>
    }
}
