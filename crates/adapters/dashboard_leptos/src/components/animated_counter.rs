//! Number that counts up from zero to a statistic's value.

use std::sync::Arc;
use std::time::Duration;

use bayanchor_domain::counter::{Counter, EasedCounter};
use bayanchor_domain::stat::Stat;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Counter implementation provided through Leptos context by `<App/>`.
pub type SharedCounter = Arc<dyn Counter + Send + Sync>;

/// How long one count takes from zero to the final value.
const COUNT_DURATION: Duration = Duration::from_secs(2);

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Renders `prefix + value + suffix`, stepping through the frames of the
/// context's [`Counter`] after `start_after` has elapsed.
///
/// Falls back to [`EasedCounter::default`] when no counter is provided.
#[component]
pub fn AnimatedCounter(
    stat: Stat,
    /// Delay before the first frame.
    #[prop(optional)]
    start_after: Duration,
) -> impl IntoView {
    let counter = use_context::<SharedCounter>()
        .unwrap_or_else(|| Arc::new(EasedCounter::default()));
    let frames = counter.frames(0.0, stat.value, COUNT_DURATION);
    let interval = millis(counter.frame_interval());

    let (current, set_current) = signal(0.0_f64);

    spawn_local(async move {
        TimeoutFuture::new(millis(start_after)).await;
        for value in frames {
            TimeoutFuture::new(interval).await;
            // The card was unmounted; stop counting.
            if set_current.try_set(value).is_some() {
                break;
            }
        }
    });

    let text = move || stat.display(current.get());

    view! { <span class="stat-value">{text}</span> }
}
