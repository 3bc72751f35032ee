//! Hero banner counter that races toward its target in shrinking steps.

use folio_domain::counter::StepApproach;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HoursCounter(
    /// Hours to count up to.
    target: i64,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let (value, set_value) = signal(0_i64);

    spawn_local(async move {
        let mut approach = StepApproach::new(target);
        while let Some(next) = approach.tick() {
            TimeoutFuture::new(StepApproach::INTERVAL_MS).await;
            // unmounted
            if set_value.try_set(next).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="hero-counter">
            <span class="hero-counter-value">{move || format!("{}+", value.get())}</span>
            <span class="hero-counter-label">{label}</span>
        </div>
    }
}
