//! Metric cards: an animated value above its caption.

use folio_domain::content::Metric;
use folio_domain::counter::CounterTarget;
use leptos::prelude::*;

use super::Counter;

/// A card displaying a label and its animated value.
#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    view! {
        <div class="metric-card">
            <Counter target=CounterTarget::Decorated(metric.value) class="metric-value"/>
            <span class="metric-label">{metric.label}</span>
        </div>
    }
}

/// Row of metric cards; renders nothing for an empty list.
#[component]
pub fn MetricGrid(metrics: Vec<Metric>) -> impl IntoView {
    (!metrics.is_empty()).then(|| {
        view! {
            <div class="metric-grid">
                {metrics
                    .into_iter()
                    .map(|metric| view! { <MetricCard metric=metric/> })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}
