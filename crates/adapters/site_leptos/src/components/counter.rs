//! Animated number that counts up once it scrolls into view.

use folio_app::numeric_counter::{CounterOptions, NumericCounter};
use folio_domain::counter::{
    CounterSpec, CounterTarget, Easing, RestartPolicy, Trigger, VisibilitySample,
};
use folio_domain::error::ParseError;
use leptos::html;
use leptos::prelude::*;

use crate::raf::RafScheduler;
use crate::visibility::VisibilityObserver;

type SiteCounter = NumericCounter<RafScheduler, Box<dyn Fn(&str)>>;

/// Presentation settings layered over the target.
#[derive(Debug, Clone, Default, PartialEq)]
struct Decoration {
    duration_ms: Option<f64>,
    easing: Easing,
    prefix: Option<String>,
    suffix: Option<String>,
    decimals: Option<u32>,
}

impl Decoration {
    fn spec(&self, target: CounterTarget) -> Result<CounterSpec, ParseError> {
        let mut builder = CounterSpec::builder().target(target).easing(self.easing);
        if let Some(duration_ms) = self.duration_ms {
            builder = builder.duration_ms(duration_ms);
        }
        if let Some(prefix) = &self.prefix {
            builder = builder.prefix(prefix.as_str());
        }
        if let Some(suffix) = &self.suffix {
            builder = builder.suffix(suffix.as_str());
        }
        if let Some(decimals) = self.decimals {
            builder = builder.decimals(decimals);
        }
        builder.build()
    }
}

/// Shown instead of a counter whose target has no number.
fn raw_text(target: &CounterTarget) -> String {
    match target {
        CounterTarget::Number(value) => value.to_string(),
        CounterTarget::Decorated(text) => text.clone(),
    }
}

/// Counts from zero up to `target` over `duration_ms`.
///
/// The run starts when a tenth of the element is visible, or on mount with
/// `immediate`. A new `target` restarts the run from the value on screen.
/// A target without a number is logged and rendered as written.
#[component]
pub fn Counter(
    /// Final value: a number, or text such as `"$1.7M+"`.
    #[prop(into)]
    target: Signal<CounterTarget>,
    #[prop(optional)] duration_ms: Option<f64>,
    #[prop(optional)] easing: Easing,
    /// Replaces the prefix found in the target.
    #[prop(optional, into)]
    prefix: Option<String>,
    /// Replaces the suffix found in the target.
    #[prop(optional, into)]
    suffix: Option<String>,
    #[prop(optional)] decimals: Option<u32>,
    /// Start on mount instead of waiting to scroll into view.
    #[prop(optional)]
    immediate: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let decoration = Decoration {
        duration_ms,
        easing,
        prefix,
        suffix,
        decimals,
    };
    let options = CounterOptions {
        trigger: if immediate {
            Trigger::Immediate
        } else {
            Trigger::on_visible()
        },
        restart: RestartPolicy::FromCurrent,
    };

    let initial = target.with_untracked(|target| match decoration.spec(target.clone()) {
        Ok(spec) => spec.render(0.0),
        Err(_) => raw_text(target),
    });
    let (text, set_text) = signal(initial);
    let node_ref = NodeRef::<html::Span>::new();
    let counter = StoredValue::new_local(None::<SiteCounter>);
    let observer = StoredValue::new_local(None::<VisibilityObserver>);

    Effect::new(move |_| {
        let target = target.get();
        match decoration.spec(target.clone()) {
            Ok(spec) => counter.update_value(|slot| match slot {
                Some(active) => active.retarget(spec),
                None => {
                    let display: Box<dyn Fn(&str)> =
                        Box::new(move |text: &str| set_text.set(text.to_string()));
                    let mut fresh = NumericCounter::new(spec, RafScheduler, display, options);
                    fresh.mount();
                    *slot = Some(fresh);
                }
            }),
            Err(err) => {
                leptos::logging::error!("counter target cannot be animated: {err}");
                counter.update_value(|slot| {
                    if let Some(active) = slot {
                        active.cancel();
                    }
                });
                set_text.set(raw_text(&target));
            }
        }
    });

    if let Trigger::OnVisible { threshold } = options.trigger {
        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            let on_sample = move |sample: VisibilitySample| {
                counter
                    .try_update_value(|slot| {
                        slot.as_mut()
                            .is_some_and(|active| active.observe_visibility(sample))
                    })
                    .unwrap_or(true)
            };
            match VisibilityObserver::observe(&el, threshold, on_sample) {
                Ok(guard) => observer.set_value(Some(guard)),
                Err(err) => {
                    leptos::logging::warn!("no IntersectionObserver, starting now: {err:?}");
                    counter.update_value(|slot| {
                        if let Some(active) = slot {
                            active.observe_visibility(VisibilitySample::visible(1.0));
                        }
                    });
                }
            }
        });
    }

    on_cleanup(move || {
        observer.set_value(None);
        counter.set_value(None);
    });

    view! { <span node_ref=node_ref class=class>{text}</span> }
}
