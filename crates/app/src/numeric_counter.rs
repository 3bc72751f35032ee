//! Numeric counter controller: wires a [`CounterSpec`] to a frame scheduler
//! and a display.
//!
//! The controller decides *when* a run starts ([`Trigger`]), *where* a
//! re-triggered run starts from ([`RestartPolicy`]), and guarantees that at
//! most one frame chain is alive at any time: starting a new run cancels the
//! previous [`CounterTask`] before the new one requests its first frame.

use std::cell::Cell;
use std::rc::Rc;

use folio_domain::counter::{
    CounterSpec, RestartPolicy, Trigger, VisibilityGate, VisibilitySample,
};

use crate::counter_task::{CounterTask, Publish};
use crate::ports::{CounterDisplay, FrameScheduler};

/// Start and restart behaviour of a [`NumericCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CounterOptions {
    pub trigger: Trigger,
    pub restart: RestartPolicy,
}

impl CounterOptions {
    /// Run on mount, restart per `restart` on every new target.
    #[must_use]
    pub fn immediate(restart: RestartPolicy) -> Self {
        Self {
            trigger: Trigger::Immediate,
            restart,
        }
    }
}

/// An animated number bound to one display.
///
/// Dropping the counter drops its task, which cancels any pending frame.
pub struct NumericCounter<S: FrameScheduler, D> {
    spec: CounterSpec,
    options: CounterOptions,
    scheduler: S,
    display: Rc<D>,
    current: Rc<Cell<f64>>,
    gate: Option<VisibilityGate>,
    started: bool,
    task: Option<CounterTask<S>>,
}

impl<S, D> NumericCounter<S, D>
where
    S: FrameScheduler + Clone + 'static,
    S::Handle: 'static,
    D: CounterDisplay + 'static,
{
    /// Create the counter and show its initial text (the value `0`).
    pub fn new(spec: CounterSpec, scheduler: S, display: D, options: CounterOptions) -> Self {
        let gate = match options.trigger {
            Trigger::Immediate => None,
            Trigger::OnVisible { threshold } => Some(VisibilityGate::new(threshold)),
        };
        let counter = Self {
            spec,
            options,
            scheduler,
            display: Rc::new(display),
            current: Rc::new(Cell::new(0.0)),
            gate,
            started: false,
            task: None,
        };
        counter.display.show(&counter.text());
        counter
    }

    /// Host mounted the counter. Starts the first run for
    /// [`Trigger::Immediate`]; visibility-gated counters keep waiting.
    pub fn mount(&mut self) {
        if self.gate.is_none() && !self.started {
            self.run_from(0.0);
        }
    }

    /// Feed a viewport observation. Returns `true` when this sample started
    /// the counter, which happens at most once per instance.
    pub fn observe_visibility(&mut self, sample: VisibilitySample) -> bool {
        let Some(gate) = self.gate.as_mut() else {
            return false;
        };
        if !gate.observe(sample) {
            return false;
        }
        tracing::debug!(ratio = sample.ratio, "counter became visible");
        self.run_from(0.0);
        true
    }

    /// Switch to a new target.
    ///
    /// A counter that has already run cancels its in-flight frame chain and
    /// starts a new run from the point picked by the restart policy. One that
    /// has not started yet (not mounted, or not visible yet) only takes the
    /// new configuration.
    pub fn retarget(&mut self, spec: CounterSpec) {
        self.spec = spec;
        if !self.started {
            self.display.show(&self.text());
            return;
        }
        let start = match self.options.restart {
            RestartPolicy::FromZero => 0.0,
            RestartPolicy::FromCurrent => self.current.get(),
        };
        tracing::debug!(
            from = start,
            to = self.spec.target(),
            policy = ?self.options.restart,
            "counter retargeted"
        );
        self.run_from(start);
    }

    /// Stop the current run, leaving the displayed value where it is.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    fn run_from(&mut self, start: f64) {
        self.cancel();
        self.started = true;

        let spec = self.spec.clone();
        let display = Rc::clone(&self.display);
        let current = Rc::clone(&self.current);
        let publish: Publish = Rc::new(move |value| {
            current.set(value);
            display.show(&spec.render(value));
        });

        self.task = Some(CounterTask::start(
            self.spec.animation_from(start),
            self.scheduler.clone(),
            publish,
        ));
    }
}

impl<S: FrameScheduler, D> NumericCounter<S, D> {
    /// Text currently on display.
    #[must_use]
    pub fn text(&self) -> String {
        self.spec.render(self.current.get())
    }

    /// Numeric value currently on display.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current.get()
    }

    #[must_use]
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// `true` once the first run has been triggered.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// `true` while a run is requesting frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(CounterTask::is_running)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_domain::counter::Easing;

    use super::*;
    use crate::frame_clock::ManualFrameClock;

    type Shown = Rc<RefCell<Vec<String>>>;

    fn immediate_counter(
        spec: CounterSpec,
        restart: RestartPolicy,
    ) -> (
        Rc<ManualFrameClock>,
        Shown,
        NumericCounter<Rc<ManualFrameClock>, impl Fn(&str)>,
    ) {
        let clock = Rc::new(ManualFrameClock::new());
        let shown: Shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let counter = NumericCounter::new(
            spec,
            Rc::clone(&clock),
            move |text: &str| sink.borrow_mut().push(text.to_string()),
            CounterOptions::immediate(restart),
        );
        (clock, shown, counter)
    }

    fn spec(target: impl Into<folio_domain::counter::CounterTarget>) -> CounterSpec {
        CounterSpec::builder().target(target).build().unwrap()
    }

    #[test]
    fn should_show_zero_before_first_frame() {
        let (_, shown, counter) = immediate_counter(spec("960+"), RestartPolicy::FromZero);
        assert_eq!(*shown.borrow(), vec!["0+".to_string()]);
        assert_eq!(counter.text(), "0+");
        assert!(!counter.has_started());
    }

    #[test]
    fn should_reach_target_after_duration() {
        let (clock, _, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target(960_i64)
                .duration_ms(2000.0)
                .decimals(0)
                .build()
                .unwrap(),
            RestartPolicy::FromZero,
        );
        counter.mount();
        clock.run(0.0, 16.0, 1000);

        assert_eq!(counter.text(), "960");
        assert!(!counter.is_running());
        assert!(clock.now() >= 2000.0);
    }

    #[test]
    fn should_render_grouped_final_value() {
        let (clock, shown, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target(1_234_567_i64)
                .decimals(0)
                .build()
                .unwrap(),
            RestartPolicy::FromZero,
        );
        counter.mount();
        clock.run(0.0, 16.0, 1000);

        assert_eq!(shown.borrow().last().map(String::as_str), Some("1,234,567"));
    }

    #[test]
    fn should_render_decimals_of_final_value() {
        let (clock, _, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target(3.9)
                .decimals(1)
                .build()
                .unwrap(),
            RestartPolicy::FromZero,
        );
        counter.mount();
        clock.run(0.0, 16.0, 1000);

        assert_eq!(counter.text(), "3.9");
    }

    #[test]
    fn should_render_zero_target_without_artifacts() {
        let (clock, shown, mut counter) = immediate_counter(spec(0_i64), RestartPolicy::FromZero);
        counter.mount();
        clock.run(0.0, 16.0, 1000);

        assert!(shown.borrow().iter().all(|text| text == "0"));
        assert_eq!(counter.text(), "0");
    }

    #[test]
    fn should_show_target_on_first_frame_when_duration_is_zero() {
        let (clock, shown, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target("100%")
                .duration_ms(0.0)
                .build()
                .unwrap(),
            RestartPolicy::FromZero,
        );
        counter.mount();
        assert_eq!(clock.tick(0.0), 1);

        assert_eq!(*shown.borrow(), vec!["0%".to_string(), "100%".to_string()]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn should_never_decrease_for_positive_target() {
        let (clock, _, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target(80_000_i64)
                .duration_ms(1000.0)
                .easing(Easing::EaseOutQuart)
                .build()
                .unwrap(),
            RestartPolicy::FromZero,
        );
        counter.mount();

        let mut previous = counter.value();
        let mut now = 0.0;
        while clock.pending() > 0 {
            clock.tick(now);
            assert!(counter.value() >= previous);
            assert!(counter.value() <= 80_000.0);
            previous = counter.value();
            now += 16.0;
        }
        assert_eq!(counter.text(), "80,000");
    }

    #[test]
    fn should_return_same_text_after_completion() {
        let (clock, _, mut counter) = immediate_counter(spec("$1.7M+"), RestartPolicy::FromZero);
        counter.mount();
        clock.run(0.0, 16.0, 1000);

        let first = counter.text();
        clock.tick(10_000.0);
        assert_eq!(counter.text(), first);
        assert_eq!(counter.text(), "$1.7M+");
    }

    #[test]
    fn should_mount_only_once() {
        let (clock, _, mut counter) = immediate_counter(spec(10_i64), RestartPolicy::FromZero);
        counter.mount();
        counter.mount();
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn should_keep_only_last_frame_chain_after_rapid_retargets() {
        let (clock, shown, mut counter) = immediate_counter(
            CounterSpec::builder()
                .target(100_i64)
                .duration_ms(1000.0)
                .build()
                .unwrap(),
            RestartPolicy::FromCurrent,
        );
        counter.mount();
        clock.tick(0.0);
        clock.tick(100.0);
        assert!((counter.value() - 10.0).abs() < 1e-9);

        counter.retarget(
            CounterSpec::builder()
                .target(200_i64)
                .duration_ms(1000.0)
                .build()
                .unwrap(),
        );
        assert_eq!(clock.pending(), 1);
        counter.retarget(
            CounterSpec::builder()
                .target(300_i64)
                .duration_ms(1000.0)
                .build()
                .unwrap(),
        );
        assert_eq!(clock.pending(), 1);

        let before = shown.borrow().len();
        let mut previous = counter.value();
        let mut now = 116.0;
        while clock.pending() > 0 {
            assert_eq!(clock.tick(now), 1);
            assert!(counter.value() >= previous);
            previous = counter.value();
            now += 16.0;
        }
        assert!(shown.borrow().len() > before);
        assert_eq!(counter.text(), "300");
    }

    #[test]
    fn should_restart_from_zero_when_configured() {
        let (clock, _, mut counter) = immediate_counter(spec(100_i64), RestartPolicy::FromZero);
        counter.mount();
        clock.tick(0.0);
        clock.tick(1000.0);

        counter.retarget(spec(50_i64));
        clock.tick(2000.0);
        assert!(counter.value().abs() < f64::EPSILON);
    }

    #[test]
    fn should_continue_from_current_value_when_configured() {
        let (clock, _, mut counter) = immediate_counter(spec(100_i64), RestartPolicy::FromCurrent);
        counter.mount();
        clock.tick(0.0);
        clock.tick(1000.0);
        let midway = counter.value();

        counter.retarget(spec(500_i64));
        clock.tick(1016.0);
        assert!((counter.value() - midway).abs() < f64::EPSILON);
    }

    #[test]
    fn should_only_store_target_before_start() {
        let (clock, shown, mut counter) = immediate_counter(spec(10_i64), RestartPolicy::FromZero);
        counter.retarget(spec("$5k"));

        assert_eq!(clock.pending(), 0);
        assert_eq!(shown.borrow().last().map(String::as_str), Some("$0k"));
    }

    #[test]
    fn should_cancel_pending_frame_on_drop() {
        let (clock, _, mut counter) = immediate_counter(spec(10_i64), RestartPolicy::FromZero);
        counter.mount();
        assert_eq!(clock.pending(), 1);

        drop(counter);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn should_leave_value_in_place_when_cancelled() {
        let (clock, _, mut counter) = immediate_counter(spec(100_i64), RestartPolicy::FromZero);
        counter.mount();
        clock.tick(0.0);
        clock.tick(500.0);
        counter.cancel();

        assert_eq!(clock.pending(), 0);
        assert_eq!(counter.text(), "25");
        assert!(!counter.is_running());
    }

    mod visibility {
        use super::*;

        fn gated_counter() -> (
            Rc<ManualFrameClock>,
            NumericCounter<Rc<ManualFrameClock>, impl Fn(&str)>,
        ) {
            let clock = Rc::new(ManualFrameClock::new());
            let counter = NumericCounter::new(
                spec("960+"),
                Rc::clone(&clock),
                |_: &str| {},
                CounterOptions::default(),
            );
            (clock, counter)
        }

        #[test]
        fn should_not_start_on_mount() {
            let (clock, mut counter) = gated_counter();
            counter.mount();
            assert_eq!(clock.pending(), 0);
        }

        #[test]
        fn should_start_on_first_visible_sample() {
            let (clock, mut counter) = gated_counter();
            assert!(!counter.observe_visibility(VisibilitySample::hidden()));
            assert!(!counter.observe_visibility(VisibilitySample::visible(0.05)));
            assert!(counter.observe_visibility(VisibilitySample::visible(0.1)));
            assert_eq!(clock.pending(), 1);
        }

        #[test]
        fn should_ignore_later_intersection_changes() {
            let (clock, mut counter) = gated_counter();
            counter.observe_visibility(VisibilitySample::visible(1.0));
            clock.run(0.0, 16.0, 1000);
            assert_eq!(counter.text(), "960+");

            assert!(!counter.observe_visibility(VisibilitySample::hidden()));
            assert!(!counter.observe_visibility(VisibilitySample::visible(1.0)));
            assert_eq!(clock.pending(), 0);
            assert_eq!(counter.text(), "960+");
        }

        #[test]
        fn should_wait_for_visibility_after_retarget() {
            let (clock, mut counter) = gated_counter();
            counter.retarget(spec("500+"));
            assert_eq!(clock.pending(), 0);

            counter.observe_visibility(VisibilitySample::visible(0.5));
            clock.run(0.0, 16.0, 1000);
            assert_eq!(counter.text(), "500+");
        }
    }
}
