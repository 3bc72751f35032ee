//! `folio preview`: play a counter on a simulated display clock and print
//! every frame.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use folio_app::frame_clock::ManualFrameClock;
use folio_app::numeric_counter::{CounterOptions, NumericCounter};
use folio_domain::counter::{CounterSpec, RestartPolicy, Trigger, VisibilitySample};
use serde::Serialize;

/// Upper bound on simulated frames, whatever the duration.
const MAX_FRAMES: usize = 100_000;

/// How the preview drives the counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    /// Simulated display refresh rate.
    pub fps: u32,
    /// Start the counter only once it scrolls into view at this time.
    /// `None` starts it on mount.
    pub visible_after_ms: Option<f64>,
    /// Trigger used when `visible_after_ms` is set.
    pub trigger: Trigger,
    pub restart: RestartPolicy,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            visible_after_ms: None,
            trigger: Trigger::default(),
            restart: RestartPolicy::default(),
        }
    }
}

/// One displayed text and when it appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewFrame {
    pub at_ms: f64,
    pub text: String,
}

/// Run `spec` to completion and return every text the display received.
#[must_use]
pub fn preview(spec: CounterSpec, options: &PreviewOptions) -> Vec<PreviewFrame> {
    let clock = Rc::new(ManualFrameClock::new());
    let frames = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&frames);
    let display_clock = Rc::clone(&clock);
    let display = move |text: &str| {
        sink.borrow_mut().push(PreviewFrame {
            at_ms: display_clock.now(),
            text: text.to_string(),
        });
    };

    let counter_options = CounterOptions {
        trigger: if options.visible_after_ms.is_some() {
            options.trigger
        } else {
            Trigger::Immediate
        },
        restart: options.restart,
    };
    let mut counter = NumericCounter::new(spec, Rc::clone(&clock), display, counter_options);
    counter.mount();

    let step = 1000.0 / f64::from(options.fps.max(1));
    let start = options.visible_after_ms.unwrap_or(0.0);
    if options.visible_after_ms.is_some() {
        counter.observe_visibility(VisibilitySample::visible(1.0));
    }
    let ran = clock.run(start, step, MAX_FRAMES);
    tracing::debug!(frames = ran, "preview finished");
    drop(counter);

    frames.take()
}

/// Write frames as `<time> ms  <text>` lines.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_frames(frames: &[PreviewFrame], out: &mut impl Write) -> std::io::Result<()> {
    for frame in frames {
        writeln!(out, "{:>9.1} ms  {}", frame.at_ms, frame.text)?;
    }
    Ok(())
}

/// Write frames as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub fn write_frames_json(frames: &[PreviewFrame], out: &mut impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, frames)?;
    writeln!(out).map_err(serde_json::Error::io)
}
