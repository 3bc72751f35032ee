//! Display port: where a counter's formatted text ends up.

/// Rendering surface for counter text.
pub trait CounterDisplay {
    /// Replace the displayed text.
    fn show(&self, text: &str);
}

impl<F: Fn(&str)> CounterDisplay for F {
    fn show(&self, text: &str) {
        self(text);
    }
}
