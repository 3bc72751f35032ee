mod counter;
mod hours_counter;
mod metric_card;
mod nav;
mod theme_toggle;

pub use counter::Counter;
pub use hours_counter::HoursCounter;
pub use metric_card::MetricGrid;
pub use nav::Nav;
pub use theme_toggle::ThemeToggle;
