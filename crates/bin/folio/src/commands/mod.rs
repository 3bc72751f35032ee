pub mod check;
pub mod preview;
