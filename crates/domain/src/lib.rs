//! # folio-domain
//!
//! Pure domain model for the folio portfolio site.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Parse **counter targets** (`"$1.7M+"`, `"960+"`, `"100%"`) into a magnitude
//!   plus literal decoration
//! - Format numbers with fixed decimals and thousands grouping
//! - Define **easing** curves and the **`CountAnimation`** state machine
//! - Define **triggers** (immediate, visibility-gated) and the stepped
//!   approach counter used by the hero section
//! - Define the site **theme** and the static **portfolio content**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Frame scheduling and rendering are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod content;
pub mod counter;
pub mod theme;
