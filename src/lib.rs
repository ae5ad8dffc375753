//! Library exports for the lumina diagram drawing surface.
//!
//! Exposes the element model and renderer, the gesture state machine, and the
//! configuration types so hosts other than the bundled CLI can embed the
//! surface and share its validation logic.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
