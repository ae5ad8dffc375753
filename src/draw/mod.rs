//! Diagram element model and rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawingElement`]: one rectangle, circle, line or text annotation
//! - [`Diagram`]: the committed element list for a session
//! - [`render`]: pure display-list builder over a diagram and its preview
//! - [`DrawingContext`]: the rendering capability, with null, recording and
//!   Cairo implementations

pub mod cairo_backend;
pub mod color;
pub mod context;
pub mod diagram;
pub mod element;
pub mod font;
pub mod render;

// Re-export commonly used types at module level
pub use cairo_backend::CairoContext;
pub use color::Color;
pub use context::{DrawingContext, NullContext, RecordingContext};
pub use diagram::Diagram;
pub use element::{COMMIT_THRESHOLD, DrawingElement, ElementId, ElementKind, Extent, Point};
pub use font::FontDescriptor;
pub use render::{DrawCommand, RenderStyle, render, replay};
