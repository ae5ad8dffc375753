//! Input handling and gesture state machine.
//!
//! This module translates host pointer and keyboard events into diagram
//! edits. It tracks the selected tool, the gesture in progress (idle, drawing,
//! or waiting for a text label), and keyboard shortcuts for undo and clear.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, PointerEvent};
pub use modifiers::Modifiers;
pub use state::{ContentListener, DrawingSurface, GestureState};
pub use tool::{Tool, ToolCategory, UnknownTool};
