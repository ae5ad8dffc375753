mod actions;
mod pointer;
mod render;
mod surface;

pub use self::surface::{ContentListener, DrawingSurface, GestureState};
