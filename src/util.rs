//! Color name parsing helpers shared by configuration and scripts.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
/// - "primary" for the diagram blue (`#2563EB`)
/// - any `#RRGGBB` or `#RGB` hex string
///
/// # Returns
/// - `Some(Color)` if the name is recognized
/// - `None` otherwise
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.starts_with('#') {
        return Color::from_hex(name);
    }

    match name.to_lowercase().as_str() {
        "primary" => Some(DIAGRAM_BLUE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
