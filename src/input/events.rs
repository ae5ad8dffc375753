//! Generic input event types for host-independent handling.

/// Generic key representation.
///
/// Hosts map their native key codes to these values before calling
/// [`DrawingSurface::on_key_press`](crate::input::DrawingSurface::on_key_press).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used when matching against keybinding strings.
    ///
    /// Returns `None` for modifiers and unmapped keys, which never trigger actions
    /// on their own.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }

    /// Maps a keybinding key name back to a key.
    pub fn from_binding_name(name: &str) -> Key {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "space" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// A single pointer event delivered to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without a button held)
    Move { x: f64, y: f64 },
    /// Primary button released
    Up { x: f64, y: f64 },
    /// Pointer left the canvas; ends a drag like a release
    Leave { x: f64, y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_round_trip() {
        for key in [Key::Char('z'), Key::Escape, Key::Delete, Key::Space] {
            let name = key.binding_name().unwrap();
            assert_eq!(Key::from_binding_name(&name), key);
        }
    }

    #[test]
    fn modifiers_have_no_binding_name() {
        assert!(Key::Ctrl.binding_name().is_none());
        assert!(Key::Shift.binding_name().is_none());
        assert_eq!(Key::from_binding_name("F13"), Key::Unknown);
    }
}
