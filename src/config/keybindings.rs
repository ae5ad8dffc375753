//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keyboard shortcuts for the surface's
//! auxiliary operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Remove the most recently committed element
    Undo,
    /// Remove every committed element
    ClearCanvas,
    /// Dismiss a pending label prompt or abandon the current drag
    Cancel,
}

/// Errors produced while parsing or assembling keybindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingError {
    #[error("empty keybinding string")]
    Empty,
    #[error("no key specified in '{0}'")]
    MissingKey(String),
    #[error("duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// A trailing "++" binds the '+' key itself.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty pieces are the '+' key
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_canvas = ["Ctrl+E"]
/// cancel = ["Escape"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            clear_canvas: default_clear_canvas(),
            cancel: default_cancel(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    ///
    /// Returns an error if any keybinding string is invalid or if the same
    /// chord is bound twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let mut map = HashMap::new();

        let groups = [
            (&self.undo, Action::Undo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.cancel, Action::Cancel),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Ctrl+E".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(!binding.shift);
    }

    #[test]
    fn test_parse_modifier_order_and_spaces() {
        let a = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        let b = KeyBinding::parse("Shift + ctrl + Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyBinding::parse("   "), Err(KeybindingError::Empty));
        assert!(matches!(
            KeyBinding::parse("Ctrl+Shift"),
            Err(KeybindingError::MissingKey(_))
        ));
    }

    #[test]
    fn test_matches_is_case_insensitive_on_key() {
        let binding = KeyBinding::parse("Ctrl+Z").unwrap();
        assert!(binding.matches("z", true, false, false));
        assert!(binding.matches("Z", true, false, false));
        assert!(!binding.matches("z", false, false, false));
        assert!(!binding.matches("z", true, true, false));
    }

    #[test]
    fn test_build_default_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get(&KeyBinding::parse("Ctrl+Z").unwrap()),
            Some(&Action::Undo)
        );
        assert_eq!(
            map.get(&KeyBinding::parse("Escape").unwrap()),
            Some(&Action::Cancel)
        );
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            undo: vec!["Ctrl+Z".to_string()],
            clear_canvas: vec!["ctrl + Z".to_string()],
            cancel: default_cancel(),
        };

        match config.build_action_map() {
            Err(KeybindingError::Duplicate { first, second, .. }) => {
                assert_eq!(first, Action::Undo);
                assert_eq!(second, Action::ClearCanvas);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }
}
