//! Line-oriented gesture scripts.
//!
//! A script is a plain-text list of pointer and keyboard events that can be
//! replayed against a [`DrawingSurface`] without a windowing system:
//!
//! ```text
//! # draw a box and label it
//! tool rectangle
//! down 10 10
//! move 100 80
//! up 100 80
//! tool text
//! down 20 40
//! label Payment API
//! key Ctrl+Z
//! ```

use crate::config::{KeyBinding, KeybindingError};
use crate::draw::DrawingContext;
use crate::input::{DrawingSurface, Key, PointerEvent};
use log::debug;
use std::str::FromStr;
use thiserror::Error;

/// A single replayable script step.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tool(String),
    Pointer(PointerEvent),
    /// Answers a pending label prompt
    Label(String),
    /// Dismisses a pending label prompt
    Cancel,
    /// Presses a key chord such as `Ctrl+Z`
    Key(KeyBinding),
    Undo,
    Clear,
}

/// What went wrong on a script line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Keybinding(#[from] KeybindingError),
}

/// A parse failure, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl FromStr for Command {
    type Err = ScriptErrorKind;

    /// Parses one non-empty, comment-free script line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "tool" => {
                require(word, rest, "a tool id")?;
                Ok(Command::Tool(rest.to_string()))
            }
            "down" | "move" | "up" | "leave" => {
                let (x, y) = parse_point(word, rest)?;
                let event = match word {
                    "down" => PointerEvent::Down { x, y },
                    "move" => PointerEvent::Move { x, y },
                    "up" => PointerEvent::Up { x, y },
                    _ => PointerEvent::Leave { x, y },
                };
                Ok(Command::Pointer(event))
            }
            // an empty label is meaningful: it cancels the prompt
            "label" => Ok(Command::Label(rest.to_string())),
            "cancel" => no_args(word, rest, Command::Cancel),
            "undo" => no_args(word, rest, Command::Undo),
            "clear" => no_args(word, rest, Command::Clear),
            "key" => {
                require(word, rest, "a key chord such as Ctrl+Z")?;
                Ok(Command::Key(KeyBinding::parse(rest)?))
            }
            other => Err(ScriptErrorKind::UnknownCommand(other.to_string())),
        }
    }
}

fn require(command: &str, rest: &str, expected: &'static str) -> Result<(), ScriptErrorKind> {
    if rest.is_empty() {
        Err(ScriptErrorKind::MissingArgument {
            command: command.to_string(),
            expected,
        })
    } else {
        Ok(())
    }
}

fn no_args(command: &str, rest: &str, parsed: Command) -> Result<Command, ScriptErrorKind> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptErrorKind::UnexpectedArgument(command.to_string()))
    }
}

fn parse_point(command: &str, rest: &str) -> Result<(f64, f64), ScriptErrorKind> {
    let mut parts = rest.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ScriptErrorKind::MissingArgument {
            command: command.to_string(),
            expected: "two coordinates",
        });
    };
    Ok((parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(raw: &str) -> Result<f64, ScriptErrorKind> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ScriptErrorKind::InvalidCoordinate(raw.to_string()))
}

/// Drops a comment: a line starting with `#`, or a `#` after whitespace.
///
/// `label` lines are kept whole so label text may contain `#`.
fn strip_comment(raw: &str) -> &str {
    let line = raw.trim_start();
    if line.starts_with('#') {
        return "";
    }
    if line.split_whitespace().next() == Some("label") {
        return raw;
    }
    raw.char_indices()
        .find(|&(i, c)| c == '#' && raw[..i].ends_with(char::is_whitespace))
        .map_or(raw, |(i, _)| &raw[..i])
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = strip_comment(raw);
        if line.trim().is_empty() {
            continue;
        }
        let command = line.parse::<Command>().map_err(|kind| ScriptError {
            line: index + 1,
            kind,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

impl Command {
    /// Feeds this step to the surface.
    pub fn apply<C: DrawingContext>(&self, surface: &mut DrawingSurface<C>) {
        debug!("Script: {self:?}");
        match self {
            Command::Tool(id) => surface.set_tool(id),
            Command::Pointer(event) => surface.handle_pointer(*event),
            Command::Label(text) => {
                surface.submit_label(text);
            }
            Command::Cancel => surface.cancel_label(),
            Command::Key(binding) => press_chord(surface, binding),
            Command::Undo => surface.undo(),
            Command::Clear => surface.clear(),
        }
    }
}

/// Holds the chord's modifiers, taps its key, then releases everything.
fn press_chord<C: DrawingContext>(surface: &mut DrawingSurface<C>, binding: &KeyBinding) {
    let modifiers: Vec<Key> = [
        (binding.ctrl, Key::Ctrl),
        (binding.shift, Key::Shift),
        (binding.alt, Key::Alt),
    ]
    .into_iter()
    .filter_map(|(held, key)| held.then_some(key))
    .collect();

    for key in &modifiers {
        surface.on_key_press(*key);
    }
    let key = Key::from_binding_name(&binding.key);
    surface.on_key_press(key);
    surface.on_key_release(key);
    for key in modifiers.iter().rev() {
        surface.on_key_release(*key);
    }
}

/// Replays every command in order.
pub fn run<C: DrawingContext>(commands: &[Command], surface: &mut DrawingSurface<C>) {
    for command in commands {
        command.apply(surface);
    }
}
