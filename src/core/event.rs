//! Input events and their keyboard and button bindings.

use super::operation::{Function, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user action fed to the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Digit(char),
    Delete,
    Clear,
    Operation(Operation),
    Function(Function),
    Compute,
}

/// Payload-free discriminant of [`Event`], used to index the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Digit,
    Delete,
    Clear,
    Operation,
    Function,
    Compute,
}

/// A key press resolved to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub event: Event,
    /// Whether the host should suppress the key's default behaviour
    /// (form submission for Enter).
    pub prevent_default: bool,
}

/// A button on the calculator face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Number(char),
    Operator(Operation),
    Function(String),
    Equals,
    Delete,
    AllClear,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Digit(_) => EventKind::Digit,
            Self::Delete => EventKind::Delete,
            Self::Clear => EventKind::Clear,
            Self::Operation(_) => EventKind::Operation,
            Self::Function(_) => EventKind::Function,
            Self::Compute => EventKind::Compute,
        }
    }

    /// Resolve a key name (as reported by a keyboard event) to an event.
    pub fn from_key(key: &str) -> Option<KeyPress> {
        let event = match key {
            "Enter" | "=" => {
                return Some(KeyPress {
                    event: Self::Compute,
                    prevent_default: true,
                })
            }
            "Backspace" => Self::Delete,
            "Escape" => Self::Clear,
            "+" | "-" | "*" | "/" => Self::Operation(key.parse().ok()?),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Self::Digit(c),
                    _ => return None,
                }
            }
        };
        Some(KeyPress {
            event,
            prevent_default: false,
        })
    }

    /// Resolve a button press. The `power` function button selects the
    /// binary power operation instead of applying a unary function.
    pub fn from_button(button: &Button) -> Option<Self> {
        match button {
            Button::Number(c) => Some(Self::Digit(*c)),
            Button::Operator(op) => Some(Self::Operation(*op)),
            Button::Function(name) if name == "power" => Some(Self::Operation(Operation::Power)),
            Button::Function(name) => name.parse().ok().map(Self::Function),
            Button::Equals => Some(Self::Compute),
            Button::Delete => Some(Self::Delete),
            Button::AllClear => Some(Self::Clear),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(c) => write!(f, "digit({c})"),
            Self::Delete => f.write_str("delete"),
            Self::Clear => f.write_str("clear"),
            Self::Operation(op) => write!(f, "operation({})", op.wire_name()),
            Self::Function(func) => write!(f, "function({func})"),
            Self::Compute => f.write_str("compute"),
        }
    }
}
