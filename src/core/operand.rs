//! The operand under construction and its entry rules.
//!
//! The current operand is either a decimal string the user is typing (or a
//! result the service returned), or a fault whose sentinel message takes the
//! place of a number on the display.

use serde::{Deserialize, Serialize};

/// Sentinel shown for parse failures and service failures without a message.
pub const ERROR_SENTINEL: &str = "Error";

/// Sentinel shown when the evaluation service could not be reached.
pub const NETWORK_ERROR_SENTINEL: &str = "Network Error";

/// Why the current operand holds an error sentinel instead of a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Fault {
    /// Local input could not be parsed before any request was sent.
    Parse,
    /// The service answered with a failure, optionally explaining it.
    Service(Option<String>),
    /// No response was obtained.
    Network,
}

impl Fault {
    pub fn message(&self) -> &str {
        match self {
            Self::Parse | Self::Service(None) => ERROR_SENTINEL,
            Self::Service(Some(message)) => message,
            Self::Network => NETWORK_ERROR_SENTINEL,
        }
    }
}

/// Current operand of the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Entry(String),
    Fault(Fault),
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    pub fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Entry(text) => text,
            Self::Fault(fault) => fault.message(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Entry(text) if text.is_empty())
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Numeric value of the entry; faults never parse.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Entry(text) => parse_number(text),
            Self::Fault(_) => None,
        }
    }

    /// Append a digit or decimal point, returning whether the operand changed.
    ///
    /// A second `.` is rejected, a lone `"0"` is replaced by a digit, and a
    /// fault is treated as `"0"` so typing after an error starts a new number.
    pub fn push(&mut self, token: char) -> bool {
        if !(token.is_ascii_digit() || token == '.') {
            return false;
        }
        if self.is_fault() {
            *self = Self::zero();
        }
        let Self::Entry(text) = self else {
            return false;
        };
        if token == '.' && text.contains('.') {
            return false;
        }
        if text == "0" && token != '.' {
            text.clear();
        }
        text.push(token);
        true
    }

    /// Remove the last character; an emptied entry or a fault becomes `"0"`.
    pub fn pop(&mut self) {
        if let Self::Entry(text) = self {
            text.pop();
            if !text.is_empty() {
                return;
            }
        }
        *self = Self::zero();
    }
}

/// Parse a decimal operand. Empty strings, a bare `.` and non-finite values fail.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
