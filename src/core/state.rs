//! Calculator state and its pure mutations.
//!
//! The machine's state is the `(current, previous, operation)` tuple. Every
//! method here is synchronous and free of I/O; the decision of *which*
//! mutation runs for an event lives in the transition table.

use super::format::format_for_display;
use super::operand::{parse_number, Fault, Operand};
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Coarse phase derived from the state tuple, used for logging and guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing an operand with no operation pending.
    Entering,
    /// An operation is pending and the second operand is being typed.
    Pending,
    /// The current operand holds an error sentinel.
    Faulted,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Faulted => "Faulted",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Faulted)
    }
}

/// What the two display regions should show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub primary: String,
    pub secondary: String,
}

/// The calculator's complete input state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    current: Operand,
    previous: String,
    operation: Option<Operation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current: Operand::zero(),
            previous: String::new(),
            operation: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Operand {
        &self.current
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn previous_value(&self) -> Option<f64> {
        parse_number(&self.previous)
    }

    pub fn current_value(&self) -> Option<f64> {
        self.current.value()
    }

    pub fn phase(&self) -> Phase {
        if self.current.is_fault() {
            Phase::Faulted
        } else if self.operation.is_some() {
            Phase::Pending
        } else {
            Phase::Entering
        }
    }

    /// Reset to `("0", "", none)`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn delete_last_char(&mut self) {
        self.current.pop();
    }

    pub fn append_digit(&mut self, token: char) -> bool {
        self.current.push(token)
    }

    /// Move the current operand into the previous slot under `operation`.
    pub fn select_operation(&mut self, operation: Operation) {
        let current = std::mem::replace(&mut self.current, Operand::zero());
        self.previous = current.as_str().to_string();
        self.operation = Some(operation);
    }

    /// Install a result from the service, clearing the pending operation.
    pub fn accept_result(&mut self, result: impl Into<String>) {
        self.current = Operand::Entry(result.into());
        self.previous.clear();
        self.operation = None;
    }

    /// Replace the current operand with an error sentinel, clearing the rest.
    pub fn fail(&mut self, fault: Fault) {
        self.current = Operand::Fault(fault);
        self.previous.clear();
        self.operation = None;
    }

    /// Display contents: the formatted current operand, and the previous
    /// operand with its operator only while an operation is pending.
    pub fn view(&self) -> View {
        let primary = match &self.current {
            Operand::Entry(text) => format_for_display(text),
            Operand::Fault(fault) => fault.message().to_string(),
        };
        let secondary = match self.operation {
            Some(operation) => format!("{} {}", format_for_display(&self.previous), operation.symbol()),
            None => String::new(),
        };
        View { primary, secondary }
    }
}
