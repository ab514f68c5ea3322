//! Pure calculator core.
//!
//! This module contains everything about the calculator that does not
//! touch the network or a screen:
//! - Operand entry rules and error sentinels
//! - Operations, functions and the events that carry them
//! - Display formatting
//! - Guards consulted by the transition table
//! - The in-session tape of completed calculations

mod event;
mod format;
mod guard;
mod history;
mod operand;
mod operation;
mod request;
mod state;

pub use event::{Button, Event, EventKind, KeyPress};
pub use format::{format_for_display, group_thousands};
pub use guard::Guard;
pub use history::{Calculation, Tape};
pub use operand::{parse_number, Fault, Operand, ERROR_SENTINEL, NETWORK_ERROR_SENTINEL};
pub use operation::{Function, Operation, ParseOperationError};
pub use request::{EvaluationRequest, Outcome, ResultValue};
pub use state::{CalculatorState, Phase, View};
