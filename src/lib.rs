//! Keypad: a calculator input state machine
//!
//! Keypad follows Stillwater's "pure core, imperative shell" philosophy. The
//! core tracks what the user has typed and how it is displayed; the shell
//! sends arithmetic to a remote evaluation service and applies the answer.
//!
//! # Core Concepts
//!
//! - **State**: Current and previous operands plus the pending operation
//! - **Events**: Digits, delete, clear, operations, functions, and compute
//! - **Guards**: Pure predicates selecting which transition row fires
//! - **Tape**: Immutable record of every evaluation and its outcome
//!
//! # Example
//!
//! ```rust
//! use keypad::core::{CalculatorState, Operation};
//!
//! let mut state = CalculatorState::new();
//! for digit in "1234".chars() {
//!     state.append_digit(digit);
//! }
//! state.select_operation(Operation::Add);
//! state.append_digit('5');
//!
//! let view = state.view();
//! assert_eq!(view.primary, "5");
//! assert_eq!(view.secondary, "1,234 +");
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod effects;
pub mod logging;
pub mod screen;

// Re-export commonly used types
pub use crate::core::{CalculatorState, Event, Function, Operation, View};
pub use config::Config;
pub use effects::{Calculator, EvaluationService, HttpEvaluationService, ServiceEnv};
pub use screen::Screen;
