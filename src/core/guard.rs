//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over [`CalculatorState`]. The transition
//! table consults them to pick which row handles an event.

use super::state::CalculatorState;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use keypad::core::{CalculatorState, Guard};
///
/// let pending = Guard::new(|s: &CalculatorState| s.operation().is_some());
/// assert!(!pending.check(&CalculatorState::new()));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&CalculatorState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    pub fn check(&self, state: &CalculatorState) -> bool {
        (self.predicate)(state)
    }

    /// Guard that passes when `self` fails.
    pub fn negate(self) -> Self {
        Guard::new(move |state| !self.check(state))
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fault, Operation};

    #[test]
    fn guard_checks_pending_operation() {
        let guard = Guard::new(|s: &CalculatorState| s.operation().is_some());
        let mut state = CalculatorState::new();
        assert!(!guard.check(&state));

        state.select_operation(Operation::Add);
        assert!(guard.check(&state));
    }

    #[test]
    fn guard_checks_faulted_state() {
        let guard = Guard::new(|s: &CalculatorState| s.phase().is_error());
        let mut state = CalculatorState::new();
        assert!(!guard.check(&state));

        state.fail(Fault::Parse);
        assert!(guard.check(&state));
    }

    #[test]
    fn negated_guard_inverts_result() {
        let parseable = Guard::new(|s: &CalculatorState| s.current_value().is_none()).negate();
        let mut state = CalculatorState::new();
        assert!(parseable.check(&state));

        state.fail(Fault::Network);
        assert!(!parseable.check(&state));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = CalculatorState::new();
        let guard = Guard::new(|s: &CalculatorState| s.previous().is_empty());
        assert_eq!(guard.check(&state), guard.check(&state));
    }
}
