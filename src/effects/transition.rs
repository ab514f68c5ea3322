//! The calculator's transition table.
//!
//! Each row pairs an event kind and an optional guard with an action. The
//! first row whose kind matches and whose guard passes handles the event.
//! Actions mutate the state synchronously and return a [`Command`] telling
//! the machine what to do next.

use crate::core::{
    CalculatorState, EvaluationRequest, Event, EventKind, Fault, Guard, Operation,
};

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// State may have changed; refresh the display.
    Render,
    /// Nothing happened; leave the display alone.
    Ignore,
    /// Send `request` to the evaluation service. On success, select `chain`
    /// with the result as the previous operand.
    Evaluate {
        request: EvaluationRequest,
        chain: Option<Operation>,
    },
}

/// Action run when a row fires.
pub type TransitionAction = fn(&mut CalculatorState, &Event) -> Command;

/// A single row of the transition table.
pub struct Transition {
    pub label: &'static str,
    pub on: EventKind,
    pub guard: Option<Guard>,
    pub action: TransitionAction,
}

impl Transition {
    pub fn new(label: &'static str, on: EventKind, action: TransitionAction) -> Self {
        Self {
            label,
            on,
            guard: None,
            action,
        }
    }

    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        self.guarded(Guard::new(predicate))
    }

    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Check if this row handles `event` in `state` (pure)
    pub fn can_execute(&self, state: &CalculatorState, event: &Event) -> bool {
        if event.kind() != self.on {
            return false;
        }
        self.guard.as_ref().is_none_or(|g| g.check(state))
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("label", &self.label)
            .field("on", &self.on)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

fn has_operand(state: &CalculatorState) -> bool {
    !state.current().is_empty() && !state.current().is_fault()
}

fn clear(state: &mut CalculatorState, _: &Event) -> Command {
    state.clear();
    Command::Render
}

fn delete_last_char(state: &mut CalculatorState, _: &Event) -> Command {
    state.delete_last_char();
    Command::Render
}

fn append_digit(state: &mut CalculatorState, event: &Event) -> Command {
    if let Event::Digit(token) = event {
        state.append_digit(*token);
    }
    Command::Render
}

fn ignore(_: &mut CalculatorState, _: &Event) -> Command {
    Command::Ignore
}

fn parse_failure(state: &mut CalculatorState, _: &Event) -> Command {
    state.fail(Fault::Parse);
    Command::Render
}

fn select_operation(state: &mut CalculatorState, event: &Event) -> Command {
    match event {
        Event::Operation(operation) => {
            state.select_operation(*operation);
            Command::Render
        }
        _ => Command::Ignore,
    }
}

fn pending_request(state: &CalculatorState) -> Option<EvaluationRequest> {
    Some(EvaluationRequest::binary(
        state.previous_value()?,
        state.current_value()?,
        state.operation()?,
    ))
}

fn chain_operation(state: &mut CalculatorState, event: &Event) -> Command {
    match (event, pending_request(state)) {
        (Event::Operation(next), Some(request)) => Command::Evaluate {
            request,
            chain: Some(*next),
        },
        _ => Command::Ignore,
    }
}

fn apply_function(state: &mut CalculatorState, event: &Event) -> Command {
    match (event, state.current_value()) {
        (Event::Function(function), Some(value)) => Command::Evaluate {
            request: EvaluationRequest::unary(value, *function),
            chain: None,
        },
        _ => Command::Ignore,
    }
}

fn compute(state: &mut CalculatorState, _: &Event) -> Command {
    match pending_request(state) {
        Some(request) => Command::Evaluate {
            request,
            chain: None,
        },
        None => Command::Ignore,
    }
}

/// Build the standard calculator table.
///
/// Row order matters: guarded rows precede the fallback for their kind.
pub fn standard_table() -> Vec<Transition> {
    let resolvable =
        |s: &CalculatorState| s.operation().is_some() && s.previous_value().is_some();
    let operand_present = Guard::new(has_operand);

    vec![
        Transition::new("clear", EventKind::Clear, clear),
        Transition::new("delete", EventKind::Delete, delete_last_char),
        Transition::new("digit", EventKind::Digit, append_digit),
        // chooseOperation: nothing to operate on
        Transition::new("operation-without-operand", EventKind::Operation, ignore)
            .guarded(operand_present.negate()),
        // chooseOperation: resolve the pending operation first
        Transition::new("operation-chained", EventKind::Operation, chain_operation)
            .when(move |s| resolvable(s) && s.current_value().is_some()),
        Transition::new("operation-chained-bad-operand", EventKind::Operation, parse_failure)
            .when(resolvable),
        Transition::new("operation", EventKind::Operation, select_operation),
        Transition::new("function-bad-operand", EventKind::Function, parse_failure)
            .when(|s| s.current_value().is_none()),
        Transition::new("function", EventKind::Function, apply_function),
        Transition::new("compute-unresolvable", EventKind::Compute, ignore)
            .guarded(Guard::new(resolvable).negate()),
        Transition::new("compute-bad-operand", EventKind::Compute, parse_failure)
            .when(|s| s.current_value().is_none()),
        Transition::new("compute", EventKind::Compute, compute),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Function, Operand};
    use serde_json::json;

    fn restore(value: serde_json::Value) -> CalculatorState {
        serde_json::from_value(value).unwrap()
    }

    fn fire(state: &mut CalculatorState, event: Event) -> (&'static str, Command) {
        let table = standard_table();
        let row = table
            .iter()
            .find(|t| t.can_execute(state, &event))
            .expect("every event kind has a fallback row");
        (row.label, (row.action)(state, &event))
    }

    fn typed(digits: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for digit in digits.chars() {
            state.append_digit(digit);
        }
        state
    }

    #[test]
    fn every_event_kind_has_an_unguarded_row() {
        let table = standard_table();
        for kind in [
            EventKind::Digit,
            EventKind::Delete,
            EventKind::Clear,
            EventKind::Operation,
            EventKind::Function,
            EventKind::Compute,
        ] {
            assert!(
                table.iter().any(|t| t.on == kind && t.guard.is_none()),
                "no fallback row for {kind:?}"
            );
        }
    }

    #[test]
    fn operation_moves_operand_without_request() {
        let mut state = typed("3");
        let (label, command) = fire(&mut state, Event::Operation(Operation::Add));

        assert_eq!(label, "operation");
        assert_eq!(command, Command::Render);
        assert_eq!(state.previous(), "3");
    }

    #[test]
    fn operation_on_fault_is_ignored() {
        let mut state = CalculatorState::new();
        state.fail(Fault::Network);
        let before = state.clone();

        let (label, command) = fire(&mut state, Event::Operation(Operation::Add));

        assert_eq!(label, "operation-without-operand");
        assert_eq!(command, Command::Ignore);
        assert_eq!(state, before);
    }

    #[test]
    fn operation_on_empty_operand_is_ignored() {
        let mut state = restore(json!({
            "current": {"entry": ""},
            "previous": "7",
            "operation": "*"
        }));
        let before = state.clone();

        let (label, command) = fire(&mut state, Event::Operation(Operation::Subtract));

        assert_eq!(label, "operation-without-operand");
        assert_eq!(command, Command::Ignore);
        assert_eq!(state, before);
    }

    #[test]
    fn second_operation_requests_pending_result() {
        let mut state = typed("3");
        state.select_operation(Operation::Add);
        state.append_digit('4');

        let (label, command) = fire(&mut state, Event::Operation(Operation::Multiply));

        assert_eq!(label, "operation-chained");
        assert_eq!(
            command,
            Command::Evaluate {
                request: EvaluationRequest::binary(3.0, 4.0, Operation::Add),
                chain: Some(Operation::Multiply),
            }
        );
        // the machine applies the state change once the result arrives
        assert_eq!(state.previous(), "3");
        assert_eq!(state.operation(), Some(Operation::Add));
    }

    #[test]
    fn function_with_unparseable_operand_fails_locally() {
        let mut state = CalculatorState::new();
        state.accept_result("abc");

        let (label, command) = fire(&mut state, Event::Function(Function::Sin));

        assert_eq!(label, "function-bad-operand");
        assert_eq!(command, Command::Render);
        assert_eq!(state.current(), &Operand::Fault(Fault::Parse));
    }

    #[test]
    fn function_requests_unary_evaluation() {
        let mut state = typed("30");
        let (_, command) = fire(&mut state, Event::Function(Function::Cos));
        assert_eq!(
            command,
            Command::Evaluate {
                request: EvaluationRequest::unary(30.0, Function::Cos),
                chain: None,
            }
        );
    }

    #[test]
    fn compute_without_operation_is_ignored() {
        let mut state = typed("8");
        let before = state.clone();
        let (label, command) = fire(&mut state, Event::Compute);

        assert_eq!(label, "compute-unresolvable");
        assert_eq!(command, Command::Ignore);
        assert_eq!(state, before);
    }

    #[test]
    fn compute_power_without_previous_is_ignored() {
        let mut state = restore(json!({
            "current": {"entry": "2"},
            "previous": "",
            "operation": "power"
        }));
        let before = state.clone();

        let (label, command) = fire(&mut state, Event::Compute);

        assert_eq!(label, "compute-unresolvable");
        assert_eq!(command, Command::Ignore);
        assert_eq!(state, before);
    }

    #[test]
    fn compute_with_unparseable_current_fails_locally() {
        let mut state = restore(json!({
            "current": {"entry": "abc"},
            "previous": "5",
            "operation": "/"
        }));

        let (label, command) = fire(&mut state, Event::Compute);

        assert_eq!(label, "compute-bad-operand");
        assert_eq!(command, Command::Render);
        assert_eq!(state.current(), &Operand::Fault(Fault::Parse));
        assert_eq!(state.previous(), "");
        assert_eq!(state.operation(), None);
    }

    #[test]
    fn chained_operation_with_unparseable_current_fails_locally() {
        let mut state = restore(json!({
            "current": {"entry": "abc"},
            "previous": "5",
            "operation": "+"
        }));

        let (label, _) = fire(&mut state, Event::Operation(Operation::Add));

        assert_eq!(label, "operation-chained-bad-operand");
        assert_eq!(state.current(), &Operand::Fault(Fault::Parse));
    }

    #[test]
    fn operation_after_unparseable_previous_replaces_it() {
        let mut state = restore(json!({
            "current": {"entry": "4"},
            "previous": "abc",
            "operation": "+"
        }));

        let (label, command) = fire(&mut state, Event::Operation(Operation::Multiply));

        assert_eq!(label, "operation");
        assert_eq!(command, Command::Render);
        assert_eq!(state.previous(), "4");
        assert_eq!(state.operation(), Some(Operation::Multiply));
    }

    #[test]
    fn compute_requests_binary_evaluation() {
        let mut state = typed("6");
        state.select_operation(Operation::Subtract);
        state.append_digit('2');

        let (label, command) = fire(&mut state, Event::Compute);
        assert_eq!(label, "compute");
        assert_eq!(
            command,
            Command::Evaluate {
                request: EvaluationRequest::binary(6.0, 2.0, Operation::Subtract),
                chain: None,
            }
        );
    }

    #[test]
    fn digits_delete_and_clear_render() {
        let mut state = CalculatorState::new();
        assert_eq!(fire(&mut state, Event::Digit('5')).1, Command::Render);
        assert_eq!(fire(&mut state, Event::Delete).1, Command::Render);
        assert_eq!(fire(&mut state, Event::Clear).1, Command::Render);
        assert_eq!(state, CalculatorState::new());
    }
}
