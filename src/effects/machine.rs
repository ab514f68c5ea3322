//! Calculator machine that executes the transition table.
//!
//! Handling an event is split in two halves, mirroring an effect run:
//! [`Calculator::step`] picks a row and applies its synchronous action, and
//! [`Calculator::resolve`] applies the outcome of any evaluation the row
//! requested. [`Calculator::dispatch`] drives both halves and renders once.

use crate::core::{
    Calculation, CalculatorState, EvaluationRequest, Event, Operation, Outcome, ResultValue, Tape,
};
use crate::effects::service::{EvaluationError, ServiceEnv};
use crate::effects::transition::{standard_table, Command, Transition};
use crate::screen::Screen;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// An evaluation that has been sent and not yet resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub id: Uuid,
    pub request: EvaluationRequest,
    /// Operation to select once the result arrives.
    pub chain: Option<Operation>,
}

/// Result of executing the synchronous half of an event.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// No row changed anything; the display stays as is.
    Ignored,
    /// State changed locally.
    Applied,
    /// An evaluation must run before the event is complete.
    Pending(PendingRequest),
}

/// Build the effect that sends `request` to the service in the environment.
pub fn evaluate(
    request: EvaluationRequest,
) -> impl Effect<Output = ResultValue, Error = EvaluationError, Env = ServiceEnv> {
    from_async(move |env: &ServiceEnv| {
        let service = env.service();
        let request = request.clone();
        async move { service.evaluate(&request).await }
    })
}

/// The calculator: state, transition table, tape, and the request in flight.
pub struct Calculator {
    state: CalculatorState,
    transitions: Vec<Transition>,
    tape: Tape,
    in_flight: Option<Uuid>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the cleared state with the standard table.
    pub fn new() -> Self {
        Self::with_transitions(standard_table())
    }

    pub fn with_transitions(transitions: Vec<Transition>) -> Self {
        Self {
            state: CalculatorState::new(),
            transitions,
            tape: Tape::new(),
            in_flight: None,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Whether an evaluation is outstanding. Input other than clear is
    /// ignored until it resolves.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Run the synchronous half of `event`.
    pub fn step(&mut self, event: &Event) -> StepResult {
        if self.is_busy() && *event != Event::Clear {
            debug!(%event, "Ignoring input while an evaluation is in flight");
            return StepResult::Ignored;
        }

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.can_execute(&self.state, event))
        else {
            debug!(%event, phase = self.state.phase().name(), "No transition for event");
            return StepResult::Ignored;
        };

        let from = self.state.phase();
        let command = (transition.action)(&mut self.state, event);
        debug!(
            %event,
            row = transition.label,
            from = from.name(),
            to = self.state.phase().name(),
            "Transition fired"
        );

        match command {
            Command::Ignore => StepResult::Ignored,
            Command::Render => {
                if *event == Event::Clear {
                    self.in_flight = None;
                    self.tape = Tape::new();
                }
                StepResult::Applied
            }
            Command::Evaluate { request, chain } => {
                let pending = PendingRequest {
                    id: Uuid::new_v4(),
                    request,
                    chain,
                };
                info!(id = %pending.id, request = %pending.request, "Dispatching evaluation");
                self.in_flight = Some(pending.id);
                StepResult::Pending(pending)
            }
        }
    }

    /// Apply the outcome of `pending`. Returns `false` if the request is no
    /// longer the one in flight (for example after a clear) and was dropped.
    pub fn resolve(&mut self, pending: PendingRequest, outcome: Outcome) -> bool {
        if self.in_flight != Some(pending.id) {
            warn!(id = %pending.id, "Discarding stale evaluation outcome");
            return false;
        }
        self.in_flight = None;

        match &outcome {
            Outcome::Success(value) => {
                self.state.accept_result(value.to_string());
                if let Some(next) = pending.chain {
                    self.state.select_operation(next);
                }
            }
            failed => {
                warn!(id = %pending.id, outcome = %failed, "Evaluation failed");
                if let Some(fault) = failed.fault() {
                    self.state.fail(fault);
                }
            }
        }

        self.tape = std::mem::take(&mut self.tape).record(Calculation::new(
            pending.id,
            pending.request,
            outcome,
        ));
        true
    }

    /// Handle one event to completion, rendering exactly once if anything
    /// changed, including after a failed evaluation.
    pub async fn dispatch<S: Screen + ?Sized>(
        &mut self,
        event: Event,
        env: &ServiceEnv,
        screen: &mut S,
    ) -> StepResult {
        let result = self.step(&event);
        if let StepResult::Pending(pending) = &result {
            let outcome = Outcome::from(evaluate(pending.request.clone()).run(env).await);
            self.resolve(pending.clone(), outcome);
        }
        if result != StepResult::Ignored {
            screen.render(&self.state.view());
        }
        result
    }
}
