//! In-session tape of completed evaluations.
//!
//! [`Tape::record`] consumes the tape and returns it with the calculation
//! appended, so recording never copies earlier entries. It lives only as long as the calculator and is
//! emptied by `clear`.

use super::request::{EvaluationRequest, Outcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Record of a single request and how it ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Identifier of the request that produced this entry
    pub id: Uuid,
    pub request: EvaluationRequest,
    pub outcome: Outcome,
    /// When the outcome was applied
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    pub fn new(id: Uuid, request: EvaluationRequest, outcome: Outcome) -> Self {
        Self {
            id,
            request,
            outcome,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.request, self.outcome)
    }
}

/// Ordered list of calculations.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Calculation, EvaluationRequest, Operation, Outcome, ResultValue, Tape};
/// use uuid::Uuid;
///
/// let tape = Tape::new();
/// let entry = Calculation::new(
///     Uuid::new_v4(),
///     EvaluationRequest::binary(3.0, 4.0, Operation::Add),
///     Outcome::Success(ResultValue::Number(7.0)),
/// );
///
/// let tape = tape.record(entry);
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.last().unwrap().to_string(), "3 + 4 = 7");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    calculations: Vec<Calculation>,
}

impl Tape {
    pub fn new() -> Self {
        Self {
            calculations: Vec::new(),
        }
    }

    /// Record a calculation, returning the extended tape. Callers that
    /// need the previous tape keep a clone of it.
    pub fn record(mut self, calculation: Calculation) -> Self {
        self.calculations.push(calculation);
        self
    }

    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    pub fn last(&self) -> Option<&Calculation> {
        self.calculations.last()
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Calculations that produced a result.
    pub fn successes(&self) -> impl Iterator<Item = &Calculation> {
        self.calculations.iter().filter(|c| c.outcome.is_success())
    }

    /// Time between the first and last recorded calculation.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.calculations.first()?, self.calculations.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
