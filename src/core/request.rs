//! Wire data exchanged with the evaluation service.
//!
//! Requests carry parsed operands; results come back as a number or a
//! string; every evaluation resolves to exactly one [`Outcome`].

use super::operand::Fault;
use super::operation::{Function, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a request to the evaluation service.
///
/// Binary requests serialize as `{operand1, operand2, operation}`, unary
/// ones as `{operand1, function}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationRequest {
    Binary {
        operand1: f64,
        operand2: f64,
        operation: Operation,
    },
    Unary {
        operand1: f64,
        function: Function,
    },
}

impl EvaluationRequest {
    pub fn binary(operand1: f64, operand2: f64, operation: Operation) -> Self {
        Self::Binary {
            operand1,
            operand2,
            operation,
        }
    }

    pub fn unary(operand1: f64, function: Function) -> Self {
        Self::Unary { operand1, function }
    }
}

impl fmt::Display for EvaluationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary {
                operand1,
                operand2,
                operation,
            } => write!(f, "{operand1} {} {operand2}", operation.symbol()),
            Self::Unary { operand1, function } => write!(f, "{function}({operand1})"),
        }
    }
}

/// A successful result, as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0.0 would otherwise leave a stray sign in the operand
            Self::Number(value) if *value == 0.0 => f.write_str("0"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// How an evaluation ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success(ResultValue),
    ServiceError(Option<String>),
    TransportError,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The fault a failed outcome leaves in the current operand.
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Self::Success(_) => None,
            Self::ServiceError(message) => Some(Fault::Service(message.clone())),
            Self::TransportError => Some(Fault::Network),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{value}"),
            other => match other.fault() {
                Some(fault) => f.write_str(fault.message()),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_zero_result_renders_unsigned() {
        assert_eq!(ResultValue::Number(-0.0).to_string(), "0");
        assert_eq!(ResultValue::Number(0.0).to_string(), "0");
        assert_eq!(ResultValue::Number(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn binary_request_matches_wire_shape() {
        let request = EvaluationRequest::binary(3.0, 4.5, Operation::Power);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"operand1": 3.0, "operand2": 4.5, "operation": "power"})
        );
    }

    #[test]
    fn unary_request_matches_wire_shape() {
        let request = EvaluationRequest::unary(30.0, Function::Sin);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"operand1": 30.0, "function": "sin"})
        );
    }

    #[test]
    fn result_accepts_numbers_and_strings() {
        let number: ResultValue = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(number.to_string(), "7");

        let fraction: ResultValue = serde_json::from_value(json!(0.5)).unwrap();
        assert_eq!(fraction.to_string(), "0.5");

        let text: ResultValue = serde_json::from_value(json!("1e+21")).unwrap();
        assert_eq!(text.to_string(), "1e+21");
    }

    #[test]
    fn negative_results_render_with_sign() {
        assert_eq!(ResultValue::Number(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn outcomes_map_to_faults() {
        assert_eq!(Outcome::Success(ResultValue::Number(1.0)).fault(), None);
        assert_eq!(
            Outcome::ServiceError(Some("bad".into())).fault(),
            Some(Fault::Service(Some("bad".into())))
        );
        assert_eq!(Outcome::TransportError.fault(), Some(Fault::Network));
        assert_eq!(Outcome::TransportError.to_string(), "Network Error");
        assert_eq!(Outcome::ServiceError(None).to_string(), "Error");
    }

    #[test]
    fn requests_describe_themselves() {
        assert_eq!(
            EvaluationRequest::binary(3.0, 4.0, Operation::Add).to_string(),
            "3 + 4"
        );
        assert_eq!(
            EvaluationRequest::unary(0.0, Function::Exp).to_string(),
            "exp(0)"
        );
    }
}
