//! Binary operations and unary functions understood by the evaluation service.
//!
//! Both enums serialize to the exact strings the service expects on the
//! wire, so they can be embedded directly in request bodies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a token does not name a known operation or function.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseOperationError {
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),
}

/// A pending binary arithmetic operation awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "power")]
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Name sent to the evaluation service.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "power",
        }
    }

    /// Symbol shown next to the previous operand on the secondary display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Power => "^",
            other => other.wire_name(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "add" => Ok(Self::Add),
            "-" | "subtract" => Ok(Self::Subtract),
            "*" | "multiply" => Ok(Self::Multiply),
            "/" | "divide" => Ok(Self::Divide),
            "^" | "power" | "pow" => Ok(Self::Power),
            other => Err(ParseOperationError::UnknownOperation(other.to_string())),
        }
    }
}

/// A unary function applied immediately to the current operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
}

impl Function {
    pub const ALL: [Function; 4] = [Self::Sin, Self::Cos, Self::Tan, Self::Exp];

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Function {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| ParseOperationError::UnknownFunction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_renders_as_caret() {
        assert_eq!(Operation::Power.symbol(), "^");
        assert_eq!(Operation::Power.wire_name(), "power");
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn operations_parse_from_keys_and_names() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("^".parse::<Operation>(), Ok(Operation::Power));
        assert_eq!("power".parse::<Operation>(), Ok(Operation::Power));
        assert_eq!(
            "%".parse::<Operation>(),
            Err(ParseOperationError::UnknownOperation("%".to_string()))
        );
    }

    #[test]
    fn functions_parse_by_wire_name() {
        for function in Function::ALL {
            assert_eq!(function.wire_name().parse::<Function>(), Ok(function));
        }
        assert!("sqrt".parse::<Function>().is_err());
    }

    #[test]
    fn wire_names_match_serde_representation() {
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.wire_name()));
        }
        assert_eq!(serde_json::to_string(&Function::Tan).unwrap(), "\"tan\"");
    }
}
