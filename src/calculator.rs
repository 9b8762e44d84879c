//! Four-function calculator used by the kitchen tools page

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Operand is not a finite number")]
    NonFiniteOperand,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "subtract" => Ok(Operator::Subtract),
            "*" | "x" | "multiply" => Ok(Operator::Multiply),
            "/" | "divide" => Ok(Operator::Divide),
            other => Err(CalculatorError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.symbol().to_string()
    }
}

/// Apply `op` to the two operands
pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> Result<f64, CalculatorError> {
    if !lhs.is_finite() || !rhs.is_finite() {
        return Err(CalculatorError::NonFiniteOperand);
    }

    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalculatorError::NonFiniteResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, "+", 3.0, 5.0)]
    #[case(2.0, "subtract", 3.0, -1.0)]
    #[case(2.5, "*", 4.0, 10.0)]
    #[case(9.0, "/", 3.0, 3.0)]
    fn test_evaluate(#[case] lhs: f64, #[case] op: &str, #[case] rhs: f64, #[case] expected: f64) {
        let op: Operator = op.parse().unwrap();
        assert_eq!(evaluate(lhs, op, rhs).unwrap(), expected);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(1.0, Operator::Divide, 0.0),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_and_nan() {
        assert_eq!(
            evaluate(f64::MAX, Operator::Multiply, 2.0),
            Err(CalculatorError::NonFiniteResult)
        );
        assert_eq!(
            evaluate(f64::NAN, Operator::Add, 1.0),
            Err(CalculatorError::NonFiniteOperand)
        );
    }

    #[test]
    fn test_unknown_operator() {
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalculatorError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_operator_serde() {
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"/\"");
    }
}
