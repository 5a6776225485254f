
use super::operator::ParseOperatorError;
use crate::value::{Number, ValueKind};

use thiserror::Error;

/// Ways in which [`apply`](super::apply) can refuse to produce a
/// value. Division by zero is deliberately absent: it yields
/// [`Value::Infinity`](crate::value::Value::Infinity).
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
  #[error("{0}")]
  InvalidOperator(#[from] ParseOperatorError),
  #[error("No rule combines {target} with {operand}")]
  InvalidOperandCombination {
    target: ValueKind,
    operand: ValueKind,
  },
  #[error("Cannot use {count} as a character count")]
  InvalidCount {
    count: Number,
  },
}
