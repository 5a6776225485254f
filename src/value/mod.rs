//! The value model: every quantity the engine can see is a [`Value`].

mod number;
mod visitor;

pub use number::{Number, NumberKind, ParseNumberError};

use crate::util::stricteq::StrictEq;

use num::BigInt;

use std::fmt::{self, Display, Formatter};

/// A dynamically-typed value.
///
/// Values are never mutated in place. Every operation in
/// [`crate::engine`] consumes its inputs and hands back a fresh
/// `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  /// An arbitrary string. Lengths and positions are measured in
  /// `char`s.
  Text(String),
  /// An integral or fractional number.
  Number(Number),
  /// Result of dividing by an effective zero. This is only ever
  /// produced by the engine and is rejected as an operand.
  Infinity,
}

/// The coarse type of a [`Value`], used for operator dispatch and in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
  Text,
  Number,
  Infinity,
}

impl Value {
  pub fn kind(&self) -> ValueKind {
    match self {
      Value::Text(_) => ValueKind::Text,
      Value::Number(_) => ValueKind::Number,
      Value::Infinity => ValueKind::Infinity,
    }
  }

  /// The representation of the number, if this value is a number.
  pub fn number_kind(&self) -> Option<NumberKind> {
    self.as_number().map(Number::kind)
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<&Number> {
    match self {
      Value::Number(n) => Some(n),
      _ => None,
    }
  }

  pub fn is_infinity(&self) -> bool {
    matches!(self, Value::Infinity)
  }
}

impl From<Number> for Value {
  fn from(n: Number) -> Self {
    Self::Number(n)
  }
}

impl From<i32> for Value {
  fn from(n: i32) -> Self {
    Self::Number(Number::from(n))
  }
}

impl From<i64> for Value {
  fn from(n: i64) -> Self {
    Self::Number(Number::from(n))
  }
}

impl From<usize> for Value {
  fn from(n: usize) -> Self {
    Self::Number(Number::from(n))
  }
}

impl From<BigInt> for Value {
  fn from(n: BigInt) -> Self {
    Self::Number(Number::from(n))
  }
}

impl From<f64> for Value {
  fn from(n: f64) -> Self {
    Self::Number(Number::from(n))
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Self::Text(s)
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Self::Text(s.to_owned())
  }
}

/// Prints text raw, numbers in their usual notation, and the
/// division-by-zero sentinel as `inf`.
impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Value::Text(s) => write!(f, "{s}"),
      Value::Number(n) => write!(f, "{n}"),
      Value::Infinity => write!(f, "inf"),
    }
  }
}

impl Display for ValueKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ValueKind::Text => write!(f, "text"),
      ValueKind::Number => write!(f, "number"),
      ValueKind::Infinity => write!(f, "infinity"),
    }
  }
}

impl StrictEq for Value {
  /// Like `==`, but numbers must also agree on their
  /// [`NumberKind`].
  fn strict_eq(&self, other: &Value) -> bool {
    match (self, other) {
      (Value::Number(left), Value::Number(right)) => left.strict_eq(right),
      (left, right) => left == right,
    }
  }
}
