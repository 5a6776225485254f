
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the four arithmetic-style operators understood by
/// [`apply`](super::apply). What an operator actually does depends
/// on the kinds of both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operator '{symbol}', expected one of + - * /")]
pub struct ParseOperatorError {
  pub symbol: String,
}

impl Operator {
  pub const ALL: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
  ];

  pub fn symbol(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Subtract => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
    }
  }
}

impl FromStr for Operator {
  type Err = ParseOperatorError;

  fn from_str(s: &str) -> Result<Operator, ParseOperatorError> {
    Operator::ALL.into_iter()
      .find(|op| op.symbol() == s)
      .ok_or_else(|| ParseOperatorError { symbol: s.to_owned() })
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_symbols() {
    assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
    assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtract));
    assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
    assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
  }

  #[test]
  fn test_parse_unknown_symbol() {
    assert_eq!(
      "%".parse::<Operator>(),
      Err(ParseOperatorError { symbol: String::from("%") }),
    );
    assert!(" +".parse::<Operator>().is_err());
    assert!("".parse::<Operator>().is_err());
    assert!("+=".parse::<Operator>().is_err());
  }

  #[test]
  fn test_display_roundtrip() {
    for op in Operator::ALL {
      assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
    }
  }
}
