//! The coercion engine.
//!
//! [`apply`] combines two values with an [`Operator`]. The meaning of
//! the operator depends on the kinds of both operands, giving sixteen
//! rules in total:
//!
//! | target | operand | `+` | `-` | `*` | `/` |
//! |--------|---------|-----|-----|-----|-----|
//! | text   | text    | concatenate | remove every occurrence | join characters with operand | remove first occurrence |
//! | text   | number  | pad with spaces | `target[0:-n]` | repeat | `target[0:floor(len/n)]` |
//! | number | text    | `+ len` | `- len` | `* len` | `/ len` |
//! | number | number  | `+` | `-` | `*` | true division |
//!
//! Wherever a number is used as a count it is first truncated toward
//! zero. Any division whose effective divisor is zero produces
//! [`Value::Infinity`] rather than an error.

mod error;
mod operator;
mod text;

pub use error::EngineError;
pub use operator::{Operator, ParseOperatorError};

use crate::value::{Number, Value};

use itertools::Itertools;
use num::{BigInt, Signed, Zero, ToPrimitive};

/// Combines `target` with `operand` using `op`.
///
/// Both inputs are consumed and the result is a new value. Fails with
/// [`EngineError::InvalidOperandCombination`] if either input is
/// [`Value::Infinity`].
///
/// # Examples
///
/// ```
/// # use zed::engine::{apply, Operator};
/// # use zed::value::Value;
/// assert_eq!(apply(Value::from(5), Value::from(3), Operator::Add), Ok(Value::from(8)));
/// assert_eq!(apply(Value::from("abc"), Value::from("x"), Operator::Multiply), Ok(Value::from("axbxc")));
/// assert_eq!(apply(Value::from(5), Value::from(0), Operator::Divide), Ok(Value::Infinity));
/// ```
pub fn apply(target: Value, operand: Value, op: Operator) -> Result<Value, EngineError> {
  match (target, operand) {
    (Value::Text(target), Value::Text(operand)) => Ok(text_by_text(target, &operand, op)),
    (Value::Text(target), Value::Number(operand)) => text_by_number(target, &operand, op),
    (Value::Number(target), Value::Text(operand)) => Ok(number_by_text(target, &operand, op)),
    (Value::Number(target), Value::Number(operand)) => Ok(number_by_number(target, operand, op)),
    (target, operand) => Err(EngineError::InvalidOperandCombination {
      target: target.kind(),
      operand: operand.kind(),
    }),
  }
}

/// Like [`apply`], but takes the operator as its symbol (`+`, `-`,
/// `*` or `/`).
pub fn apply_symbol(target: Value, operand: Value, symbol: &str) -> Result<Value, EngineError> {
  let op = symbol.parse::<Operator>()?;
  apply(target, operand, op)
}

fn text_by_text(mut target: String, operand: &str, op: Operator) -> Value {
  let result = match op {
    Operator::Add => {
      target.push_str(operand);
      target
    }
    Operator::Subtract => target.replace(operand, ""),
    Operator::Multiply => target.chars().join(operand),
    Operator::Divide => target.replacen(operand, "", 1),
  };
  Value::Text(result)
}

fn text_by_number(target: String, operand: &Number, op: Operator) -> Result<Value, EngineError> {
  let result = match op {
    Operator::Add => {
      let spaces = repetitions(operand)?;
      text::pad_end(target, spaces).ok_or_else(|| invalid_count(operand))?
    }
    Operator::Subtract => {
      // Note: a count of zero slices to `target[0:0]` and so produces
      // the empty string, not `target`.
      let count = truncated(operand)?;
      text::prefix(&target, &-count)
    }
    Operator::Multiply => {
      let times = repetitions(operand)?;
      text::repeat(&target, times).ok_or_else(|| invalid_count(operand))?
    }
    Operator::Divide => {
      if operand.is_zero() {
        return Ok(Value::Infinity);
      }
      let len = text::char_len(&target);
      let end = match Number::from(len).div_floor(operand) {
        Some(end) => end,
        // A tiny finite divisor overflows the quotient, which then
        // clamps to one end of the text.
        None if operand.is_finite() => {
          if operand < &Number::zero() { -BigInt::from(len) } else { BigInt::from(len) }
        }
        None => return Err(invalid_count(operand)),
      };
      text::prefix(&target, &end)
    }
  };
  Ok(Value::Text(result))
}

fn number_by_text(target: Number, operand: &str, op: Operator) -> Value {
  let len = Number::from(text::char_len(operand));
  match op {
    Operator::Add => Value::Number(target + len),
    Operator::Subtract => Value::Number(target - len),
    Operator::Multiply => Value::Number(target * len),
    Operator::Divide => divide(target, len),
  }
}

fn number_by_number(target: Number, operand: Number, op: Operator) -> Value {
  match op {
    Operator::Add => Value::Number(target + operand),
    Operator::Subtract => Value::Number(target - operand),
    Operator::Multiply => Value::Number(target * operand),
    Operator::Divide => divide(target, operand),
  }
}

fn divide(target: Number, divisor: Number) -> Value {
  if divisor.is_zero() {
    Value::Infinity
  } else {
    Value::Number(target.true_div(&divisor))
  }
}

fn truncated(operand: &Number) -> Result<BigInt, EngineError> {
  operand.trunc().ok_or_else(|| invalid_count(operand))
}

/// Truncates `operand` for use as a repetition count. Negative counts
/// mean zero repetitions.
fn repetitions(operand: &Number) -> Result<usize, EngineError> {
  let count = truncated(operand)?;
  if count.is_negative() {
    Ok(0)
  } else {
    count.to_usize().ok_or_else(|| invalid_count(operand))
  }
}

fn invalid_count(operand: &Number) -> EngineError {
  EngineError::InvalidCount { count: operand.clone() }
}
