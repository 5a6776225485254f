use super::visitor::{NumberPair, int_to_float};
use crate::util::stricteq::StrictEq;

use num::{BigInt, BigRational, Zero, FromPrimitive};
use num::integer::div_floor;
use num::traits::ToPrimitive;
use thiserror::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use approx::AbsDiffEq;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::ops;
use std::cmp::Ordering;

/// A real number which remembers whether it is integral or
/// fractional.
///
/// Integral numbers are stored as arbitrary-precision integers, so
/// they behave like mathematical integers. Fractional numbers are
/// IEEE 754 doubles. Arithmetic on two integral numbers stays
/// integral, and any fractional operand makes the result fractional.
/// Use [`Number::kind`] to get the number's current representation.
#[derive(Debug, Clone)]
pub struct Number {
  pub(super) inner: NumberImpl,
}

#[derive(Debug, Clone)]
pub(super) enum NumberImpl {
  Integer(BigInt),
  Float(f64),
}

/// The two ways a number can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
  /// An exact integer.
  Integral,
  /// An inexact IEEE 754 floating-point value.
  Fractional,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ParseNumberError {}

impl Number {
  /// Gets the current representation of the number.
  pub fn kind(&self) -> NumberKind {
    match &self.inner {
      NumberImpl::Integer(_) => NumberKind::Integral,
      NumberImpl::Float(_) => NumberKind::Fractional,
    }
  }

  /// True division. The result is always fractional, even if both
  /// inputs are integral and the divisor divides the dividend evenly.
  ///
  /// Dividing by zero follows IEEE 754 and produces an infinite or NaN
  /// float. Callers which want a different treatment of zero
  /// divisors must check for them first.
  pub fn true_div(&self, other: &Number) -> Number {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => {
        if right.is_zero() {
          Number::from(int_to_float(&left) / 0.0)
        } else {
          // Go through an exact ratio so that large integers still
          // produce the correctly rounded quotient.
          let quotient = BigRational::new(left, right);
          Number::from(quotient.to_f64().unwrap_or(f64::NAN))
        }
      }
      NumberPair::Floats(left, right) => Number::from(left / right),
    }
  }

  /// Divide, then round toward negative infinity. Returns `None` if
  /// the quotient is not finite.
  ///
  /// Panics if both numbers are integral and `other` is zero.
  pub fn div_floor(&self, other: &Number) -> Option<BigInt> {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => Some(div_floor(left, right)),
      NumberPair::Floats(left, right) => BigInt::from_f64((left / right).floor()),
    }
  }

  /// Truncates toward zero, producing an integer. Returns `None` for
  /// infinite or NaN values.
  pub fn trunc(&self) -> Option<BigInt> {
    match &self.inner {
      NumberImpl::Integer(i) => Some(i.clone()),
      NumberImpl::Float(f) => BigInt::from_f64(f.trunc()),
    }
  }

  /// Converts `self` to an `f64` on a best-effort basis.
  pub fn to_f64(&self) -> Option<f64> {
    match &self.inner {
      NumberImpl::Integer(i) => i.to_f64(),
      NumberImpl::Float(d) => Some(*d),
    }
  }

  /// Integral numbers are always finite.
  pub fn is_finite(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(_) => true,
      NumberImpl::Float(d) => d.is_finite(),
    }
  }
}

impl From<i32> for Number {
  fn from(i: i32) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

/// Constructs an integral number from an `i64`.
impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

impl From<usize> for Number {
  fn from(i: usize) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

/// Constructs an integral number from an arbitrary-sized `BigInt`.
impl From<BigInt> for Number {
  fn from(i: BigInt) -> Number {
    Number { inner: NumberImpl::Integer(i) }
  }
}

/// Constructs a fractional number from an `f64` value. Integral
/// floats such as `2.0` are still fractional.
impl From<f64> for Number {
  fn from(f: f64) -> Number {
    Number { inner: NumberImpl::Float(f) }
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      NumberImpl::Integer(i) => {
        i.fmt(f)
      }
      NumberImpl::Float(d) => {
        if d.is_nan() {
          write!(f, "nan")
        } else if d.fract().is_zero() && d.abs() < u64::MAX as f64 {
          // Force one decimal point on integral floats, so they can't
          // be mistaken for integral numbers.
          write!(f, "{:.1}", d)
        } else {
          write!(f, "{}", d)
        }
      }
    }
  }
}

impl Display for ParseNumberError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Failed to parse number")
  }
}

/// `PartialEq` impl for `Number` compares the numerical value and
/// ignores the representation. To include the representation, use
/// [`StrictEq::strict_eq`].
///
/// # Examples
///
/// ```
/// # use zed::value::Number;
/// assert_eq!(Number::from(0), Number::from(0));
/// assert_eq!(Number::from(3), Number::from(3.0));
/// assert_ne!(Number::from(3), Number::from(3.5));
/// ```
impl PartialEq for Number {
  fn eq(&self, other: &Number) -> bool {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left == right,
      NumberPair::Floats(left, right) => left == right,
    }
  }
}

impl StrictEq for Number {
  /// Compares both the representation and the value of the number.
  fn strict_eq(&self, other: &Number) -> bool {
    self.kind() == other.kind() && self == other
  }
}

impl AbsDiffEq for Number {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Number, epsilon: f64) -> bool {
    let left = self.to_f64().unwrap_or(f64::NAN);
    let right = other.to_f64().unwrap_or(f64::NAN);
    left.abs_diff_eq(&right, epsilon)
  }
}

impl PartialOrd for Number {
  fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left.partial_cmp(&right),
      NumberPair::Floats(left, right) => left.partial_cmp(&right),
    }
  }
}

impl ops::Add for Number {
  type Output = Number;

  fn add(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left + right),
      NumberPair::Floats(left, right) => Number::from(left + right),
    }
  }
}

impl ops::Sub for Number {
  type Output = Number;

  fn sub(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left - right),
      NumberPair::Floats(left, right) => Number::from(left - right),
    }
  }
}

impl ops::Mul for Number {
  type Output = Number;

  fn mul(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left * right),
      NumberPair::Floats(left, right) => Number::from(left * right),
    }
  }
}

impl ops::Mul for &Number {
  type Output = Number;

  fn mul(self, other: &Number) -> Number {
    self.clone() * other.clone()
  }
}

impl Zero for Number {
  fn zero() -> Number {
    Number::from(0i64)
  }

  /// Both `0.0` and `-0.0` count as zero.
  fn is_zero(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(i) => i.is_zero(),
      NumberImpl::Float(f) => f.is_zero(),
    }
  }
}

/// Parses an integral number if possible, then a finite fractional
/// number. Surrounding whitespace is ignored, and single underscores
/// may separate digits (`1_000`).
impl FromStr for Number {
  type Err = ParseNumberError;

  fn from_str(s: &str) -> Result<Number, ParseNumberError> {
    parse_integer(s).or_else(|| {
      parse_float(s)
    }).ok_or(ParseNumberError {})
  }
}

fn parse_integer(s: &str) -> Option<Number> {
  static RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?[0-9](?:_?[0-9])*)\s*$").unwrap()
  });
  let caps = RE.captures(s)?;
  let literal = &caps[1];
  let digits = literal.strip_prefix('+').unwrap_or(literal).replace('_', "");
  BigInt::from_str(&digits).map(Number::from).ok()
}

fn parse_float(s: &str) -> Option<Number> {
  static RE: Lazy<Regex> = Lazy::new(|| {
    let digits = r"[0-9](?:_?[0-9])*";
    let pattern = format!(
      r"^\s*([+-]?(?:{digits}(?:\.(?:{digits})?)?|\.{digits})(?:[eE][+-]?{digits})?)\s*$",
    );
    Regex::new(&pattern).unwrap()
  });
  let caps = RE.captures(s)?;
  let literal = caps[1].replace('_', "");
  f64::from_str(&literal).ok()
    .filter(|f| f.is_finite())
    .map(Number::from)
}
