//! Character-level string helpers for the text rules. Everything in
//! here counts `char`s, not bytes.

use num::{BigInt, Signed, ToPrimitive};

use std::iter;

pub fn char_len(text: &str) -> usize {
  text.chars().count()
}

/// The slice `text[0:end]`, where a negative `end` counts back from
/// the end of the string. Out of range ends are clamped, so the
/// result is always a (possibly empty) prefix of `text`.
pub fn prefix(text: &str, end: &BigInt) -> String {
  let len = char_len(text);
  let keep = if end.is_negative() {
    let from_back = end.abs().to_usize().unwrap_or(usize::MAX);
    len.saturating_sub(from_back)
  } else {
    end.to_usize().map_or(len, |end| end.min(len))
  };
  text.chars().take(keep).collect()
}

/// Appends `spaces` space characters, or returns `None` if the
/// result could never be allocated.
pub fn pad_end(mut text: String, spaces: usize) -> Option<String> {
  within_allocation_limit(text.len().checked_add(spaces)?)?;
  text.extend(iter::repeat(' ').take(spaces));
  Some(text)
}

/// Repeats `text` the given number of times, or returns `None` if the
/// result could never be allocated.
pub fn repeat(text: &str, times: usize) -> Option<String> {
  within_allocation_limit(text.len().checked_mul(times)?)?;
  Some(text.repeat(times))
}

fn within_allocation_limit(bytes: usize) -> Option<usize> {
  (bytes <= isize::MAX as usize).then_some(bytes)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_char_len() {
    assert_eq!(char_len(""), 0);
    assert_eq!(char_len("abc"), 3);
    assert_eq!(char_len("héllo"), 5);
  }

  #[test]
  fn test_prefix_positive_end() {
    assert_eq!(prefix("hello", &BigInt::from(2)), "he");
    assert_eq!(prefix("hello", &BigInt::from(5)), "hello");
    assert_eq!(prefix("hello", &BigInt::from(99)), "hello");
    assert_eq!(prefix("hello", &BigInt::from(0)), "");
  }

  #[test]
  fn test_prefix_negative_end() {
    assert_eq!(prefix("hello", &BigInt::from(-2)), "hel");
    assert_eq!(prefix("hello", &BigInt::from(-5)), "");
    assert_eq!(prefix("hello", &BigInt::from(-6)), "");
  }

  #[test]
  fn test_prefix_huge_end() {
    let huge = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
    assert_eq!(prefix("hello", &huge), "hello");
    assert_eq!(prefix("hello", &-huge), "");
  }

  #[test]
  fn test_prefix_multibyte() {
    assert_eq!(prefix("日本語です", &BigInt::from(-2)), "日本語");
    assert_eq!(prefix("日本語です", &BigInt::from(1)), "日");
  }

  #[test]
  fn test_pad_end() {
    assert_eq!(pad_end(String::from("ab"), 3).as_deref(), Some("ab   "));
    assert_eq!(pad_end(String::from("ab"), 0).as_deref(), Some("ab"));
    assert_eq!(pad_end(String::from("ab"), usize::MAX), None);
  }

  #[test]
  fn test_repeat() {
    assert_eq!(repeat("ab", 3).as_deref(), Some("ababab"));
    assert_eq!(repeat("ab", 0).as_deref(), Some(""));
    assert_eq!(repeat("", usize::MAX).as_deref(), Some(""));
    assert_eq!(repeat("ab", usize::MAX), None);
  }
}
