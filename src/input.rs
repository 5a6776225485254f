//! Reading values typed in by the user.

use crate::error::Error;
use crate::value::{Number, Value};

use std::io::{BufRead, Write};

/// Interprets a line of user input. Whole numbers become integral
/// values, other finite real numbers become fractional values, and
/// anything else is kept as text, unchanged.
pub fn parse_value(line: &str) -> Value {
  match line.parse::<Number>() {
    Ok(number) => Value::Number(number),
    Err(_) => Value::Text(line.to_owned()),
  }
}

/// Writes `prompt` (without a trailing newline), then reads and
/// parses one line from `input`. Only the line terminator is
/// stripped.
pub fn read_value<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<Value, Error>
where R: BufRead,
      W: Write {
  write!(output, "{prompt}")?;
  output.flush()?;
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(Error::UnexpectedEof);
  }
  Ok(parse_value(strip_line_terminator(&line)))
}

fn strip_line_terminator(line: &str) -> &str {
  match line.strip_suffix('\n') {
    Some(line) => line.strip_suffix('\r').unwrap_or(line),
    None => line,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_strict_eq;

  use std::io::Cursor;

  #[test]
  fn test_parse_integral() {
    assert_strict_eq!(parse_value("42"), Value::from(42));
    assert_strict_eq!(parse_value(" -7 "), Value::from(-7));
    assert_strict_eq!(parse_value("1_000"), Value::from(1000));
    assert_strict_eq!(parse_value("0"), Value::from(0));
  }

  #[test]
  fn test_parse_fractional() {
    assert_strict_eq!(parse_value("3.5"), Value::from(3.5));
    assert_strict_eq!(parse_value("1e3"), Value::from(1000.0));
    assert_strict_eq!(parse_value(".5"), Value::from(0.5));
    assert_strict_eq!(parse_value("-2.0"), Value::from(-2.0));
  }

  #[test]
  fn test_parse_text() {
    assert_strict_eq!(parse_value("abc"), Value::from("abc"));
    assert_strict_eq!(parse_value(""), Value::from(""));
    assert_strict_eq!(parse_value("  padded  "), Value::from("  padded  "));
    assert_strict_eq!(parse_value("12abc"), Value::from("12abc"));
    assert_strict_eq!(parse_value("inf"), Value::from("inf"));
    assert_strict_eq!(parse_value("nan"), Value::from("nan"));
  }

  #[test]
  fn test_read_value_writes_prompt() {
    let mut input = Cursor::new("17\n");
    let mut output = Vec::new();
    let value = read_value("N? ", &mut input, &mut output).unwrap();
    assert_strict_eq!(value, Value::from(17));
    assert_eq!(output, b"N? ");
  }

  #[test]
  fn test_read_value_strips_only_terminator() {
    let mut output = Vec::new();
    let value = read_value("", &mut Cursor::new(" hi \r\n"), &mut output).unwrap();
    assert_strict_eq!(value, Value::from(" hi "));
    let value = read_value("", &mut Cursor::new("last"), &mut output).unwrap();
    assert_strict_eq!(value, Value::from("last"));
  }

  #[test]
  fn test_read_value_reads_one_line() {
    let mut input = Cursor::new("1\n2.5\n");
    let mut output = Vec::new();
    assert_strict_eq!(read_value("", &mut input, &mut output).unwrap(), Value::from(1));
    assert_strict_eq!(read_value("", &mut input, &mut output).unwrap(), Value::from(2.5));
  }

  #[test]
  fn test_read_value_at_eof() {
    let mut output = Vec::new();
    let err = read_value("N? ", &mut Cursor::new(""), &mut output).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof));
  }
}
