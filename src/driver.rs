//! The Fibonacci printer. Every running value is produced by the
//! engine, so the terms print exactly the way [`Value`] displays
//! them.

use crate::engine::{apply, Operator};
use crate::error::Error;
use crate::input::read_value;
use crate::value::{Number, Value};

use tracing::debug;

use std::io::{BufRead, Write};

pub const TERM_COUNT_PROMPT: &str = "NO. OF TERMS : ";

/// Asks for a term count `N` on `output`, reads it from `input`, and
/// prints `F(0)` through `F(N)`, one per line.
pub fn fibonacci<R, W>(input: &mut R, output: &mut W) -> Result<(), Error>
where R: BufRead,
      W: Write {
  let term_count = match read_value(TERM_COUNT_PROMPT, input, output)? {
    Value::Number(n) => n,
    other => return Err(Error::InvalidTermCount(other)),
  };
  debug!(%term_count, "read term count");

  let mut counter = Value::from(1);
  let mut previous = Value::from(0);
  let mut current = Value::from(1);
  let mut next = Value::from(1);

  writeln!(output, " F( 0 ) = 0")?;
  while is_at_most(&counter, &term_count) {
    writeln!(output, " F( {counter} ) = {next}")?;
    let partial = apply(Value::from(0), previous, Operator::Add)?;
    next = apply(partial, current.clone(), Operator::Add)?;
    debug!(term = %counter, value = %next, "advanced sequence");
    previous = current;
    current = next.clone();
    counter = apply(counter, Value::from(1), Operator::Add)?;
  }
  output.flush()?;
  Ok(())
}

fn is_at_most(counter: &Value, limit: &Number) -> bool {
  counter.as_number().is_some_and(|n| n <= limit)
}
