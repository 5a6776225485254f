
use crate::engine::EngineError;
use crate::value::Value;

use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  EngineError(#[from] EngineError),
  #[error("{0}")]
  IoError(#[from] io::Error),
  #[error("Unexpected end of input")]
  UnexpectedEof,
  #[error("Expected a number of terms, got '{0}'")]
  InvalidTermCount(Value),
}
