//! A small dynamically-typed value engine. Text and numbers are
//! combined with four arithmetic-style operators whose meaning
//! depends on the kinds of both operands. See [`engine`] for the
//! rules.

pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod util;
pub mod value;
