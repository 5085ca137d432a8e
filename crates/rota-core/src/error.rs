//! Error types for `rota-core`.
//!
//! Only the registrar string codecs are fallible. Entity construction and
//! conflict detection are total functions over their inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown day code: {0:?}")]
  InvalidDayCode(String),

  #[error("unparsable day pattern: {0:?}")]
  InvalidDayPattern(String),

  #[error("unparsable clock time: {0:?}")]
  InvalidClockTime(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
