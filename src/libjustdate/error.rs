// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised while building dates, times and ranges.
//!
//! Queries on ranges and sets never fail: only constructors and parsers return a [`Result`].

use crate::just_date::JustDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{
  #[error("start date {start} cannot be after end date {end}")]
  InvalidRange { start: JustDate, end: JustDate },

  #[error("invalid date literal '{0}'")]
  InvalidLiteral(String),

  #[error("invalid H:i:s time '{0}'")]
  InvalidTime(String),

  #[error("invalid range length {0}")]
  InvalidLength(i32),

  #[error("{0} is outside of the supported calendar range")]
  OutOfRange(i64),

  #[error("format error: {0}")]
  Format(String)
}

impl From<time::error::InvalidFormatDescription> for Error {
  fn from(e: time::error::InvalidFormatDescription) -> Error {
    Error::Format(e.to_string())
  }
}

impl From<time::error::Format> for Error {
  fn from(e: time::error::Format) -> Error {
    Error::Format(e.to_string())
  }
}
