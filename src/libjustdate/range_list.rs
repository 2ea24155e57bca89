// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Anything that can be seen as a list of date ranges.
//!
//! Set constructors and set operations accept `&dyn DateRangeList` operands, so a single date, a range, a vector of ranges and both kinds of sets can be mixed freely. The ranges returned do not have to be sorted or disjoint.

use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::just_date::JustDate;
use std::borrow::Cow;
use tracing::debug;

pub trait DateRangeList
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]>;
}

impl DateRangeList for JustDate
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Owned(vec![DateRange::singleton(*self)])
  }
}

impl DateRangeList for DateRange
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(std::slice::from_ref(self))
  }
}

impl DateRangeList for [DateRange]
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(self)
  }
}

impl<const N: usize> DateRangeList for [DateRange; N]
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(&self[..])
  }
}

impl DateRangeList for Vec<DateRange>
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(&self[..])
  }
}

impl DateRangeList for Vec<JustDate>
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Owned(self.iter().cloned().map(DateRange::singleton).collect())
  }
}

/// Parses a comma separated list of dates (`2021-04-10`) and ranges (`2021-04-10 to 2021-04-15`).
///
/// Tokens are trimmed and empty tokens are skipped, so the empty string is the empty list. The first invalid token aborts the parse.
pub fn parse_range_list(literal: &str) -> Result<Vec<DateRange>> {
  literal.split(',')
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .map(parse_token)
    .collect()
}

fn parse_token(token: &str) -> Result<DateRange> {
  let parts: Vec<&str> = token.split(" to ").collect();
  let range = match parts.as_slice() {
    [date] => JustDate::from_ymd(date).map(DateRange::singleton),
    [start, end] => DateRange::from_ymd(start, end),
    _ => Err(Error::InvalidLiteral(token.to_string()))
  };
  if let Err(ref error) = range {
    debug!(token, %error, "rejected date range literal");
  }
  range
}
