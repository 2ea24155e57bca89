// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Day and range specific operations.
//!
//! The set engine only relies on the operations listed here (besides `Ord`), so every range algorithm can be read without knowing anything about calendars.

/// Totally ordered points with a unit step, such as calendar days.
///
/// `successor` and `predecessor` saturate at the bounds of the representable domain, similarly to the `Width` bounds of integer intervals: the last point has no successor distinct from itself.
pub trait Discrete : Ord + Copy
{
  fn successor(&self) -> Self;
  fn predecessor(&self) -> Self;
  /// Number of steps to go from `self` to `other`, negative if `other` is before `self`.
  fn difference(&self, other: &Self) -> i64;
}

/// Smallest value covering both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::just_date::JustDate;

  fn date(ymd: &str) -> JustDate {
    JustDate::from_ymd(ymd).unwrap()
  }

  #[test]
  fn successor_predecessor() {
    let cases = vec![
      (1, "2019-04-21", "2019-04-22", "2019-04-20"),
      (2, "2019-04-30", "2019-05-01", "2019-04-29"),
      (3, "2020-02-28", "2020-02-29", "2020-02-27"),
      (4, "2021-01-01", "2021-01-02", "2020-12-31"),
    ];
    for (id, d, next, prev) in cases {
      assert_eq!(date(d).successor(), date(next), "test #{} of successor", id);
      assert_eq!(date(d).predecessor(), date(prev), "test #{} of predecessor", id);
      assert_eq!(date(d).difference(&date(next)), 1, "test #{} of difference", id);
      assert_eq!(date(d).difference(&date(prev)), -1, "test #{} of difference", id);
    }
  }

  #[test]
  fn saturating_bounds() {
    assert_eq!(JustDate::MAX.successor(), JustDate::MAX);
    assert_eq!(JustDate::MIN.predecessor(), JustDate::MIN);
    assert!(JustDate::MIN.difference(&JustDate::MAX) > 0);
  }
}
