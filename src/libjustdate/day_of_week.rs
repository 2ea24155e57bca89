// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_integer::Integer;
use num_traits::FromPrimitive;
use std::fmt;

/// Day of the week, numbered from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek
{
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6
}

use self::DayOfWeek::*;

impl DayOfWeek
{
  pub const ALL: [DayOfWeek; 7] = [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday];

  pub fn number(self) -> u8 {
    self as u8
  }

  pub fn is_weekday(self) -> bool {
    !self.is_weekend()
  }

  pub fn is_weekend(self) -> bool {
    self == Saturday || self == Sunday
  }

  pub fn add_days(self, days: i64) -> DayOfWeek {
    let n = (i64::from(self.number()) + days).mod_floor(&7);
    DayOfWeek::ALL[n as usize]
  }

  pub fn sub_days(self, days: i64) -> DayOfWeek {
    self.add_days(-days)
  }

  /// Days to wait from `self` until the next `other` (0 if they are equal).
  pub fn num_days_until(self, other: DayOfWeek) -> u8 {
    (i64::from(other.number()) - i64::from(self.number())).mod_floor(&7) as u8
  }

  /// Days elapsed since the last `other` (0 if they are equal).
  pub fn num_days_since(self, other: DayOfWeek) -> u8 {
    other.num_days_until(self)
  }
}

impl FromPrimitive for DayOfWeek
{
  fn from_i64(n: i64) -> Option<DayOfWeek> {
    if (0..7).contains(&n) { Some(DayOfWeek::ALL[n as usize]) }
    else { None }
  }

  fn from_u64(n: u64) -> Option<DayOfWeek> {
    if n < 7 { Some(DayOfWeek::ALL[n as usize]) }
    else { None }
  }
}

impl From<time::Weekday> for DayOfWeek
{
  fn from(weekday: time::Weekday) -> DayOfWeek {
    DayOfWeek::ALL[weekday.number_days_from_sunday() as usize]
  }
}

impl fmt::Display for DayOfWeek
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(self, formatter)
  }
}
