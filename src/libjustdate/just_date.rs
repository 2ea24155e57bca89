// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Calendar date without time of day or timezone.
//!
//! A `JustDate` is a number of days since the Unix epoch (1970-01-01). Calendar computations (year, month, weekday, parsing and formatting) are delegated to the `time` crate, Representable dates are the four digit years, from `0000-01-01` to `9999-12-31`, so every date prints and parses back as `YYYY-MM-DD`.
//!
//! ```rust
//! use justdate::JustDate;
//!
//! let d = JustDate::new(2019, 4, 0).unwrap();
//! assert_eq!(d.to_string(), "2019-03-31");
//! assert_eq!(d.add_months(1).to_string(), "2019-05-01");
//! ```

use crate::day_of_week::DayOfWeek;
use crate::error::{Error, Result};
use crate::just_time::JustTime;
use crate::ops::Discrete;
use crate::query::DateSetQuery;
use num_integer::Integer;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use time::macros::{date, format_description};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JustDate {
  epoch_day: i32
}

impl JustDate
{
  pub const MIN: JustDate = JustDate { epoch_day: date!(0000-01-01).to_julian_day() - UNIX_EPOCH_JULIAN_DAY };
  pub const MAX: JustDate = JustDate { epoch_day: date!(9999-12-31).to_julian_day() - UNIX_EPOCH_JULIAN_DAY };

  fn checked(epoch_day: i64) -> Option<JustDate> {
    if epoch_day < i64::from(JustDate::MIN.epoch_day) || epoch_day > i64::from(JustDate::MAX.epoch_day) {
      None
    }
    else {
      Some(JustDate { epoch_day: epoch_day as i32 })
    }
  }

  fn saturating(epoch_day: i64) -> JustDate {
    let epoch_day = epoch_day.clamp(i64::from(JustDate::MIN.epoch_day), i64::from(JustDate::MAX.epoch_day));
    JustDate { epoch_day: epoch_day as i32 }
  }

  /// Builds `year-month-day`, rolling over out of range months and days: day 0 is the last day of the previous month, month 13 is January of the next year.
  pub fn new(year: i32, month: i32, day: i32) -> Result<JustDate> {
    match epoch_day_of(i64::from(year), i64::from(month), i64::from(day)) {
      Some(epoch_day) => JustDate::checked(epoch_day).ok_or(Error::OutOfRange(epoch_day)),
      None => Err(Error::OutOfRange(i64::from(year)))
    }
  }

  /// Like `new`, but clamps to `MIN` or `MAX` instead of failing.
  fn make_saturating(year: i64, month: i64, day: i64) -> JustDate {
    match epoch_day_of(year, month, day) {
      Some(epoch_day) => JustDate::saturating(epoch_day),
      None if year.saturating_add(Integer::div_floor(&(month - 1), &12)) < 0 => JustDate::MIN,
      None => JustDate::MAX
    }
  }

  pub fn from_epoch_day(epoch_day: i32) -> Result<JustDate> {
    JustDate::checked(i64::from(epoch_day)).ok_or(Error::OutOfRange(i64::from(epoch_day)))
  }

  pub fn epoch_day(self) -> i32 {
    self.epoch_day
  }

  /// Parses a date in `Y-m-d` format, such as `2019-04-21`. Surrounding whitespace is ignored.
  pub fn from_ymd(ymd: &str) -> Result<JustDate> {
    let trimmed = ymd.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
      && bytes.iter().enumerate().all(|(i, b)|
           if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
      return Err(Error::InvalidLiteral(ymd.to_string()));
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
      .map(JustDate::from)
      .map_err(|_| Error::InvalidLiteral(ymd.to_string()))
  }

  /// Date at the given Unix timestamp, in UTC.
  pub fn from_timestamp(timestamp: i64) -> Result<JustDate> {
    let epoch_day = Integer::div_floor(&timestamp, &SECONDS_PER_DAY);
    JustDate::checked(epoch_day).ok_or(Error::OutOfRange(timestamp))
  }

  /// Current date in UTC.
  pub fn today() -> JustDate {
    JustDate::from(OffsetDateTime::now_utc().date())
  }

  pub fn yesterday() -> JustDate {
    JustDate::today().prev_day()
  }

  pub fn tomorrow() -> JustDate {
    JustDate::today().next_day()
  }

  pub fn to_date(self) -> Date {
    Date::from_julian_day(self.epoch_day + UNIX_EPOCH_JULIAN_DAY)
      .expect("epoch day is kept within the calendar range of `time::Date`")
  }

  /// Combines this date with a time of day (midnight if `None`).
  pub fn to_date_time(self, time: Option<JustTime>) -> PrimitiveDateTime {
    PrimitiveDateTime::new(self.to_date(), time.unwrap_or_default().to_time())
  }

  pub fn year(self) -> i32 {
    self.to_date().year()
  }

  /// Month from 1 (January) to 12 (December).
  pub fn month(self) -> u8 {
    u8::from(self.to_date().month())
  }

  pub fn day(self) -> u8 {
    self.to_date().day()
  }

  pub fn day_of_week(self) -> DayOfWeek {
    DayOfWeek::from(self.to_date().weekday())
  }

  /// Unix timestamp of midnight UTC on this date.
  pub fn timestamp(self) -> i64 {
    i64::from(self.epoch_day) * SECONDS_PER_DAY
  }

  /// Number of days from `from` to `to`, negative if `to` is before `from`.
  pub fn difference(from: JustDate, to: JustDate) -> i32 {
    to.epoch_day - from.epoch_day
  }

  pub fn earliest<I>(dates: I) -> Option<JustDate> where
   I: IntoIterator<Item=JustDate>
  {
    dates.into_iter().min()
  }

  pub fn latest<I>(dates: I) -> Option<JustDate> where
   I: IntoIterator<Item=JustDate>
  {
    dates.into_iter().max()
  }

  pub fn add_days(self, days: i32) -> JustDate {
    JustDate::saturating(i64::from(self.epoch_day) + i64::from(days))
  }

  pub fn sub_days(self, days: i32) -> JustDate {
    JustDate::saturating(i64::from(self.epoch_day) - i64::from(days))
  }

  pub fn next_day(self) -> JustDate {
    self.add_days(1)
  }

  pub fn prev_day(self) -> JustDate {
    self.add_days(-1)
  }

  pub fn add_weeks(self, weeks: i32) -> JustDate {
    JustDate::saturating(i64::from(self.epoch_day) + 7 * i64::from(weeks))
  }

  pub fn sub_weeks(self, weeks: i32) -> JustDate {
    JustDate::saturating(i64::from(self.epoch_day) - 7 * i64::from(weeks))
  }

  /// Adds years, months and days to the respective calendar fields, then rolls over the result.
  ///
  /// The day of the month is kept, so adding one month to January 30th gives March 1st or 2nd. As a consequence `d.add_months(a).add_months(b)` is not always `d.add_months(a + b)`.
  pub fn add(self, years: i32, months: i32, days: i32) -> JustDate {
    let date = self.to_date();
    JustDate::make_saturating(
      i64::from(date.year()) + i64::from(years),
      i64::from(u8::from(date.month())) + i64::from(months),
      i64::from(date.day()) + i64::from(days))
  }

  pub fn add_months(self, months: i32) -> JustDate {
    self.add(0, months, 0)
  }

  pub fn sub_months(self, months: i32) -> JustDate {
    self.add(0, months.saturating_neg(), 0)
  }

  pub fn add_years(self, years: i32) -> JustDate {
    self.add(years, 0, 0)
  }

  pub fn sub_years(self, years: i32) -> JustDate {
    self.add(years.saturating_neg(), 0, 0)
  }

  pub fn start_of_month(self) -> JustDate {
    self.sub_days(i32::from(self.day()) - 1)
  }

  pub fn end_of_month(self) -> JustDate {
    let date = self.to_date();
    JustDate::make_saturating(i64::from(date.year()), i64::from(u8::from(date.month())) + 1, 0)
  }

  pub fn start_of_week(self, week_starts_on: DayOfWeek) -> JustDate {
    self.sub_days(i32::from(self.day_of_week().num_days_since(week_starts_on)))
  }

  pub fn end_of_week(self, week_starts_on: DayOfWeek) -> JustDate {
    self.start_of_week(week_starts_on).add_days(6)
  }

  pub fn is_weekday(self) -> bool {
    self.day_of_week().is_weekday()
  }

  pub fn is_weekend(self) -> bool {
    self.day_of_week().is_weekend()
  }

  /// Moves forward to the first working day (a weekday which is not a holiday) on or after this date, then skips `days` more working days. Negative `days` are treated as zero.
  pub fn add_working_days(self, days: i32, holidays: Option<&dyn DateSetQuery>) -> JustDate {
    let is_working_day = |date: JustDate| {
      date.is_weekday() && !holidays.map_or(false, |h| h.includes(date))
    };
    let next_working_day = |mut date: JustDate| {
      while !is_working_day(date) && date != JustDate::MAX {
        date = date.next_day();
      }
      date
    };
    let mut date = next_working_day(self);
    for _ in 0..days.max(0) {
      date = next_working_day(date.next_day());
    }
    date
  }

  /// Formats the date with a `time` format description, for example `"[weekday repr:short] [day] [month repr:long] [year]"`. Time components are always zero.
  pub fn format(self, description: &str) -> Result<String> {
    let items = time::format_description::parse(description)?;
    Ok(self.to_date().midnight().format(&items[..])?)
  }
}

/// Epoch day of `year-month-day` where month and day may be out of their usual range; `None` when the year leaves the calendar.
fn epoch_day_of(year: i64, month: i64, day: i64) -> Option<i64> {
  let (carry, month0) = (month - 1).div_mod_floor(&12);
  let year = i32::try_from(year + carry).ok()?;
  let month = Month::try_from(month0 as u8 + 1).ok()?;
  let first = Date::from_calendar_date(year, month, 1).ok()?;
  Some(i64::from(first.to_julian_day() - UNIX_EPOCH_JULIAN_DAY) + day - 1)
}

impl Discrete for JustDate
{
  fn successor(&self) -> JustDate {
    self.next_day()
  }

  fn predecessor(&self) -> JustDate {
    self.prev_day()
  }

  fn difference(&self, other: &JustDate) -> i64 {
    i64::from(other.epoch_day) - i64::from(self.epoch_day)
  }
}

impl From<Date> for JustDate
{
  /// Dates before year 0 are clamped to `MIN`.
  fn from(date: Date) -> JustDate {
    JustDate::saturating(i64::from(date.to_julian_day() - UNIX_EPOCH_JULIAN_DAY))
  }
}

impl FromStr for JustDate
{
  type Err = Error;

  fn from_str(s: &str) -> Result<JustDate> {
    JustDate::from_ymd(s)
  }
}

impl fmt::Display for JustDate
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    let date = self.to_date();
    write!(formatter, "{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
  }
}

impl fmt::Debug for JustDate
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "JustDate({})", self)
  }
}

impl Serialize for JustDate
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_str(self)
  }
}

struct JustDateVisitor;

impl<'de> Visitor<'de> for JustDateVisitor
{
  type Value = JustDate;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a date in Y-m-d format")
  }

  fn visit_str<E>(self, value: &str) -> std::result::Result<JustDate, E> where
   E: de::Error
  {
    JustDate::from_ymd(value).map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for JustDate
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<JustDate, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_str(JustDateVisitor)
  }
}
