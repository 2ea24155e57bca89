// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed and bounded range of dates.
//!
//! A range always contains at least one date: `[start..end]` with `start <= end`. Ranges containing a single date are allowed, empty ranges cannot be built (the intersection of two ranges is an `Option` for this reason).
//!
//! # Examples
//!
//! ```rust
//! use justdate::{DateRange, JustDate};
//!
//! let r = DateRange::from_ymd("2019-04-21", "2019-04-25").unwrap();
//! assert_eq!(r.outer_length(), 5);
//! assert!(r.includes(JustDate::from_ymd("2019-04-23").unwrap()));
//!
//! let days: Vec<u8> = r.each(true).map(|d| d.day()).collect();
//! assert_eq!(days, vec![25, 24, 23, 22, 21]);
//! ```
//!
//! # See also
//! [date_set](../date_set/index.html)

use crate::day_of_week::DayOfWeek;
use crate::error::{Error, Result};
use crate::just_date::JustDate;
use crate::ops::Hull;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::cmp::{max, min};
use std::fmt;
use std::iter::FusedIterator;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
  start: JustDate,
  end: JustDate
}

impl DateRange
{
  pub fn new(start: JustDate, end: JustDate) -> Result<DateRange> {
    if start > end {
      Err(Error::InvalidRange { start, end })
    }
    else {
      Ok(DateRange { start, end })
    }
  }

  /// Builds a range from bounds already known to be ordered, such as bounds derived from other valid ranges.
  pub(crate) fn new_unchecked(start: JustDate, end: JustDate) -> DateRange {
    debug_assert!(start <= end, "Range bounds derived from valid ranges must be ordered ({} > {}).", start, end);
    DateRange { start, end }
  }

  pub fn singleton(date: JustDate) -> DateRange {
    DateRange { start: date, end: date }
  }

  /// Range between two dates given in any order.
  pub fn either_way_round(a: JustDate, b: JustDate) -> DateRange {
    DateRange { start: min(a, b), end: max(a, b) }
  }

  pub fn from_ymd(start: &str, end: &str) -> Result<DateRange> {
    DateRange::new(JustDate::from_ymd(start)?, JustDate::from_ymd(end)?)
  }

  /// Range of `inner_length + 1` days starting at `start`.
  pub fn from_start_and_inner_length(start: JustDate, inner_length: i32) -> Result<DateRange> {
    if inner_length < 0 {
      return Err(Error::InvalidLength(inner_length));
    }
    DateRange::new(start, start.add_days(inner_length))
  }

  /// Range of `outer_length` days starting at `start`.
  pub fn from_start_and_outer_length(start: JustDate, outer_length: i32) -> Result<DateRange> {
    if outer_length < 1 {
      return Err(Error::InvalidLength(outer_length));
    }
    DateRange::new(start, start.add_days(outer_length - 1))
  }

  /// Range from `start` to `start` plus the given duration (see `JustDate::add` for the calendar arithmetic).
  pub fn from_start_and_duration(start: JustDate, years: i32, months: i32, days: i32) -> Result<DateRange> {
    DateRange::new(start, start.add(years, months, days))
  }

  /// Range from `end` minus the given duration to `end`.
  pub fn from_end_and_duration(end: JustDate, years: i32, months: i32, days: i32) -> Result<DateRange> {
    let start = end.add(years.saturating_neg(), months.saturating_neg(), days.saturating_neg());
    DateRange::new(start, end)
  }

  /// The week (in UTC) containing today.
  pub fn current_week(week_starts_on: DayOfWeek) -> DateRange {
    let start = JustDate::today().start_of_week(week_starts_on);
    DateRange::new_unchecked(start, start.add_days(6))
  }

  pub fn current_month() -> DateRange {
    let today = JustDate::today();
    DateRange::new_unchecked(today.start_of_month(), today.end_of_month())
  }

  pub fn current_year() -> DateRange {
    let today = JustDate::today();
    let (month, day) = (i32::from(today.month()), i32::from(today.day()));
    DateRange::new_unchecked(today.add(0, 1 - month, 1 - day), today.add(0, 13 - month, -day))
  }

  pub fn start(&self) -> JustDate {
    self.start
  }

  pub fn end(&self) -> JustDate {
    self.end
  }

  /// Number of nights between start and end (0 for a single day range).
  pub fn inner_length(&self) -> i32 {
    JustDate::difference(self.start, self.end)
  }

  /// Number of days in the range, bounds included.
  pub fn outer_length(&self) -> i32 {
    self.inner_length() + 1
  }

  pub fn is_single_day(&self) -> bool {
    self.start == self.end
  }

  pub fn includes(&self, date: JustDate) -> bool {
    date >= self.start && date <= self.end
  }

  /// `true` if `other` is completely inside this range.
  pub fn contains(&self, other: &DateRange) -> bool {
    self.start <= other.start && self.end >= other.end
  }

  pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
    let start = max(self.start, other.start);
    let end = min(self.end, other.end);
    if start > end { None }
    else { Some(DateRange::new_unchecked(start, end)) }
  }

  /// Every date of the range, bounds included, in ascending order or in descending order if `backwards`.
  pub fn each(&self, backwards: bool) -> Days {
    Days {
      front: self.start,
      back: self.end,
      remaining: self.outer_length() as usize,
      backwards
    }
  }

  /// Same as `each` without the last date produced (the end, or the start if `backwards`).
  pub fn each_except_last(&self, backwards: bool) -> Days {
    let mut days = self.each(backwards);
    days.remaining -= 1;
    if backwards {
      days.front = self.start.next_day();
    }
    else {
      days.back = self.end.prev_day();
    }
    days
  }

  /// Splits the range into maximal sub-ranges of consecutive dates for which `value_fn` returns equal values, yielded with that value.
  ///
  /// ```rust
  /// use justdate::DateRange;
  ///
  /// let r = DateRange::from_ymd("2021-02-28", "2021-04-02").unwrap();
  /// let months: Vec<(String, u8)> = r.each_sub_range(|d| d.month(), false)
  ///   .map(|(range, month)| (range.to_string(), month))
  ///   .collect();
  /// assert_eq!(months[1], ("2021-03-01 to 2021-03-31".to_string(), 3));
  /// ```
  pub fn each_sub_range<F, V>(&self, value_fn: F, backwards: bool) -> SubRanges<F, V> where
   F: FnMut(JustDate) -> V,
   V: PartialEq
  {
    SubRanges {
      days: self.each(backwards),
      value_fn,
      current: None
    }
  }
}

impl Hull for DateRange
{
  type Output = DateRange;

  fn hull(&self, other: &DateRange) -> DateRange {
    DateRange::new_unchecked(min(self.start, other.start), max(self.end, other.end))
  }
}

impl Collection for DateRange
{
  type Item = JustDate;
}

impl Bounded for DateRange
{
  fn lower(&self) -> JustDate {
    self.start
  }

  fn upper(&self) -> JustDate {
    self.end
  }
}

impl Cardinality for DateRange
{
  type Size = usize;

  fn size(&self) -> usize {
    self.outer_length() as usize
  }
}

impl Intersection for DateRange
{
  type Output = Option<DateRange>;

  fn intersection(&self, other: &DateRange) -> Option<DateRange> {
    DateRange::intersection(self, other)
  }
}

impl Overlap for DateRange
{
  fn overlap(&self, other: &DateRange) -> bool {
    self.start <= other.end && other.start <= self.end
  }
}

impl Disjoint for DateRange
{
  fn is_disjoint(&self, other: &DateRange) -> bool {
    !self.overlap(other)
  }
}

impl Subset for DateRange
{
  fn is_subset(&self, other: &DateRange) -> bool {
    other.contains(self)
  }
}

impl fmt::Display for DateRange
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "{} to {}", self.start, self.end)
  }
}

impl fmt::Debug for DateRange
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "DateRange({})", self)
  }
}

/// Iterator over the dates of a range, see `DateRange::each`.
#[derive(Debug, Clone)]
pub struct Days {
  front: JustDate,
  back: JustDate,
  remaining: usize,
  backwards: bool
}

impl Days
{
  fn pop_front(&mut self) -> Option<JustDate> {
    if self.remaining == 0 { return None; }
    let date = self.front;
    self.front = self.front.next_day();
    self.remaining -= 1;
    Some(date)
  }

  fn pop_back(&mut self) -> Option<JustDate> {
    if self.remaining == 0 { return None; }
    let date = self.back;
    self.back = self.back.prev_day();
    self.remaining -= 1;
    Some(date)
  }
}

impl Iterator for Days
{
  type Item = JustDate;

  fn next(&mut self) -> Option<JustDate> {
    if self.backwards { self.pop_back() } else { self.pop_front() }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl DoubleEndedIterator for Days
{
  fn next_back(&mut self) -> Option<JustDate> {
    if self.backwards { self.pop_front() } else { self.pop_back() }
  }
}

impl ExactSizeIterator for Days {}
impl FusedIterator for Days {}

/// Iterator over the sub-ranges of a range, see `DateRange::each_sub_range`.
pub struct SubRanges<F, V> {
  days: Days,
  value_fn: F,
  current: Option<(JustDate, JustDate, V)>
}

impl<F, V> Iterator for SubRanges<F, V> where
 F: FnMut(JustDate) -> V,
 V: PartialEq
{
  type Item = (DateRange, V);

  fn next(&mut self) -> Option<(DateRange, V)> {
    let (first, mut last, value) = match self.current.take() {
      Some(current) => current,
      None => {
        let date = self.days.next()?;
        (date, date, (self.value_fn)(date))
      }
    };
    for date in &mut self.days {
      let next_value = (self.value_fn)(date);
      if next_value != value {
        self.current = Some((date, date, next_value));
        return Some((DateRange::either_way_round(first, last), value));
      }
      last = date;
    }
    Some((DateRange::either_way_round(first, last), value))
  }
}

impl Serialize for DateRange
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    let mut range = serializer.serialize_struct("DateRange", 2)?;
    range.serialize_field("start", &self.start)?;
    range.serialize_field("end", &self.end)?;
    range.end()
  }
}

enum Field { Start, End, Ignore }

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor
{
  type Value = Field;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("`start` or `end`")
  }

  fn visit_str<E>(self, value: &str) -> std::result::Result<Field, E> where
   E: de::Error
  {
    match value {
      "start" => Ok(Field::Start),
      "end" => Ok(Field::End),
      _ => Ok(Field::Ignore)
    }
  }
}

impl<'de> Deserialize<'de> for Field
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Field, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_identifier(FieldVisitor)
  }
}

struct DateRangeVisitor;

impl<'de> Visitor<'de> for DateRangeVisitor
{
  type Value = DateRange;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a date range with `start` and `end` dates")
  }

  fn visit_seq<A>(self, mut seq: A) -> std::result::Result<DateRange, A::Error> where
   A: SeqAccess<'de>
  {
    let start = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
    let end = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
    DateRange::new(start, end).map_err(de::Error::custom)
  }

  fn visit_map<A>(self, mut map: A) -> std::result::Result<DateRange, A::Error> where
   A: MapAccess<'de>
  {
    let mut start = None;
    let mut end = None;
    while let Some(key) = map.next_key()? {
      match key {
        Field::Start => {
          if start.is_some() { return Err(de::Error::duplicate_field("start")); }
          start = Some(map.next_value()?);
        }
        Field::End => {
          if end.is_some() { return Err(de::Error::duplicate_field("end")); }
          end = Some(map.next_value()?);
        }
        Field::Ignore => {
          map.next_value::<de::IgnoredAny>()?;
        }
      }
    }
    let start = start.ok_or_else(|| de::Error::missing_field("start"))?;
    let end = end.ok_or_else(|| de::Error::missing_field("end"))?;
    DateRange::new(start, end).map_err(de::Error::custom)
  }
}

impl<'de> Deserialize<'de> for DateRange
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<DateRange, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_struct("DateRange", &["start", "end"], DateRangeVisitor)
  }
}
