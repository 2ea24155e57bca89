// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable set of dates.
//!
//! Dates are stored as a sorted list of disjoint ranges (`[2021-04-01..2021-04-05], [2021-04-20..2021-04-25]`) where two consecutive ranges are separated by at least one date. The list is normalized once when the set is built and never changes afterwards: every operation returns a new set.
//!
//! # Examples
//!
//! ```rust
//! use justdate::{DateRange, DateSet, DateSetQuery, JustDate};
//!
//! let d = |ymd| JustDate::from_ymd(ymd).unwrap();
//! let april = DateRange::from_ymd("2021-04-01", "2021-04-30").unwrap();
//! let holidays = DateSet::new(&[&d("2021-04-05"), &d("2021-04-02")]);
//!
//! let working = DateSet::from(april).subtract(&holidays);
//! assert_eq!(working.range_count(), 3);
//! assert!(!working.includes(d("2021-04-05")));
//! assert_eq!(working.to_string(), "2021-04-01, 2021-04-03 to 2021-04-04, 2021-04-06 to 2021-04-30");
//! ```
//!
//! # See also
//! [mutable_date_set](../mutable_date_set/index.html)

use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::just_date::JustDate;
use crate::mutable_date_set::MutableDateSet;
use crate::query::{fmt_ranges, serialize_ranges, DateSetQuery};
use crate::range_list::{parse_range_list, DateRangeList};
use crate::set_operations::*;
use gcollections::kind::*;
use gcollections::ops::{Bounded, Cardinality, Difference, Empty, Intersection, ProperSubset, Subset, Union};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DateSet {
  ranges: Arc<Vec<DateRange>>
}

impl DateSet
{
  pub(crate) fn from_normalized(ranges: Vec<DateRange>) -> DateSet {
    debug_assert!(is_normalized(&ranges), "DateSet ranges must be normalized: {:?}.", ranges);
    DateSet { ranges: Arc::new(ranges) }
  }

  pub(crate) fn from_shared(ranges: Arc<Vec<DateRange>>) -> DateSet {
    DateSet { ranges }
  }

  /// Set of every date found in `lists`.
  pub fn new(lists: &[&dyn DateRangeList]) -> DateSet {
    let ranges = lists.iter()
      .flat_map(|list| list.date_ranges().into_owned())
      .collect();
    DateSet::from_normalized(normalize(ranges))
  }

  pub fn empty() -> DateSet {
    DateSet::default()
  }

  pub fn from_dates<I>(dates: I) -> DateSet where
   I: IntoIterator<Item=JustDate>
  {
    DateSet::from_normalized(sorted_ranges_from_single_dates(dates.into_iter().collect()))
  }

  /// Parses the format produced by `to_string`, for example `"2021-04-10, 2021-04-12 to 2021-04-15"`.
  pub fn from_string(literal: &str) -> Result<DateSet> {
    parse_range_list(literal).map(|ranges| DateSet::from_normalized(normalize(ranges)))
  }

  /// Set of the dates belonging to at least one of `lists`, same as `new`.
  pub fn union(lists: &[&dyn DateRangeList]) -> DateSet {
    DateSet::new(lists)
  }

  /// Set of the dates belonging to every list of `lists`, empty if there is none.
  pub fn intersection(lists: &[&dyn DateRangeList]) -> DateSet {
    let mut operands = lists.iter().map(|list| normalize(list.date_ranges().into_owned()));
    match operands.next() {
      None => DateSet::empty(),
      Some(first) => DateSet::from_normalized(
        operands.fold(first, |acc, ranges| intersect_sorted(&acc, &ranges)))
    }
  }

  /// The dates of this set which are not in `other`.
  pub fn subtract(&self, other: &dyn DateRangeList) -> DateSet {
    let ranges = other.date_ranges().iter()
      .fold(self.ranges.to_vec(), |acc, cut| subtract_from_sorted(&acc, cut));
    DateSet::from_normalized(ranges)
  }
}

impl DateSetQuery for DateSet
{
  fn snapshot(&self) -> &Arc<Vec<DateRange>> {
    &self.ranges
  }
}

impl DateRangeList for DateSet
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(&self.ranges[..])
  }
}

impl From<JustDate> for DateSet
{
  fn from(date: JustDate) -> DateSet {
    DateSet::from_normalized(vec![DateRange::singleton(date)])
  }
}

impl From<DateRange> for DateSet
{
  fn from(range: DateRange) -> DateSet {
    DateSet::from_normalized(vec![range])
  }
}

impl From<MutableDateSet> for DateSet
{
  fn from(set: MutableDateSet) -> DateSet {
    DateSet::from_shared(Arc::clone(set.snapshot()))
  }
}

impl FromIterator<DateRange> for DateSet
{
  fn from_iter<I: IntoIterator<Item=DateRange>>(iter: I) -> DateSet {
    DateSet::from_normalized(normalize(iter.into_iter().collect()))
  }
}

impl FromIterator<JustDate> for DateSet
{
  fn from_iter<I: IntoIterator<Item=JustDate>>(iter: I) -> DateSet {
    DateSet::from_dates(iter)
  }
}

impl FromStr for DateSet
{
  type Err = Error;

  fn from_str(s: &str) -> Result<DateSet> {
    DateSet::from_string(s)
  }
}

impl fmt::Display for DateSet
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt_ranges(&self.ranges, formatter)
  }
}

impl fmt::Debug for DateSet
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "DateSet({})", self)
  }
}

impl Serialize for DateSet
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    serialize_ranges(&self.ranges, serializer)
  }
}

impl<'de> Deserialize<'de> for DateSet
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<DateSet, D::Error> where
   D: Deserializer<'de>
  {
    Vec::<DateRange>::deserialize(deserializer).map(|ranges| DateSet::from_normalized(normalize(ranges)))
  }
}

impl Collection for DateSet
{
  type Item = JustDate;
}

impl Bounded for DateSet
{
  fn lower(&self) -> JustDate {
    self.ranges.first().expect("Cannot access lower bound on empty date set.").start()
  }

  fn upper(&self) -> JustDate {
    self.ranges.last().expect("Cannot access upper bound on empty date set.").end()
  }
}

impl Cardinality for DateSet
{
  type Size = usize;

  fn size(&self) -> usize {
    self.date_count()
  }
}

impl Empty for DateSet
{
  fn empty() -> DateSet {
    DateSet::default()
  }
}

impl Union for DateSet
{
  type Output = DateSet;

  fn union(&self, other: &DateSet) -> DateSet {
    DateSet::new(&[self as &dyn DateRangeList, other])
  }
}

impl Intersection for DateSet
{
  type Output = DateSet;

  fn intersection(&self, other: &DateSet) -> DateSet {
    DateSet::from_normalized(intersect_sorted(&self.ranges, &other.ranges))
  }
}

impl Difference for DateSet
{
  type Output = DateSet;

  fn difference(&self, other: &DateSet) -> DateSet {
    self.subtract(other)
  }
}

impl Subset for DateSet
{
  fn is_subset(&self, other: &DateSet) -> bool {
    covers_sorted(&other.ranges, &self.ranges)
  }
}

impl ProperSubset for DateSet
{
  fn is_proper_subset(&self, other: &DateSet) -> bool {
    self.is_subset(other) && self.ranges != other.ranges
  }
}
