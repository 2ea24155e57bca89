// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of dates updated in place.
//!
//! Same representation and queries as `DateSet`, plus `add` and `remove` operations which keep the ranges normalized after every call. Iterators obtained before a mutation keep reading the ranges they were created with.
//!
//! # Examples
//!
//! ```rust
//! use justdate::{DateRange, DateSetQuery, MutableDateSet};
//!
//! let r = |start, end| DateRange::from_ymd(start, end).unwrap();
//! let mut set = MutableDateSet::empty();
//! set.add(&r("2021-04-01", "2021-04-05"))
//!    .add(&r("2021-04-20", "2021-04-25"))
//!    .add(&r("2021-04-03", "2021-04-10"));
//! assert_eq!(set.to_string(), "2021-04-01 to 2021-04-10, 2021-04-20 to 2021-04-25");
//!
//! set.remove(&r("2021-04-05", "2021-04-21"));
//! assert_eq!(set.range_count(), 2);
//! ```

use crate::date_range::DateRange;
use crate::date_set::DateSet;
use crate::error::{Error, Result};
use crate::just_date::JustDate;
use crate::ops::Discrete;
use crate::query::{fmt_ranges, serialize_ranges, DateSetQuery};
use crate::range_list::DateRangeList;
use crate::set_operations::*;
use gcollections::kind::*;
use gcollections::ops::{Bounded, Cardinality, Difference, Empty, Intersection, ProperSubset, Subset, Union};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::{max, min};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::trace;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct MutableDateSet {
  ranges: Arc<Vec<DateRange>>
}

impl MutableDateSet
{
  /// Set of every date found in `lists`.
  pub fn new(lists: &[&dyn DateRangeList]) -> MutableDateSet {
    let mut set = MutableDateSet::empty();
    for list in lists {
      set.add(*list);
    }
    set
  }

  pub fn empty() -> MutableDateSet {
    MutableDateSet::default()
  }

  pub fn from_dates<I>(dates: I) -> MutableDateSet where
   I: IntoIterator<Item=JustDate>
  {
    MutableDateSet::from(DateSet::from_dates(dates))
  }

  pub fn from_string(literal: &str) -> Result<MutableDateSet> {
    DateSet::from_string(literal).map(MutableDateSet::from)
  }

  pub fn union(lists: &[&dyn DateRangeList]) -> MutableDateSet {
    MutableDateSet::new(lists)
  }

  pub fn intersection(lists: &[&dyn DateRangeList]) -> MutableDateSet {
    MutableDateSet::from(DateSet::intersection(lists))
  }

  /// Adds every date of `other` to the set.
  pub fn add(&mut self, other: &dyn DateRangeList) -> &mut MutableDateSet {
    for range in other.date_ranges().iter() {
      self.add_range(*range);
    }
    self
  }

  /// Adds the dates of `range`, merging it with the ranges it overlaps or touches.
  pub fn add_range(&mut self, range: DateRange) -> &mut MutableDateSet {
    trace!(%range, "add date range");
    insert_range(Arc::make_mut(&mut self.ranges), range);
    self
  }

  /// Removes every date of `other` from the set.
  pub fn remove(&mut self, other: &dyn DateRangeList) -> &mut MutableDateSet {
    let cuts = other.date_ranges();
    if cuts.is_empty() || self.ranges.is_empty() {
      return self;
    }
    let ranges = Arc::make_mut(&mut self.ranges);
    for cut in cuts.iter() {
      trace!(range = %cut, "remove date range");
      *ranges = subtract_from_sorted(ranges, cut);
    }
    self
  }

  /// A new set with the dates of this set which are not in `other`.
  pub fn subtract(&self, other: &dyn DateRangeList) -> MutableDateSet {
    let mut res = self.clone();
    res.remove(other);
    res
  }

  pub fn clear(&mut self) -> &mut MutableDateSet {
    self.ranges = Arc::default();
    self
  }
}

fn insert_range(ranges: &mut Vec<DateRange>, range: DateRange) {
  // First range ending at most one day before `range` starts.
  let i = ranges.partition_point(|r| r.end().successor() < range.start());
  if i == ranges.len() {
    ranges.push(range);
    return;
  }
  let mut j = i;
  while j < ranges.len() && range.end() >= ranges[j].start().predecessor() {
    j += 1;
  }
  let start = if j > i { min(range.start(), ranges[i].start()) } else { range.start() };
  let end = if j > i { max(range.end(), ranges[j - 1].end()) } else { range.end() };
  ranges.splice(i..j, Some(DateRange::new_unchecked(start, end)));
  debug_assert!(is_normalized(ranges));
}

impl DateSetQuery for MutableDateSet
{
  fn snapshot(&self) -> &Arc<Vec<DateRange>> {
    &self.ranges
  }
}

impl DateRangeList for MutableDateSet
{
  fn date_ranges(&self) -> Cow<'_, [DateRange]> {
    Cow::Borrowed(&self.ranges[..])
  }
}

impl From<DateSet> for MutableDateSet
{
  fn from(set: DateSet) -> MutableDateSet {
    MutableDateSet { ranges: Arc::clone(set.snapshot()) }
  }
}

impl From<DateRange> for MutableDateSet
{
  fn from(range: DateRange) -> MutableDateSet {
    MutableDateSet { ranges: Arc::new(vec![range]) }
  }
}

impl From<JustDate> for MutableDateSet
{
  fn from(date: JustDate) -> MutableDateSet {
    MutableDateSet::from(DateRange::singleton(date))
  }
}

impl FromIterator<DateRange> for MutableDateSet
{
  fn from_iter<I: IntoIterator<Item=DateRange>>(iter: I) -> MutableDateSet {
    let mut set = MutableDateSet::empty();
    for range in iter {
      set.add_range(range);
    }
    set
  }
}

impl FromIterator<JustDate> for MutableDateSet
{
  fn from_iter<I: IntoIterator<Item=JustDate>>(iter: I) -> MutableDateSet {
    MutableDateSet::from_dates(iter)
  }
}

impl Extend<DateRange> for MutableDateSet
{
  fn extend<I: IntoIterator<Item=DateRange>>(&mut self, iter: I) {
    for range in iter {
      self.add_range(range);
    }
  }
}

impl FromStr for MutableDateSet
{
  type Err = Error;

  fn from_str(s: &str) -> Result<MutableDateSet> {
    MutableDateSet::from_string(s)
  }
}

impl fmt::Display for MutableDateSet
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt_ranges(&self.ranges, formatter)
  }
}

impl fmt::Debug for MutableDateSet
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "MutableDateSet({})", self)
  }
}

impl Serialize for MutableDateSet
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    serialize_ranges(&self.ranges, serializer)
  }
}

impl<'de> Deserialize<'de> for MutableDateSet
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<MutableDateSet, D::Error> where
   D: Deserializer<'de>
  {
    DateSet::deserialize(deserializer).map(MutableDateSet::from)
  }
}

impl Collection for MutableDateSet
{
  type Item = JustDate;
}

impl Bounded for MutableDateSet
{
  fn lower(&self) -> JustDate {
    self.ranges.first().expect("Cannot access lower bound on empty date set.").start()
  }

  fn upper(&self) -> JustDate {
    self.ranges.last().expect("Cannot access upper bound on empty date set.").end()
  }
}

impl Cardinality for MutableDateSet
{
  type Size = usize;

  fn size(&self) -> usize {
    self.date_count()
  }
}

impl Empty for MutableDateSet
{
  fn empty() -> MutableDateSet {
    MutableDateSet::default()
  }
}

impl Union for MutableDateSet
{
  type Output = MutableDateSet;

  fn union(&self, other: &MutableDateSet) -> MutableDateSet {
    let mut res = self.clone();
    res.add(other);
    res
  }
}

impl Intersection for MutableDateSet
{
  type Output = MutableDateSet;

  fn intersection(&self, other: &MutableDateSet) -> MutableDateSet {
    MutableDateSet { ranges: Arc::new(intersect_sorted(&self.ranges, &other.ranges)) }
  }
}

impl Difference for MutableDateSet
{
  type Output = MutableDateSet;

  fn difference(&self, other: &MutableDateSet) -> MutableDateSet {
    self.subtract(other)
  }
}

impl Subset for MutableDateSet
{
  fn is_subset(&self, other: &MutableDateSet) -> bool {
    covers_sorted(&other.ranges, &self.ranges)
  }
}

impl ProperSubset for MutableDateSet
{
  fn is_proper_subset(&self, other: &MutableDateSet) -> bool {
    self.is_subset(other) && self.ranges != other.ranges
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use gcollections::ops::IsEmpty;
  use serde_test::{assert_tokens, Token};

  fn d(ymd: &str) -> JustDate {
    JustDate::from_ymd(ymd).unwrap()
  }

  fn r(start: &str, end: &str) -> DateRange {
    DateRange::from_ymd(start, end).unwrap()
  }

  #[test]
  fn constructing() {
    let (d10, d11, d12, d16) = (d("2021-04-10"), d("2021-04-11"), d("2021-04-12"), d("2021-04-16"));
    let (r10_14, r15_20) = (r("2021-04-10", "2021-04-14"), r("2021-04-15", "2021-04-20"));
    let cases: Vec<(usize, Vec<&dyn DateRangeList>, &str)> = vec![
      (1, vec![], ""),
      (2, vec![&d10], "2021-04-10"),
      (3, vec![&d10, &d11], "2021-04-10 to 2021-04-11"),
      (4, vec![&d10, &d12], "2021-04-10, 2021-04-12"),
      (5, vec![&r10_14], "2021-04-10 to 2021-04-14"),
      (6, vec![&r10_14, &r10_14], "2021-04-10 to 2021-04-14"),
      (7, vec![&r10_14, &r15_20], "2021-04-10 to 2021-04-20"),
      (8, vec![&r10_14, &d16], "2021-04-10 to 2021-04-14, 2021-04-16"),
    ];
    for (id, lists, expected) in cases {
      assert_eq!(MutableDateSet::new(&lists).to_string(), expected, "test #{} of new", id);
      assert_eq!(MutableDateSet::union(&lists).to_string(), expected, "test #{} of union", id);
      assert_eq!(MutableDateSet::from_string(expected).unwrap().to_string(), expected, "test #{} of from_string", id);
      assert!(MutableDateSet::new(&lists).is_same_as(&DateSet::new(&lists)), "test #{} of new", id);
    }

    assert_eq!(MutableDateSet::from_dates(vec![d("2021-04-11"), d("2021-04-10")]).to_string(), "2021-04-10 to 2021-04-11");
    assert_eq!("2021-04-10, 2021-04-11".parse::<MutableDateSet>().unwrap().to_string(), "2021-04-10 to 2021-04-11");
    assert!("2021-04-10 to".parse::<MutableDateSet>().is_err());
    let collected: MutableDateSet = vec![r("2021-04-13", "2021-04-14"), r("2021-04-10", "2021-04-12")].into_iter().collect();
    assert_eq!(collected.to_string(), "2021-04-10 to 2021-04-14");
  }

  #[test]
  fn adding_ranges() {
    let cases = vec![
      (1, r("2021-04-01", "2021-04-05"), "2021-04-01 to 2021-04-05"),
      (2, r("2021-03-01", "2021-03-05"), "2021-03-01 to 2021-03-05, 2021-04-01 to 2021-04-05"),
      (3, r("2021-05-01", "2021-05-05"), "2021-03-01 to 2021-03-05, 2021-04-01 to 2021-04-05, 2021-05-01 to 2021-05-05"),
      (4, r("2021-04-20", "2021-04-25"), "2021-03-01 to 2021-03-05, 2021-04-01 to 2021-04-05, 2021-04-20 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (5, r("2021-04-03", "2021-04-10"), "2021-03-01 to 2021-03-05, 2021-04-01 to 2021-04-10, 2021-04-20 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (6, r("2021-04-18", "2021-04-22"), "2021-03-01 to 2021-03-05, 2021-04-01 to 2021-04-10, 2021-04-18 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (7, r("2021-02-20", "2021-03-20"), "2021-02-20 to 2021-03-20, 2021-04-01 to 2021-04-10, 2021-04-18 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (8, r("2021-04-11", "2021-04-12"), "2021-02-20 to 2021-03-20, 2021-04-01 to 2021-04-12, 2021-04-18 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (9, r("2021-04-15", "2021-04-17"), "2021-02-20 to 2021-03-20, 2021-04-01 to 2021-04-12, 2021-04-15 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (10, r("2021-04-13", "2021-04-14"), "2021-02-20 to 2021-03-20, 2021-04-01 to 2021-04-25, 2021-05-01 to 2021-05-05"),
      (11, r("2021-01-10", "2021-04-29"), "2021-01-10 to 2021-04-29, 2021-05-01 to 2021-05-05"),
      (12, r("2021-01-01", "2021-05-20"), "2021-01-01 to 2021-05-20"),
    ];
    let mut set = MutableDateSet::empty();
    assert_eq!(set.to_string(), "");
    for (id, range, expected) in cases {
      set.add(&range);
      assert_eq!(set.to_string(), expected, "test #{} of add", id);
    }
  }

  #[test]
  fn adding_overlapping_ranges() {
    let mut set = MutableDateSet::empty();
    set.add(&r("2021-04-01", "2021-04-05"))
       .add(&r("2021-04-20", "2021-04-25"))
       .add(&r("2021-04-03", "2021-04-10"));
    assert_eq!(set.to_string(), "2021-04-01 to 2021-04-10, 2021-04-20 to 2021-04-25");
  }

  #[test]
  fn adding_dates() {
    let cases = vec![
      (1, "2021-04-01", "2021-04-01"),
      (2, "2021-04-05", "2021-04-01, 2021-04-05"),
      (3, "2021-04-04", "2021-04-01, 2021-04-04 to 2021-04-05"),
      (4, "2021-04-04", "2021-04-01, 2021-04-04 to 2021-04-05"),
      (5, "2021-04-02", "2021-04-01 to 2021-04-02, 2021-04-04 to 2021-04-05"),
      (6, "2021-04-03", "2021-04-01 to 2021-04-05"),
    ];
    let mut set = MutableDateSet::empty();
    for (id, date, expected) in cases {
      set.add(&d(date));
      assert_eq!(set.to_string(), expected, "test #{} of add", id);
    }
  }

  #[test]
  fn adding_sets() {
    let mut set = MutableDateSet::empty();

    let set1 = MutableDateSet::new(&[&r("2021-04-01", "2021-04-05"), &r("2021-04-20", "2021-04-25")]);
    set.add(&set1);
    assert_eq!(set.to_string(), "2021-04-01 to 2021-04-05, 2021-04-20 to 2021-04-25");
    assert_eq!(set1.to_string(), "2021-04-01 to 2021-04-05, 2021-04-20 to 2021-04-25");

    let set2 = MutableDateSet::new(&[&r("2021-04-11", "2021-04-12"), &r("2021-04-15", "2021-04-19")]);
    set.add(&set2);
    assert_eq!(set.to_string(), "2021-04-01 to 2021-04-05, 2021-04-11 to 2021-04-12, 2021-04-15 to 2021-04-25");
    assert_eq!(set1.to_string(), "2021-04-01 to 2021-04-05, 2021-04-20 to 2021-04-25");

    let set3 = MutableDateSet::new(&[&r("2021-03-01", "2021-03-10"), &r("2021-05-01", "2021-05-05")]);
    set.add(&set3);
    assert_eq!(set.to_string(), "2021-03-01 to 2021-03-10, 2021-04-01 to 2021-04-05, 2021-04-11 to 2021-04-12, 2021-04-15 to 2021-04-25, 2021-05-01 to 2021-05-05");

    let set4 = MutableDateSet::new(&[&d("2021-05-06"), &r("2021-03-08", "2021-05-01")]);
    set.add(&set4);
    assert_eq!(set.to_string(), "2021-03-01 to 2021-05-06");
  }

  fn removal_cases() -> Vec<(usize, DateRange, &'static str)> {
    vec![
      (1, DateRange::singleton(d("2021-03-10")), "2021-02-01 to 2021-03-09, 2021-03-11 to 2021-05-30"),
      (2, r("2021-01-15", "2021-01-20"), "2021-02-01 to 2021-03-09, 2021-03-11 to 2021-05-30"),
      (3, r("2021-06-15", "2021-06-20"), "2021-02-01 to 2021-03-09, 2021-03-11 to 2021-05-30"),
      (4, r("2021-01-20", "2021-02-03"), "2021-02-04 to 2021-03-09, 2021-03-11 to 2021-05-30"),
      (5, r("2021-02-04", "2021-02-05"), "2021-02-06 to 2021-03-09, 2021-03-11 to 2021-05-30"),
      (6, r("2021-03-11", "2021-03-11"), "2021-02-06 to 2021-03-09, 2021-03-12 to 2021-05-30"),
      (7, r("2021-05-20", "2021-06-01"), "2021-02-06 to 2021-03-09, 2021-03-12 to 2021-05-19"),
      (8, r("2021-05-19", "2021-05-19"), "2021-02-06 to 2021-03-09, 2021-03-12 to 2021-05-18"),
      (9, r("2021-03-05", "2021-03-09"), "2021-02-06 to 2021-03-04, 2021-03-12 to 2021-05-18"),
      (10, r("2021-03-05", "2021-03-11"), "2021-02-06 to 2021-03-04, 2021-03-12 to 2021-05-18"),
      (11, r("2021-03-04", "2021-03-12"), "2021-02-06 to 2021-03-03, 2021-03-13 to 2021-05-18"),
      (12, r("2021-04-10", "2021-04-20"), "2021-02-06 to 2021-03-03, 2021-03-13 to 2021-04-09, 2021-04-21 to 2021-05-18"),
      (13, r("2021-03-13", "2021-04-09"), "2021-02-06 to 2021-03-03, 2021-04-21 to 2021-05-18"),
      (14, r("2021-01-01", "2021-06-01"), ""),
    ]
  }

  #[test]
  fn removing() {
    let mut set = MutableDateSet::from(r("2021-02-01", "2021-05-30"));
    for (id, cut, expected) in removal_cases() {
      set.remove(&cut);
      assert_eq!(set.to_string(), expected, "test #{} of remove", id);
    }
    assert!(DateSetQuery::is_empty(&set));
    set.remove(&r("2021-01-01", "2021-06-01"));
    assert_eq!(set.to_string(), "");
  }

  #[test]
  fn subtracting() {
    let mut set = MutableDateSet::from(r("2021-02-01", "2021-05-30"));
    for (id, cut, expected) in removal_cases() {
      let previous = set.to_string();
      let next = set.subtract(&cut);
      assert_eq!(set.to_string(), previous, "test #{} of subtract", id);
      assert_eq!(next.to_string(), expected, "test #{} of subtract", id);
      set = next;
    }
  }

  #[test]
  fn intersections() {
    let set0 = MutableDateSet::empty();
    let set1 = MutableDateSet::from(r("2021-02-01", "2021-05-30"));
    let set2 = MutableDateSet::from(d("2021-04-10"));
    let set3 = MutableDateSet::from(r("2021-07-01", "2021-07-20"));
    let complex = MutableDateSet::new(&[&r("2021-02-10", "2021-02-15"), &r("2021-02-25", "2021-03-10"), &r("2021-04-20", "2021-05-10")]);
    let dates = MutableDateSet::from_dates(vec![d("2021-02-20"), d("2021-03-01"), d("2021-03-02"), d("2021-04-20")]);
    let window = r("2021-03-01", "2021-04-30");

    let cases: Vec<(usize, Vec<&dyn DateRangeList>, &str)> = vec![
      (1, vec![&set0, &set0], ""),
      (2, vec![&set0, &set1], ""),
      (3, vec![&set0, &set2], ""),
      (4, vec![&set1, &set1], "2021-02-01 to 2021-05-30"),
      (5, vec![&set2, &set2], "2021-04-10"),
      (6, vec![&set1, &set2], "2021-04-10"),
      (7, vec![&set1, &set3], ""),
      (8, vec![&window, &complex], "2021-03-01 to 2021-03-10, 2021-04-20 to 2021-04-30"),
      (9, vec![&window, &complex, &dates], "2021-03-01 to 2021-03-02, 2021-04-20"),
    ];
    for (id, lists, expected) in cases {
      assert_eq!(MutableDateSet::intersection(&lists).to_string(), expected, "test #{} of intersection", id);
    }
  }

  #[test]
  fn includes() {
    let set = MutableDateSet::new(&[&r("2021-04-10", "2021-04-20"), &d("2021-05-01"), &r("2021-06-01", "2021-06-30")]);
    let cases = vec![
      ("2021-04-10", true), ("2021-04-15", true), ("2021-04-20", true), ("2021-05-01", true), ("2021-06-05", true),
      ("2021-04-09", false), ("2021-04-25", false), ("2021-04-30", false), ("2021-07-01", false)
    ];
    for (date, expected) in cases {
      assert_eq!(set.includes(d(date)), expected, "{} in {}", date, set);
    }
  }

  #[test]
  fn iterators_keep_their_snapshot() {
    let mut set = MutableDateSet::new(&[&r("2021-04-01", "2021-04-03"), &r("2021-04-10", "2021-04-12")]);
    let mut ranges = set.each_range(false);
    let window = set.window(r("2021-04-01", "2021-04-12"));
    assert_eq!(ranges.next(), Some(r("2021-04-01", "2021-04-03")));

    set.add(&r("2021-04-04", "2021-04-09")).remove(&d("2021-04-11"));
    assert_eq!(set.to_string(), "2021-04-01 to 2021-04-10, 2021-04-12");

    assert_eq!(ranges.next(), Some(r("2021-04-10", "2021-04-12")));
    assert_eq!(ranges.next(), None);
    let members: String = window.map(|(_, member)| if member { 'x' } else { '-' }).collect();
    assert_eq!(members, "xxx------xxx");
  }

  #[test]
  fn clear_and_conversions() {
    let mut set = MutableDateSet::from(r("2021-04-01", "2021-04-03"));
    let frozen = DateSet::from(set.clone());
    set.clear();
    assert!(DateSetQuery::is_empty(&set));
    assert_eq!(frozen.to_string(), "2021-04-01 to 2021-04-03");

    set.extend(vec![r("2021-04-05", "2021-04-06"), r("2021-04-07", "2021-04-07")]);
    assert_eq!(set.to_string(), "2021-04-05 to 2021-04-07");
    assert_eq!(MutableDateSet::from(frozen.clone()).to_string(), frozen.to_string());
    assert!(set.is_same_as(&DateSet::from(r("2021-04-05", "2021-04-07"))));
  }

  #[test]
  fn set_operations() {
    let a = MutableDateSet::new(&[&r("2021-04-01", "2021-04-10"), &r("2021-04-20", "2021-04-25")]);
    let b = MutableDateSet::from(r("2021-04-05", "2021-04-21"));
    assert_eq!(Union::union(&a, &b).to_string(), "2021-04-01 to 2021-04-25");
    assert_eq!(Intersection::intersection(&a, &b).to_string(), "2021-04-05 to 2021-04-10, 2021-04-20 to 2021-04-21");
    assert_eq!(Difference::difference(&a, &b).to_string(), "2021-04-01 to 2021-04-04, 2021-04-22 to 2021-04-25");
    assert!(Intersection::intersection(&a, &b).is_proper_subset(&a));
    assert!(!a.is_subset(&b));
    assert_eq!((a.lower(), a.upper()), (d("2021-04-01"), d("2021-04-25")));
    assert_eq!(a.size(), 16);
    assert!(IsEmpty::is_empty(&<MutableDateSet as Empty>::empty()));
  }

  #[test]
  fn serde() {
    let set = MutableDateSet::from(d("2021-05-01"));
    assert_tokens(&set, &[
      Token::Seq { len: Some(1) },
      Token::Struct { name: "DateRange", len: 2 },
      Token::Str("start"), Token::Str("2021-05-01"),
      Token::Str("end"), Token::Str("2021-05-01"),
      Token::StructEnd,
      Token::SeqEnd,
    ]);
    let json = r#"[{"start":"2021-04-18","end":"2021-04-21"},{"start":"2021-04-15","end":"2021-04-17"}]"#;
    assert_eq!(serde_json::from_str::<MutableDateSet>(json).unwrap().to_string(), "2021-04-15 to 2021-04-21");
  }

  #[test]
  #[should_panic(expected = "Cannot access lower bound on empty date set.")]
  fn lower_bound_of_empty_set() {
    MutableDateSet::empty().lower();
  }

  #[test]
  #[should_panic(expected = "Cannot access upper bound on empty date set.")]
  fn upper_bound_of_empty_set() {
    MutableDateSet::empty().upper();
  }
}
