// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Algorithms on lists of date ranges shared by `DateSet` and `MutableDateSet`.
//!
//! A list is *normalized* when it is sorted by start date and two consecutive ranges are separated by at least one date that belongs to none of them. Apart from `normalize` and `sorted_ranges_from_single_dates`, which build normalized lists, every function expects normalized inputs and produces a normalized output.

use crate::date_range::DateRange;
use crate::just_date::JustDate;
use crate::ops::Discrete;

/// Sorts `ranges` and merges the ranges that overlap or touch.
pub fn normalize(mut ranges: Vec<DateRange>) -> Vec<DateRange> {
  ranges.sort_unstable_by_key(|r| r.start());
  let mut res = Vec::with_capacity(ranges.len());
  for range in ranges {
    push_merged(&mut res, range);
  }
  res
}

/// Sorts `dates` and turns every run of consecutive dates into one range. Duplicates are merged.
pub fn sorted_ranges_from_single_dates(mut dates: Vec<JustDate>) -> Vec<DateRange> {
  dates.sort_unstable();
  let mut res = Vec::new();
  for date in dates {
    push_merged(&mut res, DateRange::singleton(date));
  }
  res
}

// `range` must not start before the last range of `res`.
fn push_merged(res: &mut Vec<DateRange>, range: DateRange) {
  match res.last_mut() {
    Some(last) if range.start() <= last.end().successor() => {
      if range.end() > last.end() {
        *last = DateRange::new_unchecked(last.start(), range.end());
      }
    }
    _ => res.push(range)
  }
}

/// Removes the dates of `cut` from `ranges`.
///
/// The ranges entirely before or after `cut` are copied untouched. A range intersecting `cut` disappears if `cut` covers it, loses its head or its tail, or is split in two when `cut` is strictly inside.
pub fn subtract_from_sorted(ranges: &[DateRange], cut: &DateRange) -> Vec<DateRange> {
  debug_assert!(is_normalized(ranges));
  let first = ranges.partition_point(|r| r.end() < cut.start());
  let after = ranges.partition_point(|r| r.start() <= cut.end()).max(first);
  let mut res = Vec::with_capacity(ranges.len() + 1);
  res.extend_from_slice(&ranges[..first]);
  for range in &ranges[first..after] {
    if range.start() < cut.start() {
      res.push(DateRange::new_unchecked(range.start(), cut.start().predecessor()));
    }
    if range.end() > cut.end() {
      res.push(DateRange::new_unchecked(cut.end().successor(), range.end()));
    }
  }
  res.extend_from_slice(&ranges[after..]);
  res
}

/// Dates belonging to both `a` and `b`.
pub fn intersect_sorted(a: &[DateRange], b: &[DateRange]) -> Vec<DateRange> {
  debug_assert!(is_normalized(a) && is_normalized(b));
  let mut res = Vec::new();
  let (mut i, mut j) = (0, 0);
  while i < a.len() && j < b.len() {
    if let Some(overlap) = a[i].intersection(&b[j]) {
      res.push(overlap);
    }
    // Advance the one with the lowest upper bound.
    if a[i].end() < b[j].end() { i += 1; } else { j += 1; }
  }
  res
}

/// `true` if every date of `inner` belongs to `outer`.
pub fn covers_sorted(outer: &[DateRange], inner: &[DateRange]) -> bool {
  debug_assert!(is_normalized(outer) && is_normalized(inner));
  let mut k = 0;
  for range in inner {
    while k < outer.len() && outer[k].end() < range.start() {
      k += 1;
    }
    match outer.get(k) {
      Some(candidate) if candidate.contains(range) => (),
      _ => return false
    }
  }
  true
}

pub fn is_normalized(ranges: &[DateRange]) -> bool {
  ranges.windows(2).all(|w| w[0].end().successor() < w[1].start())
}
