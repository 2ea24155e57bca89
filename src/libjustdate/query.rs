// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read operations shared by `DateSet` and `MutableDateSet`.
//!
//! Both sets keep their normalized ranges in an `Arc<Vec<DateRange>>`. Implementors only expose this snapshot, every query is provided on top of it. Iterators hold their own clone of the snapshot: they are not affected by later mutations of a `MutableDateSet`.

use crate::date_range::DateRange;
use crate::iter::{DateIter, RangeIter, Window};
use crate::just_date::JustDate;
use crate::range_list::DateRangeList;
use crate::set_operations::{covers_sorted, normalize};
use serde::ser::{SerializeSeq, Serializer};
use std::fmt;
use std::sync::Arc;

pub trait DateSetQuery
{
  /// The normalized ranges of the set.
  fn snapshot(&self) -> &Arc<Vec<DateRange>>;

  fn ranges(&self) -> &[DateRange] {
    &self.snapshot()[..]
  }

  /// `true` if `date` is in the set, in logarithmic time.
  fn includes(&self, date: JustDate) -> bool {
    let ranges = self.ranges();
    let i = ranges.partition_point(|r| r.end() < date);
    ranges.get(i).map_or(false, |r| r.start() <= date)
  }

  fn is_empty(&self) -> bool {
    self.ranges().is_empty()
  }

  /// `true` if `other` holds exactly the dates of this set, whatever the way its ranges are split.
  fn is_same_as(&self, other: &dyn DateRangeList) -> bool {
    self.ranges() == &normalize(other.date_ranges().into_owned())[..]
  }

  /// `true` if every date of `other` is in this set.
  fn contains(&self, other: &dyn DateRangeList) -> bool {
    covers_sorted(self.ranges(), &normalize(other.date_ranges().into_owned()))
  }

  /// Smallest range containing every date of the set.
  fn spanning_range(&self) -> Option<DateRange> {
    let ranges = self.ranges();
    match (ranges.first(), ranges.last()) {
      (Some(first), Some(last)) => Some(DateRange::new_unchecked(first.start(), last.end())),
      _ => None
    }
  }

  fn range_count(&self) -> usize {
    self.ranges().len()
  }

  fn date_count(&self) -> usize {
    self.ranges().iter().map(|r| r.outer_length() as usize).sum()
  }

  fn each_range(&self, backwards: bool) -> RangeIter {
    RangeIter::new(Arc::clone(self.snapshot()), backwards)
  }

  /// Every date of the set, in ascending order or descending order if `backwards`.
  fn each_date(&self, backwards: bool) -> DateIter {
    DateIter::new(self.each_range(backwards), backwards)
  }

  /// Every date of `window` in ascending order, paired with its membership in the set.
  fn window(&self, window: DateRange) -> Window {
    Window::new(Arc::clone(self.snapshot()), window)
  }
}

/// Comma separated list of the ranges, single day ranges being written as a date.
pub(crate) fn fmt_ranges(ranges: &[DateRange], formatter: &mut fmt::Formatter) -> fmt::Result {
  for (i, range) in ranges.iter().enumerate() {
    if i > 0 {
      formatter.write_str(", ")?;
    }
    if range.is_single_day() {
      write!(formatter, "{}", range.start())?;
    }
    else {
      write!(formatter, "{}", range)?;
    }
  }
  Ok(())
}

pub(crate) fn serialize_ranges<S>(ranges: &[DateRange], serializer: S) -> Result<S::Ok, S::Error> where
 S: Serializer
{
  let mut seq = serializer.serialize_seq(Some(ranges.len()))?;
  for range in ranges {
    seq.serialize_element(range)?;
  }
  seq.end()
}
