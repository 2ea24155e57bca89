// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazy iterators over a snapshot of the ranges of a set.

use crate::date_range::{DateRange, Days};
use crate::just_date::JustDate;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Ranges of a set, see `DateSetQuery::each_range`.
#[derive(Debug, Clone)]
pub struct RangeIter {
  ranges: Arc<Vec<DateRange>>,
  front: usize,
  back: usize,
  backwards: bool
}

impl RangeIter
{
  pub(crate) fn new(ranges: Arc<Vec<DateRange>>, backwards: bool) -> RangeIter {
    let back = ranges.len();
    RangeIter { ranges, front: 0, back, backwards }
  }

  fn pop_front(&mut self) -> Option<DateRange> {
    if self.front == self.back { return None; }
    self.front += 1;
    Some(self.ranges[self.front - 1])
  }

  fn pop_back(&mut self) -> Option<DateRange> {
    if self.front == self.back { return None; }
    self.back -= 1;
    Some(self.ranges[self.back])
  }
}

impl Iterator for RangeIter
{
  type Item = DateRange;

  fn next(&mut self) -> Option<DateRange> {
    if self.backwards { self.pop_back() } else { self.pop_front() }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.back - self.front;
    (len, Some(len))
  }
}

impl DoubleEndedIterator for RangeIter
{
  fn next_back(&mut self) -> Option<DateRange> {
    if self.backwards { self.pop_front() } else { self.pop_back() }
  }
}

impl ExactSizeIterator for RangeIter {}
impl FusedIterator for RangeIter {}

/// Dates of a set, see `DateSetQuery::each_date`.
#[derive(Debug, Clone)]
pub struct DateIter {
  ranges: RangeIter,
  days: Option<Days>,
  backwards: bool
}

impl DateIter
{
  pub(crate) fn new(ranges: RangeIter, backwards: bool) -> DateIter {
    DateIter { ranges, days: None, backwards }
  }
}

impl Iterator for DateIter
{
  type Item = JustDate;

  fn next(&mut self) -> Option<JustDate> {
    loop {
      if let Some(date) = self.days.as_mut().and_then(Iterator::next) {
        return Some(date);
      }
      self.days = Some(self.ranges.next()?.each(self.backwards));
    }
  }
}

impl FusedIterator for DateIter {}

/// Membership of every date of a window, see `DateSetQuery::window`.
///
/// The ranges of the set are swept once along with the window: `cursor` is the first range not ending before the current date.
#[derive(Debug, Clone)]
pub struct Window {
  ranges: Arc<Vec<DateRange>>,
  cursor: usize,
  days: Days
}

impl Window
{
  pub(crate) fn new(ranges: Arc<Vec<DateRange>>, window: DateRange) -> Window {
    let cursor = ranges.partition_point(|r| r.end() < window.start());
    Window { ranges, cursor, days: window.each(false) }
  }
}

impl Iterator for Window
{
  type Item = (JustDate, bool);

  fn next(&mut self) -> Option<(JustDate, bool)> {
    let date = self.days.next()?;
    let member = match self.ranges.get(self.cursor) {
      Some(range) if range.start() <= date => {
        if range.end() == date {
          self.cursor += 1;
        }
        true
      }
      _ => false
    };
    Some((date, member))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.days.size_hint()
  }
}

impl ExactSizeIterator for Window {}
impl FusedIterator for Window {}
