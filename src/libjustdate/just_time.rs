// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Time of day without date or timezone.
//!
//! Values wrap around midnight in both directions: `23:30:00` plus two hours is `01:30:00`, and `-10` minutes from midnight is `23:50:00`.

use crate::error::{Error, Result};
use num_integer::Integer;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use time::{OffsetDateTime, Time};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JustTime {
  since_midnight: u32
}

impl JustTime
{
  pub const MIDNIGHT: JustTime = JustTime { since_midnight: 0 };

  pub fn new(hours: i64, minutes: i64, seconds: i64) -> JustTime {
    JustTime::from_seconds_since_midnight(hours * 3600 + minutes * 60 + seconds)
  }

  pub fn from_seconds_since_midnight(seconds: i64) -> JustTime {
    JustTime { since_midnight: seconds.mod_floor(&SECONDS_PER_DAY) as u32 }
  }

  /// Parses `H:i:s` or `H:i`, each field having one or two digits.
  pub fn from_his(his: &str) -> Result<JustTime> {
    let invalid = || Error::InvalidTime(his.to_string());
    let fields: Vec<&str> = his.trim().split(':').collect();
    if fields.len() < 2 || fields.len() > 3 {
      return Err(invalid());
    }
    let mut values = [0i64; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
      if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
      }
      *value = field.parse().map_err(|_| invalid())?;
    }
    let [hours, minutes, seconds] = values;
    if hours >= 24 || minutes >= 60 || seconds >= 60 {
      return Err(invalid());
    }
    Ok(JustTime::new(hours, minutes, seconds))
  }

  /// Current time of day in UTC.
  pub fn now() -> JustTime {
    JustTime::from(OffsetDateTime::now_utc().time())
  }

  /// Time of day at the given Unix timestamp, in UTC.
  pub fn from_timestamp(timestamp: i64) -> JustTime {
    JustTime::from_seconds_since_midnight(timestamp)
  }

  /// Hours (0 to 23), minutes and seconds of a number of seconds since midnight, wrapping around midnight.
  pub fn split(seconds: i64) -> (u8, u8, u8) {
    let seconds = seconds.mod_floor(&SECONDS_PER_DAY);
    let (minutes, seconds) = seconds.div_mod_floor(&60);
    let (hours, minutes) = minutes.div_mod_floor(&60);
    (hours as u8, minutes as u8, seconds as u8)
  }

  pub fn since_midnight(self) -> u32 {
    self.since_midnight
  }

  pub fn hours(self) -> u8 {
    JustTime::split(i64::from(self.since_midnight)).0
  }

  pub fn minutes(self) -> u8 {
    JustTime::split(i64::from(self.since_midnight)).1
  }

  pub fn seconds(self) -> u8 {
    JustTime::split(i64::from(self.since_midnight)).2
  }

  pub fn to_time(self) -> Time {
    let (h, m, s) = JustTime::split(i64::from(self.since_midnight));
    Time::from_hms(h, m, s).expect("split always yields a valid time of day")
  }

  pub fn add_time(self, hours: i64, minutes: i64, seconds: i64) -> JustTime {
    JustTime::from_seconds_since_midnight(
      i64::from(self.since_midnight) + hours * 3600 + minutes * 60 + seconds)
  }

  /// Rounds to the nearest multiple of `interval_seconds`, halves rounding up. The result wraps around midnight.
  pub fn round(self, interval_seconds: u32) -> JustTime {
    assert!(interval_seconds > 0, "Cannot round a time to an empty interval.");
    let since = i64::from(self.since_midnight);
    let interval = i64::from(interval_seconds);
    let rounded = Integer::div_floor(&(2 * since + interval), &(2 * interval)) * interval;
    JustTime::from_seconds_since_midnight(rounded)
  }

  /// Formats the time with a `time` format description, for example `"[hour repr:12]:[minute] [period]"`.
  pub fn format(self, description: &str) -> Result<String> {
    let items = time::format_description::parse(description)?;
    Ok(self.to_time().format(&items[..])?)
  }
}

impl From<Time> for JustTime
{
  fn from(time: Time) -> JustTime {
    JustTime::new(i64::from(time.hour()), i64::from(time.minute()), i64::from(time.second()))
  }
}

impl FromStr for JustTime
{
  type Err = Error;

  fn from_str(s: &str) -> Result<JustTime> {
    JustTime::from_his(s)
  }
}

impl fmt::Display for JustTime
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    let (h, m, s) = JustTime::split(i64::from(self.since_midnight));
    write!(formatter, "{:02}:{:02}:{:02}", h, m, s)
  }
}

impl fmt::Debug for JustTime
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "JustTime({})", self)
  }
}

impl Serialize for JustTime
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_str(self)
  }
}

struct JustTimeVisitor;

impl<'de> Visitor<'de> for JustTimeVisitor
{
  type Value = JustTime;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a time in H:i:s format")
  }

  fn visit_str<E>(self, value: &str) -> std::result::Result<JustTime, E> where
   E: de::Error
  {
    JustTime::from_his(value).map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for JustTime
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<JustTime, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_str(JustTimeVisitor)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  fn his(s: &str) -> JustTime {
    JustTime::from_his(s).unwrap()
  }

  #[test]
  fn create() {
    let cases = vec![
      (1, JustTime::new(14, 35, 2), "14:35:02"),
      (2, JustTime::new(10, 65, 0), "11:05:00"),
      (3, JustTime::new(26, -10, 0), "01:50:00"),
      (4, JustTime::new(0, 0, -1), "23:59:59"),
      (5, JustTime::from_seconds_since_midnight(3661), "01:01:01"),
      (6, JustTime::from_seconds_since_midnight(86_400 + 60), "00:01:00"),
      (7, his("9:05"), "09:05:00"),
      (8, his(" 23:59:59 "), "23:59:59"),
      (9, JustTime::from_timestamp(1_555_863_792), "16:23:12"),
    ];
    for (id, time, expected) in cases {
      assert_eq!(time.to_string(), expected, "test #{} of time creation", id);
    }
  }

  #[test]
  fn invalid_his() {
    for literal in vec!["", "12", "24:00", "12:60", "12:00:60", "1:2:3:4", "ab:cd", "123:00", "12:-1", "12::00"] {
      assert_eq!(JustTime::from_his(literal), Err(Error::InvalidTime(literal.to_string())),
        "{} should be rejected", literal);
    }
  }

  #[test]
  fn getters() {
    let t = his("14:35:02");
    assert_eq!((t.hours(), t.minutes(), t.seconds()), (14, 35, 2));
    assert_eq!(t.since_midnight(), 14 * 3600 + 35 * 60 + 2);
    assert_eq!(JustTime::split(-10 * 60), (23, 50, 0));
    assert_eq!(JustTime::default(), JustTime::MIDNIGHT);
  }

  #[test]
  fn add_time() {
    let t = his("23:30:00");
    assert_eq!(t.add_time(2, 0, 0).to_string(), "01:30:00");
    assert_eq!(t.add_time(0, -45, 0).to_string(), "22:45:00");
    assert_eq!(t.add_time(0, 0, 30).to_string(), "23:30:30");
    assert!(t.add_time(2, 0, 0) < t);
  }

  #[test]
  fn round() {
    let cases = vec![
      (1, "09:47:00", 15 * 60, "09:45:00"),
      (2, "09:53:00", 15 * 60, "10:00:00"),
      (3, "09:52:30", 15 * 60, "10:00:00"),
      (4, "23:50:00", 3600, "00:00:00"),
      (5, "10:00:01", 1, "10:00:01"),
    ];
    for (id, t, interval, expected) in cases {
      assert_eq!(his(t).round(interval).to_string(), expected, "test #{} of round", id);
    }
  }

  #[test]
  fn conversions() {
    let t = his("14:35:02");
    assert_eq!(t.to_time(), time::macros::time!(14:35:02));
    assert_eq!(JustTime::from(time::macros::time!(14:35:02)), t);
    assert_eq!(t.format("[hour repr:12]:[minute] [period]").unwrap(), "02:35 PM");
    assert_eq!("14:35:02".parse::<JustTime>(), Ok(t));
  }

  #[test]
  fn serde() {
    assert_tokens(&his("14:35:02"), &[Token::Str("14:35:02")]);
    assert_eq!(serde_json::from_str::<JustTime>("\"08:00\"").unwrap(), his("08:00:00"));
  }
}
