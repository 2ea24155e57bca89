// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes calendar dates without time nor timezone (`JustDate`), times of day (`JustTime`), closed ranges of dates (`DateRange`) and sets of dates stored as disjoint ranges (`DateSet` and `MutableDateSet`).
//!
//! Sets accept any mix of dates, ranges and other sets as operands through the `DateRangeList` trait, and share their read operations through the `DateSetQuery` trait. Ranges and sets also implement the generic collection operations of [gcollections](https://crates.io/crates/gcollections).
//!
//! # Examples
//!
//! ```rust
//! use justdate::{DateRange, DateSet, DateSetQuery, JustDate};
//!
//! let set: DateSet = "2021-04-01, 2021-04-06 to 2021-06-10".parse().unwrap();
//! let window = DateRange::from_ymd("2021-04-01", "2021-04-06").unwrap();
//! let members: Vec<bool> = set.window(window).map(|(_, member)| member).collect();
//! assert_eq!(members, vec![true, false, false, false, false, true]);
//!
//! let holiday = JustDate::from_ymd("2021-04-01").unwrap();
//! assert_eq!(holiday.add_working_days(0, Some(&set as &dyn DateSetQuery)).to_string(), "2021-04-02");
//! assert_eq!(holiday.add_working_days(1, None).to_string(), "2021-04-02");
//! ```
//!
//! For more examples see the [date_range module](date_range/index.html), the [date_set module](date_set/index.html) or the [mutable_date_set module](mutable_date_set/index.html).
//!
//! # Logging
//!
//! Mutations and rejected literals are reported through [tracing](https://crates.io/crates/tracing) events. No subscriber is installed by the library.

pub mod error;
pub mod ops;
pub mod day_of_week;
pub mod just_date;
pub mod just_time;
pub mod date_range;
pub mod range_list;
pub mod set_operations;
pub mod query;
pub mod iter;
pub mod date_set;
pub mod mutable_date_set;


pub use crate::date_range::DateRange;
pub use crate::date_set::DateSet;
pub use crate::day_of_week::DayOfWeek;
pub use crate::error::{Error, Result};
pub use crate::just_date::JustDate;
pub use crate::just_time::JustTime;
pub use crate::mutable_date_set::MutableDateSet;
pub use crate::query::DateSetQuery;
pub use crate::range_list::DateRangeList;
