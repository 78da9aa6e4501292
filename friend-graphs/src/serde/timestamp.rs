// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! ISO-8601 text for birth instants.
//!
//! Instants are naive date-times written as `YYYY-MM-DDTHH:MM:SS`. A fraction of a second is
//! added only when there is one: six digits when the instant falls on a whole microsecond, and
//! nine digits otherwise, so formatting and parsing are inverses down to the nanosecond.
//!
//! Parsing is more lenient. It also accepts a space instead of the `T`, a time without seconds,
//! a fraction with any number of digits from one to nine, and a bare date, which means
//! midnight. UTC offsets are rejected.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;
use time::PrimitiveDateTime;
use time::Time;

use super::FormatError;

const WHOLE_SECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const MICROSECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

const NANOSECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]");

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const TIME_MINUTES: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

const TIME_SECONDS: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]:[second]");

const TIME_FRACTION: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second].[subsecond]");

/// Formats an instant as ISO-8601 text.
pub fn format(instant: PrimitiveDateTime) -> String {
    let description = match instant.nanosecond() {
        0 => WHOLE_SECONDS,
        nanos if nanos % 1_000 == 0 => MICROSECONDS,
        _ => NANOSECONDS,
    };
    // Years have at most four digits without `time`'s large-dates feature, which every
    // description can represent.
    instant
        .format(description)
        .expect("date-time is always formattable")
}

/// Parses ISO-8601 text produced by [`format`][] (or any tool writing a similar layout).
pub fn parse(value: &str) -> Result<PrimitiveDateTime, FormatError> {
    parse_date_time(value).map_err(|source| FormatError::Timestamp {
        value: value.to_string(),
        source,
    })
}

fn parse_date_time(value: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    let (date, time) = match (value.get(..10), value.as_bytes().get(10), value.get(11..)) {
        (Some(date), None, _) => return Ok(Date::parse(date, DATE)?.midnight()),
        (Some(date), Some(b'T'), Some(time)) | (Some(date), Some(b' '), Some(time)) => {
            (date, time)
        }
        // Let the full layout report what is wrong.
        _ => return PrimitiveDateTime::parse(value, WHOLE_SECONDS),
    };
    let description = match (time.matches(':').count(), time.contains('.')) {
        (_, true) => TIME_FRACTION,
        (1, false) => TIME_MINUTES,
        (_, false) => TIME_SECONDS,
    };
    Ok(PrimitiveDateTime::new(
        Date::parse(date, DATE)?,
        Time::parse(time, description)?,
    ))
}
