//! Calendar date parsing for front-matter `date` fields.
//!
//! Authors write dates in whatever shape their editor produced, so parsing is
//! tolerant: anything that looks like a calendar date yields one, anything
//! else yields `None`. Callers decide the fallback; parsing never fails loudly.
//!
//! # Accepted forms
//!
//! ```text
//! 2021-03-05
//! 2021-3-5
//! 2021/03/05
//! 2021-03-05T14:30:00Z
//! 2021-03-05T14:30:00.000+08:00
//! 2021-03-05 14:30
//! 2021-03-05 14:30:00 +0800
//! "2021-03-05"
//! ```
//!
//! The calendar date is the one written in the string. Time and offset are
//! validated for shape but never shift the date.

use std::fmt;

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};

/// A validated calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse a front-matter date string. Returns `None` when the string is not
    /// a recognizable date or names a day that does not exist.
    pub fn parse(s: &str) -> Option<Self> {
        const QUOTES: &[char] = &['"', '\''];
        let s = s.trim().trim_matches(QUOTES).trim();
        if s.is_empty() {
            return None;
        }

        let split_at = s.find(['T', 't', ' ']).unwrap_or(s.len());
        let (date_part, rest) = s.split_at(split_at);

        let date = parse_date_part(date_part)?;
        if !rest.is_empty() && !is_time_part(&rest[1..]) {
            return None;
        }

        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month is invalid: {}", self.month);
        }
        let max_days = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_days {
            bail!("day is invalid: {}", self.day);
        }
        Ok(())
    }

    /// Format as `YYYY-MM-DD` (W3C date, used by sitemaps).
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Format as a date-bucketed URL prefix: `/YYYY/MM/DD`.
    pub fn to_url_prefix(self) -> String {
        format!("/{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `YYYY-M-D` or `YYYY/M/D`, one or two digits for month and day.
fn parse_date_part(s: &str) -> Option<CalendarDate> {
    let sep = if s.contains('/') { '/' } else { '-' };
    let mut parts = s.split(sep);

    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return None;
    }

    Some(CalendarDate::new(
        parse_digits(year)?,
        u8::try_from(parse_digits(month)?).ok()?,
        u8::try_from(parse_digits(day)?).ok()?,
    ))
}

/// `HH:MM[:SS[.fff]]` followed by an optional offset: `Z`, `±HH:MM`, `±HHMM`
/// or `±HH`, written with or without a space before it.
fn is_time_part(s: &str) -> bool {
    let s = s.trim();
    let (clock, offset) = match s.find(['Z', 'z', '+', '-']) {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };

    let clock = clock.trim_end();
    let clock = clock.split('.').next().unwrap_or(clock);
    let fields: Vec<_> = clock.split(':').collect();
    let clock_ok = matches!(fields.len(), 2 | 3)
        && fields
            .iter()
            .zip([23, 59, 60])
            .all(|(f, max)| f.len() == 2 && parse_digits(f).is_some_and(|v| v <= max));

    let offset_ok = match offset {
        "" | "Z" | "z" => true,
        o => is_utc_offset(&o[1..]),
    };

    clock_ok && offset_ok
}

/// Offset after its sign: `08:00`, `0800` or `08`.
fn is_utc_offset(o: &str) -> bool {
    let (h, m) = match o.split_once(':') {
        Some(parts) => parts,
        None if o.len() == 4 && o.is_char_boundary(2) => o.split_at(2),
        None => (o, "00"),
    };
    h.len() == 2
        && m.len() == 2
        && parse_digits(h).is_some_and(|v| v <= 23)
        && parse_digits(m).is_some_and(|v| v <= 59)
}

fn parse_digits(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[inline]
#[allow(clippy::manual_is_multiple_of)]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
