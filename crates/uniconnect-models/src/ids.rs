//! Semester ordinals and strongly-typed semester identifiers.
//!
//! A semester is identified by the calendar year its academic year starts in
//! and its position within that year, rendered as `"2025-S1"` / `"2025-S2"`.
//! The identifier is deterministic, so the same semester computed on two
//! different requests carries the same id.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::errors::CalendarError;

/// Position of a semester within its academic year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SemesterOrdinal {
    /// February 1 to July 31.
    First,
    /// August 1 to December 7.
    Second,
}

impl SemesterOrdinal {
    /// Both ordinals in chronological order.
    pub const ALL: [SemesterOrdinal; 2] = [SemesterOrdinal::First, SemesterOrdinal::Second];

    /// 1-based position within the academic year.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            SemesterOrdinal::First => 1,
            SemesterOrdinal::Second => 2,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(SemesterOrdinal::First),
            2 => Some(SemesterOrdinal::Second),
            _ => None,
        }
    }

    /// `(month, day)` of the first day of the semester.
    pub const fn start_month_day(self) -> (u32, u32) {
        match self {
            SemesterOrdinal::First => (2, 1),
            SemesterOrdinal::Second => (8, 1),
        }
    }

    /// `(month, day)` of the last day of the semester (inclusive).
    pub const fn end_month_day(self) -> (u32, u32) {
        match self {
            SemesterOrdinal::First => (7, 31),
            SemesterOrdinal::Second => (12, 7),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SemesterOrdinal::First => "1st Semester",
            SemesterOrdinal::Second => "2nd Semester",
        }
    }

    /// Portuguese display label.
    pub const fn localized_name(self) -> &'static str {
        match self {
            SemesterOrdinal::First => "1º Semestre",
            SemesterOrdinal::Second => "2º Semestre",
        }
    }
}

/// Identifier of one semester, e.g. `2025-S1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemesterId {
    pub start_year: i32,
    pub ordinal: SemesterOrdinal,
}

impl SemesterId {
    #[inline]
    pub const fn new(start_year: i32, ordinal: SemesterOrdinal) -> Self {
        Self {
            start_year,
            ordinal,
        }
    }

    /// First calendar day of the semester.
    pub fn start_date(&self) -> Result<NaiveDate, CalendarError> {
        let (month, day) = self.ordinal.start_month_day();
        NaiveDate::from_ymd_opt(self.start_year, month, day)
            .ok_or(CalendarError::YearOutOfRange(self.start_year))
    }

    /// Last calendar day of the semester.
    pub fn end_date(&self) -> Result<NaiveDate, CalendarError> {
        let (month, day) = self.ordinal.end_month_day();
        NaiveDate::from_ymd_opt(self.start_year, month, day)
            .ok_or(CalendarError::YearOutOfRange(self.start_year))
    }

    /// Midnight at the start of the first day.
    pub fn starts_at(&self) -> Result<NaiveDateTime, CalendarError> {
        self.start_date()?
            .and_hms_opt(0, 0, 0)
            .ok_or(CalendarError::YearOutOfRange(self.start_year))
    }

    /// Last representable instant of the last day.
    pub fn ends_at(&self) -> Result<NaiveDateTime, CalendarError> {
        self.end_date()?
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or(CalendarError::YearOutOfRange(self.start_year))
    }
}

impl fmt::Debug for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemesterId({self})")
    }
}

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-S{}", self.start_year, self.ordinal.number())
    }
}

impl FromStr for SemesterId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidSemesterId(s.to_string());

        // rsplit so that negative years ("-12-S1") still split on the suffix
        let (year, ordinal) = s.trim().rsplit_once("-S").ok_or_else(invalid)?;
        let start_year = year.parse::<i32>().map_err(|_| invalid())?;
        let ordinal = ordinal
            .parse::<u8>()
            .ok()
            .and_then(SemesterOrdinal::from_number)
            .ok_or_else(invalid)?;

        Ok(Self::new(start_year, ordinal))
    }
}

impl Serialize for SemesterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemesterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
