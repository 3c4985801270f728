//! Semester domain models.
//!
//! A [`Semester`] is a snapshot of one semester evaluated against a single
//! reference instant. Its `status`, `progress` and `is_active` are derived at
//! evaluation time and never updated afterwards; evaluating again at a later
//! instant produces a new snapshot.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::CalendarError;
use crate::ids::{SemesterId, SemesterOrdinal};

/// Temporal status of a semester relative to the reference instant.
///
/// Moves strictly forward: `upcoming`, then `active`, then `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SemesterStatus {
    Upcoming,
    Active,
    Completed,
}

impl SemesterStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            SemesterStatus::Upcoming => "upcoming",
            SemesterStatus::Active => "active",
            SemesterStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SemesterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One semester of an academic year, evaluated at a reference instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Semester {
    /// Stable identifier, e.g. "2025-S1"
    #[schema(value_type = String, example = "2025-S1")]
    pub id: SemesterId,
    /// Position within the academic year
    pub ordinal: SemesterOrdinal,
    /// Display label, e.g. "1st Semester"
    pub name: String,
    /// Portuguese display label, e.g. "1º Semestre"
    pub localized_name: String,
    /// First day of the semester (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the semester (inclusive)
    pub end_date: NaiveDate,
    /// Label of the owning academic year, e.g. "2025/2026"
    pub academic_year: String,
    /// Status at the reference instant
    pub status: SemesterStatus,
    /// Elapsed share of the semester in percent, within [0, 100]
    pub progress: f64,
    /// True iff `status` is `active`
    pub is_active: bool,
}

impl Semester {
    /// Midnight at the start of `start_date`.
    pub fn starts_at(&self) -> Result<NaiveDateTime, CalendarError> {
        self.id.starts_at()
    }

    /// Last instant of `end_date`.
    pub fn ends_at(&self) -> Result<NaiveDateTime, CalendarError> {
        self.id.ends_at()
    }

    /// Closed-interval membership of a calendar date.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A semester together with the day counts shown on dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SemesterSummary {
    #[serde(flatten)]
    pub semester: Semester,
    /// Whole days left until the semester closes, never negative
    pub days_remaining: i64,
    /// Whole days elapsed since the semester opened, never negative
    pub days_since_start: i64,
    /// Length of the semester in days
    pub duration_days: i64,
    /// Human-readable date range, e.g. "1 de fevereiro de 2025 - 31 de julho de 2025"
    pub date_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: SemesterStatus) -> Semester {
        let id = SemesterId::new(2025, SemesterOrdinal::First);
        Semester {
            id,
            ordinal: id.ordinal,
            name: id.ordinal.name().to_string(),
            localized_name: id.ordinal.localized_name().to_string(),
            start_date: id.start_date().unwrap(),
            end_date: id.end_date().unwrap(),
            academic_year: "2025/2026".to_string(),
            status,
            progress: 0.0,
            is_active: status == SemesterStatus::Active,
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SemesterStatus::Upcoming).unwrap(),
            r#""upcoming""#
        );
        assert_eq!(SemesterStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let semester = sample(SemesterStatus::Upcoming);
        let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        assert!(semester.contains_date(day(2, 1)));
        assert!(semester.contains_date(day(7, 31)));
        assert!(!semester.contains_date(day(1, 31)));
        assert!(!semester.contains_date(day(8, 1)));
    }

    #[test]
    fn test_semester_json_shape() {
        let value = serde_json::to_value(sample(SemesterStatus::Active)).unwrap();
        assert_eq!(value["id"], "2025-S1");
        assert_eq!(value["ordinal"], "first");
        assert_eq!(value["start_date"], "2025-02-01");
        assert_eq!(value["end_date"], "2025-07-31");
        assert_eq!(value["status"], "active");
        assert_eq!(value["is_active"], true);
    }

    #[test]
    fn test_summary_flattens_semester() {
        let summary = SemesterSummary {
            semester: sample(SemesterStatus::Completed),
            days_remaining: 0,
            days_since_start: 200,
            duration_days: 181,
            date_range: "x - y".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["id"], "2025-S1");
        assert_eq!(value["duration_days"], 181);
        assert!(value.get("semester").is_none());
    }
}
