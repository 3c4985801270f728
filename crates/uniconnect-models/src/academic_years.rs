//! Academic year and calendar models.
//!
//! An academic year is labelled across two calendar years ("2025/2026") even
//! though both of its semesters fall inside the first one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::semesters::Semester;

/// One academic year with its two semesters in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AcademicYear {
    /// Label spanning two calendar years, e.g. "2025/2026"
    pub label: String,
    pub start_year: i32,
    /// Always `start_year + 1`
    pub end_year: i32,
    /// Exactly two semesters, first then second
    #[schema(value_type = Vec<Semester>)]
    pub semesters: [Semester; 2],
    /// Whether the reference instant falls inside this academic year
    pub is_active: bool,
}

impl AcademicYear {
    pub fn label_for(start_year: i32) -> String {
        format!("{}/{}", start_year, i64::from(start_year) + 1)
    }

    pub fn first_semester(&self) -> &Semester {
        &self.semesters[0]
    }

    pub fn second_semester(&self) -> &Semester {
        &self.semesters[1]
    }

    /// The first semester flagged active, if any.
    pub fn active_semester(&self) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.is_active)
    }
}

/// The previous, current and next academic years around a reference instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AcademicCalendar {
    /// The instant all statuses were evaluated at
    pub reference_time: NaiveDateTime,
    pub previous_year: AcademicYear,
    pub current_year: AcademicYear,
    pub next_year: AcademicYear,
    /// Active semester of the current year; `null` during the recess
    pub active_semester: Option<Semester>,
}

impl AcademicCalendar {
    pub fn years(&self) -> [&AcademicYear; 3] {
        [&self.previous_year, &self.current_year, &self.next_year]
    }

    /// All six semesters, oldest first.
    pub fn semesters(&self) -> impl Iterator<Item = &Semester> {
        self.years().into_iter().flat_map(|year| year.semesters.iter())
    }

    /// True during the recess between the end of one academic year and the
    /// start of the next.
    pub fn is_vacation_period(&self) -> bool {
        self.active_semester.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for() {
        assert_eq!(AcademicYear::label_for(2025), "2025/2026");
        assert_eq!(AcademicYear::label_for(-1), "-1/0");
        assert_eq!(
            AcademicYear::label_for(i32::MAX),
            format!("{}/{}", i32::MAX, i64::from(i32::MAX) + 1)
        );
    }
}
