use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tracing::instrument;

use crate::modules::academic_calendar::model::CalendarError;
use crate::modules::semesters::model::{Semester, SemesterSummary};
use crate::utils::date_format::DateFormatter;

const MILLIS_PER_DAY: i64 = 86_400_000;

pub struct SemesterService;

impl SemesterService {
    /// Whole days until the semester closes, rounded up; 0 once it has closed.
    pub fn days_remaining(semester: &Semester, now: NaiveDateTime) -> Result<i64, CalendarError> {
        let remaining = semester.ends_at()? - now;
        Ok(ceil_days(remaining).max(0))
    }

    /// Whole days since the semester opened, rounded down; 0 before it opens.
    pub fn days_since_start(
        semester: &Semester,
        now: NaiveDateTime,
    ) -> Result<i64, CalendarError> {
        let elapsed = now - semester.starts_at()?;
        Ok(floor_days(elapsed).max(0))
    }

    /// Length of the semester in days, independent of "now". Both the first
    /// and the last day count, so Feb 1 to Jul 31 is 181 days, not 180.
    pub fn semester_duration(semester: &Semester) -> Result<i64, CalendarError> {
        Ok(ceil_days(semester.ends_at()? - semester.starts_at()?))
    }

    pub fn is_date_in_semester(date: NaiveDate, semester: &Semester) -> bool {
        semester.contains_date(date)
    }

    /// Bundle a semester with its day counts and formatted date range.
    #[instrument(skip(formatter), fields(semester_id = %semester.id))]
    pub fn summarize(
        semester: Semester,
        now: NaiveDateTime,
        formatter: &dyn DateFormatter,
    ) -> Result<SemesterSummary, CalendarError> {
        let days_remaining = Self::days_remaining(&semester, now)?;
        let days_since_start = Self::days_since_start(&semester, now)?;
        let duration_days = Self::semester_duration(&semester)?;
        let date_range = formatter.format_date_range(semester.start_date, semester.end_date);

        Ok(SemesterSummary {
            semester,
            days_remaining,
            days_since_start,
            duration_days,
            date_range,
        })
    }

    /// Reject year ranges that are inverted or wider than `max_span` years.
    pub fn validate_year_range(from: i32, to: i32, max_span: u32) -> Result<(), CalendarError> {
        if from > to {
            return Err(CalendarError::InvalidYearRange {
                from,
                to,
                reason: "from must not exceed to".to_string(),
            });
        }
        if i64::from(to) - i64::from(from) > i64::from(max_span) {
            return Err(CalendarError::InvalidYearRange {
                from,
                to,
                reason: format!("span may not exceed {max_span} years"),
            });
        }
        Ok(())
    }
}

fn ceil_days(delta: TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    if millis > 0 {
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    } else {
        // integer division truncates toward zero, which is ceil for negatives
        millis / MILLIS_PER_DAY
    }
}

fn floor_days(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::academic_calendar::service::AcademicCalendarService;
    use crate::modules::semesters::model::{SemesterId, SemesterOrdinal};
    use crate::utils::date_format::MozambiqueDateFormatter;
    use chrono::Duration;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn semester(year: i32, ordinal: SemesterOrdinal, now: NaiveDateTime) -> Semester {
        AcademicCalendarService::evaluate_semester(SemesterId::new(year, ordinal), now).unwrap()
    }

    #[test]
    fn test_semester_duration() {
        let now = at(2025, 3, 15);
        let first = semester(2025, SemesterOrdinal::First, now);
        let second = semester(2025, SemesterOrdinal::Second, now);
        assert_eq!(SemesterService::semester_duration(&first).unwrap(), 181);
        assert_eq!(SemesterService::semester_duration(&second).unwrap(), 129);

        let leap_first = semester(2024, SemesterOrdinal::First, now);
        assert_eq!(SemesterService::semester_duration(&leap_first).unwrap(), 182);
    }

    #[test]
    fn test_semester_duration_counts_last_day() {
        let now = at(2025, 3, 15);
        for year in [2023, 2024, 2025] {
            for ordinal in SemesterOrdinal::ALL {
                let s = semester(year, ordinal, now);
                let calendar_days = (s.end_date - s.start_date).num_days();
                assert_eq!(SemesterService::semester_duration(&s).unwrap(), calendar_days + 1);
            }
        }
    }

    #[test]
    fn test_days_remaining() {
        let first = semester(2025, SemesterOrdinal::First, at(2025, 3, 15));

        // Mar 15 00:00 to the close of Jul 31
        assert_eq!(SemesterService::days_remaining(&first, at(2025, 3, 15)).unwrap(), 139);
        assert_eq!(SemesterService::days_remaining(&first, at(2025, 7, 31)).unwrap(), 1);
        assert_eq!(
            SemesterService::days_remaining(&first, first.ends_at().unwrap()).unwrap(),
            0
        );
        assert_eq!(SemesterService::days_remaining(&first, at(2025, 9, 1)).unwrap(), 0);
    }

    #[test]
    fn test_days_remaining_before_start_counts_whole_semester() {
        let first = semester(2025, SemesterOrdinal::First, at(2025, 1, 1));
        assert_eq!(SemesterService::days_remaining(&first, at(2025, 2, 1)).unwrap(), 181);
    }

    #[test]
    fn test_days_since_start() {
        let first = semester(2025, SemesterOrdinal::First, at(2025, 3, 15));

        assert_eq!(SemesterService::days_since_start(&first, at(2025, 1, 1)).unwrap(), 0);
        assert_eq!(SemesterService::days_since_start(&first, at(2025, 2, 1)).unwrap(), 0);
        assert_eq!(
            SemesterService::days_since_start(&first, at(2025, 2, 1) + Duration::hours(23))
                .unwrap(),
            0
        );
        assert_eq!(SemesterService::days_since_start(&first, at(2025, 3, 15)).unwrap(), 42);
    }

    #[test]
    fn test_is_date_in_semester() {
        let second = semester(2025, SemesterOrdinal::Second, at(2025, 3, 15));
        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();

        assert!(SemesterService::is_date_in_semester(date(8, 1), &second));
        assert!(SemesterService::is_date_in_semester(date(12, 7), &second));
        assert!(!SemesterService::is_date_in_semester(date(12, 8), &second));
        assert!(!SemesterService::is_date_in_semester(date(7, 31), &second));
    }

    #[test]
    fn test_summarize() {
        let now = at(2025, 3, 15);
        let first = semester(2025, SemesterOrdinal::First, now);
        let summary = SemesterService::summarize(first, now, &MozambiqueDateFormatter).unwrap();

        assert_eq!(summary.semester.id.to_string(), "2025-S1");
        assert_eq!(summary.days_remaining, 139);
        assert_eq!(summary.days_since_start, 42);
        assert_eq!(summary.duration_days, 181);
        assert_eq!(
            summary.date_range,
            "1 de fevereiro de 2025 - 31 de julho de 2025"
        );
    }

    #[test]
    fn test_validate_year_range() {
        assert!(SemesterService::validate_year_range(2023, 2025, 50).is_ok());
        assert!(SemesterService::validate_year_range(2025, 2025, 0).is_ok());
        assert!(SemesterService::validate_year_range(2000, 2050, 50).is_ok());

        assert!(matches!(
            SemesterService::validate_year_range(2025, 2023, 50),
            Err(CalendarError::InvalidYearRange { .. })
        ));
        assert!(matches!(
            SemesterService::validate_year_range(2000, 2051, 50),
            Err(CalendarError::InvalidYearRange { .. })
        ));
    }

    #[test]
    fn test_day_rounding_helpers() {
        assert_eq!(ceil_days(Duration::hours(1)), 1);
        assert_eq!(ceil_days(Duration::days(2)), 2);
        assert_eq!(ceil_days(Duration::hours(-30)), -1);
        assert_eq!(floor_days(Duration::hours(47)), 1);
        assert_eq!(floor_days(Duration::hours(-1)), -1);
    }
}
