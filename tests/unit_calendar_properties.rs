use chrono::{Duration, NaiveDate, NaiveDateTime};

use uniconnect::modules::AcademicCalendarService;
use uniconnect::modules::semesters::model::{SemesterOrdinal, SemesterStatus};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Every six hours across two full calendar years.
fn instants() -> impl Iterator<Item = NaiveDateTime> {
    let start = midnight(2023, 1, 1);
    let end = midnight(2025, 1, 1);
    std::iter::successors(Some(start), |t| Some(*t + Duration::hours(6)))
        .take_while(move |t| *t < end)
}

#[test]
fn test_at_most_one_active_semester() {
    for now in instants() {
        let calendar = AcademicCalendarService::get_academic_calendar(now).unwrap();
        let active: Vec<_> = calendar.semesters().filter(|s| s.is_active).collect();

        assert!(active.len() <= 1, "{now}: {} active semesters", active.len());
        assert_eq!(
            active.first().map(|s| s.id),
            calendar.active_semester.as_ref().map(|s| s.id),
            "{now}"
        );
    }
}

#[test]
fn test_window_is_three_consecutive_years() {
    for now in instants() {
        let calendar = AcademicCalendarService::get_academic_calendar(now).unwrap();
        let current = calendar.current_year.start_year;

        assert_eq!(calendar.previous_year.start_year, current - 1);
        assert_eq!(calendar.next_year.start_year, current + 1);
        assert_eq!(current, AcademicCalendarService::anchor_year(now));
    }
}

#[test]
fn test_semester_invariants_hold_everywhere() {
    for now in instants() {
        let calendar = AcademicCalendarService::get_academic_calendar(now).unwrap();

        for year in calendar.years() {
            assert_eq!(year.end_year, year.start_year + 1);
            assert_eq!(year.semesters[0].ordinal, SemesterOrdinal::First);
            assert_eq!(year.semesters[1].ordinal, SemesterOrdinal::Second);
            assert!(year.semesters[0].end_date < year.semesters[1].start_date);

            for semester in &year.semesters {
                assert!(semester.start_date < semester.end_date);
                assert!((0.0..=100.0).contains(&semester.progress));
                assert_eq!(semester.is_active, semester.status == SemesterStatus::Active);
                assert_eq!(semester.academic_year, year.label);
                match semester.status {
                    SemesterStatus::Upcoming => assert_eq!(semester.progress, 0.0),
                    SemesterStatus::Completed => assert_eq!(semester.progress, 100.0),
                    SemesterStatus::Active => {}
                }
            }
        }
    }
}

#[test]
fn test_progress_and_status_are_monotonic() {
    let mut previous: Option<(f64, SemesterStatus)> = None;

    for now in instants() {
        let year = AcademicCalendarService::generate_academic_year(2024, now).unwrap();
        let first = &year.semesters[0];

        if let Some((progress, status)) = previous {
            assert!(first.progress >= progress, "{now}: progress went backwards");
            assert!(rank(first.status) >= rank(status), "{now}: status went backwards");
        }
        previous = Some((first.progress, first.status));
    }

    assert_eq!(previous.map(|(_, status)| status), Some(SemesterStatus::Completed));
}

#[test]
fn test_recess_means_no_active_semester() {
    for day in [midnight(2024, 12, 8), midnight(2024, 12, 31), midnight(2025, 1, 31)] {
        let calendar = AcademicCalendarService::get_academic_calendar(day).unwrap();
        assert!(calendar.is_vacation_period(), "{day}");
        assert!(!calendar.current_year.is_active, "{day}");
    }
}

#[test]
fn test_far_years_keep_their_shape() {
    let now = midnight(2025, 3, 15);

    for start_year in [-262_000, -500, 0, 1, 9999, 100_000, 262_000] {
        let year = AcademicCalendarService::generate_academic_year(start_year, now).unwrap();
        let [first, second] = &year.semesters;

        assert_eq!(year.end_year, start_year + 1);
        assert_eq!(year.label, format!("{}/{}", start_year, start_year + 1));
        assert!(first.start_date < first.end_date);
        assert!(second.start_date < second.end_date);
        assert!(first.end_date < second.start_date);
        assert_eq!(first.id.to_string(), format!("{start_year}-S1"));

        let expected = if start_year < 2025 {
            SemesterStatus::Completed
        } else {
            SemesterStatus::Upcoming
        };
        assert_eq!(first.status, expected, "{start_year}");
        assert_eq!(second.status, expected, "{start_year}");
        assert!(!year.is_active);
    }
}

fn rank(status: SemesterStatus) -> u8 {
    match status {
        SemesterStatus::Upcoming => 0,
        SemesterStatus::Active => 1,
        SemesterStatus::Completed => 2,
    }
}
