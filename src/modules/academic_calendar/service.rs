use chrono::{Datelike, NaiveDateTime};
use tracing::instrument;

use uniconnect_models::ids::{SemesterId, SemesterOrdinal};
use uniconnect_models::semesters::{Semester, SemesterStatus};

use crate::modules::academic_calendar::model::{AcademicCalendar, AcademicYear, CalendarError};

pub struct AcademicCalendarService;

impl AcademicCalendarService {
    /// Start year of the academic year that `now` belongs to.
    ///
    /// January still belongs to the previous academic year, whose second
    /// semester closed in December.
    pub fn anchor_year(now: NaiveDateTime) -> i32 {
        if now.month() == 1 {
            now.year() - 1
        } else {
            now.year()
        }
    }

    /// Evaluate a single semester at `now`.
    ///
    /// The semester spans `[start_date 00:00, end_date 23:59:59.999999999]`.
    /// Before it opens it is upcoming with 0% progress, after it closes it is
    /// completed with 100%, and in between progress grows linearly.
    pub fn evaluate_semester(id: SemesterId, now: NaiveDateTime) -> Result<Semester, CalendarError> {
        let starts_at = id.starts_at()?;
        let ends_at = id.ends_at()?;

        let (status, progress) = if now < starts_at {
            (SemesterStatus::Upcoming, 0.0)
        } else if now > ends_at {
            (SemesterStatus::Completed, 100.0)
        } else {
            (
                SemesterStatus::Active,
                elapsed_percent(starts_at, ends_at, now),
            )
        };

        Ok(Semester {
            id,
            ordinal: id.ordinal,
            name: id.ordinal.name().to_string(),
            localized_name: id.ordinal.localized_name().to_string(),
            start_date: id.start_date()?,
            end_date: id.end_date()?,
            academic_year: AcademicYear::label_for(id.start_year),
            status,
            progress,
            is_active: status == SemesterStatus::Active,
        })
    }

    /// Build the academic year starting in `start_year`, evaluated at `now`.
    ///
    /// Any year chrono can represent is accepted, including far past and
    /// future ones used for previews.
    #[instrument(level = "debug")]
    pub fn generate_academic_year(
        start_year: i32,
        now: NaiveDateTime,
    ) -> Result<AcademicYear, CalendarError> {
        let first = Self::evaluate_semester(SemesterId::new(start_year, SemesterOrdinal::First), now)?;
        let second =
            Self::evaluate_semester(SemesterId::new(start_year, SemesterOrdinal::Second), now)?;

        // Implied by the per-semester flags under closed intervals; kept so the
        // year flag also holds at the exact boundary instants.
        let within_year = now >= first.starts_at()? && now <= second.ends_at()?;
        let is_active = first.is_active || second.is_active || within_year;

        Ok(AcademicYear {
            label: AcademicYear::label_for(start_year),
            start_year,
            end_year: start_year + 1,
            semesters: [first, second],
            is_active,
        })
    }

    /// Previous, current and next academic years around `now`.
    #[instrument]
    pub fn get_academic_calendar(now: NaiveDateTime) -> Result<AcademicCalendar, CalendarError> {
        let anchor = Self::anchor_year(now);

        let previous_year = Self::generate_academic_year(anchor - 1, now)?;
        let current_year = Self::generate_academic_year(anchor, now)?;
        let next_year = Self::generate_academic_year(anchor + 1, now)?;
        let active_semester = current_year.active_semester().cloned();

        Ok(AcademicCalendar {
            reference_time: now,
            previous_year,
            current_year,
            next_year,
            active_semester,
        })
    }

    /// The semester in session at `now`, or `None` during the recess.
    pub fn get_active_semester(now: NaiveDateTime) -> Result<Option<Semester>, CalendarError> {
        Ok(Self::get_academic_calendar(now)?.active_semester)
    }

    pub fn get_current_academic_year(now: NaiveDateTime) -> Result<AcademicYear, CalendarError> {
        Ok(Self::get_academic_calendar(now)?.current_year)
    }

    /// Look a semester up within the previous/current/next year window.
    pub fn find_semester(
        id: SemesterId,
        now: NaiveDateTime,
    ) -> Result<Option<Semester>, CalendarError> {
        let calendar = Self::get_academic_calendar(now)?;
        Ok(calendar.semesters().find(|s| s.id == id).cloned())
    }

    /// Like [`Self::find_semester`] but takes the textual id; malformed ids
    /// are simply not found.
    #[instrument]
    pub fn get_semester_by_id(
        id: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Semester>, CalendarError> {
        match id.parse::<SemesterId>() {
            Ok(id) => Self::find_semester(id, now),
            Err(_) => Ok(None),
        }
    }

    /// Every semester of the academic years `start_year..=end_year`, most
    /// recent first. An inverted range yields an empty list.
    #[instrument]
    pub fn get_semesters_for_years(
        start_year: i32,
        end_year: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<Semester>, CalendarError> {
        let mut semesters = Vec::new();
        for year in start_year..=end_year {
            let academic_year = Self::generate_academic_year(year, now)?;
            semesters.extend(academic_year.semesters);
        }

        semesters.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(semesters)
    }
}

/// Linear share of `[start, end]` elapsed at `now`, in percent, clamped.
fn elapsed_percent(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 100.0;
    }
    let elapsed = (now - start).num_milliseconds();
    (elapsed as f64 / total as f64).clamp(0.0, 1.0) * 100.0
}
