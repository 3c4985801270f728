//! Plain-text rendering of calendar data for the `uniconnect-cli` binary.

use std::fmt::Write as _;

use crate::modules::academic_calendar::model::{AcademicCalendar, AcademicYear};
use crate::modules::semesters::model::{Semester, SemesterSummary};
use crate::utils::date_format::DateFormatter;

pub fn render_semester_line(semester: &Semester, formatter: &dyn DateFormatter) -> String {
    format!(
        "{:<8} {:<12} {:<10} {:>6.1}%  {}",
        semester.id.to_string(),
        semester.name,
        semester.status.as_str(),
        semester.progress,
        formatter.format_date_range(semester.start_date, semester.end_date)
    )
}

fn render_year(out: &mut String, heading: &str, year: &AcademicYear, formatter: &dyn DateFormatter) {
    let marker = if year.is_active { " (in session)" } else { "" };
    let _ = writeln!(out, "{heading}: {}{marker}", year.label);
    for semester in &year.semesters {
        let _ = writeln!(out, "  {}", render_semester_line(semester, formatter));
    }
}

pub fn render_calendar(calendar: &AcademicCalendar, formatter: &dyn DateFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reference time: {}", calendar.reference_time);
    render_year(&mut out, "Previous year", &calendar.previous_year, formatter);
    render_year(&mut out, "Current year", &calendar.current_year, formatter);
    render_year(&mut out, "Next year", &calendar.next_year, formatter);

    match &calendar.active_semester {
        Some(semester) => {
            let _ = writeln!(
                out,
                "Active semester: {} ({}, {:.1}% complete)",
                semester.id, semester.localized_name, semester.progress
            );
        }
        None => {
            let _ = writeln!(out, "Active semester: none (vacation period)");
        }
    }
    out
}

pub fn render_semester_list(semesters: &[Semester], formatter: &dyn DateFormatter) -> String {
    let mut out = String::new();
    for semester in semesters {
        let _ = writeln!(out, "{}", render_semester_line(semester, formatter));
    }
    out
}

pub fn render_summary(summary: &SemesterSummary) -> String {
    let semester = &summary.semester;
    let mut out = String::new();
    let _ = writeln!(out, "{} - {} / {}", semester.id, semester.name, semester.localized_name);
    let _ = writeln!(out, "Academic year:  {}", semester.academic_year);
    let _ = writeln!(out, "Dates:          {}", summary.date_range);
    let _ = writeln!(out, "Status:         {}", semester.status);
    let _ = writeln!(out, "Progress:       {:.1}%", semester.progress);
    let _ = writeln!(out, "Days elapsed:   {}", summary.days_since_start);
    let _ = writeln!(out, "Days remaining: {}", summary.days_remaining);
    let _ = writeln!(out, "Duration:       {} days", summary.duration_days);
    out
}
