//! Date presentation helpers.
//!
//! Formatting is kept behind [`DateFormatter`] so the calendar core never
//! depends on a particular locale. The default rendering follows the `pt-MZ`
//! long form used across the portal, e.g. `15 de março de 2025`.

use chrono::{Datelike, NaiveDate};
use std::fmt::Debug;

const PORTUGUESE_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Renders calendar dates for display.
pub trait DateFormatter: Send + Sync + Debug {
    fn format_date(&self, date: NaiveDate) -> String;

    fn format_date_range(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!("{} - {}", self.format_date(start), self.format_date(end))
    }
}

/// `pt-MZ` long date format: day, long month name, year.
#[derive(Debug, Clone, Copy, Default)]
pub struct MozambiqueDateFormatter;

impl DateFormatter for MozambiqueDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        let month = PORTUGUESE_MONTHS[date.month0() as usize];
        format!("{} de {} de {}", date.day(), month, date.year())
    }
}

pub fn format_mozambique_date(date: NaiveDate) -> String {
    MozambiqueDateFormatter.format_date(date)
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    MozambiqueDateFormatter.format_date_range(start, end)
}
