/// Errors produced by calendar computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year's semester boundaries cannot be represented as dates.
    #[error("academic year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    /// A semester id that is not of the form `YYYY-S1` / `YYYY-S2`.
    #[error("invalid semester id '{0}', expected YYYY-S1 or YYYY-S2")]
    InvalidSemesterId(String),

    /// A year range rejected by a caller-imposed limit.
    #[error("invalid year range {from}..={to}: {reason}")]
    InvalidYearRange { from: i32, to: i32, reason: String },
}
