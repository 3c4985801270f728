//! Conversions from domain errors to HTTP errors.

use uniconnect_core::AppError;
use uniconnect_models::CalendarError;

/// Every calendar error stems from caller input (an unrepresentable year, a
/// malformed id or a rejected range), so all map to 400.
pub fn calendar_error(err: CalendarError) -> AppError {
    AppError::bad_request(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_calendar_error_is_bad_request() {
        let err = calendar_error(CalendarError::YearOutOfRange(300_000));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.to_string().contains("300000"));
    }
}
