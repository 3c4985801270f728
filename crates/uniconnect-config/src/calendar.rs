//! Academic calendar configuration.
//!
//! # Configuration
//!
//! - `CALENDAR_TIMEZONE`: IANA timezone whose wall clock defines "today"
//!   (default: `Africa/Maputo`)
//! - `CALENDAR_MAX_YEAR_SPAN`: Largest `to - from` accepted when listing
//!   semesters across years (default: 50)

use chrono_tz::Tz;
use tracing::warn;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Africa::Maputo;
pub const DEFAULT_MAX_YEAR_SPAN: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Timezone used by the system clock.
    pub timezone: Tz,

    /// Maximum number of years (exclusive of the first) a single semester
    /// listing may cover.
    pub max_year_span: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            max_year_span: DEFAULT_MAX_YEAR_SPAN,
        }
    }
}

impl CalendarConfig {
    /// Creates a new `CalendarConfig` from environment variables.
    ///
    /// An unknown timezone name is logged and replaced by the default rather
    /// than aborting startup.
    #[must_use]
    pub fn from_env() -> Self {
        let timezone = match std::env::var("CALENDAR_TIMEZONE") {
            Ok(raw) => parse_timezone(&raw).unwrap_or_else(|| {
                warn!(
                    timezone = %raw,
                    fallback = %DEFAULT_TIMEZONE,
                    "Unknown CALENDAR_TIMEZONE, using fallback"
                );
                DEFAULT_TIMEZONE
            }),
            Err(_) => DEFAULT_TIMEZONE,
        };

        Self {
            timezone,
            max_year_span: std::env::var("CALENDAR_MAX_YEAR_SPAN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_YEAR_SPAN),
        }
    }
}

fn parse_timezone(raw: &str) -> Option<Tz> {
    raw.trim().parse::<Tz>().ok()
}
