use std::sync::Arc;

use chrono::NaiveDateTime;
use uniconnect_config::{CalendarConfig, CorsConfig};
use uniconnect_core::{Clock, SystemClock};

use crate::utils::date_format::{DateFormatter, MozambiqueDateFormatter};

#[derive(Clone, Debug)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub date_formatter: Arc<dyn DateFormatter>,
    pub cors_config: CorsConfig,
    pub calendar_config: CalendarConfig,
}

impl AppState {
    /// State with default configuration around the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            date_formatter: Arc::new(MozambiqueDateFormatter),
            cors_config: CorsConfig::default(),
            calendar_config: CalendarConfig::default(),
        }
    }

    /// The instant a request is evaluated at: the explicit override if one
    /// was given, otherwise a single reading of the clock.
    pub fn reference_time(&self, at: Option<NaiveDateTime>) -> NaiveDateTime {
        at.unwrap_or_else(|| self.clock.now())
    }
}

pub fn init_app_state() -> AppState {
    let calendar_config = CalendarConfig::from_env();

    AppState {
        clock: Arc::new(SystemClock::new(calendar_config.timezone)),
        date_formatter: Arc::new(MozambiqueDateFormatter),
        cors_config: CorsConfig::from_env(),
        calendar_config,
    }
}
