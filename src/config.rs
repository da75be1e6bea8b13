use crate::consts::TIME_ZONE_ENV;
use jiff::tz::TimeZone;
use search_syntax::DateContext;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Zone a civil date such as `after:2024-01-31` is placed in.
    pub time_zone: TimeZone,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            time_zone: TimeZone::UTC,
        }
    }
}

impl CompilerConfig {
    /// Reads the time zone from `MSEARCH_TZ`, falling back to UTC.
    pub fn from_env() -> Self {
        match std::env::var(TIME_ZONE_ENV) {
            Ok(name) => Self::with_time_zone_name(&name),
            Err(_) => Self::default(),
        }
    }

    pub fn with_time_zone_name(name: &str) -> Self {
        match TimeZone::get(name) {
            Ok(time_zone) => Self { time_zone },
            Err(error) => {
                warn!(?error, "Unknown time zone {name:?}, using UTC");
                Self::default()
            }
        }
    }

    pub(crate) fn date_context(&self) -> DateContext {
        DateContext::new(self.time_zone.clone())
    }
}
