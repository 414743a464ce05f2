//! Time related utils.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// TimeSource decides which unix timestamp goes into `oauth_timestamp`.
///
/// The default is [`TimeSource::Unset`], which signs every request with timestamp `0`.
/// Servers will reject such requests; configure [`TimeSource::System`] or a callback in
/// any deployment that talks to a real server.
#[derive(Clone, Default)]
pub enum TimeSource {
    /// No clock is available, timestamps are always `0`.
    #[default]
    Unset,
    /// Use the system clock.
    System,
    /// Ask the callback for unix epoch seconds.
    Callback(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl TimeSource {
    /// Build a time source from a callback returning unix epoch seconds.
    pub fn callback(f: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        TimeSource::Callback(Arc::new(f))
    }

    /// Build a time source that always returns the same timestamp.
    pub fn fixed(timestamp: u64) -> Self {
        Self::callback(move || timestamp)
    }

    /// Returns `true` if a clock is configured.
    pub fn is_set(&self) -> bool {
        !matches!(self, TimeSource::Unset)
    }

    /// Current unix timestamp in seconds.
    pub fn timestamp(&self) -> u64 {
        match self {
            TimeSource::Unset => 0,
            // Clocks before 1970 are clamped.
            TimeSource::System => u64::try_from(now().timestamp()).unwrap_or(0),
            TimeSource::Callback(f) => f(),
        }
    }
}

impl Debug for TimeSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSource::Unset => f.write_str("Unset"),
            TimeSource::System => f.write_str("System"),
            TimeSource::Callback(_) => f.write_str("Callback"),
        }
    }
}
