// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use chrono_tz::Tz;
use daytrack_core::llm::LlmProvider;
use daytrack_core::{DayError, DayRange, SuggestionClient};
use daytrack_db::Database;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    pub db: Database,
    pub suggestions: SuggestionClient,
    /// Timezone that "today" and `date` parameters are resolved in.
    pub timezone: Tz,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, provider: Arc<dyn LlmProvider>, timezone: Tz) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            db,
            suggestions: SuggestionClient::new(provider),
            timezone,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The current calendar day in the configured timezone.
    pub fn today(&self) -> Result<DayRange, DayError> {
        DayRange::today(&self.timezone)
    }

    /// Resolve a `YYYY-MM-DD` parameter in the configured timezone.
    pub fn day(&self, raw: Option<&str>) -> Result<DayRange, DayError> {
        DayRange::parse(raw, &self.timezone)
    }
}
