//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as a short `en-US` date (`M/D/YYYY`), in UTC.
#[must_use]
pub fn short_date(ts: &Timestamp) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}
