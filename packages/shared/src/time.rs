//! Wall-clock helpers shared across the workspace.

use chrono::{DateTime, Utc};

/// Get the current instant in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp as a short clock label (HH:MM:SS, UTC) for terminal output.
pub fn clock_label(at: &DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}
