//! Display formatting helpers.
//!
//! Keeps user-facing value formatting in one place so tables and
//! confirmation messages present timestamps identically.

use crate::libs::task::TaskStatus;
use chrono::NaiveDateTime;

/// Formats a creation timestamp for display (e.g. "Jan 15, 2025 14:30").
///
/// # Examples
///
/// ```rust
/// use taskpad::libs::formatter::format_created;
/// use chrono::NaiveDate;
///
/// let created = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(14, 30, 0).unwrap();
/// assert_eq!(format_created(&created), "Jan 15, 2025 14:30");
/// ```
pub fn format_created(created_at: &NaiveDateTime) -> String {
    created_at.format("%b %d, %Y %H:%M").to_string()
}

/// Formats a status table cell; completed tasks get a check mark.
pub fn format_status(status: &TaskStatus) -> String {
    match status {
        TaskStatus::Complete => format!("✓ {}", status),
        TaskStatus::Pending => status.to_string(),
    }
}
