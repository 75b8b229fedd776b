//! Shared helper utilities for factory methods.

use chrono::{DateTime, TimeZone, Utc};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a whole-second UTC timestamp.
///
/// Factories use whole seconds so values compare equal after a round trip through
/// SQLite's text timestamp storage.
///
/// # Arguments
/// - `secs` - Seconds since the Unix epoch
///
/// # Returns
/// - `DateTime<Utc>` - The timestamp, or the epoch if `secs` is out of range
pub fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
