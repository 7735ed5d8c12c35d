use chrono::Utc;

/// Whole seconds since the Unix epoch. Used for snapshot file names.
pub fn unix_ts() -> i64 {
    Utc::now().timestamp()
}
