pub mod chunking;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod session;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_unix_millis() -> i64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    (nanos / 1_000_000) as i64
}
