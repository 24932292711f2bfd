use chrono::{DateTime, NaiveDateTime, Utc};

/// Text layout used for every timestamp column in the content store.
///
/// Values are always UTC, so lexical order matches chronological order and
/// `created < ?` comparisons work directly on the stored text.
pub const STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_store(ts: &DateTime<Utc>) -> String {
    ts.format(STORE_FORMAT).to_string()
}

pub fn from_store(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, STORE_FORMAT)
        .ok()
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}
