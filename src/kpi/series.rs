use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::DailySignup;

/// Zero-filled daily counts from `start`'s UTC date to `end`'s UTC date,
/// both inclusive. Timestamps outside the range are ignored.
pub fn build_daily_series(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    timestamps: &[DateTime<Utc>],
) -> Vec<DailySignup> {
    let first = start.date_naive();
    let last = end.date_naive();

    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for ts in timestamps.iter().filter(|ts| **ts >= start && **ts <= end) {
        *buckets.entry(ts.date_naive()).or_insert(0) += 1;
    }

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| DailySignup {
            day,
            count: buckets.get(&day).copied().unwrap_or(0),
        })
        .collect()
}
