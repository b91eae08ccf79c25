use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::db::{parse_timestamp, StoreError};
use crate::error::AdminError;
use crate::models::enums::RecencyBucket;
use crate::models::DirectoryRow;

/// Map one raw record into a [`DirectoryRow`].
///
/// Each field falls back to `None` on its own when missing or of the wrong
/// JSON type. Never fails.
pub fn map_directory_row(record: &Value) -> DirectoryRow {
    DirectoryRow {
        id: text(record, "id"),
        full_name: text(record, "full_name"),
        email: text(record, "email"),
        phone: text(record, "phone"),
        identifier: text(record, "identifier"),
        sex: text(record, "sex"),
        status: text(record, "status"),
        role_id: record.get("role_id").and_then(Value::as_i64),
        role_name: text(record, "role_name"),
        created_at: text(record, "created_at"),
        last_login_at: text(record, "last_login_at"),
    }
}

fn text(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse an `admin_list_users` response. The envelope must be an array;
/// its elements go through [`map_directory_row`].
pub fn parse_directory_rows(response: &Value) -> Result<Vec<DirectoryRow>, AdminError> {
    match response {
        Value::Array(items) => Ok(items.iter().map(map_directory_row).collect()),
        other => Err(AdminError::DataAccess {
            op: "directory.parse".into(),
            source: StoreError::Malformed(format!(
                "expected an array of records, got {}",
                json_kind(other)
            )),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether a row's creation time falls in `bucket` relative to `now`.
/// Rows without a parseable `created_at` match no bucket.
pub fn in_recency_bucket(row: &DirectoryRow, bucket: RecencyBucket, now: DateTime<Utc>) -> bool {
    let Some(created) = row.created_at.as_deref().and_then(parse_timestamp) else {
        return false;
    };
    let age = now - created;
    // Rows stamped after `now` belong to no bucket.
    if age < Duration::zero() {
        return false;
    }
    match bucket {
        RecencyBucket::Last24h => age <= Duration::hours(24),
        RecencyBucket::Last7d => age <= Duration::days(7),
        RecencyBucket::Last30d => age <= Duration::days(30),
        RecencyBucket::OlderThan30d => age > Duration::days(30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn missing_fields_become_null() {
        let row = map_directory_row(&json!({ "id": "u1", "email": "a@b.cl" }));
        assert_eq!(row.id.as_deref(), Some("u1"));
        assert_eq!(row.email.as_deref(), Some("a@b.cl"));
        assert_eq!(row.full_name, None);
        assert_eq!(row.role_id, None);

        let json = serde_json::to_value(&row).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert!(obj["last_login_at"].is_null());
    }

    #[test]
    fn mistyped_fields_pass_through_as_null() {
        let row = map_directory_row(&json!({ "id": 7, "role_id": "2", "sex": ["otro"] }));
        assert_eq!(row, DirectoryRow::default());
    }

    #[test]
    fn non_object_record_maps_to_all_null() {
        assert_eq!(map_directory_row(&json!("garbage")), DirectoryRow::default());
        assert_eq!(map_directory_row(&Value::Null), DirectoryRow::default());
    }

    #[test]
    fn parse_requires_array_envelope() {
        let rows = parse_directory_rows(&json!([{ "id": "a" }, 3])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], DirectoryRow::default());

        let err = parse_directory_rows(&json!({ "rows": [] })).unwrap_err();
        assert_eq!(err.code(), "DATA_ACCESS");
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn recency_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let row = |days: i64| DirectoryRow {
            created_at: Some((now - Duration::days(days)).to_rfc3339()),
            ..Default::default()
        };
        assert!(in_recency_bucket(&row(0), RecencyBucket::Last24h, now));
        assert!(!in_recency_bucket(&row(2), RecencyBucket::Last24h, now));
        assert!(in_recency_bucket(&row(2), RecencyBucket::Last7d, now));
        assert!(in_recency_bucket(&row(30), RecencyBucket::Last30d, now));
        assert!(!in_recency_bucket(&row(30), RecencyBucket::OlderThan30d, now));
        assert!(in_recency_bucket(&row(31), RecencyBucket::OlderThan30d, now));
        assert!(!in_recency_bucket(&DirectoryRow::default(), RecencyBucket::OlderThan30d, now));
    }

    #[test]
    fn future_dated_rows_match_no_bucket() {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let row = DirectoryRow {
            created_at: Some((now + Duration::hours(3)).to_rfc3339()),
            ..Default::default()
        };
        for bucket in RecencyBucket::ALL {
            assert!(!in_recency_bucket(&row, *bucket, now), "{bucket} matched");
        }

        let exactly_now = DirectoryRow {
            created_at: Some(now.to_rfc3339()),
            ..Default::default()
        };
        assert!(in_recency_bucket(&exactly_now, RecencyBucket::Last24h, now));
    }
}
