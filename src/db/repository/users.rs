use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use crate::db::{format_timestamp, parse_timestamp, StoreError};
use crate::models::{CountFilter, User};

pub fn insert_user(conn: &Connection, user: &User) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO users (id, full_name, email, phone, identifier, sex, status, role_id,
         created_at, last_login_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            user.id.to_string(),
            user.full_name,
            user.email,
            user.phone,
            user.identifier,
            user.sex.map(|s| s.as_str()),
            user.status.map(|s| s.as_str()),
            user.role_id,
            format_timestamp(&user.created_at),
            user.last_login_at.as_ref().map(format_timestamp),
        ],
    )?;
    Ok(())
}

pub fn count_users(conn: &Connection, filter: &CountFilter) -> Result<u64, StoreError> {
    let mut sql = String::from("SELECT COUNT(*) FROM users WHERE 1=1");
    let mut values: Vec<Value> = Vec::new();

    if let Some(status) = filter.status {
        values.push(Value::Text(status.as_str().to_string()));
        sql.push_str(&format!(" AND status = ?{}", values.len()));
    }
    if let Some(role_id) = filter.role_id {
        values.push(Value::Integer(role_id));
        sql.push_str(&format!(" AND role_id = ?{}", values.len()));
    }
    if let Some(from) = filter.created_from {
        values.push(Value::Text(format_timestamp(&from)));
        sql.push_str(&format!(" AND created_at >= ?{}", values.len()));
    }
    if let Some(to) = filter.created_to {
        values.push(Value::Text(format_timestamp(&to)));
        sql.push_str(&format!(" AND created_at <= ?{}", values.len()));
    }

    let count: i64 = conn.query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

pub fn select_created_at(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT created_at FROM users
         WHERE created_at >= ?1 AND created_at <= ?2
         ORDER BY created_at ASC",
    )?;
    let rows = stmt.query_map(
        params![format_timestamp(from), format_timestamp(to)],
        |row| row.get::<_, String>(0),
    )?;

    let mut out = Vec::new();
    for raw in rows {
        let raw = raw?;
        let ts = parse_timestamp(&raw)
            .ok_or_else(|| StoreError::Malformed(format!("users.created_at = {raw:?}")))?;
        out.push(ts);
    }
    Ok(out)
}
