use std::str::FromStr;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde_json::{json, Value as Json};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::DirectoryOrder;
use crate::models::DirectoryRpcParams;
use crate::validation::normalize_identifier;

const DIRECTORY_COLUMNS: &str = "u.id, u.full_name, u.email, u.phone, u.identifier, u.sex,
     u.status, u.role_id, r.name AS role_name, u.created_at, u.last_login_at";

/// `admin_list_users`: filtered, ordered, paginated directory records.
///
/// Without an order token the listing falls back to newest first.
pub fn list_directory(
    conn: &Connection,
    p: &DirectoryRpcParams,
) -> Result<Vec<Json>, StoreError> {
    let mut sql = format!(
        "SELECT {DIRECTORY_COLUMNS} FROM users u LEFT JOIN roles r ON r.id = u.role_id WHERE 1=1"
    );
    let mut values: Vec<Value> = Vec::new();

    if let Some(q) = p.q.as_deref() {
        values.push(Value::Text(contains_pattern(q)));
        let text_idx = values.len();
        let mut clause = format!(
            " AND (u.full_name LIKE ?{text_idx} ESCAPE '\\' OR u.email LIKE ?{text_idx} ESCAPE '\\' \
             OR u.identifier LIKE ?{text_idx} ESCAPE '\\'"
        );
        // "12.345.678-9" should find the stored "123456789"
        let ident = normalize_identifier(q);
        if !ident.is_empty() && ident != q {
            values.push(Value::Text(contains_pattern(&ident)));
            clause.push_str(&format!(" OR u.identifier LIKE ?{} ESCAPE '\\'", values.len()));
        }
        clause.push(')');
        sql.push_str(&clause);
    }
    if let Some(role) = p.role.as_deref() {
        values.push(Value::Text(role.to_string()));
        sql.push_str(&format!(" AND r.name = ?{}", values.len()));
    }
    if let Some(sex) = p.sex.as_deref() {
        values.push(Value::Text(sex.to_string()));
        sql.push_str(&format!(" AND u.sex = ?{}", values.len()));
    }
    if let Some(status) = p.status.as_deref() {
        values.push(Value::Text(status.to_string()));
        sql.push_str(&format!(" AND u.status = ?{}", values.len()));
    }

    let order = p
        .order
        .as_deref()
        .and_then(|o| DirectoryOrder::from_str(o).ok())
        .unwrap_or(DirectoryOrder::CreatedAtDesc);
    sql.push_str(&format!(" ORDER BY {}, u.id ASC", order.order_by_clause()));

    // SQLite needs a LIMIT before OFFSET; -1 means unbounded.
    if p.limit.is_some() || p.offset.is_some() {
        values.push(Value::Integer(p.limit.map(i64::from).unwrap_or(-1)));
        sql.push_str(&format!(" LIMIT ?{}", values.len()));
        values.push(Value::Integer(p.offset.map(i64::from).unwrap_or(0)));
        sql.push_str(&format!(" OFFSET ?{}", values.len()));
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), row_to_json)?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)
}

/// `%text%` with `\`, `%` and `_` matched literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub fn find_directory_record(conn: &Connection, id: &Uuid) -> Result<Option<Json>, StoreError> {
    conn.query_row(
        &format!(
            "SELECT {DIRECTORY_COLUMNS} FROM users u LEFT JOIN roles r ON r.id = u.role_id
             WHERE u.id = ?1"
        ),
        params![id.to_string()],
        row_to_json,
    )
    .optional()
    .map_err(StoreError::from)
}

fn row_to_json(row: &Row<'_>) -> rusqlite::Result<Json> {
    Ok(json!({
        "id": row.get::<_, String>("id")?,
        "full_name": row.get::<_, Option<String>>("full_name")?,
        "email": row.get::<_, Option<String>>("email")?,
        "phone": row.get::<_, Option<String>>("phone")?,
        "identifier": row.get::<_, Option<String>>("identifier")?,
        "sex": row.get::<_, Option<String>>("sex")?,
        "status": row.get::<_, Option<String>>("status")?,
        "role_id": row.get::<_, Option<i64>>("role_id")?,
        "role_name": row.get::<_, Option<String>>("role_name")?,
        "created_at": row.get::<_, String>("created_at")?,
        "last_login_at": row.get::<_, Option<String>>("last_login_at")?,
    }))
}
