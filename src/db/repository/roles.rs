use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::Role;

pub fn insert_role(conn: &Connection, name: &str) -> Result<i64, StoreError> {
    conn.execute("INSERT INTO roles (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub fn list_roles(conn: &Connection) -> Result<Vec<Role>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM roles ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Role {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)
}

/// Role name of `user_id`, via its `role_id`.
pub fn find_role_name(conn: &Connection, user_id: &Uuid) -> Result<Option<String>, StoreError> {
    let name: Option<Option<String>> = conn
        .query_row(
            "SELECT r.name FROM users u LEFT JOIN roles r ON r.id = u.role_id WHERE u.id = ?1",
            params![user_id.to_string()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(name.flatten())
}
