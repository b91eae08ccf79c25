//! CSV export of directory rows (RFC 4180 quoting, CRLF line endings).

use crate::models::DirectoryRow;

pub const CSV_HEADER: [&str; 11] = [
    "id",
    "full_name",
    "email",
    "phone",
    "identifier",
    "sex",
    "status",
    "role_id",
    "role_name",
    "created_at",
    "last_login_at",
];

pub fn export_directory_csv(rows: &[DirectoryRow]) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER.iter().map(|h| Some(h.to_string())));
    for row in rows {
        push_record(
            &mut out,
            [
                row.id.clone(),
                row.full_name.clone(),
                row.email.clone(),
                row.phone.clone(),
                row.identifier.clone(),
                row.sex.clone(),
                row.status.clone(),
                row.role_id.map(|id| id.to_string()),
                row.role_name.clone(),
                row.created_at.clone(),
                row.last_login_at.clone(),
            ],
        );
    }
    out
}

fn push_record(out: &mut String, fields: impl IntoIterator<Item = Option<String>>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if let Some(value) = field {
            out.push_str(&escape_field(&value));
        }
    }
    out.push_str("\r\n");
}

fn escape_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_for_empty_directory() {
        assert_eq!(
            export_directory_csv(&[]),
            "id,full_name,email,phone,identifier,sex,status,role_id,role_name,created_at,last_login_at\r\n"
        );
    }

    #[test]
    fn null_fields_are_empty_cells() {
        let csv = export_directory_csv(&[DirectoryRow {
            id: Some("u1".into()),
            role_id: Some(2),
            ..Default::default()
        }]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "u1,,,,,,,2,,,");
    }

    #[test]
    fn quotes_fields_with_separators() {
        let csv = export_directory_csv(&[DirectoryRow {
            full_name: Some("Rojas, \"Cami\"".into()),
            ..Default::default()
        }]);
        assert!(csv.contains(",\"Rojas, \"\"Cami\"\"\","));
    }
}
