//! Input validation shared by the directory and user forms.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AdminError;
use crate::models::enums::Sex;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{5,20}$").expect("valid identifier regex"));

/// Strip the separators people type into national identifiers
/// (`12.345.678-9`, `AB 1234`) and trim what remains.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | ' ' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 5–20 ASCII alphanumerics once normalized.
pub fn is_valid_identifier(raw: &str) -> bool {
    IDENTIFIER_RE.is_match(&normalize_identifier(raw))
}

/// Normalized identifier, or a validation error naming the input.
pub fn validate_identifier(raw: &str) -> Result<String, AdminError> {
    let normalized = normalize_identifier(raw);
    if IDENTIFIER_RE.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(AdminError::Validation(format!(
            "identifier must be 5-20 alphanumeric characters, got {raw:?}"
        )))
    }
}

/// Exact membership in the sex enum. `None` is invalid.
pub fn is_valid_sex(value: Option<&str>) -> bool {
    value.is_some_and(|v| Sex::ALL.iter().any(|s| s.as_str() == v))
}

pub fn parse_sex(raw: &str) -> Result<Sex, AdminError> {
    if !is_valid_sex(Some(raw)) {
        return Err(AdminError::Validation(format!("unknown sex {raw:?}")));
    }
    raw.parse()
        .map_err(|e: crate::db::StoreError| AdminError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize_identifier("AB-12.34 "), "AB1234");
        assert_eq!(normalize_identifier("12.345.678-9"), "123456789");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["AB-12.34 ", " 1.2-3 ", "\t99.88\n", "", "----", "abc"] {
            let once = normalize_identifier(raw);
            assert_eq!(normalize_identifier(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn normalize_trims_other_whitespace() {
        assert_eq!(normalize_identifier("\t12345\n"), "12345");
    }

    #[test]
    fn identifier_length_bounds() {
        assert!(is_valid_identifier("AB-12.34 "));
        assert!(!is_valid_identifier("a1"));
        assert!(!is_valid_identifier("1234"));
        assert!(is_valid_identifier("12345"));
        assert!(is_valid_identifier(&"9".repeat(20)));
        assert!(!is_valid_identifier(&"9".repeat(21)));
    }

    #[test]
    fn identifier_rejects_non_alphanumeric() {
        assert!(!is_valid_identifier("1234_5678"));
        assert!(!is_valid_identifier("ñandú123"));
    }

    #[test]
    fn validate_identifier_returns_normalized_form() {
        assert_eq!(validate_identifier("12.345.678-K").unwrap(), "12345678K");
        let err = validate_identifier("a1").unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn sex_membership_is_exact() {
        assert!(is_valid_sex(Some("masculino")));
        assert!(is_valid_sex(Some("prefiere_no_decir")));
        assert!(!is_valid_sex(Some("Femenino")));
        assert!(!is_valid_sex(Some(" otro")));
        assert!(!is_valid_sex(Some("")));
        assert!(!is_valid_sex(None));
    }

    #[test]
    fn parse_sex_maps_to_enum() {
        assert_eq!(parse_sex("otro").unwrap(), Sex::Otro);
        assert_eq!(parse_sex("OTRO").unwrap_err().code(), "VALIDATION");
    }
}
