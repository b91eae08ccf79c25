use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::db::StoreError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serialized as the lowercase token, not the variant name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(Sex {
    Masculino => "masculino",
    Femenino => "femenino",
    Otro => "otro",
    PrefiereNoDecir => "prefiere_no_decir",
});

str_enum!(UserStatus {
    Active => "active",
    Inactive => "inactive",
    Pending => "pending",
});

// Tokens understood by the `admin_list_users` procedure.
str_enum!(DirectoryOrder {
    CreatedAtAsc => "created_at_asc",
    CreatedAtDesc => "created_at_desc",
    NameAsc => "name_asc",
    NameDesc => "name_desc",
    SexoAsc => "sexo_asc",
    SexoDesc => "sexo_desc",
    LastLoginAsc => "last_login_asc",
    LastLoginDesc => "last_login_desc",
});

str_enum!(RecencyBucket {
    Last24h => "last_24h",
    Last7d => "last_7d",
    Last30d => "last_30d",
    OlderThan30d => "older_than_30d",
});

impl DirectoryOrder {
    /// SQL `ORDER BY` clause for this token. Nulls sort last in both directions.
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            Self::CreatedAtAsc => "u.created_at ASC",
            Self::CreatedAtDesc => "u.created_at DESC",
            Self::NameAsc => "u.full_name IS NULL, u.full_name COLLATE NOCASE ASC",
            Self::NameDesc => "u.full_name IS NULL, u.full_name COLLATE NOCASE DESC",
            Self::SexoAsc => "u.sex IS NULL, u.sex ASC",
            Self::SexoDesc => "u.sex IS NULL, u.sex DESC",
            Self::LastLoginAsc => "u.last_login_at IS NULL, u.last_login_at ASC",
            Self::LastLoginDesc => "u.last_login_at IS NULL, u.last_login_at DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sex_tokens_round_trip_through_from_str() {
        for sex in Sex::ALL {
            assert_eq!(Sex::from_str(sex.as_str()).unwrap(), *sex);
        }
    }

    #[test]
    fn sex_rejects_case_variants() {
        assert!(Sex::from_str("Masculino").is_err());
        assert!(Sex::from_str("").is_err());
    }

    #[test]
    fn directory_order_has_eight_distinct_tokens() {
        let mut tokens: Vec<&str> = DirectoryOrder::ALL.iter().map(|o| o.as_str()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn invalid_enum_error_names_the_type() {
        let err = UserStatus::from_str("banned").unwrap_err();
        assert!(err.to_string().contains("UserStatus"));
        assert!(err.to_string().contains("banned"));
    }

    #[test]
    fn serializes_as_token() {
        let json = serde_json::to_string(&Sex::PrefiereNoDecir).unwrap();
        assert_eq!(json, "\"prefiere_no_decir\"");
        let back: Sex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sex::PrefiereNoDecir);
    }
}
