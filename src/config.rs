use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ClinicAdmin";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Role name allowed into the admin back office unless overridden.
pub const DEFAULT_ADMIN_ROLE: &str = "Administrador";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_SIGNUP_WINDOW_DAYS: u32 = 30;
/// Longest trailing window the signup series accepts (ten years).
pub const MAX_SIGNUP_WINDOW_DAYS: u32 = 3650;

/// Get the application data directory
/// ~/ClinicAdmin/ on all platforms
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
}

/// Default SQLite database location
pub fn default_database_path() -> PathBuf {
    app_data_dir().join("clinic.db")
}

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clinic_admin=info,clinic_admin_lib=info,tower_http=warn"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration, resolved from `CLINIC_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub admin_role: String,
    pub signup_window_days: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary lookup (tests pass a map).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = get("CLINIC_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let bind_raw = get("CLINIC_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            var: "CLINIC_BIND_ADDR",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let admin_role = match get("CLINIC_ADMIN_ROLE") {
            Some(role) if role.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    var: "CLINIC_ADMIN_ROLE",
                    value: role,
                    reason: "must not be blank".into(),
                })
            }
            Some(role) => role,
            None => DEFAULT_ADMIN_ROLE.to_string(),
        };

        let signup_window_days = match get("CLINIC_SIGNUP_WINDOW_DAYS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(days) if (1..=MAX_SIGNUP_WINDOW_DAYS).contains(&days) => days,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: "CLINIC_SIGNUP_WINDOW_DAYS",
                        value: raw,
                        reason: format!("must be between 1 and {MAX_SIGNUP_WINDOW_DAYS}"),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "CLINIC_SIGNUP_WINDOW_DAYS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_SIGNUP_WINDOW_DAYS,
        };

        Ok(Self {
            database_path,
            bind_addr,
            admin_role,
            signup_window_days,
        })
    }
}
