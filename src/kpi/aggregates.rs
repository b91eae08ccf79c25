use chrono::{DateTime, Duration, Utc};

use crate::config::{DEFAULT_SIGNUP_WINDOW_DAYS, MAX_SIGNUP_WINDOW_DAYS};
use crate::db::UserStore;
use crate::error::AdminError;
use crate::models::enums::UserStatus;
use crate::models::{CountFilter, DailySignup, KpiSummary, RoleBreakdownEntry};

use super::series::build_daily_series;

/// Count with the failure labeled by `op`.
async fn labeled_count<S: UserStore>(
    store: &S,
    filter: CountFilter,
    op: &str,
) -> Result<u64, AdminError> {
    store
        .count_users(&filter)
        .await
        .map_err(AdminError::data_access(op))
}

/// Dashboard summary as of now.
pub async fn get_summary<S: UserStore>(store: &S) -> Result<KpiSummary, AdminError> {
    get_summary_at(store, Utc::now()).await
}

/// Dashboard summary as of `now`.
///
/// Two concurrent groups: status counts, then recency counts. Any failed
/// count fails the whole summary.
pub async fn get_summary_at<S: UserStore>(
    store: &S,
    now: DateTime<Utc>,
) -> Result<KpiSummary, AdminError> {
    let (total_users, active_users, inactive_users) = tokio::try_join!(
        labeled_count(store, CountFilter::all(), "summary.total"),
        labeled_count(store, CountFilter::with_status(UserStatus::Active), "summary.active"),
        labeled_count(store, CountFilter::with_status(UserStatus::Inactive), "summary.inactive"),
    )?;

    let (new_users_last_7d, new_users_last_30d) = tokio::try_join!(
        labeled_count(store, CountFilter::created_since(now - Duration::days(7)), "summary.new_7d"),
        labeled_count(store, CountFilter::created_since(now - Duration::days(30)), "summary.new_30d"),
    )?;

    tracing::debug!(total_users, active_users, inactive_users, "KPI summary assembled");

    Ok(KpiSummary {
        total_users,
        active_users,
        inactive_users,
        new_users_last_7d,
        new_users_last_30d,
    })
}

/// User count per known role, sorted by role name.
///
/// Counts run one role at a time.
// TODO: replace the per-role loop with a grouped count once the store
// exposes one; the loop costs one round-trip per role.
pub async fn get_role_breakdown<S: UserStore>(
    store: &S,
) -> Result<Vec<RoleBreakdownEntry>, AdminError> {
    let mut roles = store
        .list_roles()
        .await
        .map_err(AdminError::data_access("role_breakdown.roles"))?;

    roles.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    let mut seen = std::collections::HashSet::new();
    roles.retain(|r| seen.insert(r.id));

    let mut entries = Vec::with_capacity(roles.len());
    for role in roles {
        let count = store
            .count_users(&CountFilter::with_role(role.id))
            .await
            .map_err(AdminError::data_access(format!(
                "role_breakdown.count[{}]",
                role.name
            )))?;
        entries.push(RoleBreakdownEntry {
            role_id: role.id,
            role_name: role.name,
            count,
        });
    }

    Ok(entries)
}

/// Signups per day over the trailing `days` window ending now.
pub async fn get_daily_signups<S: UserStore>(
    store: &S,
    days: Option<u32>,
) -> Result<Vec<DailySignup>, AdminError> {
    get_daily_signups_at(store, days, Utc::now()).await
}

/// Signups per day from `now - days` to `now`, zero-filled.
/// `days` defaults to 30 and is raised to at least 1; windows longer than
/// [`MAX_SIGNUP_WINDOW_DAYS`] are rejected.
pub async fn get_daily_signups_at<S: UserStore>(
    store: &S,
    days: Option<u32>,
    now: DateTime<Utc>,
) -> Result<Vec<DailySignup>, AdminError> {
    let days = days.unwrap_or(DEFAULT_SIGNUP_WINDOW_DAYS).max(1);
    if days > MAX_SIGNUP_WINDOW_DAYS {
        return Err(AdminError::Validation(format!(
            "days must be at most {MAX_SIGNUP_WINDOW_DAYS}, got {days}"
        )));
    }
    let start = now
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            AdminError::Validation(format!("days={days} reaches before the supported date range"))
        })?;

    let stamps = store
        .select_created_at(start, now)
        .await
        .map_err(AdminError::data_access("daily_signups.fetch"))?;

    Ok(build_daily_series(start, now, &stamps))
}
