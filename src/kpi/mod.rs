//! Admin dashboard KPIs: summary counts, role breakdown, daily signups.

pub mod aggregates;
pub mod series;

pub use aggregates::*;
pub use series::build_daily_series;
