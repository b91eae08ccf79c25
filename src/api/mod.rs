//! Admin back-office HTTP API.
//!
//! Exposes the KPI and directory logic as JSON endpoints for the portal
//! UI. Admin routes sit under `/api/admin/` behind the role guard.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::admin_api_router;
pub use server::{start_admin_api_server, AdminApiServer, ApiSession};
pub use types::AdminContext;
