//! Admin API endpoint handlers.
//!
//! Handlers are thin: parse the request, call the KPI or directory
//! logic with the injected store, serialize.

pub mod directory;
pub mod health;
pub mod kpis;
pub mod users;
