//! Admin API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Role guard: actor header + admin role assertion
//! 2. Audit logger: logs after auth, has actor_id

pub mod audit;
pub mod auth;
