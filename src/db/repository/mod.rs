//! Repository layer: synchronous SQLite operations, one sub-module per table.

mod directory;
mod roles;
mod users;

pub use directory::*;
pub use roles::*;
pub use users::*;
