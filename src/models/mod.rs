pub mod directory;
pub mod enums;
pub mod filters;
pub mod kpi;
pub mod role;
pub mod user;

pub use directory::*;
pub use filters::*;
pub use kpi::*;
pub use role::*;
pub use user::*;
