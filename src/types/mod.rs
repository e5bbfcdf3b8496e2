//! Response types for the exposed tools

mod system;
mod user;

pub use system::*;
pub use user::*;
