//! Command implementations

mod check;
mod init;
mod list;

pub use check::{CheckArgs, check};
pub use init::init;
pub use list::list;
