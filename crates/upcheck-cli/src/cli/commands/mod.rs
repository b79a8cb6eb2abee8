//! CLI command handlers, one file per command.

mod config;
mod list;
mod resolve;

pub use config::run_config;
pub use list::run_list;
pub use resolve::run_resolve;
