//! CLI command handlers. Each command is in its own file.

mod completions;
mod endpoint;
mod man;
mod show;

pub use completions::run_completions;
pub use endpoint::run_endpoint;
pub use man::run_man;
pub use show::run_show;
