//! CLI command handlers. Each command is in its own file.

mod completions;
mod fetch;
mod serve;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use serve::run_serve;
