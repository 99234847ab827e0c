//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per subcommand. Each returns
//! the process exit code.

mod analyze;
mod normalize;
mod resolve;
mod summary;

pub use analyze::run_analyze;
pub use normalize::run_normalize;
pub use resolve::{cli_value, run_resolve, ResolveArgs};
pub use summary::run_summary;
