//! CLI command handlers. Each command is in its own file for clarity.

mod detect;
mod normalize;

pub use detect::run_detect;
pub use normalize::run_normalize;
