//! Command handlers. One module per subcommand; dispatch lives in `main`.

pub mod completions;
pub mod list;
pub mod new;
