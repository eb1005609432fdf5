//! CLI subcommand implementations.

pub mod clean;
pub mod lookup;
pub mod stats;
pub mod trend;
pub mod util;
