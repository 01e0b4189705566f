//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::KronosArgs;
pub use defaults::{DEFAULT_TIMEOUT, DEFAULT_WORKERS};
pub use parsers::{parse_duration_arg, parse_header};
pub use types::PositiveUsize;

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_USER_AGENT};
