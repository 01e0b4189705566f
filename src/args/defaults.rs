use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("kronos/", env!("CARGO_PKG_VERSION"));

/// Worker pool size when neither the CLI nor the config sets one.
pub const DEFAULT_WORKERS: usize = 5;

/// Per-call transport timeout. Kept above the default threshold so slow but
/// acceptable responses are classified instead of erroring out.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["kronos.toml", "kronos.json"];
