//! Engine location and staging policy.

use std::path::PathBuf;

use log::warn;

/// Executable looked up on `PATH` when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "rivet_console";

/// Overrides the engine executable.
pub const EXECUTABLE_ENV: &str = "RIVET_EXECUTABLE";

/// Overrides the directory staging directories are created in.
pub const STAGING_DIR_ENV: &str = "RIVET_STAGING_DIR";

/// `0`, `false`, `no` or `off` remove staging directories even when the
/// engine fails.
pub const KEEP_FAILED_ENV: &str = "RIVET_KEEP_FAILED";

/// Options for locating and running the engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Path or bare name of the engine executable.
    pub executable: PathBuf,

    /// Parent directory for per-invocation staging directories.
    pub staging_root: PathBuf,

    /// If true, a staging directory is left on disk when the operation using
    /// it fails, so its inputs and outputs can be inspected.
    pub retain_on_failure: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            staging_root: std::env::temp_dir(),
            retain_on_failure: true,
        }
    }
}

impl EngineConfig {
    /// Builds a configuration from the `RIVET_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(executable) = lookup(EXECUTABLE_ENV).filter(|v| !v.trim().is_empty()) {
            config.executable = PathBuf::from(executable);
        }
        if let Some(root) = lookup(STAGING_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.staging_root = PathBuf::from(root);
        }
        if let Some(raw) = lookup(KEEP_FAILED_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.retain_on_failure = flag,
                None => warn!("ignoring {KEEP_FAILED_ENV}={raw:?}; expected a boolean"),
            }
        }

        config
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = root.into();
        self
    }

    pub fn with_retain_on_failure(mut self, retain: bool) -> Self {
        self.retain_on_failure = retain;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
