use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::runtime::Runtime;

/// Name of the directory, under the launcher root, holding the delegated scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Default upper bound on a delegated script's runtime.
pub const DEFAULT_SCRIPT_TIMEOUT_SECS: u64 = 300;

/// Upper bound on the interpreter probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Launcher root. Scripts live in `<home>/scripts` and run with `<home>` as cwd.
    pub home: PathBuf,
    pub script_timeout: Duration,
    /// Interpreter name tried before the built-in candidates.
    pub preferred_interpreter: Option<String>,
}

impl Config {
    pub fn new<R: Runtime>(
        runtime: &R,
        home: Option<PathBuf>,
        timeout_secs: u64,
        preferred_interpreter: Option<String>,
    ) -> Result<Self> {
        let home = match home {
            Some(path) => path,
            None => default_home(runtime)?,
        };
        debug!("Using launcher root: {:?}", home);

        Ok(Self {
            home,
            script_timeout: Duration::from_secs(timeout_secs),
            preferred_interpreter: preferred_interpreter.filter(|name| !name.trim().is_empty()),
        })
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.home.join(SCRIPTS_DIR)
    }
}

/// Directory containing the launcher executable.
fn default_home<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let exe = runtime.current_exe()?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .with_context(|| format!("Launcher path {:?} has no parent directory", exe))
}
