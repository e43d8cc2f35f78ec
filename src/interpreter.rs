//! PowerShell discovery.

use log::{debug, warn};
use std::path::PathBuf;

use crate::config::PROBE_TIMEOUT;
use crate::runtime::Runtime;

/// Interpreter names in priority order.
pub const CANDIDATES: &[&str] = &["powershell.exe", "pwsh", "powershell"];

/// A PowerShell executable that resolved on PATH and answered the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    /// Name as searched for, e.g. `pwsh`.
    pub name: String,
    /// Resolved location on PATH.
    pub path: PathBuf,
}

fn probe_args() -> Vec<String> {
    vec!["-Command".to_string(), "Write-Host \"Test\"".to_string()]
}

/// Find the first candidate that both resolves on PATH and actually runs.
///
/// `preferred` is tried ahead of [`CANDIDATES`]. Returns `None` when nothing works.
#[tracing::instrument(skip(runtime))]
pub async fn check_interpreter<R: Runtime>(
    runtime: &R,
    preferred: Option<&str>,
) -> Option<Interpreter> {
    let mut candidates: Vec<&str> = preferred.into_iter().collect();
    for name in CANDIDATES {
        if Some(*name) != preferred {
            candidates.push(name);
        }
    }

    for name in candidates {
        let Some(path) = runtime.which(name) else {
            debug!("{} is not on PATH", name);
            continue;
        };

        if runtime.probe(&path, &probe_args(), PROBE_TIMEOUT).await {
            debug!("Using {} at {:?}", name, path);
            return Some(Interpreter {
                name: name.to_string(),
                path,
            });
        }

        warn!("{} found at {:?} but failed to run", name, path);
    }

    None
}
