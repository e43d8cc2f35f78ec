//! Child process operations.

use log::debug;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;

use super::{ChildExit, RealRuntime};

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn probe_impl(
        &self,
        program: &Path,
        args: &[String],
        timeout: Duration,
    ) -> bool {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(timeout, command.status()).await {
            Ok(Ok(status)) => {
                debug!("Probe of {:?} exited with {}", program, status);
                status.success()
            }
            Ok(Err(e)) => {
                debug!("Probe of {:?} failed to start: {}", program, e);
                false
            }
            Err(_) => {
                debug!("Probe of {:?} timed out after {:?}", program, timeout);
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn run_impl(
        &self,
        program: &Path,
        args: &[String],
        cwd: &Path,
    ) -> io::Result<ChildExit> {
        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .kill_on_drop(true)
            .spawn()?;

        let status = child.wait().await?;
        debug!("{:?} exited with {}", program, status);
        Ok(child_exit(status))
    }
}

fn child_exit(status: ExitStatus) -> ChildExit {
    if let Some(code) = status.code() {
        return ChildExit::Code(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ChildExit::Signal(status.signal())
    }
    #[cfg(not(unix))]
    {
        ChildExit::Signal(None)
    }
}
