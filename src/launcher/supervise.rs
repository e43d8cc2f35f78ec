//! Racing a child process against the timeout and the user's interrupt.

use std::future::Future;
use std::time::Duration;

use crate::error::{LaunchError, LaunchResult};

/// Wait for `child`, giving up after `timeout` or when `interrupt` fires.
///
/// Child completion wins if several branches are ready at once. Whatever is
/// still running when this returns early is dropped, which kills a child
/// spawned with `kill_on_drop`.
pub async fn supervise<C, I, T>(child: C, timeout: Duration, interrupt: I) -> LaunchResult<T>
where
    C: Future<Output = T>,
    I: Future<Output = ()>,
{
    tokio::select! {
        biased;
        output = child => Ok(output),
        _ = interrupt => Err(LaunchError::Interrupted),
        _ = tokio::time::sleep(timeout) => Err(LaunchError::Timeout(timeout)),
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Unable to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
