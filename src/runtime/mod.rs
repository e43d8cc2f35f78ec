//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over everything the
//! launcher needs from the host, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and host identification
//! - `fs` - File existence and search-path lookup
//! - `process` - Probing interpreters and running delegated scripts

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited normally with this code.
    Code(i32),
    /// Terminated by a signal, when the platform reports one.
    Signal(Option<i32>),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// Raw OS family name as reported by the host (e.g. "windows", "linux", "macos").
    fn os_family(&self) -> String;

    /// Path of the running launcher executable.
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn exists(&self, path: &Path) -> bool;

    /// Resolve a command name on the search path.
    fn which(&self, name: &str) -> Option<PathBuf>;

    // Processes
    /// Run a command with all stdio discarded. Returns true only if it exits
    /// successfully within `timeout`.
    async fn probe(&self, program: &Path, args: &[String], timeout: Duration) -> bool;

    /// Run a command with inherited stdio in `cwd` and wait for it.
    /// Reports the exit code, or the signal that terminated the process.
    /// The child is killed if the returned future is dropped before completion.
    async fn run(&self, program: &Path, args: &[String], cwd: &Path) -> io::Result<ChildExit>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn os_family(&self) -> String {
        self.os_family_impl()
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        self.which_impl(name)
    }

    async fn probe(&self, program: &Path, args: &[String], timeout: Duration) -> bool {
        self.probe_impl(program, args, timeout).await
    }

    async fn run(&self, program: &Path, args: &[String], cwd: &Path) -> io::Result<ChildExit> {
        self.run_impl(program, args, cwd).await
    }
}
