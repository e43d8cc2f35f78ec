//! The launcher context and the run flow.
//!
//! A [`Launcher`] is built once per process from the host [`Runtime`] and the
//! resolved [`Config`]. It detects the platform on construction, discovers the
//! interpreter on demand, and hands exactly one delegated script to it.

mod help;
mod supervise;

pub use help::{
    VERSION, banner, help_text, install_guidance, show_help, show_version, version_text,
};
pub use supervise::{ctrl_c, supervise};

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::{
    action::CliOptions,
    config::Config,
    console,
    error::{EXIT_FAILURE, LaunchError, LaunchResult},
    interpreter::{self, Interpreter},
    platform::{PlatformInfo, PlatformKind, detect_platform},
    runtime::{ChildExit, Runtime},
};

/// Signal number of SIGINT on every Unix the launcher targets.
const SIGINT: i32 = 2;

pub struct Launcher<R: Runtime> {
    runtime: R,
    config: Config,
    platform: PlatformInfo,
    interpreter: Option<Interpreter>,
}

impl<R: Runtime> Launcher<R> {
    pub fn new(runtime: R, config: Config) -> Self {
        let platform = detect_platform(&runtime);
        Self::with_platform(runtime, config, platform)
    }

    pub fn with_platform(runtime: R, config: Config, platform: PlatformInfo) -> Self {
        debug!("Platform: {} ({})", platform.name, platform.kind);
        Self {
            runtime,
            config,
            platform,
            interpreter: None,
        }
    }

    /// Discover a working interpreter and remember it for [`Launcher::launch_script`].
    pub async fn check_interpreter(&mut self) -> Option<&Interpreter> {
        self.interpreter = interpreter::check_interpreter(
            &self.runtime,
            self.config.preferred_interpreter.as_deref(),
        )
        .await;
        self.interpreter.as_ref()
    }

    pub fn script_path(&self, script_name: &str) -> PathBuf {
        self.config.scripts_dir().join(script_name)
    }

    /// The script path as the interpreter should see it.
    ///
    /// Under Git Bash the interpreter is a native Windows binary, so forward
    /// slashes are converted to backslashes.
    fn script_arg(&self, script_path: &Path) -> String {
        let path = script_path.to_string_lossy();
        if self.platform.kind == PlatformKind::GitBash {
            path.replace('/', "\\")
        } else {
            path.into_owned()
        }
    }

    /// Run `script_name` from the scripts directory with `args` appended.
    ///
    /// Returns the script's own exit code. Fails without spawning anything if
    /// no interpreter was discovered or the script does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn launch_script(&self, script_name: &str, args: &[String]) -> LaunchResult<i32> {
        let interpreter = self.interpreter.as_ref().ok_or(LaunchError::NoInterpreter)?;

        let script_path = self.script_path(script_name);
        if !self.runtime.exists(&script_path) {
            return Err(LaunchError::ScriptNotFound(script_path));
        }

        let mut command_args = vec![
            "-ExecutionPolicy".to_string(),
            "Bypass".to_string(),
            "-File".to_string(),
            self.script_arg(&script_path),
        ];
        command_args.extend(args.iter().cloned());

        console::info(&format!(
            "Launching {} with {}...",
            script_name, interpreter.name
        ));
        debug!("Command: {} {}", interpreter.name, command_args.join(" "));

        let child = self
            .runtime
            .run(&interpreter.path, &command_args, &self.config.home);

        match supervise(child, self.config.script_timeout, ctrl_c()).await? {
            Ok(ChildExit::Code(code)) => Ok(code),
            // Ctrl-C reaches the whole foreground process group, so the child
            // may die from it before our own handler is polled.
            Ok(ChildExit::Signal(Some(SIGINT))) => Err(LaunchError::Interrupted),
            Ok(ChildExit::Signal(signal)) => {
                warn!("{} was terminated by signal {:?}", script_name, signal);
                Ok(EXIT_FAILURE)
            }
            Err(source) => Err(LaunchError::Spawn {
                program: interpreter.name.clone(),
                source,
            }),
        }
    }

    /// Execute one run and return the process exit code.
    pub async fn run(&mut self, options: CliOptions) -> i32 {
        if options.help {
            show_help();
            return 0;
        }

        if options.version {
            show_version(&self.platform);
            return 0;
        }

        match self.start(options).await {
            Ok(code) => code,
            Err(e) => {
                report_failure(&e);
                e.exit_code()
            }
        }
    }

    async fn start(&mut self, options: CliOptions) -> LaunchResult<i32> {
        println!("{}", banner());
        console::success("Welcome to WinAssistAI!");
        console::info(&format!("Platform: {}", self.platform.name));
        console::info(&format!("Launcher: v{}", VERSION));

        console::info("Checking PowerShell availability...");
        let Some(found) = self.check_interpreter().await else {
            return Err(LaunchError::InterpreterNotFound);
        };
        console::success(&format!("PowerShell found: {}", found.name));

        let action = options.action();
        if let Some(message) = action.announcement() {
            console::info(message);
        }

        let invocation = action.invocation();
        let code = self
            .launch_script(invocation.script, &invocation.args())
            .await?;

        if code == 0 {
            console::success("WinAssistAI launched successfully!");
            console::hint(&format!(
                "Use \"{} --help\" for more options",
                env!("CARGO_PKG_NAME")
            ));
        } else {
            console::error(&format!("WinAssistAI exited with code {}", code));
        }

        Ok(code)
    }
}

/// Handle `--help` and `--version` ahead of any configuration.
///
/// Returns the exit code when one of them was requested. Only `--version`
/// touches the runtime, and only to name the platform.
pub fn show_info<R: Runtime>(runtime: &R, options: &CliOptions) -> Option<i32> {
    if options.help {
        show_help();
        Some(0)
    } else if options.version {
        show_version(&detect_platform(runtime));
        Some(0)
    } else {
        None
    }
}

/// Print the single user-facing report for a failed run.
pub fn report_failure(err: &LaunchError) {
    match err {
        LaunchError::InterpreterNotFound => {
            console::error("PowerShell not found!");
            console::warning("Please install PowerShell:");
            for line in install_guidance() {
                eprintln!("{}", line);
            }
        }
        LaunchError::Interrupted => console::warning(&err.to_string()),
        LaunchError::Timeout(_) => console::error(&err.to_string()),
        LaunchError::Other(e) => console::error(&format!("Failed to launch WinAssistAI: {:#}", e)),
        _ => console::error(&format!("Failed to launch WinAssistAI: {}", err)),
    }
}
