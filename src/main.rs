use clap::Parser;
use std::path::PathBuf;
use winassist::{
    action::CliOptions,
    config::{Config, DEFAULT_SCRIPT_TIMEOUT_SECS},
    console,
    error::{EXIT_FAILURE, EXIT_INTERRUPTED},
    launcher::{Launcher, ctrl_c, show_info},
    runtime::RealRuntime,
};

/// winassist - WinAssistAI launcher
///
/// Detects the host platform, finds PowerShell, and runs one of the
/// WinAssistAI scripts from the `scripts/` directory next to this executable.
#[derive(Parser, Debug)]
#[command(author, about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Show this help message
    #[arg(short = 'h', long)]
    help: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,

    /// Test text-to-speech functionality
    #[arg(short = 't', long)]
    test_voice: bool,

    /// Test ElevenLabs AI voice system
    #[arg(long)]
    test_elevenlabs: bool,

    /// List available ElevenLabs voices
    #[arg(long)]
    list_voices: bool,

    /// Setup ElevenLabs AI voice synthesis
    #[arg(long)]
    setup_elevenlabs: bool,

    /// List all available commands
    #[arg(short = 'l', long)]
    list_commands: bool,

    /// Force launch with Serenade integration
    #[arg(short = 's', long)]
    with_serenade: bool,

    /// Launch without Serenade integration
    #[arg(short = 'n', long)]
    no_serenade: bool,

    /// Launch full system with Serenade (recommended)
    #[arg(long)]
    start_full: bool,

    /// Install Serenade voice control
    #[arg(long)]
    install_serenade: bool,

    /// Launcher root containing scripts/ (defaults to the executable's directory)
    #[arg(long, env = "WINASSIST_HOME", value_name = "PATH")]
    home: Option<PathBuf>,

    /// Upper bound on the script's runtime
    #[arg(
        long,
        env = "WINASSIST_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_SCRIPT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// PowerShell executable to try before the built-in candidates
    #[arg(long, env = "WINASSIST_INTERPRETER", value_name = "NAME")]
    interpreter: Option<String>,
}

impl Cli {
    fn options(&self) -> CliOptions {
        CliOptions {
            help: self.help,
            version: self.version,
            test_voice: self.test_voice,
            test_elevenlabs: self.test_elevenlabs,
            list_voices: self.list_voices,
            setup_elevenlabs: self.setup_elevenlabs,
            list_commands: self.list_commands,
            install_serenade: self.install_serenade,
            start_full: self.start_full,
            with_serenade: self.with_serenade,
            no_serenade: self.no_serenade,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
    };

    let runtime = RealRuntime;
    let options = cli.options();
    if let Some(code) = show_info(&runtime, &options) {
        std::process::exit(code);
    }

    let config = match Config::new(&runtime, cli.home.clone(), cli.timeout, cli.interpreter.clone()) {
        Ok(config) => config,
        Err(e) => {
            console::error(&format!("Failed to launch WinAssistAI: {:#}", e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    let mut launcher = Launcher::new(runtime, config);
    let code = tokio::select! {
        biased;
        code = launcher.run(options) => code,
        _ = ctrl_c() => {
            console::warning("Operation cancelled by user");
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(code);
}
