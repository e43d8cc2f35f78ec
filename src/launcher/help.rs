//! Help, version and banner text.

use crate::platform::PlatformInfo;

pub const VERSION: &str = env!("WINASSIST_VERSION");
pub const RUSTC_VERSION: &str = env!("WINASSIST_RUSTC_VERSION");

const BANNER: &str = r"
 ██╗    ██╗██╗███╗   ██╗ █████╗ ███████╗███████╗██╗███████╗████████╗ █████╗ ██╗
 ██║    ██║██║████╗  ██║██╔══██╗██╔════╝██╔════╝██║██╔════╝╚══██╔══╝██╔══██╗██║
 ██║ █╗ ██║██║██╔██╗ ██║███████║███████╗███████╗██║███████╗   ██║   ███████║██║
 ██║███╗██║██║██║╚██╗██║██╔══██║╚════██║╚════██║██║╚════██║   ██║   ██╔══██║██║
 ╚███╔███╔╝██║██║ ╚████║██║  ██║███████║███████║██║███████║   ██║   ██║  ██║██║
  ╚══╝╚══╝ ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝

                    Voice-Controlled Windows Assistant
                    Cross-Platform Universal Launcher
";

pub fn banner() -> &'static str {
    BANNER
}

pub fn help_text() -> String {
    let program = env!("CARGO_PKG_NAME");
    format!(
        r#"
USAGE:
  {program} [options]

OPTIONS:
  -h, --help              Show this help message
  -v, --version           Show version information
  -t, --test-voice        Test text-to-speech functionality
  --test-elevenlabs       Test ElevenLabs AI voice system
  --list-voices           List available ElevenLabs voices
  --setup-elevenlabs      Setup ElevenLabs AI voice synthesis
  -l, --list-commands     List all available commands
  -s, --with-serenade     Force launch with Serenade integration
  -n, --no-serenade       Launch without Serenade integration
  --start-full            Launch full system with Serenade (recommended)
  --install-serenade      Install Serenade voice control

CONFIGURATION:
  --home <PATH>           Launcher root containing scripts/ [env: WINASSIST_HOME]
  --timeout <SECONDS>     Script time limit, default 300 [env: WINASSIST_TIMEOUT]
  --interpreter <NAME>    PowerShell to try first [env: WINASSIST_INTERPRETER]

PLATFORM COMPATIBILITY:
  ✓ Windows (all versions)
  ✓ Git Bash (MINGW64/MINGW32)
  ✓ Windows Command Prompt
  ✓ Windows PowerShell
  ✓ WSL (Windows Subsystem for Linux)
  ✓ Linux (with PowerShell Core)
  ✓ macOS (with PowerShell Core)

EXAMPLES:
  {program}                      # Start with auto-detection
  {program} --start-full         # Full startup with Serenade
  {program} --test-voice         # Test voice functionality
  {program} --list-commands      # Show all commands
  {program} --install-serenade   # Install Serenade
  {program} --setup-elevenlabs   # Setup AI voice

REQUIREMENTS:
  • PowerShell (built-in on Windows, installable on Linux/macOS)
  • Internet connection (for some features)
"#
    )
}

pub fn version_text(platform: &PlatformInfo) -> String {
    format!(
        "WinAssistAI Launcher v{}\nCompiler: {}\nPlatform: {} ({})",
        VERSION, RUSTC_VERSION, platform.name, platform.kind
    )
}

pub fn show_help() {
    println!("{}", banner());
    println!("{}", help_text());
}

pub fn show_version(platform: &PlatformInfo) {
    println!("{}", banner());
    println!("{}", version_text(platform));
}

/// Per-OS installation hints shown when no interpreter is found.
pub fn install_guidance() -> &'static [&'static str] {
    &[
        "  • Windows: PowerShell is built-in",
        "  • Linux: https://docs.microsoft.com/en-us/powershell/scripting/install/installing-powershell-core-on-linux",
        "  • macOS: https://docs.microsoft.com/en-us/powershell/scripting/install/installing-powershell-core-on-macos",
    ]
}
