//! Mapping from command-line flags to the one script invocation a run performs.

/// Main entry script of the assistant.
pub const MAIN_SCRIPT: &str = "win_assist_ai.ps1";
pub const ELEVENLABS_TEST_SCRIPT: &str = "test-elevenlabs.ps1";
pub const ELEVENLABS_SETUP_SCRIPT: &str = "setup-elevenlabs.ps1";
pub const SERENADE_INSTALL_SCRIPT: &str = "install-serenade.ps1";
pub const SERENADE_START_SCRIPT: &str = "start-with-serenade.ps1";

/// Boolean flags as given on the command line.
///
/// The flags are independent; [`CliOptions::action`] resolves them to a
/// single [`Action`] by fixed precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub help: bool,
    pub version: bool,
    pub test_voice: bool,
    pub test_elevenlabs: bool,
    pub list_voices: bool,
    pub setup_elevenlabs: bool,
    pub list_commands: bool,
    pub install_serenade: bool,
    pub start_full: bool,
    pub with_serenade: bool,
    pub no_serenade: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TestVoice,
    TestElevenLabs,
    ListVoices,
    SetupElevenLabs,
    ListCommands,
    InstallSerenade,
    StartFull,
    WithSerenade,
    NoSerenade,
    AutoDetect,
}

/// A delegated script together with the arguments passed after `-File <script>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptInvocation {
    pub script: &'static str,
    pub args: &'static [&'static str],
}

impl CliOptions {
    /// Resolve the flags to the action to perform. Help and version are
    /// handled by the caller before this is consulted.
    pub fn action(&self) -> Action {
        if self.test_voice {
            Action::TestVoice
        } else if self.test_elevenlabs {
            Action::TestElevenLabs
        } else if self.list_voices {
            Action::ListVoices
        } else if self.setup_elevenlabs {
            Action::SetupElevenLabs
        } else if self.list_commands {
            Action::ListCommands
        } else if self.install_serenade {
            Action::InstallSerenade
        } else if self.start_full {
            Action::StartFull
        } else if self.with_serenade {
            Action::WithSerenade
        } else if self.no_serenade {
            Action::NoSerenade
        } else {
            Action::AutoDetect
        }
    }
}

impl Action {
    pub fn invocation(&self) -> ScriptInvocation {
        match self {
            Action::TestVoice => invoke(MAIN_SCRIPT, &["-TestVoice"]),
            Action::TestElevenLabs => invoke(ELEVENLABS_TEST_SCRIPT, &["-Test"]),
            Action::ListVoices => invoke(ELEVENLABS_TEST_SCRIPT, &["-ListVoices"]),
            Action::SetupElevenLabs => invoke(ELEVENLABS_SETUP_SCRIPT, &[]),
            Action::ListCommands => invoke(MAIN_SCRIPT, &["-ListCommands"]),
            Action::InstallSerenade => invoke(SERENADE_INSTALL_SCRIPT, &[]),
            Action::StartFull => invoke(SERENADE_START_SCRIPT, &[]),
            Action::WithSerenade => invoke(MAIN_SCRIPT, &["-WithSerenade"]),
            Action::NoSerenade => invoke(MAIN_SCRIPT, &["-NoSerenade"]),
            Action::AutoDetect => invoke(MAIN_SCRIPT, &[]),
        }
    }

    /// Status line printed before the script starts, if any.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            Action::TestVoice | Action::ListCommands => None,
            Action::TestElevenLabs => Some("Testing ElevenLabs AI voice system..."),
            Action::ListVoices => Some("Listing available ElevenLabs voices..."),
            Action::SetupElevenLabs => Some("Setting up ElevenLabs AI voice synthesis..."),
            Action::InstallSerenade => Some("Installing Serenade voice control..."),
            Action::StartFull => Some("Starting full system with Serenade integration..."),
            Action::WithSerenade => Some("Starting with Serenade integration..."),
            Action::NoSerenade => Some("Starting without Serenade integration..."),
            Action::AutoDetect => Some("Starting with auto-detection..."),
        }
    }
}

fn invoke(script: &'static str, args: &'static [&'static str]) -> ScriptInvocation {
    ScriptInvocation { script, args }
}

impl ScriptInvocation {
    pub fn args(&self) -> Vec<String> {
        self.args.iter().map(|a| a.to_string()).collect()
    }
}
