use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn winassist() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("winassist"));
    cmd.env("NO_COLOR", "1")
        .env_remove("WINASSIST_HOME")
        .env_remove("WINASSIST_TIMEOUT")
        .env_remove("WINASSIST_INTERPRETER");
    cmd
}

#[test]
fn test_help_exits_zero() {
    winassist()
        .arg("--help")
        .env("PATH", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("--test-voice"))
        .stdout(predicate::str::contains("--install-serenade"))
        .stdout(predicate::str::contains("Checking PowerShell").not());
}

#[test]
fn test_version_exits_zero() {
    winassist()
        .arg("-v")
        .env("PATH", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("WinAssistAI Launcher v"))
        .stdout(predicate::str::contains("Platform: "));
}

#[test]
fn test_help_wins_over_actions() {
    winassist()
        .args(["--test-voice", "-h"])
        .env("PATH", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn test_unknown_flag_exits_one() {
    winassist().arg("--bogus").assert().code(1);
}

#[test]
fn test_interpreter_not_found() {
    let empty = tempdir().unwrap();
    let home = tempdir().unwrap();

    winassist()
        .arg("--home")
        .arg(home.path())
        .env("PATH", empty.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking PowerShell availability"))
        .stderr(predicate::str::contains("PowerShell not found!"))
        .stderr(predicate::str::contains("Please install PowerShell"));
}

/// A fake PowerShell on a private PATH. The "scripts" it runs are shell
/// scripts, so each test controls the delegated behavior.
#[cfg(unix)]
struct FakeInstall {
    bin: TempDir,
    home: TempDir,
}

#[cfg(unix)]
impl FakeInstall {
    const FAKE_PWSH: &'static str = r#"#!/bin/sh
if [ "$1" = "-Command" ]; then
    exit 0
fi
# -ExecutionPolicy Bypass -File <script> [args...]
echo "interpreter-args: $*"
shift 3
script="$1"
shift
echo "cwd: $(pwd)"
exec /bin/sh "$script" "$@"
"#;

    fn new() -> Self {
        Self::with_interpreter(Self::FAKE_PWSH)
    }

    fn with_interpreter(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = tempdir().unwrap();
        let home = tempdir().unwrap();
        std::fs::create_dir(home.path().join("scripts")).unwrap();

        let pwsh = bin.path().join("pwsh");
        std::fs::write(&pwsh, body).unwrap();
        std::fs::set_permissions(&pwsh, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { bin, home }
    }

    fn script(&self, name: &str, body: &str) -> &Self {
        std::fs::write(self.home.path().join("scripts").join(name), body).unwrap();
        self
    }

    fn path_var(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin.path().display())
    }

    fn home(&self) -> &Path {
        self.home.path()
    }

    fn command(&self) -> Command {
        let mut cmd = winassist();
        cmd.arg("--home").arg(self.home()).env("PATH", self.path_var());
        cmd
    }
}

#[cfg(unix)]
#[test]
fn test_default_action_runs_main_script() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "echo \"script-args:[$*]\"\nexit 0\n");

    install
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("PowerShell found: pwsh"))
        .stdout(predicate::str::contains("Starting with auto-detection..."))
        .stdout(predicate::str::contains("-ExecutionPolicy Bypass -File"))
        .stdout(predicate::str::contains("script-args:[]"))
        .stdout(predicate::str::contains("WinAssistAI launched successfully!"));
}

#[cfg(unix)]
#[test]
fn test_test_voice_passes_flag() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "echo \"script-args:[$*]\"\n");

    install
        .command()
        .arg("--test-voice")
        .assert()
        .success()
        .stdout(predicate::str::contains("script-args:[-TestVoice]"));
}

#[cfg(unix)]
#[test]
fn test_list_commands_passes_flag() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "echo \"script-args:[$*]\"\n");

    install
        .command()
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("script-args:[-ListCommands]"));
}

#[cfg(unix)]
#[test]
fn test_install_serenade_runs_its_own_script() {
    let install = FakeInstall::new();
    install.script("install-serenade.ps1", "echo installing-serenade\n");

    install
        .command()
        .arg("--install-serenade")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing Serenade voice control..."))
        .stdout(predicate::str::contains("installing-serenade"));
}

#[cfg(unix)]
#[test]
fn test_child_exit_code_passes_through() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "exit 7\n");

    install
        .command()
        .assert()
        .code(7)
        .stderr(predicate::str::contains("WinAssistAI exited with code 7"));
}

#[cfg(unix)]
#[test]
fn test_child_runs_in_launcher_root() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "exit 0\n");

    let output = install.command().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let cwd_line = stdout
        .lines()
        .find_map(|l| l.strip_prefix("cwd: "))
        .expect("fake interpreter did not report cwd");
    assert_eq!(
        Path::new(cwd_line).canonicalize().unwrap(),
        install.home().canonicalize().unwrap()
    );
}

#[cfg(unix)]
#[test]
fn test_missing_script() {
    let install = FakeInstall::new();

    install
        .command()
        .arg("--start-full")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Script not found"))
        .stderr(predicate::str::contains("start-with-serenade.ps1"));
}

#[cfg(unix)]
#[test]
fn test_timeout_exits_one() {
    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "exec sleep 30\n");

    let started = std::time::Instant::now();
    install
        .command()
        .env("WINASSIST_TIMEOUT", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
    assert!(started.elapsed() < std::time::Duration::from_secs(20));
}

#[cfg(unix)]
#[test]
fn test_broken_interpreter_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let install = FakeInstall::new();
    install.script("win_assist_ai.ps1", "exit 0\n");

    // Resolves on PATH but fails the probe
    let broken = install.bin.path().join("powershell.exe");
    std::fs::write(&broken, "#!/bin/sh\nexit 1\n").unwrap();
    std::fs::set_permissions(&broken, std::fs::Permissions::from_mode(0o755)).unwrap();

    install
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("PowerShell found: pwsh"));
}

#[test]
fn test_zero_timeout_rejected() {
    winassist()
        .args(["--timeout", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--timeout"));
}

/// Start the launcher in the background, wait for `marker` to appear, then
/// send SIGINT to the launcher alone.
#[cfg(unix)]
fn interrupt_once(install: &FakeInstall, marker: &Path) -> std::process::Output {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let child = std::process::Command::new(env!("CARGO_BIN_EXE_winassist"))
        .arg("--home")
        .arg(install.home())
        .env("PATH", install.path_var())
        .env("NO_COLOR", "1")
        .env_remove("WINASSIST_TIMEOUT")
        .env_remove("WINASSIST_INTERPRETER")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(20);
    while !marker.exists() {
        assert!(Instant::now() < deadline, "{:?} never appeared", marker);
        std::thread::sleep(Duration::from_millis(50));
    }

    let status = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    child.wait_with_output().unwrap()
}

#[cfg(unix)]
#[test]
fn test_interrupt_during_interpreter_check_exits_130() {
    let install = FakeInstall::with_interpreter(
        r#"#!/bin/sh
if [ "$1" = "-Command" ]; then
    touch "$(dirname "$0")/probing"
    exec sleep 4
fi
exit 0
"#,
    );
    install.script("win_assist_ai.ps1", "exit 0\n");

    let output = interrupt_once(&install, &install.bin.path().join("probing"));

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"), "{}", stderr);
}

#[cfg(unix)]
#[test]
fn test_interrupt_during_script_exits_130() {
    let install = FakeInstall::new();
    // The script runs with the launcher root as its cwd
    install.script("win_assist_ai.ps1", "touch started\nexec sleep 30\n");

    let output = interrupt_once(&install, &install.home().join("started"));

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interrupted by user"), "{}", stderr);
}
