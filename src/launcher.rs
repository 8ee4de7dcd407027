//! Browser launch.
//!
//! Asks the OS to open a URL in the default browser. Fire-and-forget:
//! the child is never awaited and launch failures are invisible, since a
//! missing browser must never take down the server.

use tokio::process::Command;

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/c", "start", url]);
    cmd
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Open `url` in the default browser, best-effort.
///
/// The URL is assumed well-formed; no validation, no exit-status check,
/// no error surfaced.
pub fn open_browser(url: &str) {
    let _ = browser_command(url).spawn();
}
