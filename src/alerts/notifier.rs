//! Alert notification channels
//!
//! A [`Notifier`] delivers one message and reports whether delivery
//! succeeded. Failures never cross this boundary as errors: every channel
//! logs what went wrong and returns `false`.

use crate::config::Config;
use crate::error::NotifyError;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Deliver a message, returning whether it was accepted
    fn send(&self, subject: &str, body: &str) -> bool;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Pick the notifier the configuration asks for
///
/// Dry-run wins over everything else; otherwise `email.use_mailx` selects
/// between mailx delivery and the terminal.
pub fn notifier_from_config(config: &Config) -> Box<dyn Notifier> {
    if config.general.dry_run {
        return Box::new(DryRunNotifier);
    }

    if config.email.use_mailx {
        if config.email.to.is_empty() {
            log::warn!("email.use_mailx is set but email.to is empty; notifications will fail");
        }
        Box::new(
            MailxNotifier::new(config.email.to.clone(), config.email.from.clone())
                .with_command(config.email.mailx_command.clone()),
        )
    } else {
        Box::new(TerminalNotifier::new())
    }
}

/// Email delivery through a local `mailx` binary
///
/// Runs `mailx -s <subject> <recipient>` and writes a `From:` line followed
/// by the body to its stdin. Arguments are passed directly, not through a
/// shell.
pub struct MailxNotifier {
    recipient: String,
    sender: String,
    command: String,
}

impl MailxNotifier {
    /// Create a new mailx notifier
    pub fn new(recipient: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            sender: sender.into(),
            command: "mailx".to_string(),
        }
    }

    /// Use a different mailx-compatible executable
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    fn deliver(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        if self.recipient.is_empty() {
            return Err(NotifyError::NoRecipient);
        }

        let mut child = Command::new(&self.command)
            .arg("-s")
            .arg(subject)
            .arg(&self.recipient)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| NotifyError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // Stdin must be closed before waiting or mailx never sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => writeln!(stdin, "From: {}\n{}", self.sender, body),
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "child stdin unavailable",
            )),
        };

        let status = child.wait()?;
        written?;

        if !status.success() {
            return Err(NotifyError::ExitStatus {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

impl Notifier for MailxNotifier {
    fn send(&self, subject: &str, body: &str) -> bool {
        match self.deliver(subject, body) {
            Ok(()) => {
                log::debug!("Sent '{}' to {}", subject, self.recipient);
                true
            }
            Err(e) => {
                log::warn!("Failed to notify via {}: {}", self.name(), e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "mailx"
    }
}

/// Terminal/console notifier
///
/// Writes notifications to stderr (or stdout), optionally with a colored
/// subject line.
pub struct TerminalNotifier {
    /// Use stderr instead of stdout
    use_stderr: bool,
    /// Use colors (ANSI escape codes)
    use_colors: bool,
}

impl TerminalNotifier {
    /// Create a new terminal notifier
    pub fn new() -> Self {
        Self {
            use_stderr: true,
            use_colors: Self::supports_color(),
        }
    }

    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    fn format_message(&self, subject: &str, body: &str) -> String {
        let subject = if self.use_colors {
            // Bold red
            format!("\x1b[31m\x1b[1m{}\x1b[0m", subject)
        } else {
            subject.to_string()
        };

        format!("{}\n{}", subject, body.trim_end())
    }

    fn write_message(&self, message: &str) -> io::Result<()> {
        if self.use_stderr {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", message)
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", message)
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn send(&self, subject: &str, body: &str) -> bool {
        let message = self.format_message(subject, body);
        match self.write_message(&message) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to notify via {}: {}", self.name(), e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Notifier that only logs what it would send
///
/// Always reports success, so cooldowns behave as they would in production.
pub struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    fn send(&self, subject: &str, body: &str) -> bool {
        log::info!("[DRY RUN] Would send '{}': {}", subject, body.trim_end());
        true
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_notifier_creation() {
        let notifier = TerminalNotifier::new();
        assert_eq!(notifier.name(), "terminal");
        assert!(notifier.use_stderr);
    }

    #[test]
    fn test_terminal_format_no_color() {
        let notifier = TerminalNotifier {
            use_stderr: true,
            use_colors: false,
        };
        assert_eq!(
            notifier.format_message("Subject", "line one\nline two\n"),
            "Subject\nline one\nline two"
        );
    }

    #[test]
    fn test_terminal_send() {
        let notifier = TerminalNotifier {
            use_stderr: false,
            use_colors: false,
        };
        assert!(notifier.send("SystemMonitor: Test", "body"));
    }

    #[test]
    fn test_dry_run_always_succeeds() {
        let notifier = DryRunNotifier;
        assert!(notifier.send("subject", "body"));
        assert_eq!(notifier.name(), "dry-run");
    }

    #[test]
    fn test_mailx_without_recipient_fails() {
        let notifier = MailxNotifier::new("", "system-monitor@localhost");
        assert!(matches!(
            notifier.deliver("subject", "body"),
            Err(NotifyError::NoRecipient)
        ));
        assert!(!notifier.send("subject", "body"));
    }

    #[test]
    fn test_mailx_missing_binary_fails() {
        let notifier = MailxNotifier::new("ops@example.com", "system-monitor@localhost")
            .with_command("/nonexistent/bin/mailx");
        assert!(matches!(
            notifier.deliver("subject", "body"),
            Err(NotifyError::Spawn { .. })
        ));
        assert!(!notifier.send("subject", "body"));
    }

    #[cfg(unix)]
    #[test]
    fn test_mailx_exit_status() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");

        let write_script = |name: &str, contents: String| {
            let path = dir.path().join(name);
            std::fs::write(&path, contents).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        };

        let ok = write_script(
            "mailx-ok",
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{0}'\ncat >> '{0}'\n",
                capture.display()
            ),
        );
        let failing = write_script("mailx-fail", "#!/bin/sh\ncat > /dev/null\nexit 3\n".into());

        let notifier = MailxNotifier::new("ops@example.com", "monitor@host")
            .with_command(ok.display().to_string());
        assert!(notifier.send("SystemMonitor: CPU Temperature Alert", "Current: 85.00°C"));

        let captured = std::fs::read_to_string(&capture).unwrap();
        assert_eq!(
            captured,
            "-s\nSystemMonitor: CPU Temperature Alert\nops@example.com\n\
             From: monitor@host\nCurrent: 85.00°C\n"
        );

        let notifier = MailxNotifier::new("ops@example.com", "monitor@host")
            .with_command(failing.display().to_string());
        assert!(matches!(
            notifier.deliver("subject", "body"),
            Err(NotifyError::ExitStatus { .. })
        ));
        assert!(!notifier.send("subject", "body"));
    }

    #[test]
    fn test_notifier_selection() {
        let mut config = Config::default();
        assert_eq!(notifier_from_config(&config).name(), "mailx");

        config.email.use_mailx = false;
        assert_eq!(notifier_from_config(&config).name(), "terminal");

        config.general.dry_run = true;
        assert_eq!(notifier_from_config(&config).name(), "dry-run");
    }
}
