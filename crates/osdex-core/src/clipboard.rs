//! Clipboard capability — the core decides WHAT text and message to hand
//! over; an injected implementation does the copying.

use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::types::Field;

/// Environment-provided copy capability.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The confirmation message shown after copying one field.
pub fn confirmation(field: Field) -> String {
    format!("{field} copiado!")
}

/// Pipes text into the first clipboard tool found on the system
/// (`wl-copy`, `pbcopy`, `xclip`).
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(
                "if command -v wl-copy >/dev/null; then wl-copy; \
                 elif command -v pbcopy >/dev/null; then pbcopy; \
                 elif command -v xclip >/dev/null; then xclip -selection clipboard; \
                 else exit 1; fi",
            )
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        anyhow::ensure!(status.success(), "no clipboard tool available");
        Ok(())
    }
}

/// In-memory clipboard for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
