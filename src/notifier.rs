use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use webbrowser::Browser;

use crate::error::{Result, SoundtrackError};

/// Where user-facing output goes: text on screen, URLs in a browser
pub trait Notifier {
    fn show(&mut self, text: &str) -> Result<()>;
    fn open_url(&mut self, url: &str) -> Result<()>;

    /// Error lines. Defaults to plain `show`.
    fn warn(&mut self, text: &str) -> Result<()> {
        self.show(text)
    }
}

/// Writes to stdout and hands URLs to the system browser
pub struct TerminalNotifier<W: Write> {
    out: W,
    styled: bool,
}

impl TerminalNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_tty();
        Self { out, styled }
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out, styled: false }
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        if self.styled {
            writeln!(self.out, "{}", text.red())?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        if !Browser::is_available() {
            tracing::warn!(url, "no browser available");
            return Err(SoundtrackError::Browser {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no browser available"),
            });
        }
        tracing::info!(url, "opening in browser");
        webbrowser::open(url).map_err(|source| SoundtrackError::Browser {
            url: url.to_string(),
            source,
        })
    }
}

/// Notifier that keeps everything in memory, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub lines: Vec<String>,
    pub opened: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All shown text joined with newlines
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}
