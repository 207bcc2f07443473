//! Terminal rendering of wizard markdown.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as is.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADING: &str = "\x1b[32m";
const ALERT: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.write_markdown(&mut io::stdout().lock(), markdown)
    }

    /// Print the input prompt without a trailing newline
    pub fn prompt(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }

    /// Print a one-line error notice
    pub fn error(&self, message: &str) -> Result<()> {
        self.write_error(&mut io::stdout().lock(), message)
    }

    fn write_markdown<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        // Step titles keep their hashes so the step boundary stays visible.
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{HEADING}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, out: &mut W, message: &str) -> Result<()> {
        if self.rich_enabled {
            writeln!(out, "{ALERT}Error:{RESET} {message}")?;
        } else {
            writeln!(out, "Error: {message}")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
