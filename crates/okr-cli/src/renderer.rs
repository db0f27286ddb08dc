//! Terminal rendering module for rich markdown output
//!
//! Session output is markdown produced by the core display types. With colors
//! enabled it is rendered through termimad; otherwise it is printed as is.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    card_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        // The suggestion card stands out from the key result list
        let mut card_skin = MadSkin::default();
        card_skin.paragraph.set_fg(Color::Magenta);
        card_skin.bold.set_fg(Color::Magenta);

        Self {
            rich_enabled,
            skin,
            card_skin,
        }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}\x1b[0m")?;
                } else if let Some(card) = line.strip_prefix('>') {
                    writeln!(out, "│{}", self.card_skin.inline(card))?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
            if !markdown.ends_with('\n') {
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Render a message to stderr without styling
    pub fn render_error(&self, message: &str) {
        let message = message.trim_end();
        if self.rich_enabled {
            eprintln!("\x1b[31m{message}\x1b[0m");
        } else {
            eprintln!("{message}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
