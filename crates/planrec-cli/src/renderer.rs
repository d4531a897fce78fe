//! Markdown reports for the terminal
//!
//! Failed-plan summaries are markdown. With color they are styled by a
//! termimad skin; with `--no-color` the markdown source is printed as is.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    /// `None` means plain output
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(report_skin),
        }
    }

    /// Render markdown to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        self.render_to(markdown, &mut stdout.lock())
    }

    pub fn render_to<W: Write + ?Sized>(&self, markdown: &str, out: &mut W) -> Result<()> {
        match &self.skin {
            Some(skin) => write!(out, "{}", skin.text(markdown, None))?,
            None => out.write_all(markdown.as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}

fn report_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Blue);
    // Failing stages are emphasized in bold.
    skin.bold.set_fg(Color::Red);
    skin.italic.set_fg(Color::DarkGrey);
    skin.inline_code.set_fg(Color::Yellow);
    skin
}
