//! Plain-text renderer.
//!
//! Draws a [`ViewSnapshot`] as text: panel header, tab list, numbered
//! editor lines, mode status, and the console tail. This is the whole
//! rendering contract -- the core hands over plain data and reads nothing
//! back.

use devterm::{Panel, Renderer, ViewSnapshot};
use std::io::{self, Write};

/// Console entries shown below the editor.
const CONSOLE_TAIL: usize = 5;

/// Renderer writing the snapshot to any [`Write`] sink.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_inner(&mut self, snapshot: &ViewSnapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "== {} == theme: {}",
            snapshot.panel_title,
            snapshot.theme.as_str()
        )?;

        match snapshot.panel {
            Panel::Explorer => {
                let tabs: Vec<String> = snapshot
                    .tabs
                    .iter()
                    .map(|tab| {
                        if tab.active {
                            format!("[{}]", tab.name)
                        } else {
                            tab.name.clone()
                        }
                    })
                    .collect();
                writeln!(self.out, "files: {}", tabs.join(" "))?;
            }
            Panel::Assistant => {
                writeln!(self.out, "(assistant chat)")?;
            }
        }

        writeln!(self.out, "----")?;
        let width = snapshot
            .line_numbers
            .last()
            .map_or(1, |n| n.to_string().len());
        for (number, line) in snapshot.line_numbers.iter().zip(snapshot.text.split('\n')) {
            writeln!(self.out, "{number:>width$} | {line}")?;
        }
        writeln!(
            self.out,
            "---- mode: {} [{}]",
            snapshot.mode.as_str(),
            snapshot.mode_action_label
        )?;

        let skip = snapshot.console.len().saturating_sub(CONSOLE_TAIL);
        for entry in &snapshot.console[skip..] {
            writeln!(
                self.out,
                "[{}] {:<5} {}",
                entry.display_time(),
                entry.level().as_str(),
                entry.message()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, snapshot: &ViewSnapshot) {
        if let Err(err) = self.draw_inner(snapshot) {
            tracing::warn!(%err, "renderer write failed");
        }
    }
}
