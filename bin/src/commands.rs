//! The line-oriented frontend.
//!
//! Reads one command per stdin line, applies it to the [`Terminal`], and
//! redraws. All semantics live in the core; this module only translates
//! lines into action calls.

use crate::device::UnavailableTransport;
use devterm::{Renderer, Terminal};
use devterm_device::DeviceTransport;
use std::io::{self, BufRead};

/// A parsed frontend command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Unlock the editing surface
    Edit,
    /// Commit the draft and lock
    Save,
    /// Append a line to the draft
    Type { text: String },
    /// Open (or reload) a named buffer
    Open { name: String },
    /// Activate a named buffer
    Switch { name: String },
    /// Toggle the sidebar panel
    Panel,
    /// Toggle the color theme
    Theme,
    /// Set the editor scroll offset
    Scroll { offset: f32 },
    /// Attempt a device connection
    Connect,
    /// Show the command list
    Help,
    /// Exit the frontend
    Quit,
}

impl Command {
    /// Parse a stdin line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or("");
        let rest = parts.next().map(str::trim).unwrap_or("");

        match keyword {
            "edit" => Ok(Command::Edit),
            "save" => Ok(Command::Save),
            "type" => Ok(Command::Type { text: rest.into() }),
            "open" if !rest.is_empty() => Ok(Command::Open { name: rest.into() }),
            "open" => Err("usage: open <name>".into()),
            "switch" if !rest.is_empty() => Ok(Command::Switch { name: rest.into() }),
            "switch" => Err("usage: switch <name>".into()),
            "panel" => Ok(Command::Panel),
            "theme" => Ok(Command::Theme),
            "scroll" => rest
                .parse()
                .map(|offset| Command::Scroll { offset })
                .map_err(|_| "usage: scroll <offset>".into()),
            "connect" => Ok(Command::Connect),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

const HELP: &str = "commands: edit, save, type <text>, open <name>, switch <name>, \
panel, theme, scroll <offset>, connect, help, quit";

/// Apply one command to the terminal. Returns `false` when the frontend
/// should exit.
pub async fn apply(
    command: Command,
    term: &mut Terminal,
    transport: &dyn DeviceTransport,
) -> bool {
    match command {
        Command::Edit => term.enter_edit_mode(),
        Command::Save => term.save_buffer(),
        Command::Type { text } => {
            let current = term.display_text();
            let draft = if current.is_empty() {
                text
            } else {
                format!("{current}\n{text}")
            };
            term.update_draft(draft);
        }
        Command::Open { name } => term.open_buffer(&name, ""),
        Command::Switch { name } => term.switch_buffer(&name),
        Command::Panel => term.toggle_panel(),
        Command::Theme => term.toggle_theme(),
        Command::Scroll { offset } => term.handle_scroll(offset),
        Command::Connect => term.connect_device(transport).await,
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }
    true
}

/// Run the frontend until stdin closes or the user quits.
pub async fn run(term: &mut Terminal, renderer: &mut impl Renderer) -> anyhow::Result<()> {
    let transport = UnavailableTransport;
    renderer.draw(&term.snapshot());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                if !apply(command, term, &transport).await {
                    break;
                }
                renderer.draw(&term.snapshot());
            }
            Err(message) => eprintln!("{message}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devterm::{Config, EditorMode};
    use devterm_device::test::FakeDevice;

    #[test]
    fn parses_bare_and_argument_commands() {
        assert_eq!(Command::parse("edit"), Ok(Command::Edit));
        assert_eq!(
            Command::parse("open boot.asm"),
            Ok(Command::Open {
                name: "boot.asm".into()
            })
        );
        assert_eq!(
            Command::parse("type     NOP"),
            Ok(Command::Type {
                text: "NOP".into()
            })
        );
        assert_eq!(
            Command::parse("scroll 42.5"),
            Ok(Command::Scroll { offset: 42.5 })
        );
    }

    #[test]
    fn rejects_missing_arguments_and_unknown_words() {
        assert!(Command::parse("open").is_err());
        assert!(Command::parse("switch").is_err());
        assert!(Command::parse("scroll sideways").is_err());
        assert!(Command::parse("compile").is_err());
    }

    #[tokio::test]
    async fn edit_type_save_flows_into_the_store() {
        let mut term = Terminal::new(&Config::default());
        let fake = FakeDevice::dev_board();

        assert!(apply(Command::Edit, &mut term, &fake).await);
        assert!(
            apply(
                Command::Type {
                    text: "RET".into()
                },
                &mut term,
                &fake
            )
            .await
        );
        assert!(apply(Command::Save, &mut term, &fake).await);

        assert_eq!(term.mode(), EditorMode::ReadOnly);
        assert!(term
            .buffers()
            .active_buffer()
            .content()
            .ends_with("    NOP\nRET"));
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut term = Terminal::new(&Config::default());
        let fake = FakeDevice::dev_board();
        assert!(!apply(Command::Quit, &mut term, &fake).await);
    }
}
