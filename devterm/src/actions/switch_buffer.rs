//! Switch the active buffer
//!
//! Moves the active pointer to another open buffer. If an edit session is
//! live, its draft is committed to the outgoing buffer first and the session
//! is re-seeded from the incoming one -- switching never discards edits.
//! The commit-then-switch rule is the pending stakeholder question recorded
//! in DESIGN.md; the alternative loses work silently.

use crate::{EditSession, Error, Terminal};
use tracing::{debug, warn};

impl Terminal {
    /// Activate the named buffer.
    ///
    /// An unknown name is reported as a console error and leaves mode,
    /// session, and store untouched. Switching to the already-active buffer
    /// is a no-op.
    pub fn switch_buffer(&mut self, name: &str) {
        if name == self.buffers.active() {
            return;
        }
        if !self.buffers.contains(name) {
            let err = Error::BufferNotFound {
                name: name.to_string(),
            };
            warn!(name, "switch to unknown buffer rejected");
            self.console.error(err.to_string());
            return;
        }

        if let Some(session) = &self.session {
            debug!(
                from = self.buffers.active(),
                to = name,
                "committing draft before switch"
            );
            self.buffers.commit_active(session.draft().to_owned());
        }

        self.buffers
            .set_active(name)
            .expect("presence checked above");

        if self.session.is_some() {
            self.session = Some(EditSession::seeded(self.buffers.active_buffer().content()));
        }
        self.console.info(format!("Switched to {name}"));
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConsoleLevel, EditorMode, Terminal};

    fn two_buffer_term() -> Terminal {
        let mut term = Terminal::test();
        term.open_buffer("boot.asm", "; boot");
        term
    }

    #[test]
    fn switch_moves_the_active_marker() {
        let mut term = two_buffer_term();
        term.switch_buffer("boot.asm");

        assert_eq!(term.buffers().active(), "boot.asm");
        assert_eq!(term.snapshot().active_tab(), Some("boot.asm"));
        assert_eq!(
            term.snapshot().tabs.iter().filter(|t| t.active).count(),
            1
        );
    }

    #[test]
    fn unknown_name_is_reported_and_changes_nothing() {
        let mut term = two_buffer_term();
        let entries_before = term.console().len();
        term.switch_buffer("missing.asm");

        assert_eq!(term.buffers().active(), "main.asm");
        assert_eq!(term.console().len(), entries_before + 1);
        let last = term.console().entries().last().expect("entry");
        assert_eq!(last.level(), ConsoleLevel::Error);
        assert_eq!(last.message(), "no buffer named \"missing.asm\"");
    }

    #[test]
    fn switching_while_editing_commits_the_draft_first() {
        let mut term = two_buffer_term();
        term.enter_edit_mode();
        term.update_draft("edited main");
        term.switch_buffer("boot.asm");

        assert_eq!(
            term.buffers().get("main.asm").expect("exists").content(),
            "edited main"
        );
        // Mode survives the switch; the draft now mirrors the new buffer.
        assert_eq!(term.mode(), EditorMode::Editing);
        assert_eq!(term.display_text(), "; boot");
    }

    #[test]
    fn switch_to_active_buffer_is_silent() {
        let mut term = two_buffer_term();
        let entries_before = term.console().len();
        term.switch_buffer("main.asm");
        assert_eq!(term.console().len(), entries_before);
    }
}
