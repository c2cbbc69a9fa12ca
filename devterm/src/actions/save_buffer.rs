//! Save and lock
//!
//! Commits the live draft into the store and returns the surface to
//! read-only. The commit is mandatory and total -- no diffing, no partial
//! write -- and it happens before the mode flips.

use crate::{EditorMode, Terminal};
use tracing::debug;

impl Terminal {
    /// Transition `Editing -> ReadOnly`, committing the draft first.
    ///
    /// A no-op in `ReadOnly`; there is never anything to commit outside a
    /// session.
    pub fn save_buffer(&mut self) {
        let Some(session) = self.session.take() else {
            debug!("save ignored outside edit mode");
            return;
        };
        debug!(buffer = self.buffers.active(), "committing draft");
        // Commit strictly precedes the state flip.
        self.buffers.commit_active(session.into_draft());
        self.mode = EditorMode::ReadOnly;
        self.console.info("Mode: READ-ONLY (saved)");
    }
}

#[cfg(test)]
mod tests {
    use crate::{EditorMode, Terminal};

    #[test]
    fn commits_draft_and_locks() {
        let mut term = Terminal::test();
        term.enter_edit_mode();
        term.update_draft("A\nB\nC");
        term.save_buffer();

        assert_eq!(term.mode(), EditorMode::ReadOnly);
        assert_eq!(
            term.buffers().get("main.asm").expect("exists").content(),
            "A\nB\nC"
        );
    }

    #[test]
    fn edit_then_save_without_changes_round_trips() {
        let mut term = Terminal::test();
        let before = term.buffers().active_buffer().content().to_string();

        term.enter_edit_mode();
        term.save_buffer();

        assert_eq!(term.mode(), EditorMode::ReadOnly);
        assert_eq!(term.buffers().active_buffer().content(), before);
    }

    #[test]
    fn save_in_read_only_is_a_no_op() {
        let mut term = Terminal::test();
        let entries_before = term.console().len();
        term.save_buffer();

        assert_eq!(term.mode(), EditorMode::ReadOnly);
        assert_eq!(term.console().len(), entries_before);
    }

    #[test]
    fn unsaved_draft_stays_out_of_the_store() {
        let mut term = Terminal::test();
        term.enter_edit_mode();
        term.update_draft("draft only");

        assert_ne!(term.buffers().active_buffer().content(), "draft only");
        term.save_buffer();
        assert_eq!(term.buffers().active_buffer().content(), "draft only");
    }
}
