//! Update the edit draft
//!
//! The frontend mirrors the editing surface's content here on every input
//! event. The draft replaces wholesale, matching a surface that owns its
//! full text.

use crate::Terminal;
use tracing::trace;

impl Terminal {
    /// Replace the session draft with the surface's current text.
    ///
    /// Ignored in read-only mode: the surface is locked, so any input event
    /// arriving anyway indicates frontend miswiring worth a trace line.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        match &mut self.session {
            Some(session) => session.set_draft(text),
            None => trace!("draft update ignored in read-only mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Terminal;

    #[test]
    fn draft_tracks_the_latest_update() {
        let mut term = Terminal::test();
        term.enter_edit_mode();
        term.update_draft("one");
        term.update_draft("two");

        assert_eq!(term.display_text(), "two");
    }

    #[test]
    fn update_in_read_only_changes_nothing() {
        let mut term = Terminal::test();
        let before = term.display_text().to_string();
        term.update_draft("ignored");

        assert_eq!(term.display_text(), before);
        assert_eq!(term.buffers().active_buffer().content(), before);
    }

    #[test]
    fn snapshot_shows_the_draft_while_editing() {
        let mut term = Terminal::test();
        term.enter_edit_mode();
        term.update_draft("A\nB\nC");

        let snapshot = term.snapshot();
        assert_eq!(snapshot.text, "A\nB\nC");
        assert_eq!(snapshot.line_numbers, [1, 2, 3]);
    }
}
