//! Enter edit mode
//!
//! Unlocks the editing surface for the active buffer. The edit session's
//! draft starts as a copy of the stored content; nothing is written back
//! until [`save_buffer`](crate::Terminal::save_buffer).

use crate::{EditSession, EditorMode, Terminal};
use tracing::debug;

impl Terminal {
    /// Transition `ReadOnly -> Editing`.
    ///
    /// Allowed unconditionally; no content change. Calling while already
    /// editing is a no-op and in particular does not reset the draft.
    pub fn enter_edit_mode(&mut self) {
        if self.mode == EditorMode::Editing {
            return;
        }
        debug!(buffer = self.buffers.active(), "entering edit mode");
        self.session = Some(EditSession::seeded(self.buffers.active_buffer().content()));
        self.mode = EditorMode::Editing;
        self.console.info("Mode: EDIT");
    }
}
