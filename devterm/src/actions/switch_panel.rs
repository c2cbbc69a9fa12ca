//! Toggle the sidebar panel
//!
//! Flips between the explorer and the assistant surface. A pure visibility
//! change: no data crosses panels and the store is untouched.

use crate::Terminal;
use tracing::debug;

impl Terminal {
    /// Flip the visible panel.
    pub fn toggle_panel(&mut self) {
        self.panel = self.panel.toggle();
        debug!(panel = self.panel.title(), "panel switched");
    }
}
