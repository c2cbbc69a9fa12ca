//! Handle editor scroll events
//!
//! The editing surface reports its scroll offset here; the gutter's offset
//! is derived from it. The coupling is one-directional -- there is no way
//! to scroll the gutter independently.

use crate::Terminal;
use tracing::trace;

impl Terminal {
    /// Record the editing surface's vertical scroll offset.
    pub fn handle_scroll(&mut self, scroll_top: f32) {
        trace!(scroll_top, "scroll");
        self.viewport.set_scroll(scroll_top);
    }
}

#[cfg(test)]
mod tests {
    use crate::Terminal;

    #[test]
    fn gutter_stays_in_lockstep_with_the_editor() {
        let mut term = Terminal::test();
        term.handle_scroll(96.0);
        assert_eq!(term.snapshot().gutter_scroll, 96.0);

        term.handle_scroll(12.5);
        assert_eq!(term.snapshot().gutter_scroll, 12.5);
    }
}
