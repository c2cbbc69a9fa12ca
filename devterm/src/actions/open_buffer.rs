//! Open a buffer
//!
//! Registers a named buffer in the store, appending it to the tab list.
//! Opening an existing name replaces its content in place, matching the
//! unguarded reload behavior recorded as an open question in DESIGN.md.

use crate::Terminal;
use tracing::{debug, warn};

impl Terminal {
    /// Open (or reload) the named buffer with the given content.
    ///
    /// The active pointer does not move; pair with
    /// [`switch_buffer`](Terminal::switch_buffer) to show the new buffer.
    pub fn open_buffer(&mut self, name: &str, content: impl Into<String>) {
        match self.buffers.open_buffer(name, content) {
            Ok(()) => {
                debug!(name, "buffer opened");
                self.console.info(format!("Loaded {name}"));
            }
            Err(err) => {
                warn!(name, %err, "open rejected");
                self.console.error(err.to_string());
            }
        }
    }
}
