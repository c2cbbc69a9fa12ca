//! The terminal context object.
//!
//! [`Terminal`] owns every piece of state the components share: the
//! buffer store, the mode and its edit session, panel and theme, the
//! viewport, and the console. It is constructed once by the entry point and
//! passed explicitly -- there are no ambient globals.
//!
//! State changes happen through the action methods in [`crate::actions`];
//! each one mutates, logs the transition, and leaves the next
//! [`snapshot`](Terminal::snapshot) to describe the result.

use crate::{
    line_numbers, Buffer, BufferStore, BufferTab, Config, Console, EditSession, EditorMode, Panel,
    Theme, ViewSnapshot, Viewport,
};
use devterm_device::DeviceFilter;

/// Name of the buffer every terminal starts with.
pub(crate) const ENTRY_BUFFER_NAME: &str = "main.asm";

/// Assembly entry stub seeded into the default buffer.
pub(crate) const ENTRY_BUFFER_CONTENT: &str = "; MULTIX Asm Entry\n\n_start:\n    NOP";

/// Main terminal entity.
///
/// Holds all authoritative state; everything view-shaped is derived from it
/// in [`snapshot`](Terminal::snapshot). The mode/session pair maintains one
/// invariant: a session exists exactly while the mode is
/// [`EditorMode::Editing`].
pub struct Terminal {
    /// Buffer storage with display order and active pointer
    pub(crate) buffers: BufferStore,
    /// Current editing mode
    pub(crate) mode: EditorMode,
    /// Live edit session; `Some` iff `mode == Editing`
    pub(crate) session: Option<EditSession>,
    /// Visible sidebar panel
    pub(crate) panel: Panel,
    /// Color theme
    pub(crate) theme: Theme,
    /// Editor scroll state
    pub(crate) viewport: Viewport,
    /// In-terminal console log
    pub(crate) console: Console,
    /// Vendor allowlist handed to the device chooser
    pub(crate) device_filter: DeviceFilter,
}

impl Terminal {
    /// Create a terminal seeded with the default entry buffer.
    pub fn new(config: &Config) -> Self {
        Self::with_buffer(
            Buffer::new(ENTRY_BUFFER_NAME, ENTRY_BUFFER_CONTENT),
            config,
        )
    }

    /// Create a terminal whose store starts with the given buffer.
    pub fn with_buffer(first: Buffer, config: &Config) -> Self {
        let mut console = Console::new();
        console.sys("Terminal initialized.");
        tracing::debug!(buffer = first.name(), "terminal created");

        Self {
            buffers: BufferStore::new(first),
            mode: EditorMode::ReadOnly,
            session: None,
            panel: config.panel,
            theme: config.theme,
            viewport: Viewport::new(),
            console,
            device_filter: DeviceFilter::vendors(config.device.vendor_ids.clone()),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn buffers(&self) -> &BufferStore {
        &self.buffers
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Text currently on the editing surface.
    ///
    /// The live draft while editing, the stored content otherwise. Unsaved
    /// edits never appear in the store until commit.
    pub fn display_text(&self) -> &str {
        match &self.session {
            Some(session) => session.draft(),
            None => self.buffers.active_buffer().content(),
        }
    }

    /// Recompute the full view description from current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let text = self.display_text().to_string();
        let tabs = self
            .buffers
            .buffer_names()
            .iter()
            .map(|name| BufferTab {
                name: name.clone(),
                active: name == self.buffers.active(),
            })
            .collect();

        ViewSnapshot {
            line_numbers: line_numbers(&text),
            text,
            tabs,
            mode: self.mode,
            mode_action_label: self.mode.action_label(),
            panel: self.panel,
            panel_title: self.panel.title(),
            theme: self.theme,
            gutter_scroll: self.viewport.gutter_scroll_top(),
            console: self.console.entries().to_vec(),
        }
    }

    /// Terminal with default config and seed buffer, for tests.
    #[cfg(test)]
    pub(crate) fn test() -> Self {
        Self::new(&Config::default())
    }
}
