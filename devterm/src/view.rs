//! Derived view state.
//!
//! Nothing in this module is authoritative: a [`ViewSnapshot`] is a pure
//! function of the terminal's state, recomputed on demand and handed to a
//! [`Renderer`] whole. The renderer draws it and reports nothing back except
//! the scroll echo handled by [`Viewport`](crate::Viewport).
//!
//! # Rendering Flow
//!
//! After every state transition:
//! 1. The frontend calls [`Terminal::snapshot`](crate::Terminal::snapshot)
//! 2. The snapshot carries text, gutter numbers, tabs, panel, theme, console
//! 3. The frontend passes it to its [`Renderer`]

use crate::{ConsoleEntry, EditorMode, Panel, Theme};

/// One selectable entry in the buffer tab list.
///
/// Exactly one tab in any snapshot carries the active marker, matching the
/// store's active pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferTab {
    pub name: String,
    pub active: bool,
}

/// Everything a renderer needs to redraw the terminal.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// Text shown on the editing surface: the live draft while editing,
    /// stored content otherwise
    pub text: String,
    /// Gutter line numbers, `1..=N` for the display text
    pub line_numbers: Vec<usize>,
    /// Buffer list in display order
    pub tabs: Vec<BufferTab>,
    /// Current editing mode
    pub mode: EditorMode,
    /// Label for the mode-toggle control ("Edit" or "Save")
    pub mode_action_label: &'static str,
    /// Visible sidebar panel
    pub panel: Panel,
    /// Title label for the visible panel
    pub panel_title: &'static str,
    /// Current color theme
    pub theme: Theme,
    /// Gutter scroll offset; always equals the editor's
    pub gutter_scroll: f32,
    /// Console entries in append order
    pub console: Vec<ConsoleEntry>,
}

impl ViewSnapshot {
    /// The name on the single active tab.
    pub fn active_tab(&self) -> Option<&str> {
        self.tabs
            .iter()
            .find(|tab| tab.active)
            .map(|tab| tab.name.as_str())
    }
}

/// Gutter numbering for a display text.
///
/// Split-by-separator semantics: zero separators still yield one segment,
/// so the empty text numbers a single line.
pub fn line_numbers(text: &str) -> Vec<usize> {
    (1..=text.split('\n').count()).collect()
}

/// Rendering capability supplied by the frontend.
///
/// The core invokes this with plain data after relevant state changes; it
/// never reads back from the renderer.
pub trait Renderer {
    fn draw(&mut self, snapshot: &ViewSnapshot);
}
