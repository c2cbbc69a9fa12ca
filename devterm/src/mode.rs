//! Editing mode state machine.
//!
//! Two states, no more: the terminal is either locked ([`EditorMode::ReadOnly`],
//! the initial state) or the active buffer is being edited
//! ([`EditorMode::Editing`]). While editing, the working text lives in an
//! [`EditSession`] and reaches the store only on save -- there is no partial
//! or incremental commit.

/// Editor modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// The editing surface is locked; content comes from the store
    ReadOnly,
    /// The editing surface is writable; content comes from the session draft
    Editing,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::ReadOnly => "read-only",
            EditorMode::Editing => "editing",
        }
    }

    /// Label for the mode-toggle control: the action the toggle performs next.
    pub fn action_label(&self) -> &'static str {
        match self {
            EditorMode::ReadOnly => "Edit",
            EditorMode::Editing => "Save",
        }
    }
}

/// The transient writable state attached to the active buffer.
///
/// At most one session exists, and only while the mode is
/// [`EditorMode::Editing`]. The draft starts as a copy of the active
/// buffer's content and absorbs every edit until it is committed back.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: String,
}

impl EditSession {
    /// Start a session seeded with the buffer's current content.
    pub fn seeded(content: impl Into<String>) -> Self {
        Self {
            draft: content.into(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Consume the session, yielding the draft for commit.
    pub fn into_draft(self) -> String {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_labels_name_the_next_action() {
        assert_eq!(EditorMode::ReadOnly.action_label(), "Edit");
        assert_eq!(EditorMode::Editing.action_label(), "Save");
    }

    #[test]
    fn session_starts_from_seed() {
        let session = EditSession::seeded("_start:");
        assert_eq!(session.draft(), "_start:");
    }

    #[test]
    fn draft_replaces_wholesale() {
        let mut session = EditSession::seeded("old");
        session.set_draft("new");
        assert_eq!(session.into_draft(), "new");
    }
}
