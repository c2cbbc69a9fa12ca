//! Named in-memory text documents.

/// A named text document held entirely in memory.
///
/// Content is a plain newline-delimited string. Buffers are created when the
/// store is seeded or a file is opened, mutated only through
/// [`BufferStore::commit`](crate::BufferStore::commit), and never destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    name: String,
    content: String,
}

impl Buffer {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Number of display lines.
    ///
    /// Split-by-separator semantics: a string with no newline is one line,
    /// so the empty buffer still counts as one.
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }
}
