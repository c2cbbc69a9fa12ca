//! Buffer storage and management.
//!
//! Provides centralized buffer management with HashMap-based storage plus an
//! explicit insertion order, which is also the display order of the tab
//! list. Exactly one buffer is active at any time and the active name always
//! resolves, so every view derivation can index the store without a missing
//! case.

use crate::{error::Result, Buffer, Error};
use rustc_hash::FxHashMap;

/// Central buffer storage.
///
/// Name-keyed map with insertion-ordered display list and an active pointer.
/// Constructed with its first buffer so the two invariants -- at least one
/// buffer, active name present -- hold from the start.
#[derive(Debug, Clone)]
pub struct BufferStore {
    /// All buffers indexed by name
    buffers: FxHashMap<String, Buffer>,
    /// Display order (insertion order)
    order: Vec<String>,
    /// Name of the active buffer; always a key of `buffers`
    active: String,
}

impl BufferStore {
    /// Create a store holding `first`, which becomes the active buffer.
    pub fn new(first: Buffer) -> Self {
        let active = first.name().to_string();
        let mut buffers = FxHashMap::default();
        buffers.insert(active.clone(), first);
        Self {
            buffers,
            order: vec![active.clone()],
            active,
        }
    }

    /// Open a buffer, inserting it at the end of the display order.
    ///
    /// Re-opening an existing name overwrites that buffer's content in place;
    /// display position and the active pointer are unchanged.
    pub fn open_buffer(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyBufferName);
        }
        if let Some(existing) = self.buffers.get_mut(name) {
            tracing::debug!(name, "reopening existing buffer, content replaced");
            existing.set_content(content.into());
            return Ok(());
        }
        self.buffers
            .insert(name.to_string(), Buffer::new(name, content));
        self.order.push(name.to_string());
        Ok(())
    }

    /// Get a buffer by name.
    pub fn get(&self, name: &str) -> Result<&Buffer> {
        self.buffers.get(name).ok_or_else(|| Error::BufferNotFound {
            name: name.to_string(),
        })
    }

    /// Move the active pointer.
    ///
    /// Content is untouched; on [`Error::BufferNotFound`] the store is
    /// unchanged, including the active pointer.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.buffers.contains_key(name) {
            return Err(Error::BufferNotFound {
                name: name.to_string(),
            });
        }
        self.active = name.to_string();
        Ok(())
    }

    /// Overwrite a buffer's content unconditionally.
    ///
    /// This is the only content-mutation path; there is no partial write.
    pub fn commit(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        let buffer = self
            .buffers
            .get_mut(name)
            .ok_or_else(|| Error::BufferNotFound {
                name: name.to_string(),
            })?;
        buffer.set_content(content.into());
        Ok(())
    }

    /// Overwrite the active buffer's content.
    ///
    /// Infallible form of [`commit`](Self::commit): the active name always
    /// resolves.
    pub fn commit_active(&mut self, content: impl Into<String>) {
        let buffer = self
            .buffers
            .get_mut(&self.active)
            .expect("active buffer present in store");
        buffer.set_content(content.into());
    }

    /// Whether a buffer with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.buffers.contains_key(name)
    }

    /// Buffer names in display order.
    pub fn buffer_names(&self) -> &[String] {
        &self.order
    }

    /// Name of the active buffer.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// The active buffer itself.
    pub fn active_buffer(&self) -> &Buffer {
        // Invariant: `active` is always a key of `buffers`.
        self.buffers
            .get(&self.active)
            .expect("active buffer present in store")
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
