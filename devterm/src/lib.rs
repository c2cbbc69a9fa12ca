//! Core of the devterm development terminal.
//!
//! Everything here is plain state plus pure derivations: named text buffers
//! in a [`BufferStore`], a two-state editing mode, an append-only
//! [`Console`], and a [`ViewSnapshot`] recomputed from all of it. Rendering
//! and the hardware channel are capabilities supplied by the frontend; the
//! core never touches a screen or a device directly.

pub mod actions;
mod buffer;
mod buffer_store;
mod config;
mod console;
pub mod error;
mod mode;
mod panel;
mod terminal;
mod view;
mod viewport;

pub use buffer::Buffer;
pub use buffer_store::BufferStore;
pub use config::{Config, DeviceConfig};
pub use console::{Console, ConsoleEntry, ConsoleLevel};
pub use error::{Error, Result};
pub use mode::{EditSession, EditorMode};
pub use panel::{Panel, Theme};
pub use terminal::Terminal;
pub use view::{line_numbers, BufferTab, Renderer, ViewSnapshot};
pub use viewport::Viewport;
