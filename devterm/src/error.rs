use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur during buffer store operations.
///
/// These indicate incorrect wiring in the frontend (referencing a buffer
/// that was never opened), not user mistakes. They are still distinct,
/// reportable conditions rather than silent no-ops: [`Terminal`](crate::Terminal)
/// converts them into console entries at its boundary.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
pub enum Error {
    /// No buffer is registered under the given name
    #[snafu(display("no buffer named {name:?}"))]
    BufferNotFound { name: String },

    /// Buffer names must be non-empty
    #[snafu(display("buffer name must be non-empty"))]
    EmptyBufferName,
}
