//! R1.IO - little-endian byte plumbing for verification payloads
//!
//! [`BinaryWriter`] fills a buffer whose size is known up front, and
//! [`MemoryReader`] walks a borrowed slice without ever reading past its end.

mod binary_writer;
mod memory_reader;

pub use binary_writer::BinaryWriter;
pub use memory_reader::MemoryReader;

/// Errors raised by the writer and reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IoError {
    #[error("io: unexpected end of data at {position} (wanted {wanted} more bytes)")]
    UnexpectedEof { position: usize, wanted: usize },

    #[error("io: writing {wanted} bytes at {position} exceeds capacity {capacity}")]
    CapacityExceeded {
        position: usize,
        wanted: usize,
        capacity: usize,
    },
}

pub type IoResult<T> = Result<T, IoError>;
