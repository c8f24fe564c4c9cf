//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;
pub use memory::MemoryAppender;
pub use writer::WriterAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
