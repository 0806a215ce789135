//! # Sinks
//!
//! A sink is the place a formatted log line ends up. The [`Logger`] never writes
//! to a stream or file itself: it formats the line, picks the sink routed for the
//! line's severity and hands the text over through the [`LogSink`] trait.
//!
//! ## Implementations
//!
//! - [`null::NullSink`]: drops everything
//! - [`console::ConsoleSink`]: standard output or standard error, with optional
//!   red/yellow styling for errors and warnings
//! - [`file::FileSink`]: a single file, truncated on open, flushed on every line
//! - [`memory::MemorySink`]: keeps lines in memory, for tests and embedding
//!
//! Sinks receive the line without a trailing newline. Each implementation decides
//! how to terminate it and whether the severity changes its presentation.
//!
//! [`Logger`]: crate::logger::Logger

use crate::model::{ColorMode, Severity};

pub mod console;
pub mod file;
pub mod memory;
pub mod null;

pub use console::{ConsoleSink, Stream};
pub use file::FileSink;
pub use memory::MemorySink;
pub use null::NullSink;

/// An output destination for formatted log lines.
///
/// Implementations must tolerate concurrent calls and must never panic: a sink
/// that cannot write drops the line.
pub trait LogSink: Send + Sync {
    /// Write one formatted line.
    fn log(&self, severity: Severity, line: &str);

    /// Change how the sink styles lines. Sinks without styling ignore this.
    fn set_color_mode(&self, _mode: ColorMode) {}
}
