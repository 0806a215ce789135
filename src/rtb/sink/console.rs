use super::LogSink;
use crate::model::{ColorMode, Severity};
use console::Style;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Which standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Writes lines to standard output or standard error.
///
/// Errors are wrapped in red and warnings in yellow when styling is on. Info
/// lines are always written as-is.
#[derive(Debug)]
pub struct ConsoleSink {
    stream: Stream,
    color: Mutex<ColorMode>,
}

impl ConsoleSink {
    pub fn new(stream: Stream) -> Self {
        Self {
            stream,
            color: Mutex::new(ColorMode::Auto),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    pub fn with_color_mode(self, mode: ColorMode) -> Self {
        self.set_color_mode(mode);
        self
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    pub fn color_mode(&self) -> ColorMode {
        *self.color.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn use_color(&self) -> bool {
        match self.color_mode() {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => match self.stream {
                Stream::Stdout => console::colors_enabled(),
                Stream::Stderr => console::colors_enabled_stderr(),
            },
        }
    }

    /// The exact text written for `line`, newline excluded.
    pub fn render(&self, severity: Severity, line: &str) -> String {
        let style = match severity {
            Severity::Error => Style::new().red(),
            Severity::Warning => Style::new().yellow(),
            Severity::Info => return line.to_string(),
        };
        if !self.use_color() {
            return line.to_string();
        }
        style.force_styling(true).apply_to(line).to_string()
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, severity: Severity, line: &str) {
        let mut text = self.render(severity, line);
        text.push('\n');
        // Write failures (closed pipe and the like) are dropped.
        let _ = match self.stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|_| out.flush())
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(text.as_bytes()).and_then(|_| err.flush())
            }
        };
    }

    fn set_color_mode(&self, mode: ColorMode) {
        *self.color.lock().unwrap_or_else(PoisonError::into_inner) = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_is_never_styled() {
        let sink = ConsoleSink::stdout().with_color_mode(ColorMode::Always);
        assert_eq!(sink.render(Severity::Info, "[Info] 10"), "[Info] 10");
    }

    #[test]
    fn errors_are_red_when_forced() {
        let sink = ConsoleSink::stderr().with_color_mode(ColorMode::Always);
        let out = sink.render(Severity::Error, "[Error] boom");
        assert!(out.starts_with("\u{1b}[31m"));
        assert!(out.contains("[Error] boom"));
        assert!(out.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn warnings_are_yellow_when_forced() {
        let sink = ConsoleSink::stderr().with_color_mode(ColorMode::Always);
        let out = sink.render(Severity::Warning, "[Warning] careful");
        assert!(out.starts_with("\u{1b}[33m"));
        assert!(out.contains("[Warning] careful"));
    }

    #[test]
    fn never_disables_styling() {
        let sink = ConsoleSink::stderr().with_color_mode(ColorMode::Never);
        assert_eq!(sink.render(Severity::Error, "[Error] x"), "[Error] x");
        assert_eq!(sink.color_mode(), ColorMode::Never);
    }
}
