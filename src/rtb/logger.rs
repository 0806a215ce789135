//! # Logger
//!
//! The [`Logger`] routes each of the three severities to one sink. Every call
//! produces exactly one line:
//!
//! ```text
//! [Error] 10
//! [Warning] Disk: 93% full
//! [Info] 2026-03-01 12:00:00 started
//! ```
//!
//! The label (second form) is optional, the timestamp is off unless enabled.
//!
//! ## Routing
//!
//! By default errors and warnings go to standard error and info goes to standard
//! output. Any severity can be moved to [`SinkKind::Null`], [`SinkKind::Stdout`],
//! [`SinkKind::Stderr`] or [`SinkKind::File`].
//!
//! There is only ever one file sink per logger. It is created the first time a
//! severity is routed to `File`, and every severity routed there shares it.
//! Changing the file path reopens that shared sink, so all of them move together.
//!
//! ## Failure handling
//!
//! Logging never fails from the caller's point of view. If the log file cannot
//! be opened the problem is reported as an error line on the standard-error sink
//! and lines routed to the file are dropped until a later path change succeeds.
//!
//! ## Instances
//!
//! Create a [`Logger`] and pass it around, or use [`Logger::global`] for the
//! single process-wide instance. Tests inject their own console sinks with
//! [`Logger::with_console_sinks`].

use crate::config::{LoggerConfig, DEFAULT_LOG_FILE};
use crate::model::{ColorMode, Severity, SinkKind};
use crate::sink::{ConsoleSink, FileSink, LogSink, NullSink};
use chrono::Local;
use once_cell::sync::Lazy;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// Build one log line, without the trailing newline.
pub fn format_line(
    severity: Severity,
    timestamp: Option<&str>,
    label: Option<&str>,
    value: &str,
) -> String {
    let mut line = format!("[{}] ", severity.prefix());
    if let Some(ts) = timestamp {
        line.push_str(ts);
        line.push(' ');
    }
    if let Some(label) = label {
        line.push_str(label);
        line.push_str(": ");
    }
    line.push_str(value);
    line
}

/// Current local time in the format used by log lines.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

struct Route {
    kind: SinkKind,
    sink: Arc<dyn LogSink>,
}

struct Inner {
    stdout: Arc<dyn LogSink>,
    stderr: Arc<dyn LogSink>,
    null: Arc<dyn LogSink>,
    file: Option<Arc<FileSink>>,
    file_path: PathBuf,
    error: Route,
    warning: Route,
    info: Route,
    timestamps: bool,
    color: ColorMode,
}

impl Inner {
    fn route(&self, severity: Severity) -> &Route {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }

    fn route_mut(&mut self, severity: Severity) -> &mut Route {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
        }
    }

    fn report(&self, message: &str) {
        let line = format_line(Severity::Error, None, None, message);
        self.stderr.log(Severity::Error, &line);
    }

    /// The shared file sink, opened on first use.
    fn file_sink(&mut self) -> Arc<FileSink> {
        if let Some(file) = &self.file {
            return Arc::clone(file);
        }
        let file = Arc::new(FileSink::new(self.file_path.clone()));
        if let Err(e) = file.open() {
            self.report(&e.to_string());
        }
        self.file = Some(Arc::clone(&file));
        file
    }

    fn sink_for(&mut self, kind: SinkKind) -> Arc<dyn LogSink> {
        match kind {
            SinkKind::Null => Arc::clone(&self.null),
            SinkKind::Stdout => Arc::clone(&self.stdout),
            SinkKind::Stderr => Arc::clone(&self.stderr),
            SinkKind::File => {
                let file: Arc<dyn LogSink> = self.file_sink();
                file
            }
        }
    }
}

/// Routes error, warning and info messages to their sinks.
pub struct Logger {
    inner: Mutex<Inner>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A logger with default routing that writes files to `rtb.log`.
    pub fn new() -> Self {
        Self::with_file_path(DEFAULT_LOG_FILE)
    }

    /// A logger with default routing and a custom file sink path.
    pub fn with_file_path(path: impl Into<PathBuf>) -> Self {
        let config = LoggerConfig {
            file_path: path.into(),
            ..LoggerConfig::default()
        };
        Self::from_config(&config)
    }

    /// A logger built from saved settings.
    ///
    /// Any severity routed to `File` opens the file immediately.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::build(
            Arc::new(ConsoleSink::stdout()),
            Arc::new(ConsoleSink::stderr()),
            config,
        )
    }

    /// A logger whose standard-output and standard-error sinks are replaced.
    pub fn with_console_sinks(stdout: Arc<dyn LogSink>, stderr: Arc<dyn LogSink>) -> Self {
        Self::build(stdout, stderr, &LoggerConfig::default())
    }

    fn build(stdout: Arc<dyn LogSink>, stderr: Arc<dyn LogSink>, config: &LoggerConfig) -> Self {
        stdout.set_color_mode(config.color);
        stderr.set_color_mode(config.color);
        let null: Arc<dyn LogSink> = Arc::new(NullSink);

        let mut inner = Inner {
            error: Route {
                kind: SinkKind::Stderr,
                sink: Arc::clone(&stderr),
            },
            warning: Route {
                kind: SinkKind::Stderr,
                sink: Arc::clone(&stderr),
            },
            info: Route {
                kind: SinkKind::Stdout,
                sink: Arc::clone(&stdout),
            },
            stdout,
            stderr,
            null,
            file: None,
            file_path: config.file_path.clone(),
            timestamps: config.timestamps,
            color: config.color,
        };
        for severity in Severity::ALL {
            let kind = config.sink_for(severity);
            let sink = inner.sink_for(kind);
            *inner.route_mut(severity) = Route { kind, sink };
        }

        Self {
            inner: Mutex::new(inner),
        }
    }

    /// The process-wide logger, created with default settings on first use.
    ///
    /// It lives until the process exits.
    pub fn global() -> &'static Logger {
        &GLOBAL
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Format and write one message. `label`, when present, precedes the value.
    pub fn log(&self, severity: Severity, value: impl Display, label: Option<&str>) {
        // Render before locking: a Display impl may itself log.
        let rendered = value.to_string();
        let inner = self.inner();
        let ts = inner.timestamps.then(timestamp);
        let line = format_line(severity, ts.as_deref(), label, &rendered);
        inner.route(severity).sink.log(severity, &line);
    }

    pub fn error(&self, value: impl Display) {
        self.log(Severity::Error, value, None);
    }

    pub fn error_with(&self, value: impl Display, label: &str) {
        self.log(Severity::Error, value, Some(label));
    }

    pub fn warning(&self, value: impl Display) {
        self.log(Severity::Warning, value, None);
    }

    pub fn warning_with(&self, value: impl Display, label: &str) {
        self.log(Severity::Warning, value, Some(label));
    }

    pub fn info(&self, value: impl Display) {
        self.log(Severity::Info, value, None);
    }

    pub fn info_with(&self, value: impl Display, label: &str) {
        self.log(Severity::Info, value, Some(label));
    }

    /// Route `severity` to another sink.
    pub fn set_sink(&self, severity: Severity, kind: SinkKind) {
        let mut inner = self.inner();
        let sink = inner.sink_for(kind);
        *inner.route_mut(severity) = Route { kind, sink };
    }

    pub fn set_error_sink(&self, kind: SinkKind) {
        self.set_sink(Severity::Error, kind);
    }

    pub fn set_warning_sink(&self, kind: SinkKind) {
        self.set_sink(Severity::Warning, kind);
    }

    pub fn set_info_sink(&self, kind: SinkKind) {
        self.set_sink(Severity::Info, kind);
    }

    /// Change the file sink path. An existing file sink is reopened there at once.
    pub fn set_file_sink_path(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut inner = self.inner();
        inner.file_path = path.to_path_buf();
        if let Some(file) = inner.file.clone() {
            if let Err(e) = file.set_path(path) {
                inner.report(&e.to_string());
            }
        }
    }

    pub fn set_timestamps(&self, enabled: bool) {
        self.inner().timestamps = enabled;
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        let mut inner = self.inner();
        inner.color = mode;
        inner.stdout.set_color_mode(mode);
        inner.stderr.set_color_mode(mode);
    }

    pub fn sink_kind(&self, severity: Severity) -> SinkKind {
        self.inner().route(severity).kind
    }

    pub fn file_sink_path(&self) -> PathBuf {
        self.inner().file_path.clone()
    }

    /// Whether the file sink has been created yet.
    pub fn has_file_sink(&self) -> bool {
        self.inner().file.is_some()
    }

    pub fn timestamps(&self) -> bool {
        self.inner().timestamps
    }

    pub fn color_mode(&self) -> ColorMode {
        self.inner().color
    }

    /// Snapshot of the current settings, suitable for [`LoggerConfig::save`].
    pub fn config(&self) -> LoggerConfig {
        let inner = self.inner();
        LoggerConfig {
            error_sink: inner.error.kind,
            warning_sink: inner.warning.kind,
            info_sink: inner.info.kind,
            file_path: inner.file_path.clone(),
            timestamps: inner.timestamps,
            color: inner.color,
        }
    }
}
