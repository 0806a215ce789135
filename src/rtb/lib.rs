//! # rtb
//!
//! A small personal toolbox. Two pieces do the real work:
//!
//! - a **logger** that routes error, warning and info messages to swappable sinks
//! - a **command-line argument parser** for `-flag` and `-param=value` tokens
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Demo CLI: log a message, run the parser over tokens      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Logger (logger.rs)          │  │  Parser (clarg/)         │
//! │  - Formats lines             │  │  - Flag / Param records  │
//! │  - Routes severities         │  │  - Type-directed         │
//! │  - Owns the file sink        │  │    conversion            │
//! └──────────────────────────────┘  └──────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │  Sinks (sink/)               │
//! │  - LogSink trait             │
//! │  - null, console, file,      │
//! │    memory                    │
//! └──────────────────────────────┘
//! ```
//!
//! ## No hidden globals
//!
//! Both the [`logger::Logger`] and the [`clarg::ClargParser`] are ordinary
//! values. Build one, pass it where it is needed, and build a fresh one in each
//! test. For code that wants a logger without threading it through,
//! [`logger::Logger::global`] returns one process-wide instance.
//!
//! ## Failure model
//!
//! - Logging never returns an error and never panics. A log file that cannot be
//!   opened is reported on standard error and its lines are dropped.
//! - Parameter conversion failures are stored as values
//!   ([`clarg::ConvertError`]), not raised.
//! - Configuration loading returns [`error::Result`].
//!
//! ## Module Overview
//!
//! - [`logger`]: the logger and line formatting
//! - [`sink`]: the sink trait and its implementations
//! - [`clarg`]: flags, parameters, conversion and the parser
//! - [`config`]: logger settings stored as `rtb.json`
//! - [`model`]: severities, sink kinds, color modes
//! - [`error`]: error types

pub mod clarg;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod sink;

pub use logger::Logger;
pub use model::{ColorMode, Severity, SinkKind};
