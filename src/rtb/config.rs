use crate::error::{Result, RtbError};
use crate::model::{ColorMode, Severity, SinkKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "rtb.json";
pub const DEFAULT_LOG_FILE: &str = "rtb.log";

/// Logger settings, stored as `rtb.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default = "default_error_sink")]
    pub error_sink: SinkKind,

    #[serde(default = "default_warning_sink")]
    pub warning_sink: SinkKind,

    #[serde(default = "default_info_sink")]
    pub info_sink: SinkKind,

    /// Path used the first time any severity is routed to the file sink
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Prefix every message with the local date and time
    #[serde(default)]
    pub timestamps: bool,

    #[serde(default)]
    pub color: ColorMode,
}

fn default_error_sink() -> SinkKind {
    SinkKind::Stderr
}

fn default_warning_sink() -> SinkKind {
    SinkKind::Stderr
}

fn default_info_sink() -> SinkKind {
    SinkKind::Stdout
}

fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            error_sink: default_error_sink(),
            warning_sink: default_warning_sink(),
            info_sink: default_info_sink(),
            file_path: default_file_path(),
            timestamps: false,
            color: ColorMode::default(),
        }
    }
}

impl LoggerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RtbError::Io)?;
        let config: LoggerConfig =
            serde_json::from_str(&content).map_err(RtbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RtbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RtbError::Serialization)?;
        fs::write(config_path, content).map_err(RtbError::Io)?;
        Ok(())
    }

    pub fn sink_for(&self, severity: Severity) -> SinkKind {
        match severity {
            Severity::Error => self.error_sink,
            Severity::Warning => self.warning_sink,
            Severity::Info => self.info_sink,
        }
    }

    pub fn set_sink_for(&mut self, severity: Severity, kind: SinkKind) {
        match severity {
            Severity::Error => self.error_sink = kind,
            Severity::Warning => self.warning_sink = kind,
            Severity::Info => self.info_sink = kind,
        }
    }
}
