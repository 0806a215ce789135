use clap::{Parser, Subcommand};
use rtb::clarg::ParamType;
use rtb::error::{Result, RtbError};
use rtb::{ColorMode, Severity, SinkKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rtb")]
#[command(about = "Toolbox demo: logger sinks and the -flag/-param=value parser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding rtb.json with the starting logger settings
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log one message
    Log {
        /// Severity of the message (error, warning, info)
        #[arg(short, long, default_value = "info")]
        severity: Severity,

        /// Label printed before the message
        #[arg(short, long)]
        label: Option<String>,

        /// Route the severity to this sink (null, stdout, stderr, file)
        #[arg(long)]
        sink: Option<SinkKind>,

        /// Path for the file sink
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Prefix the message with the local time
        #[arg(long)]
        timestamps: bool,

        /// Color errors and warnings (auto, always, never)
        #[arg(long)]
        color: Option<ColorMode>,

        /// Message text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Run the argument parser over the tokens after `--`
    Parse {
        /// Register a flag (repeatable)
        #[arg(long = "flag", value_name = "NAME")]
        flags: Vec<String>,

        /// Register a typed parameter, e.g. width:int (repeatable)
        #[arg(long = "param", value_name = "NAME:TYPE", value_parser = parse_param_spec)]
        params: Vec<(String, ParamType)>,

        /// Tokens to parse
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Split `NAME:TYPE` at the last colon.
pub fn parse_param_spec(spec: &str) -> Result<(String, ParamType)> {
    let (name, ty) = spec
        .rsplit_once(':')
        .ok_or_else(|| RtbError::InvalidParamSpec(spec.to_string()))?;
    if name.is_empty() {
        return Err(RtbError::InvalidParamSpec(spec.to_string()));
    }
    Ok((name.to_string(), ty.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_spec_splits_name_and_type() {
        let (name, ty) = parse_param_spec("width:int").unwrap();
        assert_eq!(name, "width");
        assert_eq!(ty, ParamType::Int);
    }

    #[test]
    fn param_spec_errors() {
        assert!(matches!(
            parse_param_spec("width"),
            Err(RtbError::InvalidParamSpec(_))
        ));
        assert!(matches!(
            parse_param_spec(":int"),
            Err(RtbError::InvalidParamSpec(_))
        ));
        assert!(matches!(
            parse_param_spec("width:matrix"),
            Err(RtbError::UnknownParamType(_))
        ));
    }

    #[test]
    fn cli_parses_log_command() {
        let cli = Cli::try_parse_from([
            "rtb", "log", "-s", "error", "--sink", "stdout", "-l", "Message", "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Log {
                severity,
                sink,
                label,
                message,
                ..
            } => {
                assert_eq!(severity, Severity::Error);
                assert_eq!(sink, Some(SinkKind::Stdout));
                assert_eq!(label.as_deref(), Some("Message"));
                assert_eq!(message, vec!["10"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_parse_command() {
        let cli = Cli::try_parse_from([
            "rtb", "parse", "--flag", "b", "--param", "width:int", "--", "-b", "-width=500",
        ])
        .unwrap();
        match cli.command {
            Commands::Parse {
                flags,
                params,
                args,
            } => {
                assert_eq!(flags, vec!["b"]);
                assert_eq!(params, vec![("width".to_string(), ParamType::Int)]);
                assert_eq!(args, vec!["-b", "-width=500"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
