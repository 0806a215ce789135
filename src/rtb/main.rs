use clap::Parser;
use colored::*;
use rtb::clarg::{ClargParser, Param, ParamType};
use rtb::config::LoggerConfig;
use rtb::error::Result;
use rtb::{ColorMode, Logger, Severity, SinkKind};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(dir) => LoggerConfig::load(dir)?,
        None => LoggerConfig::default(),
    };
    let logger = Logger::from_config(&config);

    match cli.command {
        Commands::Log {
            severity,
            label,
            sink,
            file,
            timestamps,
            color,
            message,
        } => {
            let opts = LogOptions {
                sink,
                file,
                timestamps,
                color,
            };
            handle_log(&logger, severity, label, opts, message);
            Ok(())
        }
        Commands::Parse {
            flags,
            params,
            args,
        } => {
            handle_parse(&logger, flags, params, args);
            Ok(())
        }
    }
}

struct LogOptions {
    sink: Option<SinkKind>,
    file: Option<PathBuf>,
    timestamps: bool,
    color: Option<ColorMode>,
}

fn handle_log(
    logger: &Logger,
    severity: Severity,
    label: Option<String>,
    opts: LogOptions,
    message: Vec<String>,
) {
    if let Some(path) = opts.file {
        logger.set_file_sink_path(path);
    }
    if opts.timestamps {
        logger.set_timestamps(true);
    }
    if let Some(mode) = opts.color {
        logger.set_color_mode(mode);
    }
    if let Some(kind) = opts.sink {
        logger.set_sink(severity, kind);
    }
    logger.log(severity, message.join(" "), label.as_deref());
}

fn handle_parse(
    logger: &Logger,
    flags: Vec<String>,
    params: Vec<(String, ParamType)>,
    args: Vec<String>,
) {
    let mut parser = ClargParser::new();
    for name in flags {
        if !parser.add_flag(name.as_str()) {
            logger.warning_with(&name, "Duplicate flag ignored");
        }
    }
    for (name, ty) in params {
        if !parser.add_param(name.as_str(), ty) {
            logger.warning_with(&name, "Duplicate parameter ignored");
        }
    }

    parser.parse(std::iter::once("rtb").chain(args.iter().map(String::as_str)));

    for flag in parser.flags() {
        let state = if flag.found() {
            "found".green()
        } else {
            "absent".dimmed()
        };
        println!("flag  {:<16} {} value={}", flag.key(), state, flag.value());
    }
    for param in parser.params() {
        println!("{}", param_report(param));
        if let Some(err) = param.error() {
            logger.warning_with(format!("{:?} is {}", param.raw_value(), err), param.name());
        }
    }
}

fn param_report(param: &Param) -> String {
    let head = format!("param {:<16}", param.key());
    if !param.found() {
        return format!("{} {}", head, "absent".dimmed());
    }
    match param.value() {
        Some(Ok(value)) => format!(
            "{} {} raw={:?} value={} ({})",
            head,
            "found".green(),
            param.raw_value(),
            value,
            param.param_type()
        ),
        Some(Err(err)) => format!(
            "{} {} raw={:?} error={}",
            head,
            "found".green(),
            param.raw_value(),
            err.to_string().red()
        ),
        None => head,
    }
}
