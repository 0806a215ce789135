//! # Command-line arguments
//!
//! A deliberately small grammar with two kinds of argument:
//!
//! - **flags**: `-name`, matched exactly, value `true` when present
//! - **parameters**: `-name=value`, matched by prefix, value converted to the
//!   parameter's declared [`ParamType`]
//!
//! Everything else on the command line is ignored. There is no short/long
//! option merging, no subcommands and no `--` separator.
//!
//! ```
//! use rtb::clarg::{ClargParser, ParamType, ParamValue};
//!
//! let mut parser = ClargParser::new();
//! parser.add_flag("v");
//! parser.add_param("width", ParamType::Int);
//! parser.parse(["prog", "-v", "-width=0x20"]);
//!
//! assert!(parser.flag("v").unwrap().found());
//! assert_eq!(parser.param("width").unwrap().typed(), Some(&ParamValue::Int(32)));
//! ```
//!
//! Conversion failures do not abort parsing. They are stored on the parameter as
//! a [`ConvertError`] for the caller to inspect.

pub mod convert;
pub mod flag;
pub mod param;
pub mod parser;

pub use convert::{convert, ConvertError};
pub use flag::Flag;
pub use param::{Param, ParamType, ParamValue};
pub use parser::ClargParser;
