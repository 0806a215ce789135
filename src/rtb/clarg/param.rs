use super::convert::{convert, ConvertError};
use crate::error::RtbError;
use std::fmt;
use std::str::FromStr;

const PARAM_PREFIX: &str = "-";
const PARAM_POSTFIX: &str = "=";

/// The value type a parameter converts its raw text into.
///
/// `LongDouble` is carried as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Int,
    Long,
    LongLong,
    UnsignedLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    String,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Long => "long",
            ParamType::LongLong => "long-long",
            ParamType::UnsignedLong => "ulong",
            ParamType::UnsignedLongLong => "ulong-long",
            ParamType::Float => "float",
            ParamType::Double => "double",
            ParamType::LongDouble => "long-double",
            ParamType::String => "string",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = RtbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "int" | "i32" => Ok(ParamType::Int),
            "long" | "i64" => Ok(ParamType::Long),
            "long-long" | "longlong" => Ok(ParamType::LongLong),
            "ulong" | "unsigned-long" | "u64" => Ok(ParamType::UnsignedLong),
            "ulong-long" | "unsigned-long-long" => Ok(ParamType::UnsignedLongLong),
            "float" | "f32" => Ok(ParamType::Float),
            "double" | "f64" => Ok(ParamType::Double),
            "long-double" => Ok(ParamType::LongDouble),
            "string" | "str" => Ok(ParamType::String),
            _ => Err(RtbError::UnknownParamType(s.to_string())),
        }
    }
}

/// A successfully converted parameter value. The variant always matches the
/// parameter's [`ParamType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i32),
    Long(i64),
    LongLong(i64),
    UnsignedLong(u64),
    UnsignedLongLong(u64),
    Float(f32),
    Double(f64),
    LongDouble(f64),
    String(String),
}

impl ParamValue {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Int(_) => ParamType::Int,
            ParamValue::Long(_) => ParamType::Long,
            ParamValue::LongLong(_) => ParamType::LongLong,
            ParamValue::UnsignedLong(_) => ParamType::UnsignedLong,
            ParamValue::UnsignedLongLong(_) => ParamType::UnsignedLongLong,
            ParamValue::Float(_) => ParamType::Float,
            ParamValue::Double(_) => ParamType::Double,
            ParamValue::LongDouble(_) => ParamType::LongDouble,
            ParamValue::String(_) => ParamType::String,
        }
    }

    /// The value of any signed integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ParamValue::Int(v) => Some(i64::from(v)),
            ParamValue::Long(v) | ParamValue::LongLong(v) => Some(v),
            _ => None,
        }
    }

    /// The value of any unsigned integer variant.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            ParamValue::UnsignedLong(v) | ParamValue::UnsignedLongLong(v) => Some(v),
            _ => None,
        }
    }

    /// The value of any floating point variant.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ParamValue::Float(v) => Some(f64::from(v)),
            ParamValue::Double(v) | ParamValue::LongDouble(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Long(v) | ParamValue::LongLong(v) => write!(f, "{}", v),
            ParamValue::UnsignedLong(v) | ParamValue::UnsignedLongLong(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Double(v) | ParamValue::LongDouble(v) => write!(f, "{}", v),
            ParamValue::String(s) => f.write_str(s),
        }
    }
}

/// A typed value matched by the token prefix `-name=`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    key: String,
    param_type: ParamType,
    found: bool,
    raw_value: String,
    value: Option<Result<ParamValue, ConvertError>>,
}

impl Param {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        let name = name.into();
        let key = format!("{}{}{}", PARAM_PREFIX, name, PARAM_POSTFIX);
        Self {
            name,
            key,
            param_type,
            found: false,
            raw_value: String::new(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token prefix that selects this parameter.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// Text after `-name=` in the last matching token.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// `None` until the parameter is found, then the converted value or the
    /// reason conversion failed.
    pub fn value(&self) -> Option<&Result<ParamValue, ConvertError>> {
        self.value.as_ref()
    }

    /// The converted value, if the parameter was found and converted cleanly.
    pub fn typed(&self) -> Option<&ParamValue> {
        self.value.as_ref().and_then(|v| v.as_ref().ok())
    }

    pub fn error(&self) -> Option<ConvertError> {
        match self.value {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// The raw value when `token` starts with this parameter's key.
    pub(crate) fn strip_key<'a>(&self, token: &'a str) -> Option<&'a str> {
        token.strip_prefix(self.key.as_str())
    }

    pub(crate) fn set_raw(&mut self, raw: &str) {
        self.found = true;
        self.raw_value = raw.to_string();
        self.value = Some(convert(self.param_type, raw));
    }

    pub(crate) fn reset(&mut self) {
        self.found = false;
        self.raw_value.clear();
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_dash_name_equals() {
        let param = Param::new("width", ParamType::Int);
        assert_eq!(param.key(), "-width=");
        assert!(!param.found());
        assert_eq!(param.raw_value(), "");
        assert!(param.value().is_none());
    }

    #[test]
    fn strip_key_keeps_later_equals() {
        let param = Param::new("expr", ParamType::String);
        assert_eq!(param.strip_key("-expr=a=b"), Some("a=b"));
        assert_eq!(param.strip_key("-expr="), Some(""));
        assert_eq!(param.strip_key("-expr"), None);
        assert_eq!(param.strip_key("-exprs=1"), None);
    }

    #[test]
    fn set_raw_converts_and_reset_clears() {
        let mut param = Param::new("n", ParamType::UnsignedLong);
        param.set_raw("42");
        assert!(param.found());
        assert_eq!(param.typed(), Some(&ParamValue::UnsignedLong(42)));
        assert_eq!(param.error(), None);

        param.set_raw("nope");
        assert_eq!(param.error(), Some(ConvertError::InvalidArgument));
        assert!(param.typed().is_none());

        param.reset();
        assert!(!param.found());
        assert!(param.value().is_none());
    }

    #[test]
    fn param_type_names() {
        assert_eq!("int".parse::<ParamType>().unwrap(), ParamType::Int);
        assert_eq!("long_long".parse::<ParamType>().unwrap(), ParamType::LongLong);
        assert_eq!("unsigned-long-long".parse::<ParamType>().unwrap(), ParamType::UnsignedLongLong);
        assert_eq!("Long-Double".parse::<ParamType>().unwrap(), ParamType::LongDouble);
        assert_eq!("str".parse::<ParamType>().unwrap(), ParamType::String);
        assert!(matches!(
            "complex".parse::<ParamType>(),
            Err(RtbError::UnknownParamType(_))
        ));
    }

    #[test]
    fn value_accessors() {
        assert_eq!(ParamValue::Int(-3).as_i64(), Some(-3));
        assert_eq!(ParamValue::UnsignedLongLong(7).as_u64(), Some(7));
        assert_eq!(ParamValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(ParamValue::String("x".into()).as_str(), Some("x"));
        assert_eq!(ParamValue::Double(2.0).as_i64(), None);
        assert_eq!(ParamValue::Long(1).param_type(), ParamType::Long);
    }
}
