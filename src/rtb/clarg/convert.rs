//! Type-directed conversion of raw parameter text.
//!
//! Integers follow the C `strtol` family with base 0: optional leading
//! whitespace and sign, then `0x`/`0X` for hexadecimal, a leading `0` for octal,
//! decimal otherwise. Floats follow `strtod` for decimal literals plus `inf`,
//! `infinity` and `nan`. In both cases the longest valid prefix is converted and
//! whatever follows it is ignored, so `500px` reads as 500.

use super::param::{ParamType, ParamValue};
use thiserror::Error;

/// Why a raw value could not be converted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// No number at the start of the text.
    #[error("invalid argument")]
    InvalidArgument,

    /// A number was found but the target type cannot hold it.
    #[error("out of range")]
    OutOfRange,
}

pub fn convert(param_type: ParamType, raw: &str) -> Result<ParamValue, ConvertError> {
    let value = match param_type {
        ParamType::Int => ParamValue::Int(to_signed(raw)?),
        ParamType::Long => ParamValue::Long(to_signed(raw)?),
        ParamType::LongLong => ParamValue::LongLong(to_signed(raw)?),
        ParamType::UnsignedLong => ParamValue::UnsignedLong(to_unsigned(raw)?),
        ParamType::UnsignedLongLong => ParamValue::UnsignedLongLong(to_unsigned(raw)?),
        ParamType::Float => ParamValue::Float(to_f32(raw)?),
        ParamType::Double => ParamValue::Double(to_f64(raw)?),
        ParamType::LongDouble => ParamValue::LongDouble(to_f64(raw)?),
        ParamType::String => ParamValue::String(raw.to_string()),
    };
    Ok(value)
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Sign and magnitude of the leading integer in `raw`.
fn scan_integer(raw: &str) -> Result<(bool, u128), ConvertError> {
    let bytes = raw.trim_start_matches(is_c_space).as_bytes();

    let (negative, rest) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    // "0x" only counts as a prefix when a hex digit follows it.
    let (radix, digits) = if rest.len() > 2
        && rest[0] == b'0'
        && (rest[1] == b'x' || rest[1] == b'X')
        && rest[2].is_ascii_hexdigit()
    {
        (16, &rest[2..])
    } else if rest.first() == Some(&b'0') {
        (8, rest)
    } else {
        (10, rest)
    };

    let mut magnitude: u128 = 0;
    let mut seen = false;
    let mut overflow = false;
    for &b in digits {
        let Some(d) = char::from(b).to_digit(radix) else {
            break;
        };
        seen = true;
        match magnitude
            .checked_mul(u128::from(radix))
            .and_then(|m| m.checked_add(u128::from(d)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
    }

    if !seen {
        return Err(ConvertError::InvalidArgument);
    }
    if overflow {
        return Err(ConvertError::OutOfRange);
    }
    Ok((negative, magnitude))
}

fn to_signed<T: TryFrom<i128>>(raw: &str) -> Result<T, ConvertError> {
    let (negative, magnitude) = scan_integer(raw)?;
    let magnitude = i128::try_from(magnitude).map_err(|_| ConvertError::OutOfRange)?;
    let value = if negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| ConvertError::OutOfRange)
}

fn to_unsigned<T: TryFrom<u128>>(raw: &str) -> Result<T, ConvertError> {
    let (negative, magnitude) = scan_integer(raw)?;
    if negative && magnitude != 0 {
        return Err(ConvertError::OutOfRange);
    }
    T::try_from(magnitude).map_err(|_| ConvertError::OutOfRange)
}

enum FloatPrefix<'a> {
    Infinity { negative: bool },
    NaN,
    /// Decimal literal text, and whether its mantissa has a non-zero digit.
    Literal { text: &'a str, nonzero: bool },
}

fn scan_float(raw: &str) -> Result<FloatPrefix<'_>, ConvertError> {
    let s = raw.trim_start_matches(is_c_space);
    let bytes = s.as_bytes();

    let mut pos = 0;
    let mut negative = false;
    if let Some(&c) = bytes.first() {
        if c == b'+' || c == b'-' {
            negative = c == b'-';
            pos = 1;
        }
    }

    let word = s[pos..].get(..3).map(str::to_ascii_lowercase);
    match word.as_deref() {
        Some("inf") => return Ok(FloatPrefix::Infinity { negative }),
        Some("nan") => return Ok(FloatPrefix::NaN),
        _ => {}
    }

    let mut nonzero = false;
    let mut digits = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        nonzero |= bytes[pos] != b'0';
        digits += 1;
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        let mut frac = pos + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            nonzero |= bytes[frac] != b'0';
            digits += 1;
            frac += 1;
        }
        // A lone "." is not part of the number.
        if digits > 0 {
            pos = frac;
        }
    }
    if digits == 0 {
        return Err(ConvertError::InvalidArgument);
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > start {
            pos = exp;
        }
    }

    Ok(FloatPrefix::Literal {
        text: &s[..pos],
        nonzero,
    })
}

fn to_f64(raw: &str) -> Result<f64, ConvertError> {
    match scan_float(raw)? {
        FloatPrefix::Infinity { negative: true } => Ok(f64::NEG_INFINITY),
        FloatPrefix::Infinity { negative: false } => Ok(f64::INFINITY),
        FloatPrefix::NaN => Ok(f64::NAN),
        FloatPrefix::Literal { text, nonzero } => {
            let value: f64 = text.parse().map_err(|_| ConvertError::InvalidArgument)?;
            if value.is_infinite() || (nonzero && value == 0.0) {
                return Err(ConvertError::OutOfRange);
            }
            Ok(value)
        }
    }
}

fn to_f32(raw: &str) -> Result<f32, ConvertError> {
    match scan_float(raw)? {
        FloatPrefix::Infinity { negative: true } => Ok(f32::NEG_INFINITY),
        FloatPrefix::Infinity { negative: false } => Ok(f32::INFINITY),
        FloatPrefix::NaN => Ok(f32::NAN),
        FloatPrefix::Literal { text, nonzero } => {
            let value: f32 = text.parse().map_err(|_| ConvertError::InvalidArgument)?;
            if value.is_infinite() || (nonzero && value == 0.0) {
                return Err(ConvertError::OutOfRange);
            }
            Ok(value)
        }
    }
}
