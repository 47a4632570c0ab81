//! Typed views over raw field strings.
//!
//! Fields are stored exactly as read. Coercion to a number or flag happens
//! only when a caller asks for it, so a malformed value in a field nobody
//! reads never blocks loading a document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeCoercionError;

/// The semantic type of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Float,
    String,
    Flag,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
            FieldType::String => write!(f, "string"),
            FieldType::Flag => write!(f, "flag"),
        }
    }
}

/// A field value coerced to its semantic type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    String(String),
    Flag(bool),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::String(_) => FieldType::String,
            FieldValue::Flag(_) => FieldType::Flag,
        }
    }

    /// Coerce a raw string to `expected`.
    pub fn coerce(key: &str, raw: &str, expected: FieldType) -> Result<Self, TypeCoercionError> {
        let value = match expected {
            FieldType::Integer => i64::from_field(raw).map(FieldValue::Integer),
            FieldType::Float => f64::from_field(raw).map(FieldValue::Float),
            FieldType::String => Some(FieldValue::String(raw.to_string())),
            FieldType::Flag => bool::from_field(raw).map(FieldValue::Flag),
        };
        value.ok_or_else(|| coercion_error(key, raw, expected))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            FieldValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(value) => Some(*value),
            _ => None,
        }
    }
}

/// Canonical text form: shortest float representation, `True`/`False` flags.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::String(value) => f.write_str(value),
            FieldValue::Flag(true) => f.write_str("True"),
            FieldValue::Flag(false) => f.write_str("False"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Types a raw field string can be read as.
pub trait FromField: Sized {
    const TYPE: FieldType;

    fn from_field(raw: &str) -> Option<Self>;
}

impl FromField for i64 {
    const TYPE: FieldType = FieldType::Integer;

    fn from_field(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromField for i32 {
    const TYPE: FieldType = FieldType::Integer;

    fn from_field(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromField for f64 {
    const TYPE: FieldType = FieldType::Float;

    fn from_field(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl FromField for bool {
    const TYPE: FieldType = FieldType::Flag;

    fn from_field(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FromField for String {
    const TYPE: FieldType = FieldType::String;

    fn from_field(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Read `raw` as `T`, naming `key` on failure.
pub fn coerce<T: FromField>(key: &str, raw: &str) -> Result<T, TypeCoercionError> {
    T::from_field(raw).ok_or_else(|| coercion_error(key, raw, T::TYPE))
}

/// Read a separated list of numbers such as `PBW=80,120,,40`.
///
/// Empty entries read as `0`; an empty string is an empty list.
pub fn parse_list(key: &str, raw: &str, separator: char) -> Result<Vec<f64>, TypeCoercionError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(separator)
        .map(|entry| {
            if entry.trim().is_empty() {
                Ok(0.0)
            } else {
                f64::from_field(entry).ok_or_else(|| coercion_error(key, raw, FieldType::Float))
            }
        })
        .collect()
}

/// Inverse of [`parse_list`] using the canonical float form.
pub fn format_list(values: &[f64], separator: char) -> String {
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(&FieldValue::Float(*value).to_string());
    }
    out
}

fn coercion_error(key: &str, raw: &str, expected: FieldType) -> TypeCoercionError {
    TypeCoercionError {
        key: key.to_string(),
        raw: raw.to_string(),
        expected,
    }
}
