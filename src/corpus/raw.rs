//! Raw source records as they appear in the corpus document.
use serde::Deserialize;
use serde_json::Value;

/// Top-level book record. Chapters stay untyped until classified one by one so
/// a single bad chapter does not reject the whole document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawBook {
    pub name: String,
    pub chapters: Vec<Value>,
}

/// The two accepted chapter encodings.
///
/// Only the outer shape is checked here. Verse entries and declared numbers
/// are read leniently during normalization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawChapter {
    /// A bare list of verse strings numbered by position.
    Positional(Vec<Value>),
    /// An object declaring its chapter number and numbered verse objects.
    Explicit(ExplicitChapter),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ExplicitChapter {
    #[serde(default)]
    pub chapter: Option<Value>,
    pub verses: Vec<Value>,
}

impl RawChapter {
    /// Classify a raw chapter value, or describe the shape that was found.
    pub(crate) fn classify(value: &Value) -> Result<Self, String> {
        match value {
            Value::Array(entries) => Ok(RawChapter::Positional(entries.clone())),
            Value::Object(map) if matches!(map.get("verses"), Some(Value::Array(_))) => {
                ExplicitChapter::deserialize(value)
                    .map(RawChapter::Explicit)
                    .map_err(|_| describe_shape(value))
            }
            _ => Err(describe_shape(value)),
        }
    }
}

/// Read a declared chapter or verse number.
///
/// Accepts a non-negative integer that fits in `u32`, an integral float, or a
/// string holding one. Anything else yields `None`.
pub(crate) fn declared_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                return u32::try_from(n).ok();
            }
            let float = number.as_f64()?;
            if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) {
                // Integral and in range, so the cast is exact.
                Some(float as u32)
            } else {
                None
            }
        }
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn describe_shape(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "list".to_string(),
        Value::Object(map) => match map.get("verses") {
            None => "object without verses".to_string(),
            Some(_) => "object whose verses is not a list".to_string(),
        },
    }
}
