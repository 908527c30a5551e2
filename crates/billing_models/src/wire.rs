use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{DecodeError, DecodeErrorKind, ValidationError};
use crate::path;

/// Conversion between a typed field value and its JSON wire form.
///
/// `path` is the location of the value inside the document being decoded
/// or validated and only feeds error messages.
pub trait WireValue: Sized {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError>;

    fn to_wire(&self) -> JsonValue;

    fn validate_wire(&self, _path: &str, _errors: &mut Vec<ValidationError>) {}

    /// True when `existing` already encodes this value, so its original
    /// spelling (`1` vs `1.0`, `+00:00` vs `Z`) can be kept on encode.
    fn wire_matches(&self, _existing: &JsonValue) -> bool {
        false
    }
}

impl WireValue for String {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::type_mismatch("string", value, path))
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl WireValue for bool {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch("boolean", value, path))
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl WireValue for i64 {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        value
            .as_i64()
            .ok_or_else(|| DecodeError::type_mismatch("integer", value, path))
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::Number(Number::from(*self))
    }
}

impl WireValue for f64 {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::type_mismatch("number", value, path))
    }

    fn to_wire(&self) -> JsonValue {
        // JSON has no NaN or infinity
        Number::from_f64(*self)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }

    fn wire_matches(&self, existing: &JsonValue) -> bool {
        existing.as_f64() == Some(*self)
    }
}

impl WireValue for DateTime<Utc> {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        let text = value
            .as_str()
            .ok_or_else(|| DecodeError::type_mismatch("date-time string", value, path))?;
        DateTime::parse_from_rfc3339(text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| {
                DecodeError::new(
                    DecodeErrorKind::TypeMismatch,
                    format!("invalid RFC 3339 date-time {:?}: {}", text, err),
                )
                .with_path(path)
            })
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn wire_matches(&self, existing: &JsonValue) -> bool {
        existing
            .as_str()
            .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
            .is_some_and(|parsed| parsed.with_timezone(&Utc) == *self)
    }
}

impl WireValue for JsonValue {
    fn from_wire(value: &JsonValue, _path: &str) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }

    fn to_wire(&self) -> JsonValue {
        self.clone()
    }
}

impl WireValue for Map<String, JsonValue> {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| DecodeError::type_mismatch("object", value, path))
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::Object(self.clone())
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::type_mismatch("array", value, path))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(item, &path::index(path, index)))
            .collect()
    }

    fn to_wire(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn validate_wire(&self, path: &str, errors: &mut Vec<ValidationError>) {
        for (index, item) in self.iter().enumerate() {
            item.validate_wire(&path::index(path, index), errors);
        }
    }

    fn wire_matches(&self, existing: &JsonValue) -> bool {
        existing.as_array().is_some_and(|items| {
            items.len() == self.len()
                && self.iter().zip(items).all(|(item, raw)| item.wire_matches(raw))
        })
    }
}
