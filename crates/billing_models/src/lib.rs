mod error;
pub mod models;
pub mod open_enum;
pub mod path;
mod raw;
pub mod record;
pub mod union;
mod wire;

pub use error::{
    DecodeError, DecodeErrorKind, ErrorCode, ModelError, ValidationError, ValidationResult,
};
pub use open_enum::{KnownConstant, OpenEnum};
pub use raw::RawFields;
pub use record::Record;
pub use wire::WireValue;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use serde;
    pub use serde_json;
}

pub fn from_json<T: Record>(value: serde_json::Value) -> Result<T, DecodeError> {
    T::from_json(value)
}

pub fn from_json_str<T: Record>(json: &str) -> Result<T, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    T::from_json(value)
}

pub fn to_json<T: Record>(record: &T) -> serde_json::Value {
    record.to_json()
}

pub fn to_json_string<T: Record>(record: &T) -> String {
    record.to_json().to_string()
}

/// Decodes and validates in one step, for callers that want strict input.
pub fn parse_validated<T: Record>(json: &str) -> Result<T, ModelError> {
    let record = from_json_str::<T>(json)?;
    record.validate()?;
    Ok(record)
}
