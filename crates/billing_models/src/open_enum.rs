//! Enumerations that tolerate values the client does not know yet.
//!
//! An [`OpenEnum`] keeps whatever raw value it was built from. Whether that
//! value is one of the recognized constants is only checked when
//! [`OpenEnum::validate`] is called, so a server can introduce a new
//! constant without breaking decoding or re-encoding on older clients.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{DecodeError, ErrorCode, ValidationError};
use crate::wire::WireValue;

/// A closed set of constants with a fixed wire representation.
pub trait KnownConstant: Copy + Eq + fmt::Debug + 'static {
    /// Name used in validation messages.
    const TYPE_NAME: &'static str;
    const ALL: &'static [Self];

    fn wire_value(self) -> JsonValue;
}

pub struct OpenEnum<K> {
    raw: JsonValue,
    _known: PhantomData<K>,
}

impl<K: KnownConstant> OpenEnum<K> {
    pub fn from_known(constant: K) -> Self {
        Self {
            raw: constant.wire_value(),
            _known: PhantomData,
        }
    }

    /// Wraps any raw value. Never fails; see [`OpenEnum::validate`].
    pub fn from_raw(value: impl Into<JsonValue>) -> Self {
        Self {
            raw: value.into(),
            _known: PhantomData,
        }
    }

    pub fn raw(&self) -> &JsonValue {
        &self.raw
    }

    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_str()
    }

    pub fn known(&self) -> Option<K> {
        K::ALL
            .iter()
            .copied()
            .find(|constant| constant.wire_value() == self.raw)
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }

    pub fn validate(&self, path: &str) -> Result<K, ValidationError> {
        self.known().ok_or_else(|| {
            ValidationError::new(
                ErrorCode::UnrecognizedEnumValue,
                format!("value {} is not a known {}", self.raw, K::TYPE_NAME),
            )
            .with_path(path)
        })
    }
}

impl<K: KnownConstant> From<K> for OpenEnum<K> {
    fn from(constant: K) -> Self {
        Self::from_known(constant)
    }
}

impl<K> Clone for OpenEnum<K> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _known: PhantomData,
        }
    }
}

impl<K> fmt::Debug for OpenEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpenEnum").field(&self.raw).finish()
    }
}

impl<K> fmt::Display for OpenEnum<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            JsonValue::String(text) => write!(f, "{}", text),
            other => write!(f, "{}", other),
        }
    }
}

impl<K> PartialEq for OpenEnum<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for OpenEnum<K> {}

impl<K> Hash for OpenEnum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.raw {
            // 0.0 == -0.0 but they print differently
            JsonValue::Number(number) if number.is_f64() && number.as_f64() == Some(0.0) => {
                "0.0".hash(state)
            }
            other => other.to_string().hash(state),
        }
    }
}

impl<K: KnownConstant> PartialEq<K> for OpenEnum<K> {
    fn eq(&self, other: &K) -> bool {
        self.raw == other.wire_value()
    }
}

impl<K: KnownConstant> WireValue for OpenEnum<K> {
    fn from_wire(value: &JsonValue, path: &str) -> Result<Self, DecodeError> {
        match value {
            JsonValue::String(_) | JsonValue::Number(_) => Ok(Self::from_raw(value.clone())),
            other => Err(DecodeError::type_mismatch("string or number", other, path)),
        }
    }

    fn to_wire(&self) -> JsonValue {
        self.raw.clone()
    }

    fn validate_wire(&self, path: &str, errors: &mut Vec<ValidationError>) {
        if let Err(err) = self.validate(path) {
            errors.push(err);
        }
    }
}

impl<K> Serialize for OpenEnum<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, K: KnownConstant> Deserialize<'de> for OpenEnum<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_wire(&value, "").map_err(de::Error::custom)
    }
}

/// Declares a closed set of string constants usable inside [`OpenEnum`].
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl $crate::open_enum::KnownConstant for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn wire_value(self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::String(self.as_str().to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($crate::ValidationError::new(
                        $crate::ErrorCode::UnrecognizedEnumValue,
                        format!("value {:?} is not a known {}", s, stringify!($name)),
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    crate::open_enum! {
        enum Interval {
            Monthly => "monthly",
            Annual => "annual",
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NetTerms {
        Net0,
        Net30,
    }

    impl KnownConstant for NetTerms {
        const TYPE_NAME: &'static str = "NetTerms";
        const ALL: &'static [Self] = &[NetTerms::Net0, NetTerms::Net30];

        fn wire_value(self) -> JsonValue {
            match self {
                NetTerms::Net0 => json!(0),
                NetTerms::Net30 => json!(30),
            }
        }
    }

    #[test]
    fn known_and_raw_construction_are_equal() {
        let known = OpenEnum::from_known(Interval::Annual);
        let raw = OpenEnum::<Interval>::from_raw("annual");
        assert_eq!(known, raw);
        assert_eq!(raw, Interval::Annual);
        assert_eq!(raw.known(), Some(Interval::Annual));
        assert_eq!(OpenEnum::from(Interval::Monthly).to_wire(), json!("monthly"));
    }

    #[test]
    fn unrecognized_value_survives_until_validate() {
        let value = OpenEnum::<Interval>::from_wire(&json!("invalid value"), "cadence").unwrap();
        assert!(!value.is_known());
        assert_eq!(value.to_wire(), json!("invalid value"));

        let err = value.validate("cadence").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnrecognizedEnumValue);
        assert_eq!(err.path.as_deref(), Some("cadence"));
        assert!(err.message.contains("invalid value"));
        assert!(err.message.contains("Interval"));
    }

    #[test]
    fn numeric_constants_compare_by_value() {
        let terms = OpenEnum::<NetTerms>::from_wire(&json!(30), "net_terms").unwrap();
        assert_eq!(terms, NetTerms::Net30);
        assert!(terms.validate("net_terms").is_ok());

        let odd = OpenEnum::<NetTerms>::from_raw(45);
        assert!(odd.validate("net_terms").is_err());
        assert_eq!(odd.to_string(), "45");
    }

    #[test]
    fn objects_are_a_shape_error() {
        let err = OpenEnum::<Interval>::from_wire(&json!({"a": 1}), "cadence").unwrap_err();
        assert_eq!(err.path.as_deref(), Some("cadence"));
    }

    #[test]
    fn hashing_follows_raw_value() {
        let mut seen = HashSet::new();
        seen.insert(OpenEnum::from_known(Interval::Annual));
        seen.insert(OpenEnum::<Interval>::from_raw("annual"));
        seen.insert(OpenEnum::<Interval>::from_raw("biennial"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        let positive = OpenEnum::<NetTerms>::from_raw(0.0);
        let negative = OpenEnum::<NetTerms>::from_raw(-0.0);
        assert_eq!(positive, negative);

        let mut seen = HashSet::new();
        seen.insert(positive);
        seen.insert(negative);
        seen.insert(OpenEnum::<NetTerms>::from_raw(0));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn serde_passes_raw_value_through() {
        let value: OpenEnum<Interval> = serde_json::from_str("\"quinquennial\"").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"quinquennial\"");
        assert_eq!("annual".parse::<Interval>().unwrap(), Interval::Annual);
        assert!("weekly".parse::<Interval>().is_err());
    }
}
