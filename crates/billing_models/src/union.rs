//! Fields that hold one of several record shapes, picked by a discriminator.
//!
//! Declared with [`tagged_union!`](crate::tagged_union!). Resolution is a
//! single exact match on the discriminator string; anything else, including
//! a payload that is not an object at all, lands in the `Unknown` variant
//! with the raw value kept for re-encoding.

use serde_json::Value as JsonValue;

use crate::error::{ErrorCode, ValidationError};

#[doc(hidden)]
pub fn discriminator_of<'a>(value: &'a JsonValue, tag: &str) -> Option<&'a str> {
    value.get(tag).and_then(JsonValue::as_str)
}

#[doc(hidden)]
pub fn trace_fallback(union_name: &str, tag: &str, found: Option<&str>, path: &str) {
    tracing::debug!(
        union = union_name,
        tag,
        discriminator = found.unwrap_or("<missing>"),
        path,
        "unrecognized discriminator, keeping raw value"
    );
}

#[doc(hidden)]
pub fn unrecognized_variant(
    union_name: &str,
    tag: &str,
    raw: &JsonValue,
    path: &str,
) -> ValidationError {
    let message = match discriminator_of(raw, tag) {
        Some(found) => format!("{} {:?} is not a known {} variant", tag, found, union_name),
        None => format!("{} is missing, cannot resolve {} variant", tag, union_name),
    };
    ValidationError::new(ErrorCode::UnrecognizedVariant, message).with_path(path)
}

/// Declares a discriminated union of records.
///
/// ```ignore
/// tagged_union! {
///     pub enum Discount tag = "discount_type" {
///         Percentage("percentage") => PercentageDiscount,
///         Amount("amount") => AmountDiscount,
///     }
/// }
/// ```
///
/// Validating an `Unknown` value fails with `UnrecognizedVariant`.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident tag = $tag:literal {
            $( $(#[$variant_meta:meta])* $variant:ident ( $wire:literal ) => $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant($ty), )+
            /// A shape this client does not recognize, kept verbatim.
            Unknown($crate::__private::serde_json::Value),
        }

        impl $name {
            pub const TAG: &'static str = $tag;

            pub fn discriminator(&self) -> Option<&str> {
                match self {
                    $( $name::$variant(_) => Some($wire), )+
                    $name::Unknown(raw) => $crate::union::discriminator_of(raw, $tag),
                }
            }

            pub fn variant_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => stringify!($variant), )+
                    $name::Unknown(_) => "Unknown",
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }

            pub fn from_json(
                value: $crate::__private::serde_json::Value,
            ) -> Result<Self, $crate::DecodeError> {
                <Self as $crate::WireValue>::from_wire(&value, "")
            }

            pub fn to_json(&self) -> $crate::__private::serde_json::Value {
                <Self as $crate::WireValue>::to_wire(self)
            }

            pub fn validate(&self) -> $crate::ValidationResult {
                let mut errors = Vec::new();
                <Self as $crate::WireValue>::validate_wire(self, "", &mut errors);
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }

        impl $crate::WireValue for $name {
            fn from_wire(
                value: &$crate::__private::serde_json::Value,
                path: &str,
            ) -> Result<Self, $crate::DecodeError> {
                match $crate::union::discriminator_of(value, $tag) {
                    $(
                        Some($wire) => {
                            <$ty as $crate::WireValue>::from_wire(value, path).map($name::$variant)
                        }
                    )+
                    other => {
                        $crate::union::trace_fallback(stringify!($name), $tag, other, path);
                        Ok($name::Unknown(value.clone()))
                    }
                }
            }

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                match self {
                    $( $name::$variant(inner) => <$ty as $crate::WireValue>::to_wire(inner), )+
                    $name::Unknown(raw) => raw.clone(),
                }
            }

            fn validate_wire(&self, path: &str, errors: &mut Vec<$crate::ValidationError>) {
                match self {
                    $(
                        $name::$variant(inner) => {
                            <$ty as $crate::WireValue>::validate_wire(inner, path, errors)
                        }
                    )+
                    $name::Unknown(raw) => errors.push($crate::union::unrecognized_variant(
                        stringify!($name),
                        $tag,
                        raw,
                        path,
                    )),
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    $name::$variant(inner)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.to_json(), serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::serde_json::Value as
                    $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_json(value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
