//! Typed records that keep every wire field they were decoded from.
//!
//! Records are declared with [`record!`](crate::record!). Each known field is
//! stored as `Option<T>` next to a [`RawFields`] side-table holding the
//! complete decoded payload. Presence lives in the side-table, so a field
//! sent as `null` and a field never sent both read back as `None`, but only
//! the first one reports `has_<field>() == true` and is re-emitted.

use serde_json::Value as JsonValue;

use crate::error::{
    json_kind, DecodeError, DecodeErrorKind, ErrorCode, ValidationError, ValidationResult,
};
use crate::path;
use crate::raw::RawFields;
use crate::wire::WireValue;

pub trait Record: Sized + Clone {
    const TYPE_NAME: &'static str;
    /// Wire names of the known fields, in declaration order.
    const FIELDS: &'static [&'static str];

    fn decode_raw(raw: RawFields, path: &str) -> Result<Self, DecodeError>;

    /// Side-table overlaid with the current typed values.
    fn encode_raw(&self) -> RawFields;

    fn validate_at(&self, path: &str, errors: &mut Vec<ValidationError>);

    fn raw_fields(&self) -> &RawFields;

    fn from_json(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Object(map) => Self::decode_raw(RawFields::from(map), ""),
            other => Err(expected_object(Self::TYPE_NAME, &other, "")),
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.encode_raw().into_map())
    }

    fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        self.validate_at("", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Side-table entries that do not belong to a known field.
    fn unknown_fields(&self) -> Vec<(&str, &JsonValue)> {
        self.raw_fields()
            .iter()
            .filter(|(key, _)| !Self::FIELDS.iter().any(|known| *known == *key))
            .collect()
    }
}

pub(crate) fn expected_object(type_name: &str, found: &JsonValue, path: &str) -> DecodeError {
    DecodeError::new(
        DecodeErrorKind::ExpectedObject,
        format!("expected object for {}, found {}", type_name, json_kind(found)),
    )
    .with_path(path)
}

#[doc(hidden)]
pub fn object_fields(
    value: &JsonValue,
    type_name: &str,
    path: &str,
) -> Result<RawFields, DecodeError> {
    match value {
        JsonValue::Object(map) => Ok(RawFields::from(map.clone())),
        other => Err(expected_object(type_name, other, path)),
    }
}

#[doc(hidden)]
pub fn decode_field<T: WireValue>(
    raw: &RawFields,
    key: &str,
    base: &str,
) -> Result<Option<T>, DecodeError> {
    match raw.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => T::from_wire(value, &path::field(base, key)).map(Some),
    }
}

#[doc(hidden)]
pub fn encode_field<T: WireValue>(raw: &mut RawFields, key: &str, value: Option<&T>) {
    match value {
        Some(value) => {
            if raw.get(key).is_some_and(|existing| value.wire_matches(existing)) {
                return;
            }
            raw.insert(key, value.to_wire());
        }
        None if raw.contains_key(key) => raw.insert(key, JsonValue::Null),
        None => {}
    }
}

/// Records an explicitly supplied value (or explicit null) in the side-table.
#[doc(hidden)]
pub fn mirror_field<T: WireValue>(raw: &mut RawFields, key: &str, value: Option<&T>) {
    let wire = value.map(WireValue::to_wire).unwrap_or(JsonValue::Null);
    raw.insert(key, wire);
}

#[doc(hidden)]
pub fn clear_field(raw: &mut RawFields, key: &str) {
    raw.remove(key);
}

#[doc(hidden)]
pub fn validate_field<T: WireValue>(
    raw: &RawFields,
    value: Option<&T>,
    required: bool,
    key: &str,
    base: &str,
    errors: &mut Vec<ValidationError>,
) {
    let field_path = path::field(base, key);
    match value {
        Some(value) => value.validate_wire(&field_path, errors),
        None if required => {
            let message = if raw.contains_key(key) {
                format!("required field {} is null", key)
            } else {
                format!("required field {} is missing", key)
            };
            errors.push(
                ValidationError::new(ErrorCode::MissingRequired, message).with_path(field_path),
            );
        }
        None => {}
    }
}

/// True when the same known keys are present (null included) and the
/// unknown entries are equal, regardless of key order.
#[doc(hidden)]
pub fn side_tables_match<R: Record>(left: &R, right: &R) -> bool {
    let (left_raw, right_raw) = (left.raw_fields(), right.raw_fields());
    let same_presence = R::FIELDS
        .iter()
        .all(|key| left_raw.contains_key(key) == right_raw.contains_key(key));
    if !same_presence {
        return false;
    }
    let unknown = left.unknown_fields();
    unknown.len() == right.unknown_fields().len()
        && unknown
            .into_iter()
            .all(|(key, value)| right_raw.get(key) == Some(value))
}

#[doc(hidden)]
pub fn trace_unknown_fields<R: Record>(raw: &RawFields, path: &str) {
    for key in raw.unknown_keys(R::FIELDS) {
        tracing::trace!(record = R::TYPE_NAME, path, field = key, "retaining unknown field");
    }
}

/// Declares an extensible record.
///
/// ```ignore
/// record! {
///     pub struct UnitConfig {
///         required {
///             unit_amount: String,
///         }
///         optional {
///             scaling_factor: f64,
///         }
///     }
/// }
/// ```
///
/// An optional `tag` line declares a single-constant discriminator field
/// that `new` fills in and validation treats as required.
#[macro_export]
macro_rules! record {
    (@field $(#[$field_meta:meta])* $field:ident : $ty:ty) => {
        $crate::__private::paste! {
            $(#[$field_meta])*
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<$field _mut>](&mut self) -> Option<&mut $ty> {
                self.$field.as_mut()
            }

            /// `None` stores an explicit null.
            pub fn [<set_ $field>](&mut self, value: impl Into<Option<$ty>>) {
                let value = value.into();
                $crate::record::mirror_field(&mut self.raw, stringify!($field), value.as_ref());
                self.$field = value;
            }

            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.[<set_ $field>](value);
                self
            }

            /// Unsets the field so it is no longer emitted.
            pub fn [<clear_ $field>](&mut self) {
                $crate::record::clear_field(&mut self.raw, stringify!($field));
                self.$field = None;
            }

            pub fn [<has_ $field>](&self) -> bool {
                self.raw.contains_key(stringify!($field))
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( tag $tag_field:ident : $tag_ty:ident = $tag_variant:ident ; )?
            required {
                $( $(#[$req_meta:meta])* $req:ident : $req_ty:ty ),* $(,)?
            }
            optional {
                $( $(#[$opt_meta:meta])* $opt:ident : $opt_ty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            $( $tag_field: Option<$crate::OpenEnum<$tag_ty>>, )?
            $( $req: Option<$req_ty>, )*
            $( $opt: Option<$opt_ty>, )*
            raw: $crate::RawFields,
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $req: $req_ty ),*) -> Self {
                #[allow(unused_mut)]
                let mut record = Self::default();
                $(
                    $crate::__private::paste! {
                        record.[<set_ $tag_field>](
                            $crate::OpenEnum::from_known($tag_ty::$tag_variant),
                        );
                    }
                )?
                $(
                    $crate::__private::paste! {
                        record.[<set_ $req>]($req);
                    }
                )*
                record
            }

            $( $crate::record!(@field $tag_field : $crate::OpenEnum<$tag_ty>); )?
            $( $crate::record!(@field $(#[$req_meta])* $req : $req_ty); )*
            $( $crate::record!(@field $(#[$opt_meta])* $opt : $opt_ty); )*
        }

        impl $crate::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[
                $( stringify!($tag_field), )?
                $( stringify!($req), )*
                $( stringify!($opt), )*
            ];

            fn decode_raw(
                raw: $crate::RawFields,
                path: &str,
            ) -> Result<Self, $crate::DecodeError> {
                $crate::record::trace_unknown_fields::<Self>(&raw, path);
                Ok(Self {
                    $(
                        $tag_field:
                            $crate::record::decode_field(&raw, stringify!($tag_field), path)?,
                    )?
                    $( $req: $crate::record::decode_field(&raw, stringify!($req), path)?, )*
                    $( $opt: $crate::record::decode_field(&raw, stringify!($opt), path)?, )*
                    raw,
                })
            }

            fn encode_raw(&self) -> $crate::RawFields {
                let mut raw = self.raw.clone();
                $(
                    $crate::record::encode_field(
                        &mut raw,
                        stringify!($tag_field),
                        self.$tag_field.as_ref(),
                    );
                )?
                $( $crate::record::encode_field(&mut raw, stringify!($req), self.$req.as_ref()); )*
                $( $crate::record::encode_field(&mut raw, stringify!($opt), self.$opt.as_ref()); )*
                raw
            }

            #[allow(unused_variables)]
            fn validate_at(&self, path: &str, errors: &mut Vec<$crate::ValidationError>) {
                $(
                    $crate::record::validate_field(
                        &self.raw,
                        self.$tag_field.as_ref(),
                        true,
                        stringify!($tag_field),
                        path,
                        errors,
                    );
                )?
                $(
                    $crate::record::validate_field(
                        &self.raw,
                        self.$req.as_ref(),
                        true,
                        stringify!($req),
                        path,
                        errors,
                    );
                )*
                $(
                    $crate::record::validate_field(
                        &self.raw,
                        self.$opt.as_ref(),
                        false,
                        stringify!($opt),
                        path,
                        errors,
                    );
                )*
            }

            fn raw_fields(&self) -> &$crate::RawFields {
                &self.raw
            }
        }

        impl $crate::WireValue for $name {
            fn from_wire(
                value: &$crate::__private::serde_json::Value,
                path: &str,
            ) -> Result<Self, $crate::DecodeError> {
                let raw = $crate::record::object_fields(
                    value,
                    <Self as $crate::Record>::TYPE_NAME,
                    path,
                )?;
                <Self as $crate::Record>::decode_raw(raw, path)
            }

            fn to_wire(&self) -> $crate::__private::serde_json::Value {
                <Self as $crate::Record>::to_json(self)
            }

            fn validate_wire(&self, path: &str, errors: &mut Vec<$crate::ValidationError>) {
                <Self as $crate::Record>::validate_at(self, path, errors);
            }
        }

        // Typed comparison plus presence and unknown fields; wire spelling is ignored.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $( self.$tag_field == other.$tag_field && )?
                $( self.$req == other.$req && )*
                $( self.$opt == other.$opt && )*
                $crate::record::side_tables_match(self, other)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &<Self as $crate::Record>::to_json(self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::serde_json::Value as
                    $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::Record>::from_json(value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };

}
