#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    MissingRequired,
    UnrecognizedEnumValue,
    UnrecognizedVariant,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequired => "MissingRequired",
            ErrorCode::UnrecognizedEnumValue => "UnrecognizedEnumValue",
            ErrorCode::UnrecognizedVariant => "UnrecognizedVariant",
        }
    }
}

/// A single invalid-data finding reported by an explicit `validate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.path = Some(path);
        }
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {} (path: {})", self.code.as_str(), self.message, path)
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    InvalidJson,
    ExpectedObject,
    TypeMismatch,
}

/// Structural mismatch between a wire value and the type declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
    pub path: Option<String>,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.is_empty() {
            self.path = Some(path);
        }
        self
    }

    pub(crate) fn type_mismatch(expected: &str, found: &serde_json::Value, path: &str) -> Self {
        DecodeError::new(
            DecodeErrorKind::TypeMismatch,
            format!("expected {}, found {}", expected, json_kind(found)),
        )
        .with_path(path)
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{} (path: {})", self.message, path)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::new(DecodeErrorKind::InvalidJson, format!("json error: {}", err))
    }
}

/// Either failure a caller can see when decoding and validating in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    Decode(DecodeError),
    InvalidData(Vec<ValidationError>),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Decode(err) => write!(f, "decode error: {}", err),
            ModelError::InvalidData(errors) => {
                write!(f, "invalid data:")?;
                for err in errors {
                    write!(f, " [{}]", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Decode(err) => Some(err),
            ModelError::InvalidData(errors) => errors
                .first()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<DecodeError> for ModelError {
    fn from(err: DecodeError) -> Self {
        ModelError::Decode(err)
    }
}

impl From<Vec<ValidationError>> for ModelError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ModelError::InvalidData(errors)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Decode(err.into())
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
