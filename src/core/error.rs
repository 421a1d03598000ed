use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationMissingArgument,
    ValidationInvalidArgument,

    CaseEmptyNeedle,
    CaseUnsupportedConvention,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::CaseEmptyNeedle => "case.empty_needle",
            ErrorCode::CaseUnsupportedConvention => "case.unsupported_convention",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedConventionDetails {
    pub tag: String,
    pub supported: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        let details = serde_json::to_value(MissingArgumentDetails { args })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            details,
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn empty_needle() -> Self {
        Self::new(
            ErrorCode::CaseEmptyNeedle,
            "Needle resolves to an empty string",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Provide a non-empty needle with --needle/-n")
    }

    pub fn unsupported_convention(tag: impl Into<String>, supported: Vec<String>) -> Self {
        let tag = tag.into();
        let details = serde_json::to_value(UnsupportedConventionDetails {
            tag: tag.clone(),
            supported,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::CaseUnsupportedConvention,
            format!("Unsupported target convention '{}'", tag),
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            serde_json::json!({ "error": error.into(), "context": context }),
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
