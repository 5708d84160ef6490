use judgewrap_common::Language;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Problem-setter signature does not match the family's grammar
    #[error("Invalid function signature: {0}")]
    MalformedSignature(String),

    #[error("Function signature not found for language: {0}")]
    SignatureNotFound(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Shown to the end user as-is
    #[error("{0}")]
    InvalidUserCode(String),

    #[error("Unsupported {language} parameter type '{type_name}' for parameter '{parameter}'")]
    UnsupportedParameterType {
        language: Language,
        parameter: String,
        type_name: String,
    },

    #[error("Unsupported {language} return type '{type_name}'")]
    UnsupportedReturnType { language: Language, type_name: String },

    #[error("Array parameter '{parameter}' must be the last parameter")]
    ArrayParameterNotLast { parameter: String },
}
