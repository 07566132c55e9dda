use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::TemplateError;

/// Machine readable tag for a [`SkillError`], reported alongside the
/// message in every failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingInput,
    MalformedRequest,
    MissingRequiredField,
    NotFound,
    ProcessingFailure,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SkillError {
    #[error("no input data received")]
    MissingInput,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("missing required field(s): {0}")]
    MissingRequiredField(String),

    #[error("file not found: {0}")]
    NotFound(String),

    /// The underlying operation failed; the message is its own diagnostic.
    #[error("processing error: {0}")]
    ProcessingFailure(String),
}

impl SkillError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SkillError::MissingInput => ErrorKind::MissingInput,
            SkillError::MalformedRequest(_) => ErrorKind::MalformedRequest,
            SkillError::MissingRequiredField(_) => ErrorKind::MissingRequiredField,
            SkillError::NotFound(_) => ErrorKind::NotFound,
            SkillError::ProcessingFailure(_) => ErrorKind::ProcessingFailure,
        }
    }
}

impl From<std::io::Error> for SkillError {
    fn from(err: std::io::Error) -> Self {
        SkillError::ProcessingFailure(err.to_string())
    }
}

impl From<TemplateError> for SkillError {
    fn from(err: TemplateError) -> Self {
        SkillError::ProcessingFailure(err.to_string())
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        SkillError::MalformedRequest(err.to_string())
    }
}

pub type SkillResult<T> = Result<T, SkillError>;
