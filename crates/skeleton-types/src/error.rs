use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of skeleton library errors.
///
/// Rendering never fails; only loading a [`crate::SkeletonConfig`] can.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SkeletonErrorKind {
    ConfigRead,
    ConfigParse,
    InvalidConfig,
}

impl fmt::Display for SkeletonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkeletonErrorKind::ConfigRead => write!(f, "ConfigRead"),
            SkeletonErrorKind::ConfigParse => write!(f, "ConfigParse"),
            SkeletonErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error returned by the configuration layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkeletonError {
    pub kind: SkeletonErrorKind,
    pub message: String,
    /// Dotted path of the offending config field, when one is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl SkeletonError {
    pub fn config_read(message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::ConfigRead,
            message: message.into(),
            field: None,
        }
    }

    pub fn config_parse(message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::ConfigParse,
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::InvalidConfig,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for SkeletonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {} ({field})", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for SkeletonError {}

impl From<toml::de::Error> for SkeletonError {
    fn from(err: toml::de::Error) -> Self {
        SkeletonError::config_parse(err.to_string())
    }
}

impl From<std::io::Error> for SkeletonError {
    fn from(err: std::io::Error) -> Self {
        SkeletonError::config_read(err.to_string())
    }
}
