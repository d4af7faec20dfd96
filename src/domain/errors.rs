use thiserror::Error;

/// Failure of a single catalog call.
///
/// Pipelines absorb these: a failed call contributes nothing to the result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{catalog} request failed: {reason}")]
    Unavailable {
        catalog: &'static str,
        reason: String,
    },

    #[error("{catalog} returned status {status}")]
    Status { catalog: &'static str, status: u16 },

    #[error("{catalog} returned a malformed response: {reason}")]
    Malformed {
        catalog: &'static str,
        reason: String,
    },
}

impl CatalogError {
    pub fn unavailable(catalog: &'static str, reason: impl ToString) -> Self {
        Self::Unavailable {
            catalog,
            reason: reason.to_string(),
        }
    }

    pub fn malformed(catalog: &'static str, reason: impl ToString) -> Self {
        Self::Malformed {
            catalog,
            reason: reason.to_string(),
        }
    }

    pub fn catalog(&self) -> &'static str {
        match self {
            Self::Unavailable { catalog, .. }
            | Self::Status { catalog, .. }
            | Self::Malformed { catalog, .. } => catalog,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
