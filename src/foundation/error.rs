/// Convenience result type used across vizjoin.
pub type VizjoinResult<T> = Result<T, VizjoinError>;

/// Top-level error taxonomy used by the engine APIs.
///
/// Every variant is raised synchronously by the call that triggered it. A failed call never
/// leaves partially applied state behind.
#[derive(thiserror::Error, Debug)]
pub enum VizjoinError {
    /// A scale was built over a degenerate (empty) domain.
    #[error("empty domain: {0}")]
    DomainEmpty(String),

    /// The key function returned no key for the record at `index`.
    #[error("missing key for record at index {index}")]
    MissingKey {
        /// Position of the offending record in the dataset.
        index: usize,
    },

    /// An attribute was given, or asked to interpolate, a value outside its declared kind.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A lookup referenced a key that is absent from a scale domain or category table.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizjoinError {
    /// Build a [`VizjoinError::DomainEmpty`] value.
    pub fn domain_empty(msg: impl Into<String>) -> Self {
        Self::DomainEmpty(msg.into())
    }

    /// Build a [`VizjoinError::InvalidAttribute`] value.
    pub fn invalid_attribute(msg: impl Into<String>) -> Self {
        Self::InvalidAttribute(msg.into())
    }

    /// Build a [`VizjoinError::UnknownCategory`] value.
    pub fn unknown_category(msg: impl Into<String>) -> Self {
        Self::UnknownCategory(msg.into())
    }

    /// Build a [`VizjoinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VizjoinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VizjoinError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
