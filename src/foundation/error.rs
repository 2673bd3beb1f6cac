/// Convenience result type used across the coach-mark engine.
pub type CoachMarkResult<T> = Result<T, CoachMarkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CoachMarkError {
    /// Invalid configuration or misuse of the overlay lifecycle.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Catalog lookup beyond the number of marks.
    #[error("index error: mark {index} out of range for catalog of {count}")]
    Index {
        /// Requested mark index.
        index: usize,
        /// Number of marks in the catalog.
        count: usize,
    },

    /// Text measurement could not produce metrics for a caption.
    #[error("missing metrics: {0}")]
    MissingMetrics(String),

    /// Invalid mark or bounds data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing tours and configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoachMarkError {
    /// Build a [`CoachMarkError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`CoachMarkError::Index`] value.
    pub fn index(index: usize, count: usize) -> Self {
        Self::Index { index, count }
    }

    /// Build a [`CoachMarkError::MissingMetrics`] value.
    pub fn missing_metrics(msg: impl Into<String>) -> Self {
        Self::MissingMetrics(msg.into())
    }

    /// Build a [`CoachMarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoachMarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
