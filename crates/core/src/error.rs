/// Result alias that carries the custom [`PcSetError`] type.
pub type Result<T> = std::result::Result<T, PcSetError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum PcSetError {
    /// An argument had the wrong shape: a non-array or non-integer pitch
    /// list, candidates of differing cardinality, mismatched vector lengths.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is not defined for the requested modulus.
    #[error("domain error: {0}")]
    Domain(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl PcSetError {
    /// Creates an invalid-argument error with the provided message.
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a domain error with the provided message.
    pub fn domain<T: Into<String>>(msg: T) -> Self {
        Self::Domain(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
