/// Convenience result type used across duskr.
pub type DuskrResult<T> = Result<T, DuskrError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DuskrError {
    /// A control point filename carries no digit run to use as sequence number.
    #[error("missing sequence number: filename '{filename}' contains no digits")]
    MissingSequenceNumber {
        /// Offending filename.
        filename: String,
    },

    /// Fewer than two control points were registered.
    #[error("insufficient control points: at least 2 required, {count} given")]
    InsufficientControlPoints {
        /// Number of registered control points.
        count: usize,
    },

    /// Control point filenames do not share the same prefix.
    #[error("prefix mismatch: expected '{expected}', found '{found}'")]
    PrefixMismatch {
        /// Prefix of the lowest control point.
        expected: String,
        /// First differing prefix.
        found: String,
    },

    /// Control point filenames do not share the same suffix.
    #[error("suffix mismatch: expected '{expected}', found '{found}'")]
    SuffixMismatch {
        /// Suffix of the lowest control point.
        expected: String,
        /// First differing suffix.
        found: String,
    },

    /// A control point document is blank (not the result of a development).
    #[error("blank settings: '{filename}' has no development settings")]
    BlankSettings {
        /// Filename of the blank control point.
        filename: String,
    },

    /// Tone curve data has the wrong point count, is non-numeric or out of range.
    #[error("invalid curve data: {0}")]
    InvalidCurveData(String),

    /// Interpolator precondition violated (knot count, ordering, finiteness).
    #[error("spline error: {0}")]
    Spline(String),

    /// A develop-settings document could not be decoded or encoded.
    #[error("document error: {0}")]
    Document(String),

    /// Invalid interpolator configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DuskrError {
    /// Build a [`DuskrError::InvalidCurveData`] value.
    pub fn invalid_curve(msg: impl Into<String>) -> Self {
        Self::InvalidCurveData(msg.into())
    }

    /// Build a [`DuskrError::Spline`] value.
    pub fn spline(msg: impl Into<String>) -> Self {
        Self::Spline(msg.into())
    }

    /// Build a [`DuskrError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`DuskrError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
