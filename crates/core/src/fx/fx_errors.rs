use thiserror::Error;

/// Failures raised while resolving a conversion factor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// Every currency reachable from `from` was tried without reaching `to`.
    #[error("No conversion path found for {from} -> {to}")]
    NoConversionPath { from: String, to: String },

    /// A zero-valued rate was needed as a divisor.
    #[error("Malformed rate {from} -> {to}: a zero rate cannot be inverted")]
    MalformedRate { from: String, to: String },

    #[error("Conversion factor for {from} -> {to} is out of range")]
    ArithmeticOverflow { from: String, to: String },
}

impl FxError {
    pub(crate) fn no_path(from: &str, to: &str) -> Self {
        FxError::NoConversionPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn overflow(from: &str, to: &str) -> Self {
        FxError::ArithmeticOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
