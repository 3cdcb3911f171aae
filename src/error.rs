use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors produced while parsing or analyzing colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not `#RRGGBB` / `RRGGBB`.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// An integer channel does not fit in 0-255.
    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    /// An analysis that needs at least one color received none.
    #[error("palette is empty")]
    EmptyPalette,
}

impl ColorError {
    pub(crate) fn invalid_hex(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
