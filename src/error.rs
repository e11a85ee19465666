use thiserror::Error;

use crate::registry::ZoneId;

/// Everything the core can reject. All variants are detected synchronously
/// and returned immediately; the computations are deterministic, so callers
/// must not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid grid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("value {value} outside valid range 1..={max}")]
    OutOfRange { value: u32, max: u32 },

    #[error("unknown zone id {0}")]
    UnknownZone(ZoneId),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
