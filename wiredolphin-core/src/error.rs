//! Error types for wiredolphin-core.
//!
//! Every decoder reports failures through [`DecodeError`]. None of these
//! errors is fatal: the dispatcher records where decoding stopped and the
//! renderer falls back to a hex dump of whatever bytes are left.

use thiserror::Error;

/// Errors produced while decoding a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would run past the captured bytes.
    #[error("truncated at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A bootstrap option declares more bytes than its area holds.
    #[error("malformed DHCP option {code}: declares {declared} bytes, {available} available")]
    MalformedOption {
        code: u8,
        declared: usize,
        available: usize,
    },

    /// A header field holds a value the decoder cannot work with. The
    /// message leaves out `layer`, which callers report alongside.
    #[error("invalid {field} ({value})")]
    InvalidField {
        layer: &'static str,
        field: &'static str,
        value: u32,
    },

    /// No decoder exists for the next-layer code. Not a failure.
    #[error("{layer}: no decoder for next-layer code {code:#06x}")]
    UnsupportedLayer { layer: &'static str, code: u32 },
}

impl DecodeError {
    /// Whether this error means the frame is damaged, as opposed to simply
    /// carrying a protocol we do not decode.
    pub fn is_failure(&self) -> bool {
        !matches!(self, DecodeError::UnsupportedLayer { .. })
    }
}

/// Result type alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
