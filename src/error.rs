//! Error types for wiredolphin.

use thiserror::Error;

/// Main error type for wiredolphin operations.
///
/// Frame-level decode failures never surface here: they are rendered as
/// part of the frame. Only capture failures and sink I/O end a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Error opening or reading a frame source
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to frame sources.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Invalid pcap or pcapng format
    #[error("Invalid capture format: {reason}")]
    InvalidFormat { reason: String },

    /// Link type other than Ethernet
    #[error("Unsupported link type: {link_type} (only Ethernet is dissected)")]
    UnsupportedLinkType { link_type: u16 },

    /// Interface not in the device list
    #[error("No such interface: {name}")]
    InterfaceNotFound { name: String },

    /// Filter given without libpcap support
    #[error("Capture filters need the `live` feature")]
    FilterUnsupported,

    /// libpcap failure
    #[error("libpcap: {0}")]
    Live(String),
}

#[cfg(feature = "live")]
impl From<pcap::Error> for CaptureError {
    fn from(err: pcap::Error) -> Self {
        CaptureError::Live(err.to_string())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_error_wraps() {
        let err: Error = CaptureError::UnsupportedLinkType { link_type: 113 }.into();
        assert_eq!(
            err.to_string(),
            "Capture error: Unsupported link type: 113 (only Ethernet is dissected)"
        );
    }
}
