//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use wiredolphin_core::prelude::*;
//!
//! let dissection = dissect(&[0u8; 4], 4);
//! assert!(dissection.layers.is_empty());
//! assert!(dissection.is_failure());
//! ```

// Decoding
pub use crate::dissect::{dissect, Dissection, Outcome};
pub use crate::protocol::{Application, DecodedLayer, Ports};

// Rendering
pub use crate::render::{decode_and_render, VerbosityMode};

// Error types
pub use crate::error::{DecodeError, Result};
