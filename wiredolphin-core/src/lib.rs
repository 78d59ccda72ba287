//! # wiredolphin-core
//!
//! Frame dissection and text rendering for wiredolphin.
//!
//! This crate takes the raw bytes of one captured Ethernet frame, decodes
//! its protocol layers, and writes them as text at one of four verbosity
//! levels. It does no capture and no I/O beyond writing to the sink it is
//! given.
//!
//! ## Quick Start
//!
//! ```rust
//! use wiredolphin_core::{decode_and_render, VerbosityMode};
//!
//! // 14-byte Ethernet header carrying an unknown EtherType.
//! let frame = [
//!     0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x88, 0xb5,
//! ];
//!
//! let mut out = Vec::new();
//! decode_and_render(&frame, frame.len(), VerbosityMode::Concise, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "11:22:33:44:55:66 -> aa:bb:cc:dd:ee:ff, Unknown\n\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        wiredolphin-core                             |
//! +---------------------------------------------------------------------+
//! |  cursor      - bounds-checked reads over the captured bytes         |
//! |  protocol/   - Protocol trait, one decoder per layer, port table    |
//! |  dissect     - layer dispatch, one decode pass per frame            |
//! |  render/     - raw, concise, synthetic and complete output          |
//! |  tables      - code -> name lookups                                 |
//! |  format/     - address formatting, hex and text dumps               |
//! |  error       - DecodeError                                          |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Supported Protocols
//!
//! | Layer | Protocols |
//! |-------|-----------|
//! | Link | Ethernet II |
//! | Network | IPv4, IPv6 (fixed header), ARP / RARP |
//! | Transport | ICMP, TCP, UDP |
//! | Application | BOOTP / DHCP; text or hex for FTP, SMTP, HTTP, POP, IMAP and their TLS ports |

pub mod cursor;
pub mod dissect;
pub mod error;
pub mod format;
pub mod prelude;
pub mod protocol;
pub mod render;
pub mod tables;

pub use cursor::Cursor;
pub use dissect::{dissect, Dissection, Outcome};
pub use error::{DecodeError, Result};
pub use protocol::{Application, DecodedLayer, Ports, Protocol};
pub use render::{decode_and_render, render, VerbosityMode};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
