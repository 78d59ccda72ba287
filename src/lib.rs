//! wiredolphin - dissect captured network frames.
//!
//! This crate owns the capture side: command-line parsing, pcap/pcapng
//! readers, optional libpcap live capture and the session loop. Decoding
//! and rendering live in [`wiredolphin_core`].
//!
//! # Example
//!
//! ```no_run
//! use wiredolphin::capture::PcapReader;
//! use wiredolphin::session::{run, SessionOptions};
//! use wiredolphin_core::VerbosityMode;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut reader = PcapReader::open("dhcp.pcap.gz")?;
//!     let options = SessionOptions {
//!         mode: VerbosityMode::Synthetic,
//!         count: Some(10),
//!     };
//!     let stats = run(&mut reader, &mut std::io::stdout(), &options)?;
//!     eprintln!("{} frames", stats.frames);
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod cli;
pub mod error;
pub mod session;

pub use error::{Error, Result};
