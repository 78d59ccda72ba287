//! Frame sources.
//!
//! A session pulls frames one at a time from a [`FrameSource`]: a pcap or
//! pcapng recording ([`PcapReader`]) or, with the `live` feature, a libpcap
//! handle ([`LiveCapture`]).

#[cfg(feature = "live")]
mod live;
mod packet;
mod reader;

#[cfg(feature = "live")]
pub use live::{list_interfaces, LiveCapture};
pub use packet::RawPacket;
pub use reader::{is_gzip_extension, PcapReader};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Link type of Ethernet II captures (`LINKTYPE_ETHERNET`).
pub const LINKTYPE_ETHERNET: u16 = 1;

/// Something that yields captured frames in order.
pub trait FrameSource {
    /// Short description for logs.
    fn describe(&self) -> String;

    /// Link type of the frames this source yields.
    fn link_type(&self) -> u16;

    /// Next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<RawPacket>>;
}

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Live capture on a network interface.
    Interface(String),
    /// A pcap or pcapng recording, possibly gzipped.
    Offline(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Interface(name) => write!(f, "interface {name}"),
            Source::Offline(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Open a frame source, installing `filter` when one is given.
///
/// Filters are compiled by libpcap, so without the `live` feature only
/// unfiltered offline reads are possible.
pub fn open(source: &Source, filter: Option<&str>) -> Result<Box<dyn FrameSource>> {
    match source {
        Source::Offline(path) => {
            if filter.is_some() {
                return open_filtered_file(path, filter);
            }
            Ok(Box::new(PcapReader::open(path)?))
        }
        Source::Interface(name) => open_interface(name, filter),
    }
}

#[cfg(feature = "live")]
fn open_filtered_file(path: &Path, filter: Option<&str>) -> Result<Box<dyn FrameSource>> {
    Ok(Box::new(LiveCapture::from_file(path, filter)?))
}

#[cfg(not(feature = "live"))]
fn open_filtered_file(_path: &Path, _filter: Option<&str>) -> Result<Box<dyn FrameSource>> {
    Err(crate::error::CaptureError::FilterUnsupported.into())
}

#[cfg(feature = "live")]
fn open_interface(name: &str, filter: Option<&str>) -> Result<Box<dyn FrameSource>> {
    Ok(Box::new(LiveCapture::open(name, filter)?))
}

#[cfg(not(feature = "live"))]
fn open_interface(_name: &str, _filter: Option<&str>) -> Result<Box<dyn FrameSource>> {
    Err(crate::error::CaptureError::Live("built without the `live` feature".to_string()).into())
}
