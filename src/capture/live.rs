//! libpcap-backed frame sources.

use std::path::Path;

use pcap::{Activated, Capture, Device};
use tracing::{debug, info};

use super::{FrameSource, RawPacket};
use crate::error::{CaptureError, Result};

/// Snapshot length: whole frames.
const SNAPLEN: i32 = 65535;

/// Read timeout so an idle interface still returns control.
const READ_TIMEOUT_MS: i32 = 1000;

/// A libpcap capture handle, live or offline.
pub struct LiveCapture {
    name: String,
    capture: Capture<dyn Activated>,
    frame_number: u64,
}

impl LiveCapture {
    /// Open a network interface for live capture.
    ///
    /// The name must appear in the libpcap device list.
    pub fn open(interface: &str, filter: Option<&str>) -> Result<Self> {
        let device = Device::list()
            .map_err(CaptureError::from)?
            .into_iter()
            .find(|device| device.name == interface)
            .ok_or_else(|| CaptureError::InterfaceNotFound {
                name: interface.to_string(),
            })?;

        debug!(interface, "opening live capture");
        let capture = Capture::from_device(device)
            .map_err(CaptureError::from)?
            .snaplen(SNAPLEN)
            .promisc(true)
            .timeout(READ_TIMEOUT_MS)
            .open()
            .map_err(CaptureError::from)?;

        Self::with_filter(interface.to_string(), capture.into(), filter)
    }

    /// Read a capture file through libpcap so a filter can be applied.
    pub fn from_file<P: AsRef<Path>>(path: P, filter: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let capture = Capture::from_file(path).map_err(|_| CaptureError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::with_filter(path.display().to_string(), capture.into(), filter)
    }

    fn with_filter(
        name: String,
        mut capture: Capture<dyn Activated>,
        filter: Option<&str>,
    ) -> Result<Self> {
        if let Some(filter) = filter {
            capture.filter(filter, true).map_err(CaptureError::from)?;
            info!(filter, "capture filter installed");
        }
        Ok(Self {
            name,
            capture,
            frame_number: 0,
        })
    }
}

impl FrameSource for LiveCapture {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn link_type(&self) -> u16 {
        self.capture.get_datalink().0 as u16
    }

    fn next_frame(&mut self) -> Result<Option<RawPacket>> {
        let link_type = self.link_type();
        loop {
            match self.capture.next_packet() {
                Ok(packet) => {
                    self.frame_number += 1;
                    let header = packet.header;
                    return Ok(Some(RawPacket {
                        frame_number: self.frame_number,
                        timestamp_us: header.ts.tv_sec as i64 * 1_000_000
                            + header.ts.tv_usec as i64,
                        captured_length: header.caplen,
                        original_length: header.len,
                        link_type,
                        data: packet.data.to_vec(),
                    }));
                }
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(pcap::Error::NoMorePackets) => return Ok(None),
                Err(e) => return Err(CaptureError::from(e).into()),
            }
        }
    }
}

/// Names and descriptions of the interfaces libpcap can open.
pub fn list_interfaces() -> Result<Vec<(String, Option<String>)>> {
    let devices = Device::list().map_err(CaptureError::from)?;
    Ok(devices
        .into_iter()
        .map(|device| (device.name, device.desc))
        .collect())
}
