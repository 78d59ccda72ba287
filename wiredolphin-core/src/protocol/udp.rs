//! UDP header decoder.

use super::{Ports, Protocol};
use crate::cursor::Cursor;
use crate::error::Result;

/// UDP header length.
pub const HEADER_LEN: usize = 8;

/// Decoded UDP header.
///
/// `length` is reported as sent; the payload is whatever follows the
/// header inside the network-layer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
}

impl UdpHeader {
    pub fn ports(&self) -> Ports {
        Ports {
            source: self.source_port,
            destination: self.destination_port,
        }
    }
}

impl<'a> Protocol<'a> for UdpHeader {
    const NAME: &'static str = "udp";
    const DISPLAY_NAME: &'static str = "UDP header";

    type Next = Ports;

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, Ports)> {
        let mut header = cursor.take(HEADER_LEN)?;

        let udp = UdpHeader {
            source_port: header.read_u16()?,
            destination_port: header.read_u16()?,
            length: header.read_u16()?,
            checksum: header.read_u16()?,
        };
        Ok((udp, udp.ports()))
    }
}
