//! TCP header decoder.

use std::fmt;

use smallvec::SmallVec;

use super::{Ports, Protocol};
use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};

/// Length of a TCP header without options.
pub const MIN_HEADER_LEN: usize = 20;

/// TCP flag bits.
pub mod flags {
    pub const FIN: u8 = 0x01;
    pub const SYN: u8 = 0x02;
    pub const RST: u8 = 0x04;
    pub const PSH: u8 = 0x08;
    pub const ACK: u8 = 0x10;
    pub const URG: u8 = 0x20;
}

const FLAG_NAMES: [(u8, &str); 6] = [
    (flags::FIN, "FIN"),
    (flags::SYN, "SYN"),
    (flags::RST, "RST"),
    (flags::PSH, "PSH"),
    (flags::ACK, "ACK"),
    (flags::URG, "URG"),
];

/// The six classic TCP control flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TcpFlags(pub u8);

impl TcpFlags {
    pub fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Names of the set flags, in FIN, SYN, RST, PSH, ACK, URG order.
    pub fn names(self) -> SmallVec<[&'static str; 6]> {
        FLAG_NAMES
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for TcpFlags {
    /// Comma-separated flag names, or `None` when no flag is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&names.join(","))
        }
    }
}

/// Decoded TCP header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpHeader<'a> {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence: u32,
    pub acknowledgment: u32,
    /// Header length in 32-bit words.
    pub data_offset: u8,
    pub flags: TcpFlags,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
    pub options: &'a [u8],
}

impl TcpHeader<'_> {
    /// Header length in bytes.
    pub fn header_len(&self) -> usize {
        self.data_offset as usize * 4
    }

    pub fn ports(&self) -> Ports {
        Ports {
            source: self.source_port,
            destination: self.destination_port,
        }
    }
}

impl<'a> Protocol<'a> for TcpHeader<'a> {
    const NAME: &'static str = "tcp";
    const DISPLAY_NAME: &'static str = "TCP header";

    type Next = Ports;

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, Ports)> {
        let mut fixed = cursor.take(MIN_HEADER_LEN)?;

        let source_port = fixed.read_u16()?;
        let destination_port = fixed.read_u16()?;
        let sequence = fixed.read_u32()?;
        let acknowledgment = fixed.read_u32()?;
        let data_offset = fixed.read_u8()? >> 4;
        let flags = TcpFlags(fixed.read_u8()? & 0x3f);
        let window = fixed.read_u16()?;
        let checksum = fixed.read_u16()?;
        let urgent_pointer = fixed.read_u16()?;

        let header_len = data_offset as usize * 4;
        if header_len < MIN_HEADER_LEN {
            return Err(DecodeError::InvalidField {
                layer: Self::NAME,
                field: "data offset",
                value: data_offset as u32,
            });
        }
        let options = cursor.read(header_len - MIN_HEADER_LEN)?;

        let tcp = TcpHeader {
            source_port,
            destination_port,
            sequence,
            acknowledgment,
            data_offset,
            flags,
            window,
            checksum,
            urgent_pointer,
            options,
        };
        let ports = tcp.ports();
        Ok((tcp, ports))
    }
}
