//! BOOTP / DHCP message decoder.
//!
//! The fixed 236-byte BOOTP header is followed by the vendor area. When
//! the vendor area starts with the DHCP magic cookie, the rest of it is
//! decoded as DHCP options.

mod options;

use std::net::Ipv4Addr;

use compact_str::CompactString;

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::Result;

pub use options::{
    option_code, BootpOption, DhcpOptions, MalformedTail, OptionIter, OptionValue,
};

/// BOOTP server port.
pub const SERVER_PORT: u16 = 67;

/// BOOTP client port.
pub const CLIENT_PORT: u16 = 68;

/// Length of the fixed header, up to the vendor area.
pub const FIXED_HEADER_LEN: usize = 236;

/// Minimum vendor area length (RFC 951).
pub const VENDOR_AREA_MIN_LEN: usize = 64;

/// DHCP magic cookie at the start of the vendor area.
pub const MAGIC_COOKIE: [u8; 4] = [0x63, 0x82, 0x53, 0x63];

/// BOOTP operation codes.
pub mod opcode {
    pub const REQUEST: u8 = 1;
    pub const REPLY: u8 = 2;
}

/// DHCP message types (option 53).
pub mod message_type {
    pub const DISCOVER: u8 = 1;
    pub const OFFER: u8 = 2;
    pub const REQUEST: u8 = 3;
    pub const DECLINE: u8 = 4;
    pub const ACK: u8 = 5;
    pub const NAK: u8 = 6;
    pub const RELEASE: u8 = 7;
}

/// Broadcast bit of the flags field.
pub const FLAG_BROADCAST: u16 = 0x8000;

/// Decoded BOOTP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootpMessage<'a> {
    pub opcode: u8,
    pub hardware_type: u8,
    pub hardware_len: u8,
    pub hops: u8,
    pub transaction_id: u32,
    pub seconds: u16,
    pub flags: u16,
    pub client_address: Ipv4Addr,
    pub your_address: Ipv4Addr,
    pub server_address: Ipv4Addr,
    pub gateway_address: Ipv4Addr,
    /// The full 16-byte client hardware address field.
    pub client_hardware: &'a [u8],
    pub server_name: &'a [u8],
    pub boot_file: &'a [u8],
    pub vendor: &'a [u8],
    /// Present when the vendor area carries the DHCP magic cookie.
    pub dhcp: Option<DhcpOptions<'a>>,
}

/// Text of a NUL-padded fixed-size string field.
fn c_string(field: &[u8]) -> CompactString {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    CompactString::from_utf8_lossy(&field[..end])
}

impl<'a> BootpMessage<'a> {
    /// The significant part of the client hardware address, `hardware_len`
    /// bytes capped at the field size.
    pub fn hardware_address(&self) -> &'a [u8] {
        let len = (self.hardware_len as usize).min(self.client_hardware.len());
        &self.client_hardware[..len]
    }

    pub fn server_name_text(&self) -> CompactString {
        c_string(self.server_name)
    }

    pub fn boot_file_text(&self) -> CompactString {
        c_string(self.boot_file)
    }

    pub fn is_broadcast(&self) -> bool {
        self.flags & FLAG_BROADCAST != 0
    }

    pub fn message_type(&self) -> Option<u8> {
        self.dhcp.as_ref().and_then(DhcpOptions::message_type)
    }
}

impl<'a> Protocol<'a> for BootpMessage<'a> {
    const NAME: &'static str = "bootp";
    const DISPLAY_NAME: &'static str = "BOOTP";

    type Next = ();

    /// Decode the header and the vendor area, which runs to the end of the
    /// transport payload and must hold at least 64 bytes.
    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, ())> {
        let mut fixed = cursor.take(FIXED_HEADER_LEN)?;

        let opcode = fixed.read_u8()?;
        let hardware_type = fixed.read_u8()?;
        let hardware_len = fixed.read_u8()?;
        let hops = fixed.read_u8()?;
        let transaction_id = fixed.read_u32()?;
        let seconds = fixed.read_u16()?;
        let flags = fixed.read_u16()?;
        let client_address = Ipv4Addr::from(fixed.read_array::<4>()?);
        let your_address = Ipv4Addr::from(fixed.read_array::<4>()?);
        let server_address = Ipv4Addr::from(fixed.read_array::<4>()?);
        let gateway_address = Ipv4Addr::from(fixed.read_array::<4>()?);
        let client_hardware = fixed.read(16)?;
        let server_name = fixed.read(64)?;
        let boot_file = fixed.read(128)?;

        // Not a fixed 64-byte buffer: DHCP options may run past 64 bytes,
        // so the area spans the rest of the payload, 64 bytes at least.
        let vendor = cursor.read(cursor.remaining().max(VENDOR_AREA_MIN_LEN))?;
        let dhcp = vendor
            .strip_prefix(&MAGIC_COOKIE[..])
            .map(DhcpOptions::parse);

        let message = BootpMessage {
            opcode,
            hardware_type,
            hardware_len,
            hops,
            transaction_id,
            seconds,
            flags,
            client_address,
            your_address,
            server_address,
            gateway_address,
            client_hardware,
            server_name,
            boot_file,
            vendor,
            dhcp,
        };
        Ok((message, ()))
    }
}
