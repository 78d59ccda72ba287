//! ARP / RARP packet decoder.
//!
//! Address lengths come from the packet itself, so non-Ethernet/non-IPv4
//! address families decode too; they are only rendered as raw bytes.

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::Result;

/// Length of the fixed part preceding the addresses.
pub const FIXED_LEN: usize = 8;

/// Ethernet hardware type.
pub const HARDWARE_ETHERNET: u16 = 1;

/// ARP operation codes.
pub mod opcode {
    pub const REQUEST: u16 = 1;
    pub const REPLY: u16 = 2;
    pub const RARP_REQUEST: u16 = 3;
    pub const RARP_REPLY: u16 = 4;
    pub const DRARP_REQUEST: u16 = 5;
    pub const DRARP_REPLY: u16 = 6;
    pub const DRARP_ERROR: u16 = 7;
    pub const INARP_REQUEST: u16 = 8;
    pub const INARP_REPLY: u16 = 9;
    pub const NAK: u16 = 10;
}

/// Decoded ARP packet. Addresses borrow from the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpPacket<'a> {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_len: u8,
    pub protocol_len: u8,
    pub opcode: u16,
    pub sender_hardware: &'a [u8],
    pub sender_protocol: &'a [u8],
    pub target_hardware: &'a [u8],
    pub target_protocol: &'a [u8],
}

impl<'a> Protocol<'a> for ArpPacket<'a> {
    const NAME: &'static str = "arp";
    const DISPLAY_NAME: &'static str = "ARP header";

    type Next = ();

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, ())> {
        let mut fixed = cursor.take(FIXED_LEN)?;
        let hardware_type = fixed.read_u16()?;
        let protocol_type = fixed.read_u16()?;
        let hardware_len = fixed.read_u8()?;
        let protocol_len = fixed.read_u8()?;
        let opcode = fixed.read_u16()?;

        let hlen = hardware_len as usize;
        let plen = protocol_len as usize;
        let mut addresses = cursor.take(2 * (hlen + plen))?;

        let arp = ArpPacket {
            hardware_type,
            protocol_type,
            hardware_len,
            protocol_len,
            opcode,
            sender_hardware: addresses.read(hlen)?,
            sender_protocol: addresses.read(plen)?,
            target_hardware: addresses.read(hlen)?,
            target_protocol: addresses.read(plen)?,
        };
        Ok((arp, ()))
    }
}
