//! ICMP (IPv4) header decoder.

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::Result;

/// ICMP header length (type, code, checksum, rest-of-header).
pub const HEADER_LEN: usize = 8;

/// ICMP message types.
pub mod icmp_type {
    pub const ECHO_REPLY: u8 = 0;
    pub const DESTINATION_UNREACHABLE: u8 = 3;
    pub const SOURCE_QUENCH: u8 = 4;
    pub const REDIRECT: u8 = 5;
    pub const ALTERNATE_HOST_ADDRESS: u8 = 6;
    pub const ECHO_REQUEST: u8 = 8;
    pub const ROUTER_ADVERTISEMENT: u8 = 9;
    pub const ROUTER_SOLICITATION: u8 = 10;
    pub const TIME_EXCEEDED: u8 = 11;
    pub const PARAMETER_PROBLEM: u8 = 12;
    pub const TIMESTAMP_REQUEST: u8 = 13;
    pub const TIMESTAMP_REPLY: u8 = 14;
    pub const INFORMATION_REQUEST: u8 = 15;
    pub const INFORMATION_REPLY: u8 = 16;
    pub const ADDRESS_MASK_REQUEST: u8 = 17;
    pub const ADDRESS_MASK_REPLY: u8 = 18;
    pub const TRACEROUTE: u8 = 30;
}

/// Identifier and sequence number of an echo request or reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Echo {
    pub identifier: u16,
    pub sequence: u16,
}

/// Decoded ICMP header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcmpHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    /// Set for echo request and echo reply.
    pub echo: Option<Echo>,
    /// The raw rest-of-header word.
    pub rest: [u8; 4],
}

impl<'a> Protocol<'a> for IcmpHeader {
    const NAME: &'static str = "icmp";
    const DISPLAY_NAME: &'static str = "ICMP header";

    type Next = ();

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, ())> {
        let mut header = cursor.take(HEADER_LEN)?;

        let icmp_type = header.read_u8()?;
        let code = header.read_u8()?;
        let checksum = header.read_u16()?;
        let rest: [u8; 4] = header.read_array()?;

        let echo = match icmp_type {
            icmp_type::ECHO_REQUEST | icmp_type::ECHO_REPLY => Some(Echo {
                identifier: u16::from_be_bytes([rest[0], rest[1]]),
                sequence: u16::from_be_bytes([rest[2], rest[3]]),
            }),
            _ => None,
        };

        let icmp = IcmpHeader {
            icmp_type,
            code,
            checksum,
            echo,
            rest,
        };
        Ok((icmp, ()))
    }
}
