//! IPv6 fixed header decoder.
//!
//! Extension headers are not walked: the next-header field of the fixed
//! header decides the next decoder directly.

use std::net::Ipv6Addr;

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};

/// Length of the IPv6 fixed header.
pub const HEADER_LEN: usize = 40;

/// Decoded IPv6 fixed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Header {
    pub traffic_class: u8,
    pub flow_label: u32,
    pub payload_length: u16,
    pub next_header: u8,
    pub hop_limit: u8,
    pub source: Ipv6Addr,
    pub destination: Ipv6Addr,
}

impl<'a> Protocol<'a> for Ipv6Header {
    const NAME: &'static str = "ipv6";
    const DISPLAY_NAME: &'static str = "IPv6 header";

    /// The next-header protocol number.
    type Next = u8;

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, u8)> {
        let mut header = cursor.take(HEADER_LEN)?;

        let first = header.read_u32()?;
        let version = (first >> 28) as u8;
        if version != 6 {
            return Err(DecodeError::InvalidField {
                layer: Self::NAME,
                field: "version",
                value: version as u32,
            });
        }
        let payload_length = header.read_u16()?;
        let next_header = header.read_u8()?;
        let hop_limit = header.read_u8()?;
        let source = Ipv6Addr::from(header.read_array::<16>()?);
        let destination = Ipv6Addr::from(header.read_array::<16>()?);

        *cursor = cursor.take(payload_length as usize)?;

        let ipv6 = Ipv6Header {
            traffic_class: ((first >> 20) & 0xff) as u8,
            flow_label: first & 0x000f_ffff,
            payload_length,
            next_header,
            hop_limit,
            source,
            destination,
        };
        Ok((ipv6, next_header))
    }
}
