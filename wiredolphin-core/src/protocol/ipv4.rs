//! IPv4 header decoder.

use std::net::Ipv4Addr;

use smallvec::SmallVec;

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::{DecodeError, Result};

/// Length of an IPv4 header without options.
pub const MIN_HEADER_LEN: usize = 20;

/// IP protocol numbers the dispatcher routes on.
pub mod ip_protocol {
    pub const ICMP: u8 = 1;
    pub const TCP: u8 = 6;
    pub const UDP: u8 = 17;
    pub const ICMPV6: u8 = 58;
}

/// Flag bits from the flags/fragment-offset word.
pub mod flags {
    pub const RESERVED: u8 = 0b100;
    pub const DONT_FRAGMENT: u8 = 0b010;
    pub const MORE_FRAGMENTS: u8 = 0b001;
}

/// Decoded IPv4 header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Header<'a> {
    pub version: u8,
    /// Header length in 32-bit words.
    pub ihl: u8,
    pub dscp: u8,
    pub ecn: u8,
    pub total_length: u16,
    pub identification: u16,
    /// The three flag bits (reserved, DF, MF).
    pub flags: u8,
    /// Fragment offset in 8-byte units.
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    pub options: &'a [u8],
}

impl Ipv4Header<'_> {
    /// Header length in bytes.
    pub fn header_len(&self) -> usize {
        self.ihl as usize * 4
    }

    pub fn dont_fragment(&self) -> bool {
        self.flags & flags::DONT_FRAGMENT != 0
    }

    pub fn more_fragments(&self) -> bool {
        self.flags & flags::MORE_FRAGMENTS != 0
    }

    /// Names of the set DF and MF bits, in that order.
    pub fn flag_names(&self) -> SmallVec<[&'static str; 2]> {
        let mut names = SmallVec::new();
        if self.dont_fragment() {
            names.push("DF");
        }
        if self.more_fragments() {
            names.push("MF");
        }
        names
    }
}

impl<'a> Protocol<'a> for Ipv4Header<'a> {
    const NAME: &'static str = "ipv4";
    const DISPLAY_NAME: &'static str = "IPv4 header";

    /// The IP protocol number.
    type Next = u8;

    /// Decode the header and narrow `cursor` to the datagram payload.
    ///
    /// The payload ends where the total length says it does, so link-layer
    /// padding is never handed to the transport decoder. A total length
    /// reaching past the captured bytes is reported as truncation.
    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, u8)> {
        let mut fixed = cursor.take(MIN_HEADER_LEN)?;

        let version_ihl = fixed.read_u8()?;
        let version = version_ihl >> 4;
        let ihl = version_ihl & 0x0f;
        if version != 4 {
            return Err(DecodeError::InvalidField {
                layer: Self::NAME,
                field: "version",
                value: version as u32,
            });
        }
        if (ihl as usize) * 4 < MIN_HEADER_LEN {
            return Err(DecodeError::InvalidField {
                layer: Self::NAME,
                field: "header length",
                value: ihl as u32,
            });
        }

        let dscp_ecn = fixed.read_u8()?;
        let total_length = fixed.read_u16()?;
        let identification = fixed.read_u16()?;
        let flags_fragment = fixed.read_u16()?;
        let ttl = fixed.read_u8()?;
        let protocol = fixed.read_u8()?;
        let checksum = fixed.read_u16()?;
        let source = Ipv4Addr::from(fixed.read_array::<4>()?);
        let destination = Ipv4Addr::from(fixed.read_array::<4>()?);

        let header_len = ihl as usize * 4;
        let options = cursor.read(header_len - MIN_HEADER_LEN)?;

        if (total_length as usize) < header_len {
            return Err(DecodeError::InvalidField {
                layer: Self::NAME,
                field: "total length",
                value: total_length as u32,
            });
        }
        *cursor = cursor.take(total_length as usize - header_len)?;

        let header = Ipv4Header {
            version,
            ihl,
            dscp: dscp_ecn >> 2,
            ecn: dscp_ecn & 0x03,
            total_length,
            identification,
            flags: (flags_fragment >> 13) as u8,
            fragment_offset: flags_fragment & 0x1fff,
            ttl,
            protocol,
            checksum,
            source,
            destination,
            options,
        };
        Ok((header, protocol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::test_utils::Ipv4Builder;

    #[test]
    fn test_decode_ipv4() {
        let packet = Ipv4Builder::new()
            .src_ip([192, 168, 0, 1])
            .dst_ip([192, 168, 0, 255])
            .udp()
            .ttl(128)
            .payload(vec![0xaa; 8])
            .build();

        let mut cursor = Cursor::new(&packet, packet.len());
        let (ip, next) = Ipv4Header::decode(&mut cursor).unwrap();

        assert_eq!(ip.version, 4);
        assert_eq!(ip.header_len(), 20);
        assert_eq!(ip.total_length, 28);
        assert_eq!(ip.ttl, 128);
        assert_eq!(ip.source, Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(ip.destination, Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(next, ip_protocol::UDP);
        assert_eq!(cursor.remaining(), 8);
    }

    #[test]
    fn test_payload_starts_after_options() {
        let packet = Ipv4Builder::new()
            .options(vec![0x01, 0x01, 0x01, 0x00]) // NOP, NOP, NOP, EOL
            .payload(vec![0xde, 0xad])
            .build();

        let mut cursor = Cursor::new(&packet, packet.len());
        let (ip, _) = Ipv4Header::decode(&mut cursor).unwrap();

        assert_eq!(ip.ihl, 6);
        assert_eq!(ip.header_len(), 24);
        assert_eq!(ip.options, &[0x01, 0x01, 0x01, 0x00]);
        assert_eq!(cursor.offset(), 24);
        assert_eq!(cursor.slice_to_end(), &[0xde, 0xad]);
    }

    #[test]
    fn test_payload_excludes_link_padding() {
        let mut packet = Ipv4Builder::new().payload(vec![0x01, 0x02]).build();
        packet.extend_from_slice(&[0x00; 6]); // Ethernet minimum-size padding

        let mut cursor = Cursor::new(&packet, packet.len());
        Ipv4Header::decode(&mut cursor).unwrap();
        assert_eq!(cursor.slice_to_end(), &[0x01, 0x02]);
    }

    #[test]
    fn test_flags_and_fragment_offset() {
        let packet = Ipv4Builder::new().flags_fragment(0x4000 | 0x0010).build();
        let mut cursor = Cursor::new(&packet, packet.len());
        let (ip, _) = Ipv4Header::decode(&mut cursor).unwrap();

        assert!(ip.dont_fragment());
        assert!(!ip.more_fragments());
        assert_eq!(ip.fragment_offset, 0x10);
        assert_eq!(ip.flag_names().as_slice(), ["DF"]);
    }

    #[test]
    fn test_flag_names_order() {
        let packet = Ipv4Builder::new().flags_fragment(0x6000).build();
        let mut cursor = Cursor::new(&packet, packet.len());
        let (ip, _) = Ipv4Header::decode(&mut cursor).unwrap();
        assert_eq!(ip.flag_names().as_slice(), ["DF", "MF"]);

        let packet = Ipv4Builder::new().flags_fragment(0).build();
        let mut cursor = Cursor::new(&packet, packet.len());
        let (ip, _) = Ipv4Header::decode(&mut cursor).unwrap();
        assert!(ip.flag_names().is_empty());
    }

    #[test]
    fn test_total_length_past_capture_is_truncated() {
        let packet = Ipv4Builder::new()
            .payload(vec![0x00; 10])
            .total_length(200)
            .build();

        let mut cursor = Cursor::new(&packet, packet.len());
        let err = Ipv4Header::decode(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 20,
                needed: 180,
                available: 10
            }
        );
    }

    #[test]
    fn test_ihl_past_capture_is_truncated() {
        let mut packet = Ipv4Builder::new().build();
        packet[0] = 0x4f; // IHL 15 = 60 bytes, only 20 present

        let mut cursor = Cursor::new(&packet, packet.len());
        assert!(matches!(
            Ipv4Header::decode(&mut cursor),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn test_ihl_below_minimum_is_invalid() {
        let mut packet = Ipv4Builder::new().build();
        packet[0] = 0x44;

        let mut cursor = Cursor::new(&packet, packet.len());
        assert_eq!(
            Ipv4Header::decode(&mut cursor).unwrap_err(),
            DecodeError::InvalidField {
                layer: "ipv4",
                field: "header length",
                value: 4
            }
        );
    }

    #[test]
    fn test_wrong_version_is_invalid() {
        let mut packet = Ipv4Builder::new().build();
        packet[0] = 0x65;

        let mut cursor = Cursor::new(&packet, packet.len());
        assert!(matches!(
            Ipv4Header::decode(&mut cursor),
            Err(DecodeError::InvalidField { field: "version", .. })
        ));
    }
}
