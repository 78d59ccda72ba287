//! Ethernet II header decoder.

use super::Protocol;
use crate::cursor::Cursor;
use crate::error::Result;

/// Ethernet II header length.
pub const HEADER_LEN: usize = 14;

/// Well-known EtherType values.
pub mod ethertype {
    pub const PUP: u16 = 0x0200;
    pub const SPRITE: u16 = 0x0500;
    pub const IPV4: u16 = 0x0800;
    pub const ARP: u16 = 0x0806;
    pub const RARP: u16 = 0x8035;
    pub const APPLETALK: u16 = 0x809B;
    pub const AARP: u16 = 0x80F3;
    pub const VLAN: u16 = 0x8100;
    pub const IPX: u16 = 0x8137;
    pub const IPV6: u16 = 0x86DD;
    pub const LOOPBACK: u16 = 0x9000;
}

/// Decoded Ethernet II header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    pub ethertype: u16,
}

impl<'a> Protocol<'a> for EthernetHeader {
    const NAME: &'static str = "ethernet";
    const DISPLAY_NAME: &'static str = "Ethernet header";

    /// The EtherType.
    type Next = u16;

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, u16)> {
        let mut header = cursor.take(HEADER_LEN)?;

        let destination = header.read_array()?;
        let source = header.read_array()?;
        let ethertype = header.read_u16()?;

        let eth = EthernetHeader {
            destination,
            source,
            ethertype,
        };
        Ok((eth, ethertype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::protocol::test_utils::EthernetBuilder;

    #[test]
    fn test_decode_ethernet() {
        let frame = EthernetBuilder::new()
            .src_mac([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
            .dst_mac([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
            .ipv4()
            .payload(vec![0x45, 0x00])
            .build();

        let mut cursor = Cursor::new(&frame, frame.len());
        let (eth, next) = EthernetHeader::decode(&mut cursor).unwrap();

        assert_eq!(eth.source, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
        assert_eq!(eth.destination, [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!(next, ethertype::IPV4);
        assert_eq!(cursor.offset(), HEADER_LEN);
        assert_eq!(cursor.slice_to_end(), &[0x45, 0x00]);
    }

    #[test]
    fn test_decode_ethernet_arp() {
        let frame = EthernetBuilder::new().arp().build();
        let mut cursor = Cursor::new(&frame, frame.len());
        let (_, next) = EthernetHeader::decode(&mut cursor).unwrap();
        assert_eq!(next, ethertype::ARP);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_decode_ethernet_too_short() {
        for len in 0..HEADER_LEN {
            let frame = vec![0xffu8; len];
            let mut cursor = Cursor::new(&frame, frame.len());
            let err = EthernetHeader::decode(&mut cursor).unwrap_err();
            assert_eq!(
                err,
                DecodeError::Truncated {
                    offset: 0,
                    needed: HEADER_LEN,
                    available: len
                }
            );
        }
    }

    #[test]
    fn test_captured_length_limits_header() {
        let frame = EthernetBuilder::new().build();
        let mut cursor = Cursor::new(&frame, 12);
        assert!(EthernetHeader::decode(&mut cursor).is_err());
    }
}
