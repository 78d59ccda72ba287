//! Protocol decoders.
//!
//! Each decoder reads one header from a [`Cursor`] and reports the code
//! that selects the next decoder. The dispatcher in [`crate::dissect`]
//! chains them together.

pub mod application;
pub mod arp;
pub mod bootp;
pub mod ethernet;
pub mod icmp;
pub mod ipv4;
pub mod ipv6;
pub mod tcp;
pub mod udp;

#[cfg(test)]
pub mod test_utils;

use crate::cursor::Cursor;
use crate::error::Result;

pub use application::{Application, PayloadStyle, Ports};
pub use arp::ArpPacket;
pub use bootp::BootpMessage;
pub use ethernet::EthernetHeader;
pub use icmp::IcmpHeader;
pub use ipv4::Ipv4Header;
pub use ipv6::Ipv6Header;
pub use tcp::{TcpFlags, TcpHeader};
pub use udp::UdpHeader;

/// A header decoder.
///
/// `decode` reads from `cursor` and leaves it positioned at the first byte
/// of the layer's payload. Layers that know their payload length (IPv4,
/// IPv6) also narrow the cursor so it ends where the payload ends.
pub trait Protocol<'a>: Sized {
    /// Short identifier, used in logs and error reports.
    const NAME: &'static str;

    /// Title of the layer's block in complete output.
    const DISPLAY_NAME: &'static str;

    /// What this layer tells the dispatcher about the next one.
    type Next;

    fn decode(cursor: &mut Cursor<'a>) -> Result<(Self, Self::Next)>;
}

/// One successfully decoded layer of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLayer<'a> {
    Ethernet(EthernetHeader),
    Ipv4(Ipv4Header<'a>),
    Ipv6(Ipv6Header),
    Arp(ArpPacket<'a>),
    Icmp(IcmpHeader),
    Tcp(TcpHeader<'a>),
    Udp(UdpHeader),
    Bootp(BootpMessage<'a>),
}

impl DecodedLayer<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            DecodedLayer::Ethernet(_) => <EthernetHeader as Protocol>::NAME,
            DecodedLayer::Ipv4(_) => <Ipv4Header as Protocol>::NAME,
            DecodedLayer::Ipv6(_) => <Ipv6Header as Protocol>::NAME,
            DecodedLayer::Arp(_) => <ArpPacket as Protocol>::NAME,
            DecodedLayer::Icmp(_) => <IcmpHeader as Protocol>::NAME,
            DecodedLayer::Tcp(_) => <TcpHeader as Protocol>::NAME,
            DecodedLayer::Udp(_) => <UdpHeader as Protocol>::NAME,
            DecodedLayer::Bootp(_) => <BootpMessage as Protocol>::NAME,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DecodedLayer::Ethernet(_) => <EthernetHeader as Protocol>::DISPLAY_NAME,
            DecodedLayer::Ipv4(_) => <Ipv4Header as Protocol>::DISPLAY_NAME,
            DecodedLayer::Ipv6(_) => <Ipv6Header as Protocol>::DISPLAY_NAME,
            DecodedLayer::Arp(_) => <ArpPacket as Protocol>::DISPLAY_NAME,
            DecodedLayer::Icmp(_) => <IcmpHeader as Protocol>::DISPLAY_NAME,
            DecodedLayer::Tcp(_) => <TcpHeader as Protocol>::DISPLAY_NAME,
            DecodedLayer::Udp(_) => <UdpHeader as Protocol>::DISPLAY_NAME,
            DecodedLayer::Bootp(_) => <BootpMessage as Protocol>::DISPLAY_NAME,
        }
    }
}

impl<'a> From<EthernetHeader> for DecodedLayer<'a> {
    fn from(layer: EthernetHeader) -> Self {
        DecodedLayer::Ethernet(layer)
    }
}

impl<'a> From<Ipv4Header<'a>> for DecodedLayer<'a> {
    fn from(layer: Ipv4Header<'a>) -> Self {
        DecodedLayer::Ipv4(layer)
    }
}

impl<'a> From<Ipv6Header> for DecodedLayer<'a> {
    fn from(layer: Ipv6Header) -> Self {
        DecodedLayer::Ipv6(layer)
    }
}

impl<'a> From<ArpPacket<'a>> for DecodedLayer<'a> {
    fn from(layer: ArpPacket<'a>) -> Self {
        DecodedLayer::Arp(layer)
    }
}

impl<'a> From<IcmpHeader> for DecodedLayer<'a> {
    fn from(layer: IcmpHeader) -> Self {
        DecodedLayer::Icmp(layer)
    }
}

impl<'a> From<TcpHeader<'a>> for DecodedLayer<'a> {
    fn from(layer: TcpHeader<'a>) -> Self {
        DecodedLayer::Tcp(layer)
    }
}

impl<'a> From<UdpHeader> for DecodedLayer<'a> {
    fn from(layer: UdpHeader) -> Self {
        DecodedLayer::Udp(layer)
    }
}

impl<'a> From<BootpMessage<'a>> for DecodedLayer<'a> {
    fn from(layer: BootpMessage<'a>) -> Self {
        DecodedLayer::Bootp(layer)
    }
}
