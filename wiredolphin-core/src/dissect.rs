//! Layer dispatch: decode a frame into its stack of layers.
//!
//! Decoding starts at Ethernet and follows each layer's next-layer code
//! until a terminal layer, an unknown code, or a decode error. The frame
//! is decoded once; every output mode renders the same [`Dissection`].

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::protocol::bootp::BootpMessage;
use crate::protocol::ethernet::ethertype;
use crate::protocol::ipv4::ip_protocol;
use crate::protocol::{
    Application, ArpPacket, DecodedLayer, EthernetHeader, IcmpHeader, Ipv4Header, Ipv6Header,
    PayloadStyle, Ports, Protocol, TcpHeader, UdpHeader,
};

/// Decoded layers, outermost first.
pub type Layers<'a> = SmallVec<[DecodedLayer<'a>; 6]>;

/// How decoding of a frame ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The last decoded layer carries nothing further.
    Finished,
    /// A transport payload that is not decoded further. `application` is
    /// set when one of the ports is well known.
    Payload {
        application: Option<Application>,
        bytes: &'a [u8],
    },
    /// Decoding stopped inside or after `layer`. `remaining` holds the
    /// bytes from where that layer's decoder started.
    Stopped {
        layer: &'static str,
        error: DecodeError,
        remaining: &'a [u8],
    },
}

/// A decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dissection<'a> {
    /// The captured bytes of the frame.
    pub frame: &'a [u8],
    pub layers: Layers<'a>,
    pub outcome: Outcome<'a>,
}

impl<'a> Dissection<'a> {
    /// Ports of the transport layer, if one was decoded.
    pub fn ports(&self) -> Option<Ports> {
        self.layers.iter().find_map(|layer| match layer {
            DecodedLayer::Tcp(tcp) => Some(tcp.ports()),
            DecodedLayer::Udp(udp) => Some(udp.ports()),
            _ => None,
        })
    }

    /// Whether decoding stopped on damaged data.
    pub fn is_failure(&self) -> bool {
        matches!(&self.outcome, Outcome::Stopped { error, .. } if error.is_failure())
    }
}

/// Decode the first `captured_length` bytes of `bytes`.
///
/// Never panics and never reads past the captured length.
pub fn dissect(bytes: &[u8], captured_length: usize) -> Dissection<'_> {
    let mut cursor = Cursor::new(bytes, captured_length);
    let frame = cursor.slice_to_end();
    let mut layers = Layers::new();

    let outcome = match walk(&mut cursor, &mut layers) {
        Ok(outcome) | Err(outcome) => outcome,
    };
    trace!(layers = layers.len(), ?outcome, "frame dissected");

    Dissection {
        frame,
        layers,
        outcome,
    }
}

/// Decode one layer with `P` and push it. On error, the outcome that ends
/// the walk.
fn step<'a, P>(cursor: &mut Cursor<'a>, layers: &mut Layers<'a>) -> Result<P::Next, Outcome<'a>>
where
    P: Protocol<'a> + Into<DecodedLayer<'a>>,
{
    let start = *cursor;
    match P::decode(cursor) {
        Ok((layer, next)) => {
            trace!(layer = P::NAME, offset = start.offset(), "decoded");
            layers.push(layer.into());
            Ok(next)
        }
        Err(error) => {
            debug!(layer = P::NAME, offset = start.offset(), %error, "decode stopped");
            Err(Outcome::Stopped {
                layer: P::NAME,
                error,
                remaining: start.slice_to_end(),
            })
        }
    }
}

fn unsupported<'a>(layer: &'static str, code: u32, cursor: &Cursor<'a>) -> Outcome<'a> {
    trace!(layer, code, "no decoder for next layer");
    Outcome::Stopped {
        layer,
        error: DecodeError::UnsupportedLayer { layer, code },
        remaining: cursor.slice_to_end(),
    }
}

fn walk<'a>(cursor: &mut Cursor<'a>, layers: &mut Layers<'a>) -> Result<Outcome<'a>, Outcome<'a>> {
    let next = step::<EthernetHeader>(cursor, layers)?;

    match next {
        ethertype::IPV4 => {
            let protocol = step::<Ipv4Header>(cursor, layers)?;
            match protocol {
                ip_protocol::ICMP => {
                    step::<IcmpHeader>(cursor, layers)?;
                    Ok(Outcome::Finished)
                }
                ip_protocol::TCP => transport::<TcpHeader>(cursor, layers),
                ip_protocol::UDP => transport::<UdpHeader>(cursor, layers),
                other => Ok(unsupported(
                    <Ipv4Header as Protocol>::NAME,
                    other as u32,
                    cursor,
                )),
            }
        }
        ethertype::IPV6 => {
            let next_header = step::<Ipv6Header>(cursor, layers)?;
            match next_header {
                ip_protocol::TCP => transport::<TcpHeader>(cursor, layers),
                ip_protocol::UDP => transport::<UdpHeader>(cursor, layers),
                other => Ok(unsupported(
                    <Ipv6Header as Protocol>::NAME,
                    other as u32,
                    cursor,
                )),
            }
        }
        ethertype::ARP | ethertype::RARP => {
            step::<ArpPacket>(cursor, layers)?;
            Ok(Outcome::Finished)
        }
        other => Ok(unsupported(
            <EthernetHeader as Protocol>::NAME,
            other as u32,
            cursor,
        )),
    }
}

/// Decode a TCP or UDP header, then hand the payload to the application
/// matching its ports.
fn transport<'a, P>(
    cursor: &mut Cursor<'a>,
    layers: &mut Layers<'a>,
) -> Result<Outcome<'a>, Outcome<'a>>
where
    P: Protocol<'a, Next = Ports> + Into<DecodedLayer<'a>>,
{
    let ports = step::<P>(cursor, layers)?;
    let application = Application::recognize(ports);

    if application.map(Application::payload_style) == Some(PayloadStyle::Bootp) {
        step::<BootpMessage>(cursor, layers)?;
        return Ok(Outcome::Finished);
    }

    Ok(Outcome::Payload {
        application,
        bytes: cursor.slice_to_end(),
    })
}
