//! Text rendering of decoded frames.
//!
//! A frame is decoded once by [`dissect`]; the verbosity mode only chooses
//! how the resulting [`Dissection`] is written.

mod complete;
mod concise;
mod synthetic;

use std::fmt;
use std::io::{self, Write};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::dissect::{dissect, Dissection, Outcome};
use crate::error::DecodeError;
use crate::format::{
    format_hardware_address, format_protocol_address, write_hex_dump, write_text_line,
};
use crate::protocol::{
    Application, ArpPacket, BootpMessage, DecodedLayer, IcmpHeader, PayloadStyle,
};
use crate::tables;

/// Separator printed before each frame in synthetic and complete modes.
pub const BANNER: &str =
    "********************************************************************************";

/// Output granularity, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerbosityMode {
    /// Hex dump of the captured bytes.
    Raw,
    /// One line per frame.
    Concise,
    /// One line per layer.
    Synthetic,
    /// Every field of every layer, plus the full payload.
    #[default]
    Complete,
}

impl VerbosityMode {
    pub const ALL: [VerbosityMode; 4] = [
        VerbosityMode::Raw,
        VerbosityMode::Concise,
        VerbosityMode::Synthetic,
        VerbosityMode::Complete,
    ];

    /// Map a numeric level to a mode. Levels above 3 mean complete.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => VerbosityMode::Raw,
            1 => VerbosityMode::Concise,
            2 => VerbosityMode::Synthetic,
            _ => VerbosityMode::Complete,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VerbosityMode::Raw => "raw",
            VerbosityMode::Concise => "concise",
            VerbosityMode::Synthetic => "synthetic",
            VerbosityMode::Complete => "complete",
        }
    }
}

impl fmt::Display for VerbosityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VerbosityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown verbosity mode: {s}"))
    }
}

/// Decode the first `captured_length` bytes of `bytes` and write them to
/// `sink` in the given mode.
///
/// Decode failures are rendered, not returned; the only error is a failed
/// write.
pub fn decode_and_render(
    bytes: &[u8],
    captured_length: usize,
    mode: VerbosityMode,
    sink: &mut dyn Write,
) -> io::Result<()> {
    if mode == VerbosityMode::Raw {
        let frame = Cursor::new(bytes, captured_length).slice_to_end();
        return render_raw(frame, sink);
    }
    let dissection = dissect(bytes, captured_length);
    render(&dissection, mode, sink)
}

/// Write an already decoded frame.
pub fn render(
    dissection: &Dissection<'_>,
    mode: VerbosityMode,
    sink: &mut dyn Write,
) -> io::Result<()> {
    match mode {
        VerbosityMode::Raw => render_raw(dissection.frame, sink),
        VerbosityMode::Concise => concise::render(dissection, sink),
        VerbosityMode::Synthetic => synthetic::render(dissection, sink),
        VerbosityMode::Complete => complete::render(dissection, sink),
    }
}

fn render_raw(frame: &[u8], sink: &mut dyn Write) -> io::Result<()> {
    write_hex_dump(sink, frame)?;
    sink.write_all(b"\n")
}

// Summaries shared by the concise and synthetic modes.

fn ethernet_summary(dissection: &Dissection<'_>) -> Option<String> {
    match dissection.layers.first()? {
        DecodedLayer::Ethernet(eth) => Some(format!(
            "{} -> {}, {}",
            format_hardware_address(&eth.source),
            format_hardware_address(&eth.destination),
            tables::ethertype_name(eth.ethertype)
        )),
        _ => None,
    }
}

/// `src -> dst, PROTO`, with ports when a transport header was decoded.
fn network_summary(dissection: &Dissection<'_>) -> Option<String> {
    let (source, destination, protocol) =
        dissection.layers.iter().find_map(|layer| match layer {
            DecodedLayer::Ipv4(ip) => Some((
                IpAddr::V4(ip.source),
                IpAddr::V4(ip.destination),
                ip.protocol,
            )),
            DecodedLayer::Ipv6(ip) => Some((
                IpAddr::V6(ip.source),
                IpAddr::V6(ip.destination),
                ip.next_header,
            )),
            _ => None,
        })?;
    let protocol = tables::ip_protocol_name(protocol);

    Some(match dissection.ports() {
        Some(ports) => format!(
            "{} -> {}, {protocol}",
            SocketAddr::new(source, ports.source),
            SocketAddr::new(destination, ports.destination)
        ),
        None => format!("{source} -> {destination}, {protocol}"),
    })
}

fn arp_summary(arp: &ArpPacket<'_>) -> String {
    format!(
        "{}: {} -> {}",
        tables::arp_opcode_name(arp.opcode),
        format_protocol_address(arp.sender_protocol),
        format_protocol_address(arp.target_protocol)
    )
}

fn icmp_summary(icmp: &IcmpHeader) -> String {
    let mut line = format!("ICMP {}", tables::icmp_type_name(icmp.icmp_type));
    if let Some(code) = tables::icmp_code_name(icmp.icmp_type, icmp.code) {
        line.push_str(": ");
        line.push_str(code);
    }
    if let Some(echo) = icmp.echo {
        line.push_str(&format!(" (id {}, seq {})", echo.identifier, echo.sequence));
    }
    line
}

fn bootp_summary(bootp: &BootpMessage<'_>) -> String {
    let mut line = format!("BOOTP: {}", tables::bootp_opcode_name(bootp.opcode));
    if let Some(kind) = bootp.message_type() {
        line.push_str(", ");
        line.push_str(tables::dhcp_message_type_name(kind));
    }
    line
}

/// One-line snippet of an application payload: the first text line for
/// cleartext protocols, the byte count otherwise.
fn write_application_snippet(
    sink: &mut dyn Write,
    application: Application,
    bytes: &[u8],
) -> io::Result<()> {
    write!(sink, "{}: ", application.name())?;
    match application.payload_style() {
        PayloadStyle::Text => write_text_line(sink, bytes),
        PayloadStyle::Hex | PayloadStyle::Bootp => write!(sink, "{} bytes", bytes.len()),
    }
}

/// The layer and error when decoding stopped on damaged data.
fn failure<'d, 'a>(
    outcome: &'d Outcome<'a>,
) -> Option<(&'static str, &'d DecodeError, &'a [u8])> {
    match outcome {
        Outcome::Stopped {
            layer,
            error,
            remaining,
        } if error.is_failure() => Some((*layer, error, *remaining)),
        _ => None,
    }
}
