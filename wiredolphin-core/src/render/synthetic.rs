//! Synthetic mode: a banner, then one line per layer.

use std::io::{self, Write};

use super::{
    arp_summary, bootp_summary, ethernet_summary, failure, icmp_summary, network_summary,
    write_application_snippet, BANNER,
};
use crate::dissect::{Dissection, Outcome};
use crate::format::write_hex_dump;
use crate::protocol::DecodedLayer;

pub(super) fn render(dissection: &Dissection<'_>, sink: &mut dyn Write) -> io::Result<()> {
    writeln!(sink, "{BANNER}\n")?;

    for layer in &dissection.layers {
        let line = match layer {
            DecodedLayer::Ethernet(_) => ethernet_summary(dissection),
            DecodedLayer::Ipv4(_) | DecodedLayer::Ipv6(_) => network_summary(dissection),
            DecodedLayer::Arp(arp) => Some(arp_summary(arp)),
            DecodedLayer::Icmp(icmp) => Some(icmp_summary(icmp)),
            DecodedLayer::Bootp(bootp) => Some(bootp_summary(bootp)),
            // Ports are part of the network line.
            DecodedLayer::Tcp(_) | DecodedLayer::Udp(_) => None,
        };
        if let Some(line) = line {
            writeln!(sink, "{line}")?;
        }
    }

    if let Outcome::Payload {
        application: Some(application),
        bytes,
    } = dissection.outcome
    {
        if !bytes.is_empty() {
            write_application_snippet(sink, application, bytes)?;
            sink.write_all(b"\n")?;
        }
    }

    if let Some((layer, error, remaining)) = failure(&dissection.outcome) {
        writeln!(sink, "{layer}: {error}")?;
        write_hex_dump(sink, remaining)?;
    }

    sink.write_all(b"\n")
}
