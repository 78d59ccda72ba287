//! Concise mode: one line per frame, parts separated by `; `, then a
//! blank line.

use std::io::{self, Write};

use super::{
    arp_summary, bootp_summary, ethernet_summary, failure, network_summary,
    write_application_snippet,
};
use crate::dissect::{Dissection, Outcome};
use crate::format::write_hex_inline;
use crate::protocol::DecodedLayer;

struct Line {
    started: bool,
}

impl Line {
    fn part(&mut self, sink: &mut dyn Write) -> io::Result<()> {
        if self.started {
            sink.write_all(b"; ")?;
        }
        self.started = true;
        Ok(())
    }
}

pub(super) fn render(dissection: &Dissection<'_>, sink: &mut dyn Write) -> io::Result<()> {
    let mut line = Line { started: false };

    if let Some(summary) = ethernet_summary(dissection) {
        line.part(sink)?;
        sink.write_all(summary.as_bytes())?;
    }
    if let Some(summary) = network_summary(dissection) {
        line.part(sink)?;
        sink.write_all(summary.as_bytes())?;
    }
    for layer in &dissection.layers {
        let summary = match layer {
            DecodedLayer::Arp(arp) => arp_summary(arp),
            DecodedLayer::Bootp(bootp) => bootp_summary(bootp),
            _ => continue,
        };
        line.part(sink)?;
        sink.write_all(summary.as_bytes())?;
    }

    if let Outcome::Payload {
        application: Some(application),
        bytes,
    } = dissection.outcome
    {
        if !bytes.is_empty() {
            line.part(sink)?;
            write_application_snippet(sink, application, bytes)?;
        }
    }

    if let Some((layer, error, remaining)) = failure(&dissection.outcome) {
        line.part(sink)?;
        write!(sink, "{layer}: {error}")?;
        if !remaining.is_empty() {
            sink.write_all(b": ")?;
            write_hex_inline(sink, remaining)?;
        }
    }

    sink.write_all(b"\n\n")
}
