//! The capture loop: pull a frame, render it, repeat.

use std::io::Write;

use tracing::{debug, info};
use wiredolphin_core::{decode_and_render, VerbosityMode};

use crate::capture::{FrameSource, LINKTYPE_ETHERNET};
use crate::error::{CaptureError, Result};

/// Session settings taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub mode: VerbosityMode,
    /// Stop after this many frames.
    pub count: Option<u64>,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames rendered.
    pub frames: u64,
    /// Frames shorter than their length on the wire.
    pub truncated: u64,
}

/// Render every frame of `source` into `sink`, flushing after each one.
///
/// Fails only when the source cannot be read or the sink cannot be
/// written; undecodable frames are rendered like any other.
pub fn run(
    source: &mut dyn FrameSource,
    sink: &mut dyn Write,
    options: &SessionOptions,
) -> Result<SessionStats> {
    let link_type = source.link_type();
    if link_type != LINKTYPE_ETHERNET {
        return Err(CaptureError::UnsupportedLinkType { link_type }.into());
    }

    info!(
        source = %source.describe(),
        link_type,
        mode = %options.mode,
        "session started"
    );

    let mut stats = SessionStats::default();
    while options.count.map_or(true, |count| stats.frames < count) {
        let Some(packet) = source.next_frame()? else {
            break;
        };
        if packet.is_truncated() {
            debug!(
                frame = packet.frame_number,
                captured = packet.captured_length,
                original = packet.original_length,
                "frame truncated by snapshot length"
            );
            stats.truncated += 1;
        }

        decode_and_render(&packet.data, packet.dissect_length(), options.mode, sink)?;
        // Each frame reaches the terminal as soon as it is rendered.
        sink.flush()?;
        stats.frames += 1;
    }

    info!(frames = stats.frames, truncated = stats.truncated, "session finished");
    Ok(stats)
}
