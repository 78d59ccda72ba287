//! pcap and pcapng file reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use pcap_parser::pcapng::Block;
use pcap_parser::traits::PcapReaderIterator;
use pcap_parser::{LegacyPcapReader, PcapBlockOwned, PcapError, PcapNGReader};
use tracing::{debug, trace};

use super::{FrameSource, RawPacket};
use crate::error::{CaptureError, Result};

/// Buffer size for reading capture files (64KB).
const BUFFER_SIZE: usize = 65536;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

type Input = Box<dyn Read + Send>;

/// Reader for pcap and pcapng files, with optional gzip decompression.
pub struct PcapReader {
    name: String,
    inner: ReaderInner,
    state: ReaderState,
    pending: Option<RawPacket>,
}

enum ReaderInner {
    Legacy(LegacyPcapReader<Input>),
    Ng(PcapNGReader<Input>),
}

struct ReaderState {
    frame_number: u64,
    link_type: Option<u16>,
    nanosecond: bool,
}

enum Step {
    Frame(RawPacket),
    Skipped,
    Eof,
}

impl PcapReader {
    /// Open a capture file.
    ///
    /// Gzipped files are detected by their `.gz` extension or their magic
    /// bytes and decompressed on the fly.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| CaptureError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut file = BufReader::with_capacity(BUFFER_SIZE, file);
        let gzipped = is_gzip_extension(path) || file.fill_buf()?.starts_with(&GZIP_MAGIC);
        let input: Input = if gzipped {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        debug!(path = %path.display(), gzipped, "opening capture file");
        Self::from_reader(input, path.display().to_string())
    }

    /// Read a capture from any byte stream (already decompressed).
    pub fn from_reader<R: Read + Send + 'static>(
        mut reader: R,
        name: impl Into<String>,
    ) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader
            .read_exact(&mut magic)
            .map_err(|_| CaptureError::InvalidFormat {
                reason: "file too short to read magic number".to_string(),
            })?;

        // The parsers want the magic number back.
        let input: Input = Box::new(io::Cursor::new(magic).chain(reader));

        let (inner, nanosecond) = match magic {
            [0xd4, 0xc3, 0xb2, 0xa1] | [0xa1, 0xb2, 0xc3, 0xd4] => {
                (ReaderInner::Legacy(open_legacy(input)?), false)
            }
            [0x4d, 0x3c, 0xb2, 0xa1] | [0xa1, 0xb2, 0x3c, 0x4d] => {
                (ReaderInner::Legacy(open_legacy(input)?), true)
            }
            [0x0a, 0x0d, 0x0d, 0x0a] => (ReaderInner::Ng(open_ng(input)?), false),
            _ => {
                return Err(CaptureError::InvalidFormat {
                    reason: format!("unknown magic number: {magic:02x?}"),
                }
                .into())
            }
        };

        let mut capture = Self {
            name: name.into(),
            inner,
            state: ReaderState {
                frame_number: 0,
                link_type: None,
                nanosecond,
            },
            pending: None,
        };
        capture.read_link_type()?;
        Ok(capture)
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.state.frame_number
    }

    /// Read the next frame.
    pub fn next_packet(&mut self) -> Result<Option<RawPacket>> {
        if let Some(packet) = self.pending.take() {
            return Ok(Some(packet));
        }
        loop {
            match self.advance()? {
                Step::Frame(packet) => return Ok(Some(packet)),
                Step::Skipped => continue,
                Step::Eof => return Ok(None),
            }
        }
    }

    /// Advance past the file and interface headers so the link type is
    /// known before the first frame is requested.
    fn read_link_type(&mut self) -> Result<()> {
        while self.state.link_type.is_none() {
            match self.advance()? {
                Step::Frame(packet) => {
                    self.pending = Some(packet);
                    break;
                }
                Step::Skipped => continue,
                Step::Eof => break,
            }
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<Step> {
        match &mut self.inner {
            ReaderInner::Legacy(reader) => next_legacy(reader, &mut self.state),
            ReaderInner::Ng(reader) => next_ng(reader, &mut self.state),
        }
    }
}

impl FrameSource for PcapReader {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn link_type(&self) -> u16 {
        self.state.link_type.unwrap_or(super::LINKTYPE_ETHERNET)
    }

    fn next_frame(&mut self) -> Result<Option<RawPacket>> {
        self.next_packet()
    }
}

fn open_legacy(input: Input) -> Result<LegacyPcapReader<Input>> {
    LegacyPcapReader::new(BUFFER_SIZE, input).map_err(|e| {
        CaptureError::InvalidFormat {
            reason: format!("failed to parse pcap header: {e}"),
        }
        .into()
    })
}

fn open_ng(input: Input) -> Result<PcapNGReader<Input>> {
    PcapNGReader::new(BUFFER_SIZE, input).map_err(|e| {
        CaptureError::InvalidFormat {
            reason: format!("failed to parse pcapng header: {e}"),
        }
        .into()
    })
}

impl ReaderState {
    fn frame(
        &mut self,
        timestamp_us: i64,
        captured_length: u32,
        original_length: u32,
        data: &[u8],
    ) -> RawPacket {
        self.frame_number += 1;
        trace!(frame = self.frame_number, captured_length, "read frame");
        RawPacket {
            frame_number: self.frame_number,
            timestamp_us,
            captured_length,
            original_length,
            link_type: self.link_type.unwrap_or(super::LINKTYPE_ETHERNET),
            data: data.to_vec(),
        }
    }
}

fn next_legacy(reader: &mut LegacyPcapReader<Input>, state: &mut ReaderState) -> Result<Step> {
    let step = match reader.next() {
        Ok((offset, block)) => {
            let step = match block {
                PcapBlockOwned::LegacyHeader(header) => {
                    state.link_type = Some(header.network.0 as u16);
                    Step::Skipped
                }
                PcapBlockOwned::Legacy(packet) => {
                    let fraction = if state.nanosecond {
                        packet.ts_usec / 1000
                    } else {
                        packet.ts_usec
                    };
                    let timestamp_us = (packet.ts_sec as i64) * 1_000_000 + fraction as i64;
                    Step::Frame(state.frame(
                        timestamp_us,
                        packet.caplen,
                        packet.origlen,
                        packet.data,
                    ))
                }
                _ => Step::Skipped,
            };
            reader.consume(offset);
            step
        }
        Err(PcapError::Eof) => Step::Eof,
        Err(PcapError::Incomplete(_)) => {
            reader.refill().map_err(|e| CaptureError::InvalidFormat {
                reason: format!("refill error: {e}"),
            })?;
            Step::Skipped
        }
        Err(e) => {
            return Err(CaptureError::InvalidFormat {
                reason: format!("parse error: {e}"),
            }
            .into())
        }
    };
    Ok(step)
}

fn next_ng(reader: &mut PcapNGReader<Input>, state: &mut ReaderState) -> Result<Step> {
    let step = match reader.next() {
        Ok((offset, block)) => {
            let step = match block {
                PcapBlockOwned::NG(Block::InterfaceDescription(idb)) => {
                    // Frames of later interfaces keep the first link type.
                    if state.link_type.is_none() {
                        state.link_type = Some(idb.linktype.0 as u16);
                    }
                    Step::Skipped
                }
                PcapBlockOwned::NG(Block::EnhancedPacket(epb)) => {
                    let timestamp_us = ((epb.ts_high as i64) << 32) | (epb.ts_low as i64);
                    Step::Frame(state.frame(timestamp_us, epb.caplen, epb.origlen, epb.data))
                }
                PcapBlockOwned::NG(Block::SimplePacket(spb)) => {
                    Step::Frame(state.frame(0, spb.data.len() as u32, spb.origlen, spb.data))
                }
                _ => Step::Skipped,
            };
            reader.consume(offset);
            step
        }
        Err(PcapError::Eof) => Step::Eof,
        Err(PcapError::Incomplete(_)) => {
            reader.refill().map_err(|e| CaptureError::InvalidFormat {
                reason: format!("refill error: {e}"),
            })?;
            Step::Skipped
        }
        Err(e) => {
            return Err(CaptureError::InvalidFormat {
                reason: format!("parse error: {e}"),
            }
            .into())
        }
    };
    Ok(step)
}

/// Check if a path looks like a gzip file by extension only.
pub fn is_gzip_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(".gz"))
}
