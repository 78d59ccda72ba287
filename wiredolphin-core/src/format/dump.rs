//! Byte dumps: hex lines and printable-text renderings of payloads.

use std::io::{self, Write};

/// Bytes per hex dump line.
pub const HEX_DUMP_WIDTH: usize = 16;

/// Write `bytes` as a hex dump, 16 bytes per line.
///
/// Writes nothing for an empty slice.
pub fn write_hex_dump(sink: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    for line in bytes.chunks(HEX_DUMP_WIDTH) {
        let mut first = true;
        for byte in line {
            if !first {
                sink.write_all(b" ")?;
            }
            write!(sink, "{byte:02x}")?;
            first = false;
        }
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Write `bytes` on a single line as space-separated hex pairs.
pub fn write_hex_inline(sink: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let mut first = true;
    for byte in bytes {
        if !first {
            sink.write_all(b" ")?;
        }
        write!(sink, "{byte:02x}")?;
        first = false;
    }
    Ok(())
}

fn printable(byte: u8) -> u8 {
    if (32..127).contains(&byte) {
        byte
    } else {
        b'.'
    }
}

/// Write a cleartext payload: printable ASCII as-is, CR LF as a newline,
/// every other byte as `.`.
pub fn write_text(sink: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            sink.write_all(b"\n")?;
            i += 2;
        } else {
            sink.write_all(&[printable(bytes[i])])?;
            i += 1;
        }
    }
    Ok(())
}

/// Write the first line of a cleartext payload, stopping before the first
/// CR LF. Non-printable bytes (including a lone CR or LF) become `.`.
pub fn write_text_line(sink: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let end = bytes
        .windows(2)
        .position(|pair| pair == b"\r\n")
        .unwrap_or(bytes.len());
    for &byte in &bytes[..end] {
        sink.write_all(&[printable(byte)])?;
    }
    Ok(())
}
