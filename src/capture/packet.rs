//! Captured frame representation.

/// One frame handed out by a [`FrameSource`](super::FrameSource).
#[derive(Debug, Clone)]
pub struct RawPacket {
    /// Frame number (1-indexed).
    pub frame_number: u64,

    /// Timestamp in microseconds since epoch.
    pub timestamp_us: i64,

    /// Captured length (may be less than original).
    pub captured_length: u32,

    /// Original length on the wire.
    pub original_length: u32,

    /// Link layer type (1 = Ethernet).
    pub link_type: u16,

    /// Captured bytes.
    pub data: Vec<u8>,
}

impl RawPacket {
    /// Check if the frame was cut short by the snapshot length.
    pub fn is_truncated(&self) -> bool {
        self.captured_length < self.original_length
    }

    /// Number of bytes the dissector may read.
    ///
    /// Never more than the buffer actually holds, whatever the record
    /// header claims.
    pub fn dissect_length(&self) -> usize {
        (self.captured_length as usize).min(self.data.len())
    }
}
