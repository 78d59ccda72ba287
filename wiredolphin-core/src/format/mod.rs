//! Formatting helpers shared by the renderer.

mod address;
mod dump;

pub use address::{
    format_bytes, format_hardware_address, format_ipv4, format_mac, format_protocol_address,
};
pub use dump::{write_hex_dump, write_hex_inline, write_text, write_text_line, HEX_DUMP_WIDTH};
