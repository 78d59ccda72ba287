//! Network address formatting.

use std::net::Ipv4Addr;

/// Format 6 bytes as a MAC address in colon-separated lowercase hex.
///
/// Returns `None` if the slice is not exactly 6 bytes.
///
/// # Example
///
/// ```
/// use wiredolphin_core::format::format_mac;
///
/// let bytes = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
/// assert_eq!(format_mac(&bytes), Some("aa:bb:cc:dd:ee:ff".to_string()));
/// assert_eq!(format_mac(&bytes[..4]), None);
/// ```
pub fn format_mac(bytes: &[u8]) -> Option<String> {
    if bytes.len() != 6 {
        return None;
    }
    Some(format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    ))
}

/// Format 4 bytes as a dotted-decimal IPv4 address.
///
/// Returns `None` if the slice is not exactly 4 bytes.
///
/// # Example
///
/// ```
/// use wiredolphin_core::format::format_ipv4;
///
/// assert_eq!(format_ipv4(&[192, 168, 0, 1]), Some("192.168.0.1".to_string()));
/// assert_eq!(format_ipv4(&[10, 0]), None);
/// ```
pub fn format_ipv4(bytes: &[u8]) -> Option<String> {
    let octets: [u8; 4] = bytes.try_into().ok()?;
    Some(Ipv4Addr::from(octets).to_string())
}

/// Format arbitrary bytes as space-separated lowercase hex pairs.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a hardware address: as a MAC when it is 6 bytes, raw hex otherwise.
pub fn format_hardware_address(bytes: &[u8]) -> String {
    format_mac(bytes).unwrap_or_else(|| format_bytes(bytes))
}

/// Format a protocol address: dotted-decimal when it is 4 bytes, raw hex otherwise.
pub fn format_protocol_address(bytes: &[u8]) -> String {
    format_ipv4(bytes).unwrap_or_else(|| format_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mac() {
        assert_eq!(
            format_mac(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            Some("11:22:33:44:55:66".to_string())
        );
        assert_eq!(
            format_mac(&[0x00, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e]),
            Some("00:0a:0b:0c:0d:0e".to_string())
        );
        assert_eq!(format_mac(&[0x11; 8]), None);
    }

    #[test]
    fn test_format_ipv4() {
        assert_eq!(format_ipv4(&[255, 255, 255, 0]), Some("255.255.255.0".to_string()));
        assert_eq!(format_ipv4(&[0, 0, 0, 0]), Some("0.0.0.0".to_string()));
        assert_eq!(format_ipv4(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_address_fallbacks() {
        assert_eq!(format_hardware_address(&[0xde, 0xad]), "de ad");
        assert_eq!(
            format_hardware_address(&[1, 2, 3, 4, 5, 6]),
            "01:02:03:04:05:06"
        );
        assert_eq!(format_protocol_address(&[10, 0, 0, 1]), "10.0.0.1");
        assert_eq!(
            format_protocol_address(&[0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00]),
            "20 01 0d b8 00 00"
        );
        assert_eq!(format_bytes(&[]), "");
    }
}
