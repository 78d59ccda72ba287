//! Fuzz target for the DHCP option iterator.
//!
//! Fuzz data is the option area that follows the magic cookie. Options
//! yielded before a malformed one must lie inside the area, and the
//! iterator must stop after an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wiredolphin_core::protocol::bootp::{DhcpOptions, OptionIter};

fuzz_target!(|data: &[u8]| {
    let mut iter = OptionIter::new(data);
    let mut consumed = 0;
    while let Some(item) = iter.next() {
        match item {
            Ok(option) => consumed += 2 + option.length(),
            Err(_) => {
                assert!(iter.next().is_none());
                break;
            }
        }
    }
    assert!(consumed <= data.len());
    assert!(iter.position() <= data.len());

    let options = DhcpOptions::parse(data);
    if let Some(tail) = &options.malformed {
        assert!(tail.bytes.len() <= data.len());
    }
});
