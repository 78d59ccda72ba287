//! Fuzz target for the whole decode and render path.
//!
//! The first byte picks the verbosity mode and a captured length; the
//! rest is the frame. Every mode must render without panicking and
//! without reading past the captured length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wiredolphin_core::{decode_and_render, dissect, VerbosityMode};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, frame)) = data.split_first() else {
        return;
    };

    let mode = VerbosityMode::from_level(selector & 0x03);
    // Upper bits shave bytes off the end to exercise short captures.
    let captured_length = frame.len().saturating_sub((selector >> 2) as usize);

    let dissection = dissect(frame, captured_length);
    assert!(dissection.frame.len() <= captured_length);

    let mut out = Vec::new();
    decode_and_render(frame, captured_length, mode, &mut out)
        .expect("rendering into a Vec cannot fail");
    assert!(!out.is_empty());
});
