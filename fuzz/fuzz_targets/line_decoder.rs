//! Fuzz target for chat line decoding
//!
//! Feeds arbitrary input through every decoder configuration and checks
//! that decoding never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use twitch_line::{Decoder, DecoderConfig, OffsetUnit, TagErrorPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = str::from_utf8(data) else {
        return;
    };

    let _ = Decoder::default().decode(input);

    let corrected = Decoder::new(DecoderConfig {
        tag_error_policy: TagErrorPolicy::Skip,
        offset_unit: OffsetUnit::Utf16,
        ..DecoderConfig::default()
    });
    let _ = corrected.decode(input);
});
