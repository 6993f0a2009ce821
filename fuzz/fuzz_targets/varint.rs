#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode_varint LEB128 decoder.
//
// Catches bugs in:
// - VarintTooLong (>10 continuation bytes)
// - VarintOverflow (10th byte carrying bits past 64)
// - Zero-length input
// - Consumed length running past the input
fuzz_target!(|data: &[u8]| {
    if let Ok((_, len)) = wirecursor_wire::varint::decode_varint(data) {
        assert!(len >= 1 && len <= data.len().min(10));
    }
});
