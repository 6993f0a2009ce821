#![no_main]

use libfuzzer_sys::fuzz_target;
use wirecursor_reader::FieldWalker;

// Fuzz target: walk arbitrary bytes as a field stream.
//
// Every yielded payload must lie inside the input and the walker must
// stop after the first error instead of looping.
fuzz_target!(|data: &[u8]| {
    let range = data.as_ptr_range();
    let mut fields = 0usize;
    for field in FieldWalker::new(data) {
        let Ok(field) = field else { break };
        let payload = field.payload.as_ptr_range();
        assert!(range.start <= payload.start && payload.end <= range.end);
        assert!(field.offset < data.len());
        fields += 1;
    }
    // Each field takes at least one key byte and one payload byte
    // or a zero length prefix.
    assert!(fields <= data.len() / 2 + 1);
});
