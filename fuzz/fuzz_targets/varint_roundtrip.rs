#![no_main]

use libfuzzer_sys::fuzz_target;
use wirecursor_reader::BufferReader;
use wirecursor_tests::FieldWriter;

// Fuzz target: varint write->read roundtrip.
//
// Takes 8 bytes of fuzz input, interprets them as a u64, writes it both
// as a plain varint and as a zigzag varint, then reads both back and
// asserts the values and cursor positions match.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = u64::from_le_bytes(data[..8].try_into().unwrap());
    let signed = value as i64;

    let buf = FieldWriter::new().uint(value).int(signed).finish();

    let mut reader = BufferReader::new(&buf);
    assert_eq!(reader.read_uint().unwrap(), value);
    assert_eq!(reader.read_int().unwrap(), signed);
    assert_eq!(reader.position(), buf.len());
});
