#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirecursor_reader::{BufferReader, ScalarKind, WireType};

#[derive(Debug, Arbitrary)]
enum Op {
    Uint,
    Int,
    Bool,
    Str,
    Bytes,
    Int32,
    Uint32,
    Float,
    Double,
    Skip(u8),
    SkipWire(u8),
    FieldKey,
    Release,
    Rebind(u8),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    buf: Vec<u8>,
    start: u8,
    ops: Vec<Op>,
}

// Fuzz target: drive one BufferReader through an arbitrary op sequence.
//
// No operation may panic, views must alias the input, and a released
// reader must reject every read.
fuzz_target!(|input: FuzzInput| {
    let buf = input.buf.as_slice();
    let range = buf.as_ptr_range();
    let mut reader = BufferReader::with_offset(buf, usize::from(input.start));

    for op in input.ops {
        let released = reader.is_released();
        let result = match op {
            Op::Uint => reader.read_uint().map(|_| ()),
            Op::Int => reader.read_int().map(|_| ()),
            Op::Bool => reader.read_bool().map(|_| ()),
            Op::Str => reader.read_str().map(|s| {
                let p = s.as_bytes().as_ptr_range();
                assert!(range.start <= p.start && p.end <= range.end);
            }),
            Op::Bytes => reader.read_bytes().map(|b| {
                let p = b.as_ptr_range();
                assert!(range.start <= p.start && p.end <= range.end);
            }),
            Op::Int32 => reader.read_fixed(ScalarKind::Int32).map(|_| ()),
            Op::Uint32 => reader.read_fixed(ScalarKind::Uint32).map(|_| ()),
            Op::Float => reader.read_fixed(ScalarKind::Float).map(|_| ()),
            Op::Double => reader.read_fixed(ScalarKind::Double).map(|_| ()),
            Op::Skip(n) => reader.skip(usize::from(n)),
            Op::SkipWire(raw) => match WireType::from_raw(u64::from(raw & 0x07)) {
                Ok(wire_type) => reader.skip_by_wire_type(wire_type),
                Err(_) => Ok(()),
            },
            Op::FieldKey => reader.read_field_key().map(|_| ()),
            Op::Release => {
                reader.release();
                continue;
            }
            Op::Rebind(offset) => {
                reader.bind(buf, usize::from(offset));
                continue;
            }
        };
        if released {
            assert!(result.is_err());
        }
    }
});
