/// `wirecursor walk`: list the top-level fields of a buffer.
///
/// Each field is decoded only as far as its wire type allows, then a short
/// value preview is printed next to it:
///
/// ```text
/// $ wirecursor walk person.bin
/// offset  field  wire     len  value
/// 0       #1     varint     2  300 (zigzag 150)
/// 3       #2     len        5  "alice"
/// 10      #3     bit32      4  42 (f32 5.9e-44)
/// 15      #4     bit64      8  1
/// ---
/// 4 fields, 24 bytes read, 0 bytes left
/// ```
///
/// A malformed field stops the walk; the fields before it are still shown
/// and the command exits with the error.
use std::io::{self, Write};

use anyhow::{Context, Result};
use wirecursor_reader::{FieldWalker, RawField, WireType};

use crate::WalkArgs;
use crate::config::WalkConfig;
use crate::input;

pub fn run(args: &WalkArgs) -> Result<()> {
    let buf = input::load(&args.file, args.hex)?;
    let config = WalkConfig::from(args);
    walk(&buf, &config, &mut io::stdout().lock())
}

/// Write the field listing and trailer for `buf` to `out`.
///
/// Fields are flushed as they are walked, so on a malformed field the
/// lines before it are already written when the error comes back.
fn walk(buf: &[u8], config: &WalkConfig, out: &mut impl Write) -> Result<()> {
    let mut walker = FieldWalker::with_offset(buf, config.start_offset);
    let mut count = 0usize;

    writeln!(out, "{:<7} {:<6} {:<6} {:>5}  value", "offset", "field", "wire", "len")?;

    while !config.limit_reached(count) {
        let Some(field) = walker
            .next_field()
            .with_context(|| format!("walk stopped after {count} fields"))?
        else {
            break;
        };

        writeln!(
            out,
            "{:<7} #{:<5} {:<6} {:>5}  {}",
            field.offset,
            field.key.field_id,
            field.key.wire_type,
            field.payload.len(),
            preview(&field, config.preview_len),
        )?;

        if config.show_hex && !field.payload.is_empty() {
            // The payload always ends where the walker now stands.
            let payload_start = walker.position() - field.payload.len();
            input::write_hex_dump(out, field.payload, payload_start, config.hex_width, "        ")?;
        }
        count += 1;
    }

    writeln!(out, "---")?;
    writeln!(
        out,
        "{count} fields, {} bytes read, {} bytes left",
        walker.position().saturating_sub(config.start_offset),
        walker.remaining().len(),
    )?;
    Ok(())
}

fn preview(field: &RawField<'_>, max_chars: usize) -> String {
    let mut reader = field.reader();
    match field.key.wire_type {
        WireType::Varint => match reader.read_varint() {
            Ok(v) => format!("{} (zigzag {})", v.value, v.zigzag()),
            Err(e) => format!("<{e}>"),
        },
        WireType::Bit32 => match reader.read_u32() {
            Ok(u) => format!("{u} (f32 {:e})", f32::from_bits(u)),
            Err(e) => format!("<{e}>"),
        },
        WireType::Bit64 => match reader.read_f64() {
            Ok(f) => format!("{f}"),
            Err(e) => format!("<{e}>"),
        },
        WireType::LengthDelimited => text_preview(field.payload, max_chars),
    }
}

fn text_preview(payload: &[u8], max_chars: usize) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) if !text.chars().any(char::is_control) => {
            let shown: String = text.chars().take(max_chars).collect();
            if shown.len() < text.len() {
                format!("{shown:?}...")
            } else {
                format!("{shown:?}")
            }
        }
        _ => format!("<{} bytes>", payload.len()),
    }
}
