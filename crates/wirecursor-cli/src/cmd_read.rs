/// `wirecursor read`: read a sequence of typed values from a buffer.
///
/// The `--as` list drives a single [`BufferReader`] from start to finish,
/// exactly the way a schema-aware consumer would:
///
/// ```text
/// $ wirecursor read --hex msg.hex --as key,uint,key,str,skip:bit32
/// 0     key     #1 varint
/// 1     uint    300
/// 3     key     #2 len
/// 4     str     "hi"
/// 7     skip    bit32
/// ---
/// end at offset 11, 0 bytes left
/// ```
///
/// The first failing step ends the command with its error and offset.
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use wirecursor_reader::{BufferReader, ScalarKind, WireType};

use crate::ReadArgs;
use crate::input;

// ── Steps ─────────────────────────────────────────────────────────────────────

/// One entry of the `--as` list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Uint,
    Int,
    Bool,
    Str,
    Bytes,
    Key,
    Fixed(ScalarKind),
    SkipBytes(usize),
    SkipWire(WireType),
}

impl Step {
    fn label(self) -> &'static str {
        match self {
            Self::Uint => "uint",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::Key => "key",
            Self::Fixed(kind) => kind.name(),
            Self::SkipBytes(_) | Self::SkipWire(_) => "skip",
        }
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let step = match s {
            "uint" => Self::Uint,
            "int" => Self::Int,
            "bool" => Self::Bool,
            "str" => Self::Str,
            "bytes" => Self::Bytes,
            "key" => Self::Key,
            _ => {
                if let Some(arg) = s.strip_prefix("skip:") {
                    match wire_type_by_name(arg) {
                        Some(wire_type) => Self::SkipWire(wire_type),
                        None => Self::SkipBytes(
                            arg.parse()
                                .with_context(|| format!("invalid skip length {arg:?}"))?,
                        ),
                    }
                } else {
                    Self::Fixed(ScalarKind::from_str(s)?)
                }
            }
        };
        Ok(step)
    }
}

fn wire_type_by_name(name: &str) -> Option<WireType> {
    [
        WireType::LengthDelimited,
        WireType::Varint,
        WireType::Bit64,
        WireType::Bit32,
    ]
    .into_iter()
    .find(|wire_type| wire_type.name() == name)
}

// ── Command ───────────────────────────────────────────────────────────────────

pub fn run(args: &ReadArgs) -> Result<()> {
    let steps = args
        .kinds
        .iter()
        .map(|kind| kind.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;
    if steps.is_empty() {
        bail!("--as needs at least one kind");
    }

    let buf = input::load(&args.file, args.hex)?;
    let mut reader = BufferReader::with_offset(&buf, args.offset);

    for step in steps {
        let offset = reader.position();
        let value = apply(&mut reader, step)
            .with_context(|| format!("reading {} at offset {offset}", step.label()))?;
        println!("{offset:<5} {:<7} {value}", step.label());
    }

    println!("---");
    println!(
        "end at offset {}, {} bytes left",
        reader.position(),
        reader.remaining_len()?,
    );
    Ok(())
}

/// Run one step and render what it read.
fn apply(reader: &mut BufferReader<'_>, step: Step) -> Result<String> {
    let rendered = match step {
        Step::Uint => reader.read_uint()?.to_string(),
        Step::Int => reader.read_int()?.to_string(),
        Step::Bool => reader.read_bool()?.to_string(),
        Step::Str => format!("{:?}", reader.read_str()?),
        Step::Bytes => {
            let bytes = reader.read_bytes()?;
            format!("[{}] {}", bytes.len(), input::hex_pairs(bytes))
        }
        Step::Key => {
            let key = reader.read_field_key()?;
            format!("#{} {}", key.field_id, key.wire_type)
        }
        Step::Fixed(kind) => reader.read_fixed(kind)?.to_string(),
        Step::SkipBytes(n) => {
            reader.skip(n)?;
            format!("{n} bytes")
        }
        Step::SkipWire(wire_type) => {
            reader.skip_by_wire_type(wire_type)?;
            wire_type.name().to_owned()
        }
    };
    Ok(rendered.trim_end().to_owned())
}
