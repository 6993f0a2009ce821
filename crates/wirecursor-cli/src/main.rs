/// wirecursor command-line tool: look inside buffers of protobuf-style
/// fields without a schema.
///
/// # Command overview
///
/// ```text
/// wirecursor <COMMAND> [OPTIONS]
///
/// Commands:
///   walk    List every top-level field: offset, id, wire type, payload
///   read    Read a sequence of typed values from a buffer
///   help    Print help information
///
/// Global options:
///   -v, --verbose    Log decoder diagnostics to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                    |
/// |------|--------------------------------------------|
/// | 0    | Success                                    |
/// | 1    | Error (I/O failure, malformed buffer, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_read;
mod cmd_walk;
mod config;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Inspect and read protobuf-style wire buffers.
#[derive(Parser)]
#[command(name = "wirecursor", version, about = "Wire-format buffer inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder diagnostics (malformed varints, bad booleans, underruns).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// List every top-level field in a buffer.
    Walk(WalkArgs),
    /// Read a sequence of typed values from a buffer.
    Read(ReadArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `wirecursor walk`.
///
/// Walks the buffer field by field using only each field's wire type, so
/// it works on any message without knowing its schema.
///
/// ```text
/// ┌─────────────┬───────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                            │
/// ├─────────────┼───────────────────────────────────────────────────┤
/// │ --hex       │ Input is hex text instead of raw bytes            │
/// │ --show-hex  │ Hex dump of each field payload                    │
/// │ --offset K  │ Start walking at byte K                           │
/// │ --limit N   │ Stop after N fields                               │
/// └─────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to the input file, or `-` for stdin.
    pub file: PathBuf,

    /// Treat the input as hex text (whitespace is ignored).
    #[arg(long)]
    pub hex: bool,

    /// Show a hex dump of each field payload (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,

    /// Byte offset to start walking from.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Stop after this many fields.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for `wirecursor read`.
///
/// Reads values in the order given by `--as`, one per entry:
///
/// ```text
///   uint  int  bool  str  bytes          varint-based and length-prefixed
///   int32  uint32  float  double         big-endian fixed width
///   skip:N                               skip N bytes unchecked
///   skip:varint|len|bit32|bit64          skip one payload of that wire type
///   key                                  a field key (id + wire type)
/// ```
#[derive(clap::Args)]
pub struct ReadArgs {
    /// Path to the input file, or `-` for stdin.
    pub file: PathBuf,

    /// Comma-separated list of value kinds to read, in order.
    #[arg(long = "as", value_delimiter = ',', required = true)]
    pub kinds: Vec<String>,

    /// Treat the input as hex text (whitespace is ignored).
    #[arg(long)]
    pub hex: bool,

    /// Byte offset to start reading from.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Walk(args) => cmd_walk::run(&args),
        Commands::Read(args) => cmd_read::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
