use crate::WalkArgs;

/// Configuration for `wirecursor walk`.
///
/// Built from the command-line flags; the defaults match running the
/// command with no optional flags.
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────┐
/// │ Field        │ Purpose                                         │
/// ├──────────────┼─────────────────────────────────────────────────┤
/// │ start_offset │ Byte offset of the first field key              │
/// │ limit        │ Maximum number of fields to print               │
/// │ show_hex     │ Print a hex dump under each field               │
/// │ hex_width    │ Bytes per hex dump line                         │
/// │ preview_len  │ Max characters of a text payload preview        │
/// └──────────────┴─────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    pub start_offset: usize,
    pub limit: Option<usize>,
    pub show_hex: bool,
    pub hex_width: usize,
    pub preview_len: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            start_offset: 0,
            limit: None,
            show_hex: false,
            hex_width: 16,
            preview_len: 40,
        }
    }
}

impl From<&WalkArgs> for WalkConfig {
    fn from(args: &WalkArgs) -> Self {
        Self {
            start_offset: args.offset,
            limit: args.limit,
            show_hex: args.show_hex,
            ..Self::default()
        }
    }
}

impl WalkConfig {
    /// Whether `count` fields already printed reaches the limit.
    pub fn limit_reached(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}
