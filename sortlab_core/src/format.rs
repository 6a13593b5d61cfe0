//! Line-wrapped rendering of integer sequences.

/// Line width used for the original (unsorted) sequence.
pub const ORIGINAL_LINE_WIDTH: usize = 7;

/// Line width used for trace snapshots and the sorted result.
pub const TRACE_LINE_WIDTH: usize = 6;

/// Renders `values` as space-separated text with a line break after every
/// `line_width`-th element.
///
/// Trailing whitespace is left in place. `line_width` must be at least 1;
/// zero is outside the contract and rejected in debug builds.
pub fn format_block(values: &[u32], line_width: usize) -> String {
    debug_assert!(line_width > 0, "line width must be at least 1");

    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        out.push_str(&value.to_string());
        out.push(' ');
        if index % line_width == line_width - 1 {
            out.push('\n');
        }
    }
    out
}
