// src/format.rs
// Rendering of durations and indentation for emitted lines.

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Below this, durations keep two decimals; at or above it, whole milliseconds are enough.
const WHOLE_MILLIS_THRESHOLD: u64 = 10 * NANOS_PER_MILLI;

const INDENT: &str = "  ";

/// Returns "5 ms" or "0.23 ms" as is appropriate.
pub fn format_nanos(nanos: u64) -> String {
    if nanos >= WHOLE_MILLIS_THRESHOLD {
        format!("{} ms", nanos / NANOS_PER_MILLI)
    } else {
        format!("{:.2} ms", nanos as f64 / NANOS_PER_MILLI as f64)
    }
}

/// Time since `start`, padded for appending, e.g. " 5 ms".
pub fn elapsed(start: u64, now: u64) -> String {
    format!(" {}", format_nanos(now.saturating_sub(start)))
}

/// Time since the last log in a block, e.g. " (unaccounted: 12 ms)".
/// Only meaningful for blocks that logged at least once.
pub fn unaccounted(last: u64, now: u64) -> String {
    format!(" (unaccounted: {})", format_nanos(now.saturating_sub(last)))
}

pub fn padding(depth: usize) -> String {
    INDENT.repeat(depth)
}
