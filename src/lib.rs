//! Time-logging for basic performance analysis.
//!
//! A [`BlockTimer`] keeps a stack of named blocks and writes one indented,
//! human-readable line per event through a [`Sink`] (by default the `log`
//! facade at debug level, with the timer's tag as target):
//!
//! ```text
//! Beginning load 0.00 ms
//!   read header 0.42 ms
//!   Beginning decode: 128 frames 0.01 ms
//!   Ended decode 31 ms
//! Ended load 33 ms (unaccounted: 1.62 ms)
//! ```
//!
//! Use the free functions in [`shared`] for a process-wide timer, or create
//! your own instance (with its own tag) for finer-grained timing, such as one
//! timer per thread, without affecting the shared one.

pub mod clock;
pub mod config;
pub mod format;
pub mod frame;
pub mod guard;
pub mod shared;
pub mod sink;
pub mod timer;

// Re-export the main structs for easier access.
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Config;
pub use frame::{BlockFrame, TimerStack};
pub use guard::BlockGuard;
pub use shared::{begin, begin_with_message, end, end_named, log, scoped};
pub use sink::{LogSink, MemorySink, Sink};
pub use timer::BlockTimer;
