// src/timer.rs
// The nested block timer.
//
// - logging sets `last_time` on the top frame.
// - beginning a block pushes a frame.
// - ending a block pops the top frame and touches the new top, so later logs
//   measure from the end of the block.
// - unaccounted time is the gap between the last log and the end of a block,
//   which points at costly work that has no finer-grained logs.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::format::{elapsed, padding, unaccounted};
use crate::frame::{BlockFrame, TimerStack};
use crate::guard::BlockGuard;
use crate::sink::{LogSink, Sink};

const BOTTOM_WARNING: &str = "!!! Could not end, already at bottom !!!";
const FORCED_END: &str = "<forced end, run time inaccurate>";

/// Logs elapsed time across nested, named blocks.
///
/// Every operation holds one lock for its whole duration, so a stack change
/// and the line describing it are never interleaved with another caller.
pub struct BlockTimer {
    tag: String,
    sink: Box<dyn Sink>,
    clock: Box<dyn Clock>,
    stack: Mutex<TimerStack>,
}

impl BlockTimer {
    /// A timer with the default tag, logging through `log` at debug level.
    pub fn new() -> Self {
        Self::from_config(Config::new())
    }

    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self::from_config(Config::with_tag(tag))
    }

    pub fn from_config(config: Config) -> Self {
        Self::with_parts(config, LogSink, MonotonicClock::new())
    }

    pub fn with_parts(config: Config, sink: impl Sink + 'static, clock: impl Clock + 'static) -> Self {
        let root_time = clock.now();
        BlockTimer {
            tag: config.tag,
            sink: Box::new(sink),
            clock: Box::new(clock),
            stack: Mutex::new(TimerStack::new(root_time)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.lock().depth()
    }

    /// Names of the open blocks, outermost first.
    pub fn open_blocks(&self) -> Vec<String> {
        self.lock().names()
    }

    /// Logs `text` with the time since the previous log in the current block.
    pub fn log(&self, text: &str) {
        let mut stack = self.lock();
        self.log_locked(&mut stack, text);
    }

    /// Begins a named block. Logs inside it are indented, and ending it reports its run time.
    pub fn begin(&self, name: &str) {
        let mut stack = self.lock();
        self.begin_locked(&mut stack, name, None);
    }

    /// Like `begin`, with a message that is shown but is not part of the block name.
    pub fn begin_with_message(&self, name: &str, message: &str) {
        let mut stack = self.lock();
        self.begin_locked(&mut stack, name, Some(message));
    }

    /// Ends whatever block is on top. Prefer `end_named`, which cannot
    /// close the wrong block when an inner one was left open.
    pub fn end(&self) {
        let mut stack = self.lock();
        self.end_locked(&mut stack);
    }

    /// Ends the nearest block called `name`, first closing any blocks still open inside it.
    /// An unknown name is logged and nothing is closed.
    pub fn end_named(&self, name: &str) {
        let mut stack = self.lock();
        let Some(height) = stack.position_of(name) else {
            self.log_locked(&mut stack, &format!("Unknown end: {}", name));
            return;
        };

        for remaining in (0..height).rev() {
            if remaining > 0 {
                self.emit(&stack, FORCED_END);
            }
            self.end_locked(&mut stack);
        }
    }

    /// Begins `name` and returns a guard that ends it when dropped.
    pub fn scoped(&self, name: &str) -> BlockGuard<'_> {
        self.begin(name);
        BlockGuard::new(self, name)
    }

    pub fn scoped_with_message(&self, name: &str, message: &str) -> BlockGuard<'_> {
        self.begin_with_message(name, message);
        BlockGuard::new(self, name)
    }

    fn lock(&self) -> MutexGuard<'_, TimerStack> {
        // The stack is consistent between operations, so poisoning is ignored.
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log_locked(&self, stack: &mut TimerStack, text: &str) {
        let now = self.clock.now();
        let line = format!("{}{}", text, elapsed(stack.top().last_time, now));
        self.emit(stack, &line);
        stack.top_mut().touch(now);
    }

    fn begin_locked(&self, stack: &mut TimerStack, name: &str, message: Option<&str>) {
        let now = self.clock.now();
        let message = message.map(|m| format!(": {}", m)).unwrap_or_default();
        let line = format!(
            "Beginning {}{}{}",
            name,
            message,
            elapsed(stack.top().last_time, now)
        );
        self.emit(stack, &line);
        stack.push(BlockFrame::new(Some(name.to_string()), now));
    }

    fn end_locked(&self, stack: &mut TimerStack) {
        let now = self.clock.now();
        let Some(frame) = stack.pop() else {
            self.log_locked(stack, BOTTOM_WARNING);
            return;
        };

        let block_name = frame.name.as_deref().map(|n| format!(" {}", n)).unwrap_or_default();
        // A block with no inner logs has nothing to attribute.
        let unattributed = if frame.has_logged() {
            unaccounted(frame.last_time, now)
        } else {
            String::new()
        };
        let line = format!(
            "Ended{}{}{}",
            block_name,
            elapsed(frame.start_time, now),
            unattributed
        );
        self.emit(stack, &line);
        stack.top_mut().touch(now);
    }

    fn emit(&self, stack: &TimerStack, text: &str) {
        let line = format!("{}{}", padding(stack.depth()), text);
        self.sink.accept(&self.tag, &line);
    }
}

impl Default for BlockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BlockTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockTimer")
            .field("tag", &self.tag)
            .field("open_blocks", &self.open_blocks())
            .finish()
    }
}
