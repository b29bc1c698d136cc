// src/frame.rs
// The stack of open timed blocks.

use std::fmt;

/// One open timed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFrame {
    pub name: Option<String>,
    pub start_time: u64,
    pub last_time: u64,
}

impl BlockFrame {
    pub fn new(name: Option<String>, now: u64) -> Self {
        BlockFrame {
            name,
            start_time: now,
            last_time: now,
        }
    }

    /// Records a log event. `last_time` never moves backwards.
    pub fn touch(&mut self, now: u64) {
        self.last_time = self.last_time.max(now);
    }

    /// True once something was logged inside this block.
    pub fn has_logged(&self) -> bool {
        self.last_time != self.start_time
    }
}

impl fmt::Display for BlockFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => f.write_str("<no name>"),
        }
    }
}

/// LIFO of frames that is never empty: index 0 is an unnamed root which
/// is never popped and never shown.
#[derive(Debug, Clone)]
pub struct TimerStack {
    frames: Vec<BlockFrame>,
}

impl TimerStack {
    pub fn new(now: u64) -> Self {
        TimerStack {
            frames: vec![BlockFrame::new(None, now)],
        }
    }

    /// Open blocks, not counting the root.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn top(&self) -> &BlockFrame {
        // frames[0] is never removed
        &self.frames[self.frames.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut BlockFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn push(&mut self, frame: BlockFrame) {
        self.frames.push(frame);
    }

    /// Pops the top block, or returns `None` if only the root is left.
    pub fn pop(&mut self) -> Option<BlockFrame> {
        if self.depth() == 0 {
            return None;
        }
        self.frames.pop()
    }

    /// Distance from the top (1 = top) of the nearest block named `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.frames[1..]
            .iter()
            .rev()
            .position(|frame| frame.name.as_deref() == Some(name))
            .map(|index| index + 1)
    }

    /// Names of the open blocks, bottom first.
    pub fn names(&self) -> Vec<String> {
        self.frames[1..].iter().map(|frame| frame.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, now: u64) -> BlockFrame {
        BlockFrame::new(Some(name.to_string()), now)
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = TimerStack::new(0);
        assert_eq!(stack.depth(), 0);
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 0);
        assert!(stack.top().name.is_none());
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = TimerStack::new(0);
        stack.push(named("a", 1));
        stack.push(named("b", 2));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop().unwrap().name.as_deref(), Some("b"));
        assert_eq!(stack.top().name.as_deref(), Some("a"));
        assert_eq!(stack.names(), vec!["a".to_string()]);
    }

    #[test]
    fn test_position_of_counts_from_top() {
        let mut stack = TimerStack::new(0);
        stack.push(named("outer", 1));
        stack.push(named("dup", 2));
        stack.push(named("inner", 3));
        stack.push(named("dup", 4));
        assert_eq!(stack.position_of("dup"), Some(1));
        assert_eq!(stack.position_of("inner"), Some(2));
        assert_eq!(stack.position_of("outer"), Some(4));
        assert_eq!(stack.position_of("missing"), None);
    }

    #[test]
    fn test_root_never_matches_by_name() {
        let stack = TimerStack::new(0);
        assert_eq!(stack.position_of(""), None);
        assert_eq!(stack.position_of("<no name>"), None);
    }

    #[test]
    fn test_touch_only_moves_forward() {
        let mut frame = named("a", 10);
        assert!(!frame.has_logged());
        frame.touch(25);
        frame.touch(20);
        assert_eq!(frame.last_time, 25);
        assert!(frame.has_logged());
        assert_eq!(frame.to_string(), "a");
        assert_eq!(BlockFrame::new(None, 0).to_string(), "<no name>");
    }
}
