// src/sink.rs
// Where formatted lines go. The timer only ever needs `accept(tag, line)`.

use std::sync::{Arc, Mutex, PoisonError};

pub trait Sink: Send + Sync {
    fn accept(&self, tag: &str, line: &str);
}

/// Sends every line to the `log` facade at debug level, using the tag as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Sink for LogSink {
    fn accept(&self, tag: &str, line: &str) {
        log::debug!(target: tag, "{}", line);
    }
}

/// Keeps every `(tag, line)` pair in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    /// Drains and returns the collected lines.
    pub fn take(&self) -> Vec<String> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.drain(..).map(|(_, line)| line).collect()
    }
}

impl Sink for MemorySink {
    fn accept(&self, tag: &str, line: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((tag.to_string(), line.to_string()));
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn accept(&self, tag: &str, line: &str) {
        (**self).accept(tag, line)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::BlockTimer;
    use log::Level;

    #[test]
    fn test_memory_sink_collects_and_drains() {
        let sink = MemorySink::new();
        sink.accept("T", "one");
        sink.accept("T", "two");
        assert_eq!(sink.entries()[0], ("T".to_string(), "one".to_string()));
        assert_eq!(sink.take(), vec!["one".to_string(), "two".to_string()]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_shared_sink_through_arc() {
        let sink = Arc::new(MemorySink::new());
        let handle: Box<dyn Sink> = Box::new(Arc::clone(&sink));
        handle.accept("T", "via arc");
        assert_eq!(sink.lines(), vec!["via arc".to_string()]);
    }

    #[test]
    fn test_log_sink_uses_debug_and_tag_target() {
        capture::install();
        LogSink.accept("LogSinkDirect", "Beginning load 0.01 ms");

        let records = capture::records_for("LogSinkDirect");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[0].target, "LogSinkDirect");
        assert_eq!(records[0].message, "Beginning load 0.01 ms");
    }

    #[test]
    fn test_default_timer_logs_every_line_at_debug() {
        capture::install();
        let timer = BlockTimer::with_tag("LogSinkTimer");
        timer.begin("load");
        timer.end();
        // warnings go out at the same level
        timer.end();
        timer.end_named("missing");

        let records = capture::records_for("LogSinkTimer");
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|record| record.level == Level::Debug));
        assert!(records[0].message.starts_with("Beginning load "));
        assert!(records[1].message.starts_with("Ended load "));
        assert!(records[2].message.starts_with("!!! Could not end, already at bottom !!!"));
        assert!(records[3].message.starts_with("Unknown end: missing"));
    }
}
