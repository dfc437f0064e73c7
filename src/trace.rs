use log::trace;
use std::collections::VecDeque;

/// Append-only step log. Only the newest `capacity` lines are kept in memory,
/// oldest evicted first; every line also goes to the `log` facade at trace
/// level, so a full record survives with `RUST_LOG=trace 2>trace.log`.
#[derive(Debug, Clone)]
pub struct TraceLog {
    lines: VecDeque<String>,
    capacity: usize,
    appended: u64,
}

impl TraceLog {
    /// a capacity of 0 is bumped to 1 so the newest line is always kept
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TraceLog {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            appended: 0,
        }
    }

    pub fn append(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!(target: "chip8_host::step", "{}", text);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(text);
        self.appended += 1;
    }

    /// how many lines have ever been appended, evicted ones included
    pub fn appended(&self) -> u64 {
        self.appended
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// retained lines, oldest first
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    /// the newest `n` lines, oldest first
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &str> {
        self.lines().skip(self.len().saturating_sub(n))
    }

    /// retained lines, each with its line terminator
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
