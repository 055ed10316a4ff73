use super::queue::{FifoQueue, Value};

/// LIFO stack simulated by two FIFO queues.
///
/// At most one queue holds elements between calls. Pushes append to that
/// queue, so its back is always the logical top. `pop` exposes the top using
/// only front removals: every element but the last is rotated into the spare
/// queue, which then becomes the active one.
#[derive(Debug, Default)]
pub struct Stack {
    q1: FifoQueue,
    q2: FifoQueue,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, value: Value) {
        self.len += 1;

        if !self.q1.is_empty() || self.q2.is_empty() {
            self.q1.push_back(value);
        } else {
            self.q2.push_back(value);
        }
    }

    /// Removes and returns the most recently pushed value, or `None` when
    /// the stack is empty.
    pub fn pop(&mut self) -> Option<Value> {
        let (source, dest) = if !self.q1.is_empty() {
            (&mut self.q1, &mut self.q2)
        } else if !self.q2.is_empty() {
            (&mut self.q2, &mut self.q1)
        } else {
            return None;
        };

        // rotate everything except the back into the spare queue; bounding
        // the loop by the size recorded here (instead of testing emptiness)
        // means a violated active/spare invariant cannot spin forever
        for _ in 1..source.len() {
            if let Some(&v) = source.front() {
                dest.push_back(v);
            }
            source.remove_front();
        }

        let top = source.front().copied();
        source.remove_front();

        self.len -= 1;
        top
    }

    /// The most recently pushed value, or `None` when the stack is empty.
    pub fn top(&self) -> Option<Value> {
        if !self.q1.is_empty() {
            self.q1.back().copied()
        } else {
            self.q2.back().copied()
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the live elements from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        // only one queue is ever populated, chaining picks the active one
        self.q1.iter().chain(self.q2.iter())
    }
}
