use std::fmt;
use std::ptr;

/// The element type stored by the queue and the stack built on top of it.
pub type Value = i64;

struct Node {
    value: Value,
    next: *mut Node,
}

impl Node {
    /// Heap-allocates a node and leaks it to a raw pointer; every node is
    /// reclaimed exactly once, by `remove_front` or by `Drop`.
    fn alloc(value: Value) -> *mut Node {
        Box::into_raw(Box::new(Node {
            value,
            next: ptr::null_mut(),
        }))
    }
}

/// Singly linked FIFO queue fronted by a sentinel node.
///
/// `first` is always the sentinel, so the oldest live element is
/// `first.next`. `last` is the most recently added node (the sentinel itself
/// while the queue is empty), which keeps appends from walking the chain.
/// The queue is empty exactly when `first` and `last` are the same node.
///
/// The links are raw pointers throughout: the nodes are owned by the queue
/// as a whole, and `last` aliases a node already reachable from `first`, so
/// no link ever carries a uniqueness claim of its own.
pub struct FifoQueue {
    first: *mut Node,
    last: *mut Node,
    len: usize,
}

impl FifoQueue {
    pub fn new() -> Self {
        // the sentinel never holds a live value
        let first = Node::alloc(0);

        Self {
            first,
            last: first,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        ptr::eq(self.first, self.last)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends `value` behind the current back of the queue.
    pub fn push_back(&mut self, value: Value) {
        let node = Node::alloc(value);

        unsafe { (*self.last).next = node };

        self.last = node;
        self.len += 1;
    }

    /// The oldest not-yet-removed element, or `None` on an empty queue.
    pub fn front(&self) -> Option<&Value> {
        unsafe { (*self.first).next.as_ref().map(|node| &node.value) }
    }

    /// The most recently added element, or `None` on an empty queue.
    pub fn back(&self) -> Option<&Value> {
        if self.is_empty() {
            None
        } else {
            unsafe { Some(&(*self.last).value) }
        }
    }

    /// Unlinks and frees the front node. Removing from an empty queue is a
    /// no-op.
    pub fn remove_front(&mut self) {
        if self.is_empty() {
            return;
        }

        // reclaim the node behind the sentinel and splice it out
        let node = unsafe { Box::from_raw((*self.first).next) };

        unsafe { (*self.first).next = node.next };

        if node.next.is_null() {
            // that was the only element, the back is the sentinel again
            self.last = self.first;
        }

        self.len -= 1;
    }

    /// Walks the live elements from front (oldest) to back (newest).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: unsafe { (*self.first).next.as_ref() },
        }
    }
}

impl Default for FifoQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FifoQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for FifoQueue {
    fn drop(&mut self) {
        // walk the chain from the sentinel, reclaiming every node once
        let mut node = self.first;
        while !node.is_null() {
            let boxed = unsafe { Box::from_raw(node) };
            node = boxed.next;
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = unsafe { node.next.as_ref() };

        Some(&node.value)
    }
}
