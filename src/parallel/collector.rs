use crossbeam::queue::SegQueue;

/// Unordered, append-only bag that any number of threads may push into.
///
/// Backed by a lock-free segmented queue; no insert is ever lost or
/// duplicated, but the drain order is unspecified.
#[derive(Debug)]
pub struct ConcurrentCollector<T> {
    items: SegQueue<T>,
}

impl<T> Default for ConcurrentCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConcurrentCollector<T> {
    pub fn new() -> Self {
        Self {
            items: SegQueue::new(),
        }
    }

    pub fn push(&self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drain every collected item into a `Vec`
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.items.pop() {
            out.push(item);
        }
        out
    }
}
