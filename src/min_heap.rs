use ordered_float::OrderedFloat;

/// A MinHeap of values keyed by an `f64` priority, where a lower priority
/// means earlier retrieval.
///
/// Backed by a flat `Vec` using the usual index arithmetic (parent at
/// `(i - 1) / 2`, children at `2i + 1` and `2i + 2`). Duplicate values and
/// infinite priorities are allowed, which is what lets the pathfinder queue
/// stale entries for a node instead of decreasing a key in place.
///
/// # Example
/// ```rust
/// use dijkstra_calculator::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push("far", 10.0);
/// heap.push("near", 2.0);
/// assert_eq!(heap.pop(), Some(("near", 2.0)));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    values: Vec<Entry<T>>,
}

/// A cell for our min heap.
#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    priority: OrderedFloat<f64>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push a value onto the heap. Pushing never fails and the heap grows as
    /// needed.
    pub fn push(&mut self, value: T, priority: f64) {
        self.values.push(Entry {
            value,
            priority: OrderedFloat(priority),
        });
        self.bubble_up(self.values.len() - 1);
    }

    /// Remove and return the minimum-priority entry, or `None` if the heap is
    /// empty.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let last = self.values.len() - 1;
        self.values.swap(0, last);
        let min = self.values.pop()?;
        if !self.values.is_empty() {
            self.sink_down(0);
        }
        Some((min.value, min.priority.into_inner()))
    }

    /// The minimum-priority entry without removing it.
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.values
            .first()
            .map(|entry| (&entry.value, entry.priority.into_inner()))
    }

    fn bubble_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            // Ties stay put so earlier insertions keep their spot near the root.
            if self.values[idx].priority >= self.values[parent].priority {
                break;
            }
            self.values.swap(idx, parent);
            idx = parent;
        }
    }

    fn sink_down(&mut self, mut idx: usize) {
        let len = self.values.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut swap = None;

            if left < len && self.values[left].priority < self.values[idx].priority {
                swap = Some(left);
            }
            if right < len {
                // The right child only wins when strictly smaller than the
                // current candidate, so ties between children favor the left.
                let against = swap.unwrap_or(idx);
                if self.values[right].priority < self.values[against].priority {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.values.swap(idx, child);
                    idx = child;
                }
                None => break,
            }
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_order() {
        let mut heap = MinHeap::new();
        heap.push('b', 2.0);
        heap.push('e', 5.0);
        heap.push('a', -10.0);
        heap.push('c', 2.5);
        heap.push('d', 3.0);

        assert_eq!(Some(('a', -10.0)), heap.pop());
        assert_eq!(Some(('b', 2.0)), heap.pop());
        assert_eq!(Some(('c', 2.5)), heap.pop());
        assert_eq!(Some(('d', 3.0)), heap.pop());
        assert_eq!(Some(('e', 5.0)), heap.pop());
        assert_eq!(None, heap.pop());
    }

    #[test]
    fn pop_nondecreasing() {
        let priorities = [9.0, 1.0, 7.0, 3.0, 3.0, 8.0, 0.5, 4.0, 6.0, 2.0];
        let mut heap = MinHeap::new();
        for (i, p) in priorities.iter().enumerate() {
            heap.push(i, *p);
        }

        let mut prev = f64::NEG_INFINITY;
        while let Some((_, p)) = heap.pop() {
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn tie_does_not_displace_earlier_root() {
        let mut heap = MinHeap::new();
        heap.push("first", 1.0);
        heap.push("second", 1.0);

        assert_eq!(Some(("first", 1.0)), heap.pop());
        assert_eq!(Some(("second", 1.0)), heap.pop());
    }

    #[test]
    fn duplicate_values_and_infinity() {
        let mut heap = MinHeap::new();
        heap.push("x", f64::INFINITY);
        heap.push("x", 4.0);
        heap.push("x", 1.0);

        assert_eq!(Some(("x", 1.0)), heap.pop());
        assert_eq!(Some(("x", 4.0)), heap.pop());
        assert_eq!(Some(("x", f64::INFINITY)), heap.pop());
    }

    #[test]
    fn pop_empty() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(None, heap.pop());
        assert!(heap.peek().is_none());
    }

    #[test]
    fn peek_and_clear() {
        let mut heap = MinHeap::with_capacity(4);
        heap.push(7usize, 3.0);
        heap.push(9usize, 1.0);

        assert_eq!(Some((&9, 1.0)), heap.peek());
        assert_eq!(2, heap.len());

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(None, heap.pop());
    }
}
