use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(distance, node)` entries for Dijkstra
///
/// Stale entries are not removed when a node's distance improves; the caller
/// skips them on pop. Entries with equal priority pop in node order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_first() {
        let mut frontier = Frontier::new();
        frontier.push("b", 5u32);
        frontier.push("a", 9);
        frontier.push("c", 1);
        frontier.push("b", 2);
        assert_eq!(frontier.len(), 4);

        assert_eq!(frontier.pop(), Some(("c", 1)));
        assert_eq!(frontier.pop(), Some(("b", 2)));
        assert_eq!(frontier.pop(), Some(("b", 5)));
        assert_eq!(frontier.pop(), Some(("a", 9)));
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_equal_priority_pops_in_node_order() {
        let mut frontier = Frontier::new();
        frontier.push(3usize, 4u32);
        frontier.push(1, 4);
        assert_eq!(frontier.pop(), Some((1, 4)));
        assert_eq!(frontier.pop(), Some((3, 4)));
    }
}
