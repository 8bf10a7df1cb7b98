use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::Result;

/// Identifier of a vertex, e.g. a city name or a numeric id
pub trait Node: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> Node for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Edge cost. Must be totally ordered so it can key the frontier,
/// which is why floats go through `OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two costs, `None` if it does not fit the type
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.0.is_finite().then_some(sum)
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: Node,
    W: Weight,
{
    /// Returns the outgoing edges of a node as a neighbor -> weight map
    fn neighbors(&self, node: &N) -> Result<&HashMap<N, W>>;

    /// Returns the nodes of the graph in declaration order
    fn nodes(&self) -> &[N];

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.neighbors(from).ok().and_then(|edges| edges.get(to).copied())
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Returns every edge as `(from, to, weight)`, grouped by source node
    fn edges(&self) -> Vec<(N, N, W)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for from in self.nodes() {
            if let Ok(targets) = self.neighbors(from) {
                let mut sorted: Vec<_> = targets.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));
                edges.extend(sorted.into_iter().map(|(to, w)| (from.clone(), to.clone(), *w)));
            }
        }
        edges
    }
}
