//! Edge-consuming depth-first walk (Hierholzer).
//!
//! Each step looks at the node on top of the stack: if it still has unused
//! edges, the smallest one is removed and its destination pushed; otherwise the
//! node is finished and moves to the output buffer. Dead-end branches are
//! therefore emitted before the route that leads into them, and reversing the
//! buffer splices them back in at the right place.
//!
//! The walk uses an explicit stack so depth is bounded by heap, not by the
//! thread's call stack.

use super::adjacency::AdjacencyTable;

/// Walk from `start`, consuming edges from `table`, and return nodes in
/// post-order. The table is left holding only edges unreachable from `start`.
pub fn traverse<N: Ord + Clone>(table: &mut AdjacencyTable<N>, start: N) -> Vec<N> {
    let mut post_order = Vec::with_capacity(table.edge_count().saturating_add(1));
    let mut stack = vec![start];

    while let Some(node) = stack.last() {
        match table.pop_smallest(node) {
            Some(next) => stack.push(next),
            None => {
                if let Some(done) = stack.pop() {
                    post_order.push(done);
                }
            }
        }
    }

    post_order
}
