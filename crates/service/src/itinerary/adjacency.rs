//! Adjacency table of remaining outgoing edges.
//!
//! Destinations are sorted once at build time and only ever removed from the
//! front, so every per-node sequence stays ascending for the whole traversal.

use std::collections::{BTreeMap, VecDeque};

use super::domain::Ticket;

/// Origin -> ascending queue of unused destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable<N: Ord> {
    edges: BTreeMap<N, VecDeque<N>>,
}

impl<N: Ord + Clone> AdjacencyTable<N> {
    /// Build a fresh table from the ticket list. The input is left untouched.
    pub fn build<'a, I>(tickets: I) -> Self
    where
        I: IntoIterator<Item = &'a Ticket<N>>,
        N: 'a,
    {
        let mut edges: BTreeMap<N, VecDeque<N>> = BTreeMap::new();
        for ticket in tickets {
            edges
                .entry(ticket.origin.clone())
                .or_default()
                .push_back(ticket.destination.clone());
        }
        for destinations in edges.values_mut() {
            destinations.make_contiguous().sort();
        }
        Self { edges }
    }

    /// Remove and return the smallest unused destination out of `node`.
    pub fn pop_smallest(&mut self, node: &N) -> Option<N> {
        self.edges.get_mut(node).and_then(VecDeque::pop_front)
    }

    /// Remaining destinations out of `node`, ascending.
    pub fn remaining(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.edges.get(node).into_iter().flatten()
    }

    pub fn out_degree(&self, node: &N) -> usize {
        self.edges.get(node).map_or(0, VecDeque::len)
    }

    /// Total number of unused edges across all origins.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(VecDeque::len).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.edges.values().all(VecDeque::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickets(pairs: &[(&'static str, &'static str)]) -> Vec<Ticket<&'static str>> {
        pairs.iter().copied().map(Ticket::from).collect()
    }

    #[test]
    fn groups_by_origin_and_sorts_destinations() {
        let t = tickets(&[("JFK", "SFO"), ("JFK", "ATL"), ("ATL", "SFO"), ("ATL", "JFK")]);
        let table = AdjacencyTable::build(&t);
        assert_eq!(table.remaining(&"JFK").copied().collect::<Vec<_>>(), vec!["ATL", "SFO"]);
        assert_eq!(table.remaining(&"ATL").copied().collect::<Vec<_>>(), vec!["JFK", "SFO"]);
        assert_eq!(table.out_degree(&"SFO"), 0);
        assert_eq!(table.edge_count(), 4);
    }

    #[test]
    fn keeps_parallel_edges() {
        let t = tickets(&[("A", "B"), ("A", "B"), ("A", "C")]);
        let table = AdjacencyTable::build(&t);
        assert_eq!(table.remaining(&"A").copied().collect::<Vec<_>>(), vec!["B", "B", "C"]);
    }

    #[test]
    fn pop_takes_smallest_first() {
        let t = tickets(&[("A", "C"), ("A", "B"), ("A", "D")]);
        let mut table = AdjacencyTable::build(&t);
        assert_eq!(table.pop_smallest(&"A"), Some("B"));
        assert_eq!(table.pop_smallest(&"A"), Some("C"));
        assert_eq!(table.pop_smallest(&"A"), Some("D"));
        assert_eq!(table.pop_smallest(&"A"), None);
        assert!(table.is_exhausted());
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let mut table: AdjacencyTable<&str> = AdjacencyTable::build(&[]);
        assert_eq!(table.pop_smallest(&"X"), None);
        assert_eq!(table.edge_count(), 0);
        assert!(table.is_exhausted());
    }

    #[test]
    fn build_does_not_consume_input() {
        let t = tickets(&[("B", "A")]);
        let _ = AdjacencyTable::build(&t);
        assert_eq!(t.len(), 1);
    }
}
