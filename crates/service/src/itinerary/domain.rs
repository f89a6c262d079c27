use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single-use directed flight leg.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket<N> {
    pub origin: N,
    pub destination: N,
}

impl<N> Ticket<N> {
    pub fn new(origin: N, destination: N) -> Self {
        Self { origin, destination }
    }
}

impl<N> From<(N, N)> for Ticket<N> {
    fn from((origin, destination): (N, N)) -> Self {
        Self { origin, destination }
    }
}

impl<N> From<[N; 2]> for Ticket<N> {
    fn from([origin, destination]: [N; 2]) -> Self {
        Self { origin, destination }
    }
}

/// Ordered list of visited nodes, starting at the requested start node.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary<N>(Vec<N>);

impl<N> Itinerary<N> {
    pub fn start(&self) -> Option<&N> {
        self.0.first()
    }

    /// Consecutive `(from, to)` pairs, one per consumed ticket.
    pub fn legs(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.0.windows(2).filter_map(|w| match w {
            [from, to] => Some((from, to)),
            _ => None,
        })
    }

    /// Whether the itinerary consumed `ticket_count` tickets.
    pub fn covers(&self, ticket_count: usize) -> bool {
        self.0.len() == ticket_count.saturating_add(1)
    }

    pub fn into_vec(self) -> Vec<N> {
        self.0
    }
}

impl<N> From<Vec<N>> for Itinerary<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self(nodes)
    }
}

impl<N> Deref for Itinerary<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.0
    }
}
