//! Itinerary module: rebuild a flight route from an unordered ticket pile.
//!
//! The route uses every ticket exactly once, starts at the requested node, and
//! is the lexicographically smallest such route. Work is split into three
//! stages, each depending only on the one before it:
//! - [`adjacency`]: group destinations by origin, sorted ascending
//! - [`traversal`]: consume edges smallest-first, emitting nodes in post-order
//! - [`format`]: reverse the post-order buffer into forward time
//!
//! [`feasibility`] and [`service`] add opt-in validation and input bounds on
//! top of the total core operation [`compute_itinerary`].

pub mod adjacency;
pub mod domain;
pub mod errors;
pub mod feasibility;
pub mod format;
pub mod service;
pub mod traversal;

pub use adjacency::AdjacencyTable;
pub use domain::{Itinerary, Ticket};
pub use errors::ItineraryError;
pub use service::{ItineraryConfig, ItineraryService};

/// Reconstruct the lexicographically smallest route that uses every ticket
/// once, starting at `start`.
///
/// Never fails. If the tickets admit no such route from `start`, the result
/// covers only part of them; see [`feasibility`] for explicit checks.
///
/// # Examples
/// ```
/// use service::itinerary::{compute_itinerary, Ticket};
/// let tickets = vec![
///     Ticket::new("JFK", "SFO"),
///     Ticket::new("JFK", "ATL"),
///     Ticket::new("SFO", "ATL"),
///     Ticket::new("ATL", "JFK"),
///     Ticket::new("ATL", "SFO"),
/// ];
/// let route = compute_itinerary(&tickets, "JFK");
/// assert_eq!(route.into_vec(), vec!["JFK", "ATL", "JFK", "SFO", "ATL", "SFO"]);
/// ```
pub fn compute_itinerary<N: Ord + Clone>(tickets: &[Ticket<N>], start: N) -> Itinerary<N> {
    let mut table = AdjacencyTable::build(tickets);
    let post_order = traversal::traverse(&mut table, start);
    format::format(post_order)
}
