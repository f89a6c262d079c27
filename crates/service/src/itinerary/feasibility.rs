//! Opt-in validation around the traversal.
//!
//! The traversal itself never fails: on input without an Eulerian path from
//! the start it silently returns a partial (or even non-contiguous) route.
//! These checks let a caller turn that into an explicit error.

use std::collections::BTreeMap;
use std::fmt::Display;

use super::domain::{Itinerary, Ticket};
use super::errors::ItineraryError;

/// Degree precondition for a path starting at `start`.
///
/// Every node must have `out - in == 0`, except that `start` may sit at `+1`
/// when exactly one other node sits at `-1`. The first offender in node order
/// is reported.
pub fn check_balance<N>(tickets: &[Ticket<N>], start: &N) -> Result<(), ItineraryError>
where
    N: Ord + Display,
{
    let mut surplus: BTreeMap<&N, i64> = BTreeMap::new();
    for ticket in tickets {
        *surplus.entry(&ticket.origin).or_insert(0) += 1;
        *surplus.entry(&ticket.destination).or_insert(0) -= 1;
    }

    let start_surplus = surplus.get(start).copied().unwrap_or(0);
    let mut sink_seen = false;
    for (node, &s) in &surplus {
        let ok = if *node == start {
            s == 0 || s == 1
        } else if s == -1 && start_surplus == 1 && !sink_seen {
            sink_seen = true;
            true
        } else {
            s == 0
        };
        if !ok {
            return Err(ItineraryError::Unbalanced { node: node.to_string(), surplus: s });
        }
    }
    Ok(())
}

/// Post-traversal check that every ticket was consumed. With balanced degrees
/// a shortfall means some tickets are unreachable from the start.
pub fn check_coverage<N>(itinerary: &Itinerary<N>, total: usize) -> Result<(), ItineraryError> {
    if itinerary.covers(total) {
        return Ok(());
    }
    Err(ItineraryError::Incomplete { covered: itinerary.len().saturating_sub(1), total })
}
