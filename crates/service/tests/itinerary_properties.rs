//! Property-based tests for itinerary reconstruction using proptest.
//!
//! Inputs are generated as random walks over a small alphabet, then shuffled,
//! so every case has a route from the walk's first node that uses every
//! ticket. Properties verified:
//! - Cardinality and start anchoring
//! - Every ticket used exactly once
//! - Ticket order does not affect the result
//! - Result is the smallest of all complete routes (brute force)
//! - Arbitrary input never panics and stays anchored
//! - Formatting twice gives back the input

use proptest::prelude::*;
use service::itinerary::feasibility::check_balance;
use service::itinerary::format::format;
use service::itinerary::{compute_itinerary, Ticket};

const NODES: [&str; 4] = ["ATL", "JFK", "SFO", "SJC"];

fn node() -> impl Strategy<Value = String> {
    (0..NODES.len()).prop_map(|i| NODES[i].to_string())
}

/// (start, shuffled tickets, same tickets in walk order)
fn walk() -> impl Strategy<Value = (String, Vec<Ticket<String>>, Vec<Ticket<String>>)> {
    (node(), prop::collection::vec(node(), 0..8)).prop_flat_map(|(start, steps)| {
        let mut stops = vec![start.clone()];
        stops.extend(steps);
        let tickets: Vec<Ticket<String>> = stops
            .windows(2)
            .map(|w| Ticket::new(w[0].clone(), w[1].clone()))
            .collect();
        (Just(start), Just(tickets.clone()).prop_shuffle(), Just(tickets))
    })
}

fn sorted_legs(route: &[String]) -> Vec<(String, String)> {
    let mut legs: Vec<_> = route.windows(2).map(|w| (w[0].clone(), w[1].clone())).collect();
    legs.sort();
    legs
}

fn sorted_tickets(tickets: &[Ticket<String>]) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = tickets.iter().map(|t| (t.origin.clone(), t.destination.clone())).collect();
    pairs.sort();
    pairs
}

/// Smallest complete route by exhaustive search.
fn brute_force(tickets: &[Ticket<String>], start: &str) -> Option<Vec<String>> {
    fn extend(
        tickets: &[Ticket<String>],
        used: &mut Vec<bool>,
        route: &mut Vec<String>,
        best: &mut Option<Vec<String>>,
    ) {
        if route.len() == tickets.len() + 1 {
            if best.as_ref().map_or(true, |b| route.as_slice() < b.as_slice()) {
                *best = Some(route.clone());
            }
            return;
        }
        let here = route[route.len() - 1].clone();
        for i in 0..tickets.len() {
            if !used[i] && tickets[i].origin == here {
                used[i] = true;
                route.push(tickets[i].destination.clone());
                extend(tickets, used, route, best);
                route.pop();
                used[i] = false;
            }
        }
    }

    let mut best = None;
    extend(tickets, &mut vec![false; tickets.len()], &mut vec![start.to_string()], &mut best);
    best
}

proptest! {
    #[test]
    fn prop_uses_every_ticket_once((start, tickets, _) in walk()) {
        let route = compute_itinerary(&tickets, start.clone());
        prop_assert_eq!(route.len(), tickets.len() + 1);
        prop_assert_eq!(route.start(), Some(&start));
        prop_assert_eq!(sorted_legs(&route), sorted_tickets(&tickets));
    }

    #[test]
    fn prop_ticket_order_is_irrelevant((start, shuffled, ordered) in walk()) {
        let a = compute_itinerary(&shuffled, start.clone());
        let b = compute_itinerary(&ordered, start);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_lexicographically_smallest((start, tickets, _) in walk()) {
        let route = compute_itinerary(&tickets, start.clone());
        let best = brute_force(&tickets, &start);
        prop_assert_eq!(Some(route.into_vec()), best);
    }

    #[test]
    fn prop_walks_pass_balance_check((start, tickets, _) in walk()) {
        prop_assert!(check_balance(&tickets, &start).is_ok());
    }

    #[test]
    fn prop_arbitrary_input_terminates_anchored(
        start in node(),
        pairs in prop::collection::vec((node(), node()), 0..12),
    ) {
        let tickets: Vec<Ticket<String>> = pairs.into_iter().map(Ticket::from).collect();
        let route = compute_itinerary(&tickets, start.clone());
        prop_assert_eq!(route.start(), Some(&start));
        prop_assert!(route.len() <= tickets.len() + 1);
    }

    #[test]
    fn prop_format_twice_is_identity(stops in prop::collection::vec(any::<String>(), 0..32)) {
        let once = format(stops.clone());
        prop_assert_eq!(once.first(), stops.last());
        prop_assert_eq!(format(once.into_vec()).into_vec(), stops);
    }
}
