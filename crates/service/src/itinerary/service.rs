use std::fmt::Display;

use common::types::TrackRequest;
use tracing::{debug, info, instrument, warn};

use super::domain::{Itinerary, Ticket};
use super::errors::ItineraryError;
use super::feasibility;
use crate::errors::ServiceError;

/// Itinerary service configuration
#[derive(Debug, Clone, Default)]
pub struct ItineraryConfig {
    /// Reject inputs without an Eulerian path from the start instead of
    /// returning a partial route.
    pub strict: bool,
    /// Upper bound on tickets per request; `None` means unbounded.
    pub max_tickets: Option<usize>,
}

/// Itinerary reconstruction independent of any transport
#[derive(Debug, Clone, Default)]
pub struct ItineraryService {
    cfg: ItineraryConfig,
}

impl ItineraryService {
    pub fn new(cfg: ItineraryConfig) -> Self { Self { cfg } }

    pub fn config(&self) -> &ItineraryConfig { &self.cfg }

    /// Reconstruct the itinerary, applying the configured bounds and checks.
    ///
    /// Lenient mode still returns a route when the degree check fails, and
    /// that route may contain a leg no ticket covers. Both that case and a
    /// short route are logged as warnings.
    ///
    /// # Examples
    /// ```
    /// use service::itinerary::{ItineraryConfig, ItineraryService, Ticket};
    /// let svc = ItineraryService::new(ItineraryConfig { strict: true, max_tickets: None });
    /// let tickets = vec![Ticket::new("JFK", "ATL"), Ticket::new("ATL", "JFK")];
    /// let route = svc.compute(&tickets, "JFK").unwrap();
    /// assert_eq!(route.into_vec(), vec!["JFK", "ATL", "JFK"]);
    /// ```
    #[instrument(skip(self, tickets, start), fields(tickets = tickets.len(), strict = self.cfg.strict, start = %start))]
    pub fn compute<N>(&self, tickets: &[Ticket<N>], start: N) -> Result<Itinerary<N>, ItineraryError>
    where
        N: Ord + Clone + Display,
    {
        if let Some(limit) = self.cfg.max_tickets {
            if tickets.len() > limit {
                warn!(count = tickets.len(), limit, "ticket_limit_exceeded");
                return Err(ItineraryError::TooManyTickets { count: tickets.len(), limit });
            }
        }
        if self.cfg.strict {
            feasibility::check_balance(tickets, &start)?;
        } else if let Err(e) = feasibility::check_balance(tickets, &start) {
            warn!(code = e.code(), error = %e, "itinerary_unbalanced");
        }

        let itinerary = super::compute_itinerary(tickets, start);

        if self.cfg.strict {
            feasibility::check_coverage(&itinerary, tickets.len())?;
        } else if !itinerary.covers(tickets.len()) {
            warn!(
                covered = itinerary.len().saturating_sub(1),
                total = tickets.len(),
                "itinerary_incomplete"
            );
        }
        info!(stops = itinerary.len(), "itinerary_computed");
        Ok(itinerary)
    }

    /// Handle a decoded track request.
    ///
    /// # Examples
    /// ```
    /// use service::itinerary::{service::decode_request, ItineraryService};
    /// let req = decode_request(r#"{"flights":[["SFO","ATL"],["ATL","SFO"]],"source":"ATL"}"#).unwrap();
    /// let route = ItineraryService::default().track(req).unwrap();
    /// assert_eq!(route.into_vec(), vec!["ATL", "SFO", "ATL"]);
    /// ```
    pub fn track(&self, request: TrackRequest) -> Result<Itinerary<String>, ServiceError> {
        let tickets: Vec<Ticket<String>> = request.flights.into_iter().map(Ticket::from).collect();
        debug!(tickets = tickets.len(), source = %request.source, "track_request");
        Ok(self.compute(&tickets, request.source)?)
    }
}

/// Decode a JSON track request body.
pub fn decode_request(body: &str) -> Result<TrackRequest, ServiceError> {
    let request: TrackRequest = serde_json::from_str(body)
        .map_err(|e| ServiceError::Validation(format!("invalid track request: {e}")))?;
    if request.source.trim().is_empty() {
        return Err(ServiceError::Validation("source must not be empty".into()));
    }
    Ok(request)
}
