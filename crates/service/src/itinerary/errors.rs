use thiserror::Error;

/// Rejections raised when strict validation or input bounds are enabled.
///
/// Offending nodes are carried in their `Display` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    #[error("too many tickets: {count} exceeds limit {limit}")]
    TooManyTickets { count: usize, limit: usize },
    #[error("no itinerary from start: node {node} has out-in degree {surplus}")]
    Unbalanced { node: String, surplus: i64 },
    #[error("itinerary incomplete: covered {covered} of {total} tickets")]
    Incomplete { covered: usize, total: usize },
}

impl ItineraryError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ItineraryError::TooManyTickets { .. } => 2001,
            ItineraryError::Unbalanced { .. } => 2101,
            ItineraryError::Incomplete { .. } => 2102,
        }
    }
}
