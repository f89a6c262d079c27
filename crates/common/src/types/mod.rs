use serde::{Deserialize, Serialize};

/// Body of a track request: unordered flight legs and the starting airport.
///
/// Each flight is an `[origin, destination]` pair; anything else fails to
/// decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackRequest {
    pub flights: Vec<[String; 2]>,
    pub source: String,
}

/// Body of a track response: the route as a bare JSON array of stops.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct TrackResponse(pub Vec<String>);

impl From<Vec<String>> for TrackResponse {
    fn from(stops: Vec<String>) -> Self { Self(stops) }
}
