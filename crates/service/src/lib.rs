//! Service layer for the flight tracker.
//! - Rebuilds itineraries from unordered tickets (`itinerary`).
//! - Decodes track requests and maps failures to stable error codes.
//! - Stays free of any transport; binaries wire it to their I/O.

pub mod errors;
pub mod itinerary;
