use super::domain::Itinerary;

/// Turn a post-order buffer into a forward-time itinerary.
pub fn format<N>(mut post_order: Vec<N>) -> Itinerary<N> {
    post_order.reverse();
    Itinerary::from(post_order)
}
