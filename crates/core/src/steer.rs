//! Heading changes requested by the player.

use crate::types::Direction;

/// Resolve a requested heading against the current one.
///
/// A request pointing straight back is discarded (it would run the head into
/// the neck); anything else replaces the heading. Requests are not queued, so
/// the last accepted request before a step is the one that counts.
pub fn route(current: Direction, requested: Direction) -> Option<Direction> {
    if current.is_opposite(requested) {
        None
    } else {
        Some(requested)
    }
}
