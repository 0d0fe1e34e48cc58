//! Character-related domain events
//!
//! These types communicate what happened when character state was modified,
//! allowing callers to render or persist the change.

use serde::{Deserialize, Serialize};

use crate::progression::ProgressionResult;

/// Outcome of applying an XP change to a character.
///
/// `delta` is the signed XP applied: positive for awards, negative for
/// removals. `progression` carries the GP delta and resulting level from the
/// experience table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    /// Signed XP applied to the character.
    pub delta: i64,
    /// The character's experience total after the change.
    pub new_total: i64,
    /// GP delta and resulting level.
    pub progression: ProgressionResult,
    /// Downtime days granted alongside the award (0 for removals).
    pub downtime_gained: i64,
}
