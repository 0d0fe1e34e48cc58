//! Mission-related domain events

use serde::{Deserialize, Serialize};

use crate::aggregates::mission::MissionMember;
use crate::value_objects::MissionName;

/// Outcome of completing a mission.
///
/// Carries the final roster so the caller can tag each member's character
/// with the completed mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCompletion {
    pub mission_name: MissionName,
    pub roster: Vec<MissionMember>,
}
