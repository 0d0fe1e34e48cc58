//! Questkeeper domain layer.
//!
//! Pure bookkeeping rules for tabletop-RPG campaigns: experience progression,
//! characters, per-player XP banks, and mission rosters. No I/O lives here;
//! chat commands and persistence sit outside and call into these types.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod progression;
pub mod value_objects;

pub use aggregates::{
    find_active_with_character, Character, Mission, MissionMember, MissionStatus, PlayerProfile,
};

pub use error::DomainError;
pub use events::{MissionCompletion, XpAward};

// Re-export progression engine essentials
pub use progression::{
    compute_progression, cumulative_gp_at, level_at, ProgressionResult, ProgressionStep,
    MAX_LEVEL, MIN_LEVEL,
};

// Re-export ID types
pub use ids::{CharacterId, MissionId, ProfileId};

// Re-export value objects
pub use value_objects::{
    CharacterName, DowntimeActivity, DowntimePool, MissionName, DOWNTIME_DAYS_PER_XP,
};
