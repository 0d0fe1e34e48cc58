//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations

pub mod character;
pub mod mission;
pub mod profile;

pub use character::Character;
pub use mission::{find_active_with_character, Mission, MissionMember, MissionStatus};
pub use profile::PlayerProfile;
