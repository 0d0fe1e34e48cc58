//! Value objects - Immutable objects defined by their attributes

mod downtime;
mod names;

pub use downtime::{DowntimeActivity, DowntimePool, DOWNTIME_DAYS_PER_XP};
pub use names::{CharacterName, MissionName};
