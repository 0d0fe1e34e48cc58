//! Domain events - outcomes returned from aggregate mutations

mod character_events;
mod mission_events;

pub use character_events::XpAward;
pub use mission_events::MissionCompletion;
