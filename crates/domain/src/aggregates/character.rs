//! Character aggregate - a player's campaign character
//!
//! # Invariants
//!
//! - `name` is always non-empty and <= 200 characters (enforced by `CharacterName`)
//! - `level` always matches the experience table row for `experience`
//! - Downtime accrues at two days per XP point awarded; removals grant none
//! - The mission tag list never holds duplicates

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::XpAward;
use crate::ids::CharacterId;
use crate::progression::{compute_progression, MIN_LEVEL};
use crate::value_objects::{
    CharacterName, DowntimeActivity, DowntimePool, MissionName, DOWNTIME_DAYS_PER_XP,
};

/// A campaign character owned by a player.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use questkeeper_domain::aggregates::character::Character;
/// use questkeeper_domain::value_objects::CharacterName;
///
/// let name = CharacterName::new("Vex Thornwood").unwrap();
/// let mut character = Character::new("user123", "guild456", name, Utc::now());
/// assert_eq!(character.level(), 3);
///
/// let award = character.award_xp(8).unwrap();
/// assert_eq!(award.progression.gp_gained, 840);
/// assert_eq!(character.level(), 6);
/// assert_eq!(character.downtime().days(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    // Identity
    id: CharacterId,
    owner_id: String, // Platform user ID of the owning player
    guild_id: String, // Platform guild the character belongs to

    name: CharacterName,

    // Progression state
    experience: i64,
    level: u8,
    downtime: DowntimePool,

    // Names of completed missions this character took part in
    missions: Vec<MissionName>,

    // Metadata
    created_at: DateTime<Utc>,
}

impl Character {
    /// Create a new character at the starting level with no XP or downtime.
    pub fn new(
        owner_id: impl Into<String>,
        guild_id: impl Into<String>,
        name: CharacterName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            owner_id: owner_id.into(),
            guild_id: guild_id.into(),
            name,
            experience: 0,
            level: MIN_LEVEL,
            downtime: DowntimePool::new(),
            missions: Vec::new(),
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn guild_id(&self) -> &str {
        &self.guild_id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn downtime(&self) -> &DowntimePool {
        &self.downtime
    }

    /// Completed missions this character took part in.
    pub fn missions(&self) -> &[MissionName] {
        &self.missions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this character belongs to the given player.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    // =========================================================================
    // XP
    // =========================================================================

    /// Award XP, updating level from the experience table and granting
    /// downtime at two days per point.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is not positive.
    pub fn award_xp(&mut self, amount: i64) -> Result<XpAward, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("XP award must be positive"));
        }
        Ok(self.apply_xp_delta(amount))
    }

    /// Remove XP, updating level from the experience table. The GP delta in
    /// the returned award is negative. No downtime is granted or clawed back.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is not positive.
    pub fn deduct_xp(&mut self, amount: i64) -> Result<XpAward, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("XP removal must be positive"));
        }
        Ok(self.apply_xp_delta(-amount))
    }

    fn apply_xp_delta(&mut self, delta: i64) -> XpAward {
        let old_xp = self.experience;
        let new_xp = old_xp + delta;
        let progression = compute_progression(old_xp, new_xp);

        let downtime_gained = if delta > 0 {
            delta * DOWNTIME_DAYS_PER_XP
        } else {
            0
        };
        self.downtime.add(downtime_gained);

        self.experience = new_xp;
        self.level = progression.new_level;

        XpAward {
            delta,
            new_total: new_xp,
            progression,
            downtime_gained,
        }
    }

    // =========================================================================
    // Downtime
    // =========================================================================

    /// Add downtime days outside of an XP award.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `days` is not positive.
    pub fn add_downtime(&mut self, days: i64) -> Result<i64, DomainError> {
        if days <= 0 {
            return Err(DomainError::validation("Downtime days must be positive"));
        }
        self.downtime.add(days);
        Ok(self.downtime.days())
    }

    /// Spend downtime on an activity, recording it in the character's history.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if `days` is not positive
    /// - `DomainError::InsufficientDowntime` if the pool is short
    pub fn spend_downtime(
        &mut self,
        days: i64,
        activity: Option<String>,
        on: NaiveDate,
    ) -> Result<&DowntimeActivity, DomainError> {
        self.downtime.spend(days, activity, on)
    }

    // =========================================================================
    // Mission tags
    // =========================================================================

    /// Tag this character with a completed mission. Tagging the same mission
    /// twice is a no-op; returns whether the tag was added.
    pub fn tag_mission(&mut self, mission: MissionName) -> bool {
        if self.missions.contains(&mission) {
            return false;
        }
        self.missions.push(mission);
        true
    }

    /// Remove a mission tag; returns whether it was present.
    pub fn untag_mission(&mut self, mission: &MissionName) -> bool {
        let before = self.missions.len();
        self.missions.retain(|m| m != mission);
        self.missions.len() != before
    }
}
