//! Player profile aggregate - per-player banked XP
//!
//! Players bank XP they have not yet committed to a character, then transfer
//! it onto a character of theirs. Transfers are the only guarded withdrawal:
//! the original bookkeeping lets plain removals drive the balance negative,
//! so `withdraw` mirrors that, while `transfer_to` refuses to overdraw.

use serde::{Deserialize, Serialize};

use crate::aggregates::character::Character;
use crate::error::DomainError;
use crate::events::XpAward;
use crate::ids::ProfileId;
use crate::value_objects::MissionName;

/// A player's profile within a guild, holding their banked XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    id: ProfileId,
    user_id: String,  // Platform user ID
    guild_id: String, // Platform guild the profile belongs to

    banked_xp: i64,

    // Names of missions credited to this profile
    missions: Vec<MissionName>,
}

impl PlayerProfile {
    /// Create a profile with an empty bank.
    pub fn new(user_id: impl Into<String>, guild_id: impl Into<String>) -> Self {
        Self {
            id: ProfileId::new(),
            user_id: user_id.into(),
            guild_id: guild_id.into(),
            banked_xp: 0,
            missions: Vec::new(),
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn guild_id(&self) -> &str {
        &self.guild_id
    }

    pub fn banked_xp(&self) -> i64 {
        self.banked_xp
    }

    /// Missions credited to this profile.
    pub fn missions(&self) -> &[MissionName] {
        &self.missions
    }

    /// Bank XP. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is not positive.
    pub fn deposit(&mut self, amount: i64) -> Result<i64, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("XP deposit must be positive"));
        }
        self.banked_xp += amount;
        Ok(self.banked_xp)
    }

    /// Remove banked XP. Returns the new balance, which may go negative;
    /// only transfers enforce sufficient funds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is not positive.
    pub fn withdraw(&mut self, amount: i64) -> Result<i64, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("XP withdrawal must be positive"));
        }
        self.banked_xp -= amount;
        Ok(self.banked_xp)
    }

    /// Move banked XP onto one of this player's characters. The character is
    /// awarded the XP (earning GP, level, and downtime as usual) and the bank
    /// is debited.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if `amount` is not positive
    /// - `DomainError::InsufficientBalance` if the bank holds less than `amount`
    /// - `DomainError::Constraint` if the character belongs to another player
    pub fn transfer_to(
        &mut self,
        character: &mut Character,
        amount: i64,
    ) -> Result<XpAward, DomainError> {
        if amount <= 0 {
            return Err(DomainError::validation("XP transfer must be positive"));
        }
        if self.banked_xp < amount {
            return Err(DomainError::InsufficientBalance {
                available: self.banked_xp,
                requested: amount,
            });
        }
        if !character.is_owned_by(&self.user_id) {
            return Err(DomainError::constraint(
                "Cannot transfer XP to a character owned by another player",
            ));
        }
        let award = character.award_xp(amount)?;
        self.banked_xp -= amount;
        Ok(award)
    }

    /// Credit a mission to this profile. Duplicate credits are a no-op;
    /// returns whether the tag was added.
    pub fn tag_mission(&mut self, mission: MissionName) -> bool {
        if self.missions.contains(&mission) {
            return false;
        }
        self.missions.push(mission);
        true
    }

    /// Remove a mission credit; returns whether it was present.
    pub fn untag_mission(&mut self, mission: &MissionName) -> bool {
        let before = self.missions.len();
        self.missions.retain(|m| m != mission);
        self.missions.len() != before
    }
}
