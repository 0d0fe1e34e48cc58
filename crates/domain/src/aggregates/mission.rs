//! Mission aggregate - a GM-run quest with a roster of characters
//!
//! # Invariants
//!
//! - The roster never holds the same character twice
//! - Members can only be added while the mission is active
//! - Completion happens exactly once and reports the final roster so each
//!   member's character can be tagged with the mission

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::MissionCompletion;
use crate::ids::{CharacterId, MissionId};
use crate::value_objects::{CharacterName, MissionName};

/// Lifecycle of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Active,
    Complete,
}

/// One (player, character) entry on a mission roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionMember {
    pub player_id: String,
    pub character_id: CharacterId,
    pub character_name: CharacterName,
}

/// A quest run by a GM for a roster of characters.
///
/// # Example
///
/// ```
/// use questkeeper_domain::aggregates::mission::Mission;
/// use questkeeper_domain::value_objects::MissionName;
///
/// let name = MissionName::new("The Sunken Vault").unwrap();
/// let mission = Mission::new("gm123", "guild456", name);
/// assert!(mission.is_active());
/// assert!(mission.roster().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    id: MissionId,
    guild_id: String, // Platform guild the mission belongs to
    gm_id: String,    // Platform user ID of the game master

    name: MissionName,
    status: MissionStatus,
    roster: Vec<MissionMember>,
}

impl Mission {
    /// Create a new active mission with an empty roster.
    pub fn new(
        gm_id: impl Into<String>,
        guild_id: impl Into<String>,
        name: MissionName,
    ) -> Self {
        Self {
            id: MissionId::new(),
            guild_id: guild_id.into(),
            gm_id: gm_id.into(),
            name,
            status: MissionStatus::Active,
            roster: Vec::new(),
        }
    }

    pub fn id(&self) -> MissionId {
        self.id
    }

    pub fn guild_id(&self) -> &str {
        &self.guild_id
    }

    pub fn gm_id(&self) -> &str {
        &self.gm_id
    }

    pub fn name(&self) -> &MissionName {
        &self.name
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::Active
    }

    pub fn roster(&self) -> &[MissionMember] {
        &self.roster
    }

    /// Whether the given user runs this mission.
    pub fn is_run_by(&self, user_id: &str) -> bool {
        self.gm_id == user_id
    }

    /// Whether a character is on the roster.
    pub fn has_character(&self, character_id: CharacterId) -> bool {
        self.roster.iter().any(|m| m.character_id == character_id)
    }

    /// Add a member to the roster.
    ///
    /// # Errors
    ///
    /// - `DomainError::Constraint` if the mission is not active
    /// - `DomainError::Constraint` if the character is already on the roster
    pub fn add_member(&mut self, member: MissionMember) -> Result<(), DomainError> {
        if !self.is_active() {
            return Err(DomainError::constraint(format!(
                "Mission {} is not active",
                self.name
            )));
        }
        if self.has_character(member.character_id) {
            return Err(DomainError::constraint(format!(
                "Character {} is already on mission {}",
                member.character_name, self.name
            )));
        }
        self.roster.push(member);
        Ok(())
    }

    /// Remove a character from the roster, returning the removed member.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the character is not on the roster.
    pub fn remove_member(
        &mut self,
        character_id: CharacterId,
    ) -> Result<MissionMember, DomainError> {
        let index = self
            .roster
            .iter()
            .position(|m| m.character_id == character_id)
            .ok_or_else(|| DomainError::not_found("MissionMember", character_id.to_string()))?;
        Ok(self.roster.remove(index))
    }

    /// Mark the mission complete, reporting the final roster so the caller
    /// can tag each member's character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the mission is already complete.
    pub fn complete(&mut self) -> Result<MissionCompletion, DomainError> {
        if !self.is_active() {
            return Err(DomainError::constraint(format!(
                "Mission {} is already complete",
                self.name
            )));
        }
        self.status = MissionStatus::Complete;
        Ok(MissionCompletion {
            mission_name: self.name.clone(),
            roster: self.roster.clone(),
        })
    }
}

/// Finds the active mission a character is already committed to, if any.
///
/// A character may be on at most one active mission at a time; callers check
/// this across the guild's missions before adding the character to a roster.
pub fn find_active_with_character(
    missions: &[Mission],
    character_id: CharacterId,
) -> Option<&Mission> {
    missions
        .iter()
        .find(|m| m.is_active() && m.has_character(character_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(name: &str) -> Mission {
        Mission::new("gm1", "guild1", MissionName::new(name).unwrap())
    }

    fn member(player: &str, character: &str) -> MissionMember {
        MissionMember {
            player_id: player.into(),
            character_id: CharacterId::new(),
            character_name: CharacterName::new(character).unwrap(),
        }
    }

    #[test]
    fn test_new_mission_is_active_and_empty() {
        let mission = mission("The Sunken Vault");
        assert!(mission.is_active());
        assert!(mission.roster().is_empty());
        assert!(mission.is_run_by("gm1"));
        assert!(!mission.is_run_by("gm2"));
    }

    #[test]
    fn test_add_and_remove_member() {
        let mut mission = mission("The Sunken Vault");
        let entry = member("player1", "Vex");
        let id = entry.character_id;

        mission.add_member(entry).unwrap();
        assert!(mission.has_character(id));

        let removed = mission.remove_member(id).unwrap();
        assert_eq!(removed.character_name.as_str(), "Vex");
        assert!(!mission.has_character(id));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let mut mission = mission("The Sunken Vault");
        let entry = member("player1", "Vex");
        let duplicate = entry.clone();

        mission.add_member(entry).unwrap();
        let err = mission.add_member(duplicate).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(mission.roster().len(), 1);
    }

    #[test]
    fn test_remove_missing_member() {
        let mut mission = mission("The Sunken Vault");
        let err = mission.remove_member(CharacterId::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_complete_reports_roster_once() {
        let mut mission = mission("The Sunken Vault");
        mission.add_member(member("player1", "Vex")).unwrap();
        mission.add_member(member("player2", "Durnik")).unwrap();

        let completion = mission.complete().unwrap();
        assert_eq!(completion.mission_name.as_str(), "The Sunken Vault");
        assert_eq!(completion.roster.len(), 2);
        assert!(!mission.is_active());

        assert!(mission.complete().is_err());
    }

    #[test]
    fn test_no_additions_after_completion() {
        let mut mission = mission("The Sunken Vault");
        mission.complete().unwrap();
        assert!(mission.add_member(member("player1", "Vex")).is_err());
    }

    #[test]
    fn test_find_active_with_character() {
        let mut first = mission("First");
        let mut second = mission("Second");
        let entry = member("player1", "Vex");
        let id = entry.character_id;

        first.add_member(entry.clone()).unwrap();
        first.complete().unwrap();
        second.add_member(entry).unwrap();

        let missions = vec![first, second];
        let found = find_active_with_character(&missions, id).expect("active mission");
        assert_eq!(found.name().as_str(), "Second");

        assert!(find_active_with_character(&missions, CharacterId::new()).is_none());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&MissionStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }
}
