//! Downtime pool and activity history
//!
//! Characters accrue downtime days alongside XP (two days per XP point
//! awarded) and spend them on between-session activities. Every spend is
//! recorded so players can audit where the days went.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Downtime days granted per XP point awarded.
pub const DOWNTIME_DAYS_PER_XP: i64 = 2;

/// A dated record of spent downtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimeActivity {
    pub date: NaiveDate,
    pub days: i64,
    /// What the character did, if the player said.
    pub activity: Option<String>,
}

impl fmt::Display for DowntimeActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.activity {
            Some(activity) => write!(
                f,
                "{}: Spent {} days on {}",
                self.date.format("%Y-%m-%d"),
                self.days,
                activity
            ),
            None => write!(f, "{}: Spent {} days", self.date.format("%Y-%m-%d"), self.days),
        }
    }
}

/// A character's downtime balance plus its spend history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimePool {
    days: i64,
    activities: Vec<DowntimeActivity>,
}

impl DowntimePool {
    /// An empty pool with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Days currently available.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// The spend history, oldest first.
    pub fn activities(&self) -> &[DowntimeActivity] {
        &self.activities
    }

    /// Add days to the pool.
    pub fn add(&mut self, days: i64) {
        self.days += days;
    }

    /// Spend days from the pool, recording a dated activity.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if `days` is not positive
    /// - `DomainError::InsufficientDowntime` if the pool is short
    pub fn spend(
        &mut self,
        days: i64,
        activity: Option<String>,
        on: NaiveDate,
    ) -> Result<&DowntimeActivity, DomainError> {
        if days <= 0 {
            return Err(DomainError::validation(
                "Downtime spend must be a positive number of days",
            ));
        }
        if self.days < days {
            return Err(DomainError::InsufficientDowntime {
                available: self.days,
                requested: days,
            });
        }
        self.days -= days;
        self.activities.push(DowntimeActivity {
            date: on,
            days,
            activity,
        });
        // Just pushed, so last() is always present.
        Ok(&self.activities[self.activities.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_and_spend() {
        let mut pool = DowntimePool::new();
        pool.add(10);
        pool.spend(4, Some("crafting".into()), date("2024-03-01"))
            .unwrap();
        assert_eq!(pool.days(), 6);
        assert_eq!(pool.activities().len(), 1);
    }

    #[test]
    fn test_spend_more_than_available() {
        let mut pool = DowntimePool::new();
        pool.add(3);
        let err = pool.spend(5, None, date("2024-03-01")).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientDowntime {
                available: 3,
                requested: 5,
            }
        );
        // Balance and history untouched on failure
        assert_eq!(pool.days(), 3);
        assert!(pool.activities().is_empty());
    }

    #[test]
    fn test_spend_rejects_non_positive_days() {
        let mut pool = DowntimePool::new();
        pool.add(3);
        assert!(pool.spend(0, None, date("2024-03-01")).is_err());
        assert!(pool.spend(-2, None, date("2024-03-01")).is_err());
    }

    #[test]
    fn test_activity_record_formatting() {
        let mut pool = DowntimePool::new();
        pool.add(10);
        let record = pool
            .spend(4, Some("forging a sword".into()), date("2024-03-05"))
            .unwrap();
        assert_eq!(record.to_string(), "2024-03-05: Spent 4 days on forging a sword");

        let record = pool.spend(2, None, date("2024-03-06")).unwrap();
        assert_eq!(record.to_string(), "2024-03-06: Spent 2 days");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut pool = DowntimePool::new();
        pool.add(8);
        pool.spend(3, Some("research".into()), date("2024-04-01"))
            .unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        let back: DowntimePool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
