//! Records for the game of Pig.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Die {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Die {
    pub const ALL: [Die; 6] = [Die::One, Die::Two, Die::Three, Die::Four, Die::Five, Die::Six];

    /// Pip count, 1 through 6.
    pub fn value(self) -> u32 {
        match self {
            Die::One => 1,
            Die::Two => 2,
            Die::Three => 3,
            Die::Four => 4,
            Die::Five => 5,
            Die::Six => 6,
        }
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Die {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerId::One => "One",
            PlayerId::Two => "Two",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    total_points: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            total_points: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// `"Player One"`
    pub fn name(&self) -> String {
        format!("Player {}", self.id.as_str())
    }

    pub fn update_score(&mut self, points: u32) {
        self.total_points += points;
    }

    pub fn reset_total_points(&mut self) {
        self.total_points = 0;
    }
}

/// The die face shown for `duration` during a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieChange {
    pub die: Die,
    pub duration: Duration,
}

/// A roll: the sequence of faces shown before the die settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub total_duration: Duration,
    pub die_changes: Vec<DieChange>,
}

impl Roll {
    pub fn new(total_duration: Duration, die_changes: Vec<DieChange>) -> Self {
        Self {
            total_duration,
            die_changes,
        }
    }

    /// `changes` random faces sharing `total_duration` evenly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, changes: u32, total_duration: Duration) -> Self {
        let duration = total_duration.checked_div(changes).unwrap_or_default();
        let die_changes = (0..changes)
            .map(|_| DieChange {
                die: Die::roll(rng),
                duration,
            })
            .collect();
        Self::new(total_duration, die_changes)
    }

    /// The face the die lands on.
    pub fn outcome(&self) -> Option<Die> {
        self.die_changes.last().map(|change| change.die)
    }
}
