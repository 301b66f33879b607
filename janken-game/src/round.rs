//! Hands, outcomes, and the round record they resolve into.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three playable hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All hands in canonical order. Ties in rankings break toward the
    /// earlier entry.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The hand this one defeats under the fixed cyclic relation.
    #[must_use]
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// Resolve this hand against an opposing one, seen from this side.
    #[must_use]
    pub const fn against(self, other: Self) -> Outcome {
        match (self, other) {
            (Self::Rock, Self::Rock)
            | (Self::Paper, Self::Paper)
            | (Self::Scissors, Self::Scissors) => Outcome::Tie,
            (Self::Rock, Self::Scissors)
            | (Self::Paper, Self::Rock)
            | (Self::Scissors, Self::Paper) => Outcome::Win,
            _ => Outcome::Loss,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

/// Error raised when text input does not name a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice {input:?} (expected rock, paper, or scissors)")]
pub struct InvalidChoice {
    pub input: String,
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(InvalidChoice {
                input: s.to_string(),
            }),
        }
    }
}

/// Result of a round, always from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side of the table.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Tie => Self::Tie,
        }
    }

    /// Verdict line for display.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Loss => "Computer wins!",
            Self::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// Immutable record of one played round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub timestamp: DateTime<Local>,
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
}

impl Round {
    /// Resolve a round between the two hands, stamped with the current wall
    /// clock at whole-second precision.
    #[must_use]
    pub fn resolve(player_choice: Choice, computer_choice: Choice) -> Self {
        Self::at(Local::now(), player_choice, computer_choice)
    }

    /// Resolve a round at an explicit timestamp.
    #[must_use]
    pub fn at(timestamp: DateTime<Local>, player_choice: Choice, computer_choice: Choice) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(0),
            player_choice,
            computer_choice,
            outcome: player_choice.against(computer_choice),
        }
    }
}
