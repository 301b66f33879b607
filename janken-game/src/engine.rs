//! Round resolution against a random computer hand, plus session scorekeeping.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::round::{Choice, Outcome, Round};

/// Running win/loss/tie counters for the active play session.
///
/// Held in memory only; persisted aggregates are always re-derived from the
/// round history instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionScore {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl SessionScore {
    /// Rounds played since the session started or was last reset.
    #[must_use]
    pub const fn rounds_played(self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Loss => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Plays rounds against a uniformly random computer hand and keeps the
/// session score.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    rng: SmallRng,
    score: SessionScore,
}

impl MatchEngine {
    /// Engine drawing computer hands from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            score: SessionScore::default(),
        }
    }

    /// Engine with a fixed seed; identical seeds replay identical computer
    /// hands.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            score: SessionScore::default(),
        }
    }

    /// Play one round: draw the computer hand, resolve the outcome, and
    /// bump the matching session counter.
    pub fn play(&mut self, player_choice: Choice) -> Round {
        let computer_choice = self.draw();
        let round = Round::resolve(player_choice, computer_choice);
        self.score.record(round.outcome);
        round
    }

    fn draw(&mut self) -> Choice {
        let idx = self.rng.gen_range(0..Choice::ALL.len());
        Choice::ALL[idx]
    }

    /// Current session counters.
    #[must_use]
    pub const fn score(&self) -> SessionScore {
        self.score
    }

    /// Zero the session counters. Persisted history is untouched.
    pub fn reset(&mut self) {
        self.score = SessionScore::default();
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_sum_to_rounds_played() {
        let mut engine = MatchEngine::with_seed(1337);
        for _ in 0..25 {
            engine.play(Choice::Rock);
        }
        let score = engine.score();
        assert_eq!(score.rounds_played(), 25);
        assert_eq!(
            score.player_wins + score.computer_wins + score.ties,
            25
        );
    }

    #[test]
    fn reset_zeroes_the_session() {
        let mut engine = MatchEngine::with_seed(7);
        engine.play(Choice::Paper);
        engine.play(Choice::Scissors);
        assert_eq!(engine.score().rounds_played(), 2);

        engine.reset();
        assert_eq!(engine.score(), SessionScore::default());
    }

    #[test]
    fn identical_seeds_replay_identical_hands() {
        let mut a = MatchEngine::with_seed(0xACED);
        let mut b = MatchEngine::with_seed(0xACED);
        for _ in 0..50 {
            let left = a.play(Choice::Rock);
            let right = b.play(Choice::Rock);
            assert_eq!(left.computer_choice, right.computer_choice);
            assert_eq!(left.outcome, right.outcome);
        }
    }

    #[test]
    fn outcome_drives_the_matching_counter() {
        let mut engine = MatchEngine::with_seed(42);
        let round = engine.play(Choice::Rock);
        let score = engine.score();
        match round.outcome {
            Outcome::Win => assert_eq!(score.player_wins, 1),
            Outcome::Loss => assert_eq!(score.computer_wins, 1),
            Outcome::Tie => assert_eq!(score.ties, 1),
        }
        assert_eq!(score.rounds_played(), 1);
    }
}
