//! Console rendering for scores, summaries, history, and the trend line.

use colored::{ColoredString, Colorize};

use janken_game::{Choice, Outcome, Round, SessionScore, Summary, trend};

/// Games required before the best-hand recommendation is shown.
const BEST_CHOICE_MIN_GAMES: u32 = 5;

const SPARK_BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Running session line, matching the in-game score display.
#[must_use]
pub fn score_line(score: SessionScore) -> String {
    format!(
        "Player: {} - Computer: {} - Ties: {}",
        score.player_wins, score.computer_wins, score.ties
    )
}

pub fn print_round(round: &Round, score: SessionScore) {
    println!("You chose: {}", round.player_choice.to_string().bold());
    println!("Computer chose: {}", round.computer_choice.to_string().bold());
    println!("{}", verdict_colored(round.outcome));
    println!("{}", score_line(score));
}

pub fn print_summary(summary: &Summary) {
    if summary.total_games == 0 {
        println!("No game data available yet. Play some games first!");
        return;
    }

    println!("{}", "Game Statistics".bright_cyan().bold());
    println!("Total games played: {}", summary.total_games.to_string().bold());
    println!(
        "Win ratio:  {}",
        percent(summary.win_rate()).green()
    );
    println!(
        "Loss ratio: {}",
        percent(summary.loss_rate()).red()
    );
    println!(
        "Tie ratio:  {}",
        percent(summary.tie_rate()).blue()
    );

    println!();
    println!("{}", "Per-hand performance".bold());
    for choice in Choice::ALL {
        let stats = summary.per_choice(choice);
        println!(
            "  {:<9} {:>4} played, {:>4} won, {} win rate",
            choice.to_string(),
            stats.games_played,
            stats.wins,
            percent(stats.win_rate())
        );
    }

    println!();
    match summary.best_choice() {
        Some(best) if summary.total_games > BEST_CHOICE_MIN_GAMES => {
            println!("Best hand so far: {}", best.to_string().green().bold());
        }
        Some(_) | None => println!("Best hand so far: play more rounds!"),
    }
}

/// Cumulative win rate over the whole history as a sparkline.
pub fn print_trend(history: &[Round]) {
    if history.is_empty() {
        return;
    }
    let line: String = trend(history).map(spark).collect();
    println!();
    println!("Win-rate trend: {line}");
}

/// Recent rounds, newest first.
pub fn print_history(rounds: &[Round], limit: usize) {
    if rounds.is_empty() {
        println!("No game history available yet. Play some games first!");
        return;
    }

    println!("{}", "Game History".bright_cyan().bold());
    let shown = rounds.len().min(limit);
    println!("Recent games (last {shown} of {}):", rounds.len());
    for round in rounds.iter().rev().take(limit) {
        println!(
            "  {}  {:>8} vs {:<8}  {}",
            round.timestamp.format("%Y-%m-%d %H:%M:%S"),
            round.player_choice.to_string(),
            round.computer_choice.to_string(),
            outcome_colored(round.outcome)
        );
    }
}

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn spark(rate: f64) -> char {
    let idx = (rate * 7.0).round().clamp(0.0, 7.0) as usize;
    SPARK_BLOCKS[idx]
}

fn outcome_colored(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Win => "win".green(),
        Outcome::Loss => "loss".red(),
        Outcome::Tie => "tie".blue(),
    }
}

fn verdict_colored(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Win => outcome.verdict().green().bold(),
        Outcome::Loss => outcome.verdict().red().bold(),
        Outcome::Tie => outcome.verdict().blue().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_line_matches_display_format() {
        let score = SessionScore {
            player_wins: 3,
            computer_wins: 1,
            ties: 2,
        };
        assert_eq!(score_line(score), "Player: 3 - Computer: 1 - Ties: 2");
    }

    #[test]
    fn spark_maps_rates_onto_blocks() {
        assert_eq!(spark(0.0), '▁');
        assert_eq!(spark(1.0), '█');
        assert_eq!(spark(0.5), '▅');
    }

    #[test]
    fn percent_renders_one_decimal() {
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(2.0 / 3.0), "66.7%");
    }
}
