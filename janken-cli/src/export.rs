//! CSV export of the stored round history.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use janken_game::Round;

const HEADER: [&str; 4] = ["timestamp", "player_choice", "computer_choice", "outcome"];

/// Write the full history to `destination` as CSV, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if the destination cannot be written.
pub fn write_csv(rounds: &[Round], destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(destination, build_csv(rounds))
        .with_context(|| format!("writing {}", destination.display()))
}

fn build_csv(rounds: &[Round]) -> String {
    let mut csv = String::new();
    csv.push_str(&HEADER.join(","));
    csv.push('\n');
    for round in rounds {
        let fields = [
            round.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            round.player_choice.to_string(),
            round.computer_choice.to_string(),
            round.outcome.to_string(),
        ];
        let line = fields
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
