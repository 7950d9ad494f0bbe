//! Match identity, team, score, winner and MVP selection for an import.
//!
//! Pure functions over parsed rows, independent of the database.

use std::collections::HashSet;

use super::csv::CsvRow;
use crate::server::model::stats::{select_mvp, StatLine};

/// Kills counted as one round won when no explicit score is given.
const KILLS_PER_ROUND: f64 = 5.0;

/// Everything needed to persist one imported match.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPlan {
    pub external_match_id: String,
    pub map_number: i32,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winner_team: Option<String>,
    /// Rows belonging to the match, in file order.
    pub rows: Vec<CsvRow>,
    /// Index into `rows` of the MVP.
    pub mvp_index: Option<usize>,
    /// Rows rejected while planning. Does not include CSV-level skips.
    pub skipped: u64,
}

impl ImportPlan {
    /// Whether the winner, when set, is one of the two teams of the match.
    pub fn winner_is_a_team(&self) -> bool {
        match self.winner_team.as_deref() {
            Some(winner) => {
                !winner.is_empty() && (winner == self.team1_name || winner == self.team2_name)
            }
            None => true,
        }
    }
}

/// Explicit values an admin may pass alongside the CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultOverride {
    pub winner_team: Option<String>,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
}

/// Builds the import plan from valid CSV rows.
///
/// The first row fixes the match identity and the first two distinct team names
/// become team1 and team2. Rows of another match, of a third team, or repeating a
/// SteamID already seen are dropped and counted as skipped.
///
/// Returns `None` when `rows` is empty.
pub fn plan(rows: Vec<CsvRow>, result: &ResultOverride) -> Option<ImportPlan> {
    let first = rows.first()?;
    let external_match_id = first.match_id.clone();
    let map_number = first.map_number;

    let mut teams: Vec<String> = Vec::with_capacity(2);
    let mut seen_players = HashSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        if row.match_id != external_match_id || row.map_number != map_number {
            tracing::warn!(
                "Skipping row of {} map {}: import is for {} map {}",
                row.match_id,
                row.map_number,
                external_match_id,
                map_number
            );
            skipped += 1;
            continue;
        }

        if !teams.contains(&row.team) {
            if teams.len() == 2 {
                tracing::warn!("Skipping player {} of third team '{}'", row.steam_id, row.team);
                skipped += 1;
                continue;
            }
            teams.push(row.team.clone());
        }

        if !seen_players.insert(row.steam_id.clone()) {
            tracing::warn!("Skipping repeated row for player {}", row.steam_id);
            skipped += 1;
            continue;
        }

        kept.push(row);
    }

    let mut teams = teams.into_iter();
    let team1_name = teams.next().unwrap_or_default();
    let team2_name = teams.next().unwrap_or_default();

    let (team1_score, team2_score) = match (result.team1_score, result.team2_score) {
        (Some(team1), Some(team2)) => (team1, team2),
        _ => (
            score_from_kills(&kept, &team1_name),
            score_from_kills(&kept, &team2_name),
        ),
    };

    let winner_team = result.winner_team.clone().or_else(|| {
        if team1_score > team2_score {
            Some(team1_name.clone())
        } else if team2_score > team1_score {
            Some(team2_name.clone())
        } else {
            None
        }
    });

    let lines: Vec<StatLine> = kept.iter().map(|row| row.line.clone()).collect();
    let mvp_index = select_mvp(&lines);

    Some(ImportPlan {
        external_match_id,
        map_number,
        team1_name,
        team2_name,
        team1_score,
        team2_score,
        winner_team,
        rows: kept,
        mvp_index,
        skipped,
    })
}

/// `round(team kills / 5)`.
fn score_from_kills(rows: &[CsvRow], team: &str) -> i32 {
    let kills: i64 = rows
        .iter()
        .filter(|row| row.team == team)
        .map(|row| row.line.kills as i64)
        .sum();

    (kills as f64 / KILLS_PER_ROUND).round() as i32
}
