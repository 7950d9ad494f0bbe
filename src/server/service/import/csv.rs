//! Parsing of per-player match stat CSV exports.
//!
//! The header row selects columns by name, so column order does not matter and unknown
//! columns are ignored. `matchid`, `steamid64` and `team` are required. Missing counter
//! columns and empty counter cells read as zero.

use std::collections::HashMap;

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::server::{
    error::import::ImportError, model::stats::StatLine, util::parse::parse_steam_id,
};

const REQUIRED_COLUMNS: [&str; 3] = ["matchid", "steamid64", "team"];

/// Largest value accepted for a single per-match counter.
pub const MAX_COUNTER: i32 = 1_000_000;

/// One valid player row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub match_id: String,
    pub map_number: i32,
    pub steam_id: String,
    pub team: String,
    pub name: String,
    pub line: StatLine,
}

/// Rows that passed validation plus the number of rejected ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    pub rows: Vec<CsvRow>,
    /// Malformed rows. Spectators are not counted.
    pub skipped: u64,
}

#[derive(Debug)]
enum RowOutcome {
    Player(Box<CsvRow>),
    Spectator,
}

/// Column positions resolved from the header row.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, ImportError> {
        let columns: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_ascii_lowercase(), index))
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !columns.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::InvalidCsv(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self(columns))
    }

    fn text<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.0
            .get(name)
            .and_then(|index| record.get(*index))
            .unwrap_or("")
            .trim()
    }

    /// Reads a counter in `0..=MAX_COUNTER`. Missing or empty cells are zero.
    fn counter(&self, record: &StringRecord, name: &str) -> Result<i32, String> {
        let value = self.text(record, name);
        if value.is_empty() {
            return Ok(0);
        }

        match value.parse::<i32>() {
            Ok(parsed) if (0..=MAX_COUNTER).contains(&parsed) => Ok(parsed),
            Ok(parsed) if parsed > MAX_COUNTER => Err(format!(
                "column '{}' exceeds {}: {}",
                name, MAX_COUNTER, parsed
            )),
            _ => Err(format!("column '{}' is not a count: '{}'", name, value)),
        }
    }

    fn row(&self, record: &StringRecord) -> Result<RowOutcome, String> {
        let team = self.text(record, "team");
        let steam_id = self.text(record, "steamid64");

        if team.is_empty() || team.eq_ignore_ascii_case("spectator") || steam_id == "0" {
            return Ok(RowOutcome::Spectator);
        }

        let match_id = self.text(record, "matchid");
        if match_id.is_empty() {
            return Err("empty matchid".to_string());
        }

        let steam_id = parse_steam_id(steam_id)
            .ok_or_else(|| format!("invalid steamid64 '{}'", steam_id))?
            .to_string();

        let name = match self.text(record, "name") {
            "" => steam_id.clone(),
            name => name.to_string(),
        };

        let line = StatLine {
            kills: self.counter(record, "kills")?,
            deaths: self.counter(record, "deaths")?,
            assists: self.counter(record, "assists")?,
            headshots: self.counter(record, "head_shot_kills")?,
            damage: self.counter(record, "damage")?,
            enemy5ks: self.counter(record, "enemy5ks")?,
            enemy4ks: self.counter(record, "enemy4ks")?,
            enemy3ks: self.counter(record, "enemy3ks")?,
            enemy2ks: self.counter(record, "enemy2ks")?,
            utility_count: self.counter(record, "utility_count")?,
            utility_damage: self.counter(record, "utility_damage")?,
            utility_successes: self.counter(record, "utility_successes")?,
            utility_enemies: self.counter(record, "utility_enemies")?,
            flash_count: self.counter(record, "flash_count")?,
            flash_successes: self.counter(record, "flash_successes")?,
            enemies_flashed: self.counter(record, "enemies_flashed")?,
            v1_count: self.counter(record, "v1_count")?,
            v1_wins: self.counter(record, "v1_wins")?,
            v2_count: self.counter(record, "v2_count")?,
            v2_wins: self.counter(record, "v2_wins")?,
            entry_count: self.counter(record, "entry_count")?,
            entry_wins: self.counter(record, "entry_wins")?,
            shots_fired: self.counter(record, "shots_fired_total")?,
            shots_on_target: self.counter(record, "shots_on_target_total")?,
        };

        if line.headshots > line.kills {
            return Err(format!(
                "head_shot_kills {} exceeds kills {}",
                line.headshots, line.kills
            ));
        }

        Ok(RowOutcome::Player(Box::new(CsvRow {
            match_id: match_id.to_string(),
            map_number: self.counter(record, "mapnumber")?,
            steam_id,
            team: team.to_string(),
            name,
            line,
        })))
    }
}

/// Parses CSV text into validated player rows.
///
/// Malformed rows are logged and counted, not fatal. Spectator rows (empty team,
/// team `Spectator` or steamid64 `0`) are dropped silently.
///
/// # Returns
/// - `Ok(ParsedCsv)` - Valid rows in file order and the skipped row count
/// - `Err(ImportError::InvalidCsv)` - Header missing or lacking required columns
pub fn parse(content: &str) -> Result<ParsedCsv, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let header = reader
        .headers()
        .map_err(|err| ImportError::InvalidCsv(err.to_string()))?
        .clone();
    let columns = Columns::from_header(&header)?;

    let mut parsed = ParsedCsv::default();
    for (index, record) in reader.records().enumerate() {
        // header is line 1
        let line_number = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("Skipping unreadable CSV line {}: {}", line_number, err);
                parsed.skipped += 1;
                continue;
            }
        };

        match columns.row(&record) {
            Ok(RowOutcome::Player(row)) => parsed.rows.push(*row),
            Ok(RowOutcome::Spectator) => {
                tracing::debug!("Ignoring spectator row on CSV line {}", line_number);
            }
            Err(reason) => {
                tracing::warn!("Skipping CSV line {}: {}", line_number, reason);
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}
