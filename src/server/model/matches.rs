//! Match domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::matches::{
        ImportMatchDto, ImportResultDto, MatchDetailDto, MatchDto, MatchStatsDto,
        PaginatedMatchesDto,
    },
    server::model::stats::StatLine,
};

/// One imported map.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub external_match_id: String,
    pub map_number: i32,
    pub map: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winner_team: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            external_match_id: self.external_match_id,
            map_number: self.map_number,
            map: self.map,
            team1_name: self.team1_name,
            team2_name: self.team2_name,
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            winner_team: self.winner_team,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::matches::Model) -> Self {
        Self {
            id: entity.id,
            external_match_id: entity.external_match_id,
            map_number: entity.map_number,
            map: entity.map,
            team1_name: entity.team1_name,
            team2_name: entity.team2_name,
            team1_score: entity.team1_score,
            team2_score: entity.team2_score,
            winner_team: entity.winner_team,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParam {
    pub external_match_id: String,
    pub map_number: i32,
    pub map: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winner_team: Option<String>,
}

/// A player's stat line in a match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStats {
    pub id: i32,
    pub match_id: i32,
    pub user_id: i32,
    pub player_name: Option<String>,
    pub team: String,
    pub line: StatLine,
    pub is_mvp: bool,
}

impl MatchStats {
    pub fn from_entity(entity: entity::match_stats::Model, player_name: Option<String>) -> Self {
        Self {
            line: StatLine::from_entity(&entity),
            id: entity.id,
            match_id: entity.match_id,
            user_id: entity.user_id,
            player_name,
            team: entity.team,
            is_mvp: entity.is_mvp,
        }
    }

    pub fn into_dto(self) -> MatchStatsDto {
        let line = self.line;

        MatchStatsDto {
            id: self.id,
            match_id: self.match_id,
            user_id: self.user_id,
            player_name: self.player_name,
            team: self.team,
            kills: line.kills,
            deaths: line.deaths,
            assists: line.assists,
            headshots: line.headshots,
            damage: line.damage,
            enemy5ks: line.enemy5ks,
            enemy4ks: line.enemy4ks,
            enemy3ks: line.enemy3ks,
            enemy2ks: line.enemy2ks,
            utility_count: line.utility_count,
            utility_damage: line.utility_damage,
            utility_successes: line.utility_successes,
            utility_enemies: line.utility_enemies,
            flash_count: line.flash_count,
            flash_successes: line.flash_successes,
            enemies_flashed: line.enemies_flashed,
            v1_count: line.v1_count,
            v1_wins: line.v1_wins,
            v2_count: line.v2_count,
            v2_wins: line.v2_wins,
            entry_count: line.entry_count,
            entry_wins: line.entry_wins,
            shots_fired: line.shots_fired,
            shots_on_target: line.shots_on_target,
            is_mvp: self.is_mvp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchStatsParam {
    pub user_id: i32,
    pub team: String,
    pub line: StatLine,
    pub is_mvp: bool,
}

/// A match with every player's stat line.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub game: Match,
    pub players: Vec<MatchStats>,
}

impl MatchDetail {
    pub fn into_dto(self) -> MatchDetailDto {
        MatchDetailDto {
            game: self.game.into_dto(),
            players: self.players.into_iter().map(MatchStats::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMatches {
    pub matches: Vec<Match>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMatches {
    pub fn into_dto(self) -> PaginatedMatchesDto {
        PaginatedMatchesDto {
            matches: self.matches.into_iter().map(Match::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters of a CSV match import.
#[derive(Debug, Clone, Default)]
pub struct ImportMatchParam {
    pub csv_content: String,
    pub map: String,
    pub winner_team: Option<String>,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
}

impl ImportMatchParam {
    pub fn from_dto(dto: ImportMatchDto) -> Self {
        Self {
            csv_content: dto.csv_content,
            map: dto.map.trim().to_string(),
            winner_team: dto
                .winner_team
                .map(|team| team.trim().to_string())
                .filter(|team| !team.is_empty()),
            team1_score: dto.team1_score,
            team2_score: dto.team2_score,
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub game: Match,
    pub players_imported: u64,
    pub skipped_rows: u64,
    pub mvp_user_id: Option<i32>,
    pub bets_resolved: u64,
}

impl ImportOutcome {
    pub fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            game: self.game.into_dto(),
            players_imported: self.players_imported,
            skipped_rows: self.skipped_rows,
            mvp_user_id: self.mvp_user_id,
            bets_resolved: self.bets_resolved,
        }
    }
}
