//! Bet domain model and odds/resolution rules.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::casino::{BetDto, BetStatusDto, BetTypeDto, OddsDto};

pub const MIN_ODDS: f64 = 1.1;
pub const MAX_ODDS: f64 = 10.0;
/// Odds quoted for a player without any match history.
pub const DEFAULT_ODDS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetType {
    KillsOver,
    KdOver,
    Mvp,
    Win,
}

impl BetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetType::KillsOver => "kills_over",
            BetType::KdOver => "kd_over",
            BetType::Mvp => "mvp",
            BetType::Win => "win",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kills_over" => Some(BetType::KillsOver),
            "kd_over" => Some(BetType::KdOver),
            "mvp" => Some(BetType::Mvp),
            "win" => Some(BetType::Win),
            _ => None,
        }
    }

    /// Over bets compare against a threshold, the others do not take one.
    pub fn needs_threshold(&self) -> bool {
        matches!(self, BetType::KillsOver | BetType::KdOver)
    }

    pub fn from_dto(dto: BetTypeDto) -> Self {
        match dto {
            BetTypeDto::KillsOver => BetType::KillsOver,
            BetTypeDto::KdOver => BetType::KdOver,
            BetTypeDto::Mvp => BetType::Mvp,
            BetTypeDto::Win => BetType::Win,
        }
    }

    pub fn into_dto(self) -> BetTypeDto {
        match self {
            BetType::KillsOver => BetTypeDto::KillsOver,
            BetType::KdOver => BetTypeDto::KdOver,
            BetType::Mvp => BetTypeDto::Mvp,
            BetType::Win => BetTypeDto::Win,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
}

impl BetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::Pending => "pending",
            BetStatus::Won => "won",
            BetStatus::Lost => "lost",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BetStatus::Pending),
            "won" => Some(BetStatus::Won),
            "lost" => Some(BetStatus::Lost),
            _ => None,
        }
    }

    pub fn into_dto(self) -> BetStatusDto {
        match self {
            BetStatus::Pending => BetStatusDto::Pending,
            BetStatus::Won => BetStatusDto::Won,
            BetStatus::Lost => BetStatusDto::Lost,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    pub id: i32,
    pub bettor_id: i32,
    pub target_user_id: i32,
    pub bet_type: BetType,
    pub threshold: Option<f64>,
    pub amount: i64,
    pub odds: f64,
    pub status: BetStatus,
    pub match_id: Option<i32>,
    pub payout: i64,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Bet {
    /// Converts a stored bet, failing on an unknown type or status string.
    pub fn from_entity(entity: entity::bet::Model) -> Result<Self, DbErr> {
        let bet_type = BetType::parse(&entity.bet_type)
            .ok_or_else(|| DbErr::Custom(format!("Unknown bet type '{}'", entity.bet_type)))?;
        let status = BetStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown bet status '{}'", entity.status)))?;

        Ok(Self {
            id: entity.id,
            bettor_id: entity.bettor_id,
            target_user_id: entity.target_user_id,
            bet_type,
            threshold: entity.threshold,
            amount: entity.amount,
            odds: entity.odds,
            status,
            match_id: entity.match_id,
            payout: entity.payout,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        })
    }

    pub fn into_dto(self) -> BetDto {
        BetDto {
            id: self.id,
            bettor_id: self.bettor_id,
            target_user_id: self.target_user_id,
            bet_type: self.bet_type.into_dto(),
            threshold: self.threshold,
            amount: self.amount,
            odds: self.odds,
            status: self.status.into_dto(),
            match_id: self.match_id,
            payout: self.payout,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBetParam {
    pub bettor_id: i32,
    pub target_user_id: i32,
    pub bet_type: BetType,
    pub threshold: Option<f64>,
    pub amount: i64,
    pub odds: f64,
}

/// A quoted price for a bet.
#[derive(Debug, Clone, PartialEq)]
pub struct Odds {
    pub target_user_id: i32,
    pub bet_type: BetType,
    pub threshold: Option<f64>,
    pub odds: f64,
}

impl Odds {
    pub fn into_dto(self) -> OddsDto {
        OddsDto {
            target_user_id: self.target_user_id,
            bet_type: self.bet_type.into_dto(),
            threshold: self.threshold,
            odds: self.odds,
        }
    }
}

/// How a player performed in a single match, as seen by the bet rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPerformance {
    pub kills: i32,
    pub deaths: i32,
    pub is_mvp: bool,
    pub won: bool,
}

impl MatchPerformance {
    pub fn kd(&self) -> f64 {
        super::stats::kd_ratio(self.kills as i64, self.deaths as i64)
    }
}

/// Aggregated per-match history used to price bets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerHistory {
    pub matches: u64,
    pub total_kills: i64,
    pub kd_sum: f64,
    pub mvps: u64,
    pub wins: u64,
}

impl PlayerHistory {
    pub fn from_performances<'p>(performances: impl IntoIterator<Item = &'p MatchPerformance>) -> Self {
        performances
            .into_iter()
            .fold(Self::default(), |mut history, perf| {
                history.matches += 1;
                history.total_kills += perf.kills as i64;
                history.kd_sum += perf.kd();
                history.mvps += perf.is_mvp as u64;
                history.wins += perf.won as u64;
                history
            })
    }

    pub fn avg_kills(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.total_kills as f64 / self.matches as f64
        }
    }

    pub fn avg_kd(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.kd_sum / self.matches as f64
        }
    }

    fn smoothed_rate(&self, hits: u64) -> f64 {
        (hits as f64 + 1.0) / (self.matches as f64 + 2.0)
    }
}

/// Prices a bet from the target's history, clamped to `[MIN_ODDS, MAX_ODDS]`.
///
/// A zero average on an over bet prices at `MAX_ODDS`.
pub fn compute_odds(history: &PlayerHistory, bet_type: BetType, threshold: Option<f64>) -> f64 {
    if history.matches == 0 {
        return DEFAULT_ODDS;
    }

    let threshold = threshold.unwrap_or(0.0);
    let raw = match bet_type {
        BetType::KillsOver => over_odds(threshold, history.avg_kills()),
        BetType::KdOver => over_odds(threshold, history.avg_kd()),
        BetType::Mvp => 1.0 / history.smoothed_rate(history.mvps),
        BetType::Win => 1.0 / history.smoothed_rate(history.wins),
    };

    round_odds(raw.clamp(MIN_ODDS, MAX_ODDS))
}

fn over_odds(threshold: f64, average: f64) -> f64 {
    if average <= 0.0 {
        MAX_ODDS
    } else {
        1.0 + threshold / average
    }
}

fn round_odds(odds: f64) -> f64 {
    (odds * 100.0).round() / 100.0
}

/// Whether `perf` satisfies the bet condition.
pub fn bet_won(bet_type: BetType, threshold: Option<f64>, perf: &MatchPerformance) -> bool {
    let threshold = threshold.unwrap_or(0.0);
    match bet_type {
        BetType::KillsOver => perf.kills as f64 > threshold,
        BetType::KdOver => perf.kd() > threshold,
        BetType::Mvp => perf.is_mvp,
        BetType::Win => perf.won,
    }
}

pub fn payout(amount: i64, odds: f64) -> i64 {
    (amount as f64 * odds).floor() as i64
}
