//! Casino balance, slot machine and case tables.
//!
//! Outcome tables map a pre-drawn roll to a result so they can be tested without an
//! RNG. `spin` and `Rarity::draw` take any `rand::Rng`, which lets callers inject a
//! seeded generator.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

use crate::model::casino::{
    BalanceDto, CaseKindDto, CaseResultDto, RarityDto, SpinResultDto, SymbolDto,
};

/// Chips credited when a balance is first created.
pub const STARTING_BALANCE: i64 = 1000;
/// Chips credited by the daily bonus.
pub const DAILY_BONUS: i64 = 200;
pub const MIN_SLOT_BET: i64 = 1;
pub const MAX_SLOT_BET: i64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub user_id: i32,
    pub balance: i64,
    pub last_daily_claim: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl Balance {
    pub fn from_entity(entity: entity::casino_balance::Model) -> Self {
        Self {
            user_id: entity.user_id,
            balance: entity.balance,
            last_daily_claim: entity.last_daily_claim,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the daily bonus is still available on `today` (UTC).
    pub fn can_claim_daily(&self, today: NaiveDate) -> bool {
        self.last_daily_claim.is_none_or(|claimed| claimed < today)
    }

    pub fn into_dto(self, today: NaiveDate) -> BalanceDto {
        BalanceDto {
            can_claim_daily: self.can_claim_daily(today),
            balance: self.balance,
            last_daily_claim: self.last_daily_claim,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Cherry,
    Lemon,
    Bell,
    Bar,
    Seven,
}

/// Reel symbols with their weights, out of `SYMBOL_WEIGHT_TOTAL`.
const SYMBOL_WEIGHTS: [(Symbol, u32); 5] = [
    (Symbol::Cherry, 40),
    (Symbol::Lemon, 30),
    (Symbol::Bell, 15),
    (Symbol::Bar, 10),
    (Symbol::Seven, 5),
];

pub const SYMBOL_WEIGHT_TOTAL: u32 = 100;

impl Symbol {
    /// Maps a roll in `0..SYMBOL_WEIGHT_TOTAL` onto the weighted symbol table.
    pub fn from_roll(roll: u32) -> Self {
        let mut remaining = roll % SYMBOL_WEIGHT_TOTAL;
        for (symbol, weight) in SYMBOL_WEIGHTS {
            if remaining < weight {
                return symbol;
            }
            remaining -= weight;
        }
        Symbol::Seven
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.random_range(0..SYMBOL_WEIGHT_TOTAL))
    }

    /// Bet multiplier for three of this symbol.
    fn triple_multiplier(&self) -> i64 {
        match self {
            Symbol::Cherry => 5,
            Symbol::Lemon => 8,
            Symbol::Bell => 15,
            Symbol::Bar => 25,
            Symbol::Seven => 100,
        }
    }

    pub fn into_dto(self) -> SymbolDto {
        match self {
            Symbol::Cherry => SymbolDto::Cherry,
            Symbol::Lemon => SymbolDto::Lemon,
            Symbol::Bell => SymbolDto::Bell,
            Symbol::Bar => SymbolDto::Bar,
            Symbol::Seven => SymbolDto::Seven,
        }
    }
}

pub fn spin<R: Rng + ?Sized>(rng: &mut R) -> [Symbol; 3] {
    [Symbol::draw(rng), Symbol::draw(rng), Symbol::draw(rng)]
}

/// Bet multiplier of a spin: three of a kind pays its table value, any two cherries pay 2.
pub fn slot_multiplier(reels: &[Symbol; 3]) -> i64 {
    if reels[0] == reels[1] && reels[1] == reels[2] {
        return reels[0].triple_multiplier();
    }

    let cherries = reels.iter().filter(|s| **s == Symbol::Cherry).count();
    if cherries == 2 {
        2
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub reels: [Symbol; 3],
    pub multiplier: i64,
    pub payout: i64,
    pub balance: i64,
}

impl SpinOutcome {
    pub fn into_dto(self) -> SpinResultDto {
        SpinResultDto {
            reels: self.reels.iter().map(|s| s.into_dto()).collect(),
            multiplier: self.multiplier,
            payout: self.payout,
            balance: self.balance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    Standard,
    Premium,
}

impl CaseKind {
    pub fn cost(&self) -> i64 {
        match self {
            CaseKind::Standard => 100,
            CaseKind::Premium => 500,
        }
    }

    pub fn from_dto(dto: CaseKindDto) -> Self {
        match dto {
            CaseKindDto::Standard => CaseKind::Standard,
            CaseKindDto::Premium => CaseKind::Premium,
        }
    }

    pub fn into_dto(self) -> CaseKindDto {
        match self {
            CaseKind::Standard => CaseKindDto::Standard,
            CaseKind::Premium => CaseKindDto::Premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Consumer,
    Industrial,
    MilSpec,
    Restricted,
    Classified,
    Covert,
}

/// Rarity weights, out of `RARITY_WEIGHT_TOTAL`.
const RARITY_WEIGHTS: [(Rarity, u32); 6] = [
    (Rarity::Consumer, 7992),
    (Rarity::Industrial, 1598),
    (Rarity::MilSpec, 320),
    (Rarity::Restricted, 64),
    (Rarity::Classified, 16),
    (Rarity::Covert, 10),
];

pub const RARITY_WEIGHT_TOTAL: u32 = 10_000;

impl Rarity {
    /// Maps a roll in `0..RARITY_WEIGHT_TOTAL` onto the weighted rarity table.
    pub fn from_roll(roll: u32) -> Self {
        let mut remaining = roll % RARITY_WEIGHT_TOTAL;
        for (rarity, weight) in RARITY_WEIGHTS {
            if remaining < weight {
                return rarity;
            }
            remaining -= weight;
        }
        Rarity::Covert
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.random_range(0..RARITY_WEIGHT_TOTAL))
    }

    /// Reward as a multiple of the case cost.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Consumer => 0.2,
            Rarity::Industrial => 0.5,
            Rarity::MilSpec => 1.5,
            Rarity::Restricted => 4.0,
            Rarity::Classified => 10.0,
            Rarity::Covert => 50.0,
        }
    }

    pub fn reward(&self, case: CaseKind) -> i64 {
        (case.cost() as f64 * self.multiplier()).floor() as i64
    }

    pub fn into_dto(self) -> RarityDto {
        match self {
            Rarity::Consumer => RarityDto::Consumer,
            Rarity::Industrial => RarityDto::Industrial,
            Rarity::MilSpec => RarityDto::MilSpec,
            Rarity::Restricted => RarityDto::Restricted,
            Rarity::Classified => RarityDto::Classified,
            Rarity::Covert => RarityDto::Covert,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub case: CaseKind,
    pub rarity: Rarity,
    pub cost: i64,
    pub reward: i64,
    pub balance: i64,
}

impl CaseOutcome {
    pub fn into_dto(self) -> CaseResultDto {
        CaseResultDto {
            case: self.case.into_dto(),
            rarity: self.rarity.into_dto(),
            cost: self.cost,
            reward: self.reward,
            balance: self.balance,
        }
    }
}
