//! Per-match stat lines, MVP scoring and cumulative player totals.

use sea_orm::DbErr;

/// Raw counters of one player in one match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatLine {
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub headshots: i32,
    pub damage: i32,
    pub enemy5ks: i32,
    pub enemy4ks: i32,
    pub enemy3ks: i32,
    pub enemy2ks: i32,
    pub utility_count: i32,
    pub utility_damage: i32,
    pub utility_successes: i32,
    pub utility_enemies: i32,
    pub flash_count: i32,
    pub flash_successes: i32,
    pub enemies_flashed: i32,
    pub v1_count: i32,
    pub v1_wins: i32,
    pub v2_count: i32,
    pub v2_wins: i32,
    pub entry_count: i32,
    pub entry_wins: i32,
    pub shots_fired: i32,
    pub shots_on_target: i32,
}

impl StatLine {
    pub fn from_entity(entity: &entity::match_stats::Model) -> Self {
        Self {
            kills: entity.kills,
            deaths: entity.deaths,
            assists: entity.assists,
            headshots: entity.headshots,
            damage: entity.damage,
            enemy5ks: entity.enemy5ks,
            enemy4ks: entity.enemy4ks,
            enemy3ks: entity.enemy3ks,
            enemy2ks: entity.enemy2ks,
            utility_count: entity.utility_count,
            utility_damage: entity.utility_damage,
            utility_successes: entity.utility_successes,
            utility_enemies: entity.utility_enemies,
            flash_count: entity.flash_count,
            flash_successes: entity.flash_successes,
            enemies_flashed: entity.enemies_flashed,
            v1_count: entity.v1_count,
            v1_wins: entity.v1_wins,
            v2_count: entity.v2_count,
            v2_wins: entity.v2_wins,
            entry_count: entity.entry_count,
            entry_wins: entity.entry_wins,
            shots_fired: entity.shots_fired,
            shots_on_target: entity.shots_on_target,
        }
    }

    pub fn kd(&self) -> f64 {
        kd_ratio(self.kills as i64, self.deaths as i64)
    }

    /// Headshot kills over kills, in `[0, 1]`.
    pub fn hs_ratio(&self) -> f64 {
        if self.kills <= 0 {
            return 0.0;
        }
        (self.headshots as f64 / self.kills as f64).clamp(0.0, 1.0)
    }

    /// Weighted MVP score of this stat line.
    pub fn mvp_score(&self) -> f64 {
        2.0 * self.kills as f64
            + 0.5 * self.assists as f64
            + 5.0 * self.kd()
            + 10.0 * self.hs_ratio()
            + 0.01 * self.damage as f64
            + 15.0 * self.enemy5ks as f64
            + 10.0 * self.enemy4ks as f64
            + 5.0 * self.enemy3ks as f64
            + 2.0 * self.enemy2ks as f64
            + 8.0 * self.v1_wins as f64
            + 12.0 * self.v2_wins as f64
            + 3.0 * self.entry_wins as f64
            + 0.02 * self.utility_damage as f64
            + 0.5 * self.enemies_flashed as f64
    }
}

/// Kills per death, or the kill count when the player never died.
pub fn kd_ratio(kills: i64, deaths: i64) -> f64 {
    if deaths == 0 {
        kills as f64
    } else {
        kills as f64 / deaths as f64
    }
}

/// Index of the highest MVP score. Ties keep the first line seen.
pub fn select_mvp(lines: &[StatLine]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, line) in lines.iter().enumerate() {
        let score = line.mvp_score();
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

/// Lifetime totals of a player, always the sum of their match stat rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTotals {
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub headshots: i32,
    pub damage: i64,
    pub matches: i32,
    pub mvps: i32,
    pub aces: i32,
    pub quad_kills: i32,
    pub triple_kills: i32,
    pub double_kills: i32,
    pub clutch_1v1_wins: i32,
    pub clutch_1v2_wins: i32,
    pub entry_count: i32,
    pub entry_wins: i32,
    pub enemies_flashed: i32,
    pub utility_damage: i64,
}

impl UserTotals {
    /// Sums the given match stat rows field by field.
    ///
    /// Fails with `DbErr::Custom` when a total no longer fits its column.
    pub fn from_rows<'r>(
        rows: impl IntoIterator<Item = &'r entity::match_stats::Model>,
    ) -> Result<Self, DbErr> {
        let mut totals = Self::default();
        for row in rows {
            totals.kills = add(totals.kills, row.kills, "kills")?;
            totals.deaths = add(totals.deaths, row.deaths, "deaths")?;
            totals.assists = add(totals.assists, row.assists, "assists")?;
            totals.headshots = add(totals.headshots, row.headshots, "headshots")?;
            totals.damage = add_wide(totals.damage, row.damage, "damage")?;
            totals.matches = add(totals.matches, 1, "matches")?;
            totals.mvps = add(totals.mvps, i32::from(row.is_mvp), "mvps")?;
            totals.aces = add(totals.aces, row.enemy5ks, "aces")?;
            totals.quad_kills = add(totals.quad_kills, row.enemy4ks, "quad_kills")?;
            totals.triple_kills = add(totals.triple_kills, row.enemy3ks, "triple_kills")?;
            totals.double_kills = add(totals.double_kills, row.enemy2ks, "double_kills")?;
            totals.clutch_1v1_wins = add(totals.clutch_1v1_wins, row.v1_wins, "clutch_1v1_wins")?;
            totals.clutch_1v2_wins = add(totals.clutch_1v2_wins, row.v2_wins, "clutch_1v2_wins")?;
            totals.entry_count = add(totals.entry_count, row.entry_count, "entry_count")?;
            totals.entry_wins = add(totals.entry_wins, row.entry_wins, "entry_wins")?;
            totals.enemies_flashed =
                add(totals.enemies_flashed, row.enemies_flashed, "enemies_flashed")?;
            totals.utility_damage =
                add_wide(totals.utility_damage, row.utility_damage, "utility_damage")?;
        }

        Ok(totals)
    }

    pub fn from_user(entity: &entity::user::Model) -> Self {
        Self {
            kills: entity.total_kills,
            deaths: entity.total_deaths,
            assists: entity.total_assists,
            headshots: entity.total_headshots,
            damage: entity.total_damage,
            matches: entity.total_matches,
            mvps: entity.total_mvps,
            aces: entity.total_aces,
            quad_kills: entity.total_quad_kills,
            triple_kills: entity.total_triple_kills,
            double_kills: entity.total_double_kills,
            clutch_1v1_wins: entity.total_clutch_1v1_wins,
            clutch_1v2_wins: entity.total_clutch_1v2_wins,
            entry_count: entity.total_entry_count,
            entry_wins: entity.total_entry_wins,
            enemies_flashed: entity.total_enemies_flashed,
            utility_damage: entity.total_utility_damage,
        }
    }

    pub fn kd(&self) -> f64 {
        kd_ratio(self.kills as i64, self.deaths as i64)
    }

    /// Headshot percentage in `[0, 100]`.
    pub fn hs_percent(&self) -> f64 {
        if self.kills <= 0 {
            return 0.0;
        }
        self.headshots as f64 / self.kills as f64 * 100.0
    }

    /// Average damage per match.
    pub fn adr(&self) -> f64 {
        if self.matches <= 0 {
            return 0.0;
        }
        self.damage as f64 / self.matches as f64
    }

    /// `round(1000 + kd×100 + hs%×2 + adr/10)`
    pub fn skill_rating(&self) -> i32 {
        (1000.0 + self.kd() * 100.0 + self.hs_percent() * 2.0 + self.adr() / 10.0).round() as i32
    }
}

fn add(total: i32, value: i32, column: &str) -> Result<i32, DbErr> {
    total
        .checked_add(value)
        .ok_or_else(|| DbErr::Custom(format!("total {} overflows", column)))
}

fn add_wide(total: i64, value: i32, column: &str) -> Result<i64, DbErr> {
    total
        .checked_add(i64::from(value))
        .ok_or_else(|| DbErr::Custom(format!("total {} overflows", column)))
}
