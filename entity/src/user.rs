use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// SteamID64 kept as text, it does not fit an SQLite signed integer comfortably.
    #[sea_orm(unique)]
    pub steam_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub total_kills: i32,
    pub total_deaths: i32,
    pub total_assists: i32,
    pub total_headshots: i32,
    pub total_damage: i64,
    pub total_matches: i32,
    pub total_mvps: i32,
    pub total_aces: i32,
    pub total_quad_kills: i32,
    pub total_triple_kills: i32,
    pub total_double_kills: i32,
    pub total_clutch_1v1_wins: i32,
    pub total_clutch_1v2_wins: i32,
    pub total_entry_count: i32,
    pub total_entry_wins: i32,
    pub total_enemies_flashed: i32,
    pub total_utility_damage: i64,
    pub skill_rating: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_stats::Entity")]
    MatchStats,
    #[sea_orm(has_many = "super::mix_availability::Entity")]
    MixAvailability,
    #[sea_orm(has_many = "super::mix_penalty::Entity")]
    MixPenalty,
}

impl Related<super::match_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchStats.def()
    }
}

impl Related<super::mix_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixAvailability.def()
    }
}

impl Related<super::mix_penalty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MixPenalty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
