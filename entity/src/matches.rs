use sea_orm::entity::prelude::*;

/// One imported map of a series. `(external_match_id, map_number)` identifies it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub external_match_id: String,
    pub map_number: i32,
    pub map: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winner_team: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_stats::Entity")]
    MatchStats,
}

impl Related<super::match_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
