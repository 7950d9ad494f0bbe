use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub user_id: i32,
    pub team: String,
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
    pub is_mvp: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Match,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
