use crate::server::{
    error::{import::ImportError, AppError},
    model::matches::ImportMatchParam,
    service::import::ImportService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod import;

const HEADER: &str = "matchid,mapnumber,steamid64,team,name,kills,deaths,assists,head_shot_kills,damage";

/// One CSV player row: steam id suffix, team, kills, deaths.
type Row<'a> = (u32, &'a str, i32, i32);

fn steam_id(suffix: u32) -> String {
    format!("765611991{:08}", suffix)
}

fn csv(match_id: &str, rows: &[Row]) -> String {
    let mut content = format!("{HEADER}\n");
    for (suffix, team, kills, deaths) in rows {
        content.push_str(&format!(
            "{},0,{},{},player{},{},{},2,{},{}\n",
            match_id,
            steam_id(*suffix),
            team,
            suffix,
            kills,
            deaths,
            kills / 2,
            kills * 90
        ));
    }
    content
}

fn param(csv_content: String) -> ImportMatchParam {
    ImportMatchParam {
        csv_content,
        map: "de_inferno".to_string(),
        ..Default::default()
    }
}
