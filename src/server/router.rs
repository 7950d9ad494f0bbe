//! Route table and OpenAPI document.
//!
//! Routes are registered through `OpenApiRouter` so every handler's
//! `#[utoipa::path]` lands in the generated document. Casino and auth routes sit
//! behind per-IP rate limits.

use std::sync::Arc;

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, casino, championship, matches, mix, news, payment, ranking, report, user,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "fragboard",
    description = "CS2 community portal: match stats, mix lists, casino and championship"
))]
struct ApiDoc;

pub fn router() -> Result<Router<AppState>, AppError> {
    // One token every 6 seconds with a burst of 10, roughly 10 logins per minute per IP.
    let auth_limit = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    let casino_limit = GovernorConfigBuilder::default()
        .per_second(1)
        .burst_size(20)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    let auth_routes: OpenApiRouter<AppState> = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .layer(GovernorLayer::new(Arc::new(auth_limit)));

    let casino_routes: OpenApiRouter<AppState> = OpenApiRouter::new()
        .routes(routes!(casino::get_balance))
        .routes(routes!(casino::claim_daily))
        .routes(routes!(casino::spin))
        .routes(routes!(casino::open_case))
        .routes(routes!(casino::get_odds))
        .routes(routes!(casino::place_bet, casino::get_my_bets))
        .layer(GovernorLayer::new(Arc::new(casino_limit)));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_routes)
        .merge(casino_routes)
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users))
        .routes(routes!(user::recalculate_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::get_user_matches))
        .routes(routes!(matches::get_matches))
        .routes(routes!(matches::import_match))
        .routes(routes!(matches::get_match, matches::delete_match))
        .routes(routes!(matches::recalculate_mvp))
        .routes(routes!(payment::get_payments, payment::create_payment))
        .routes(routes!(payment::update_payment, payment::delete_payment))
        .routes(routes!(report::get_reports, report::create_report))
        .routes(routes!(report::update_report, report::delete_report))
        .routes(routes!(championship::get_registrations, championship::register))
        .routes(routes!(
            championship::update_registration,
            championship::withdraw
        ))
        .routes(routes!(ranking::generate_ranking))
        .routes(routes!(ranking::get_ranking, ranking::delete_ranking))
        .routes(routes!(mix::get_penalties))
        .routes(routes!(mix::delete_penalty))
        .routes(routes!(mix::get_day))
        .routes(routes!(mix::join))
        .routes(routes!(mix::leave))
        .routes(routes!(mix::record_no_show))
        .routes(routes!(news::get_news, news::create_news))
        .routes(routes!(news::get_news_post, news::update_news, news::delete_news))
        .split_for_parts();

    Ok(router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api)))
}
