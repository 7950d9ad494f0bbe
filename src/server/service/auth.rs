//! Steam OpenID 2.0 login.
//!
//! Steam only supports OpenID for third-party sign in. The flow redirects the user to
//! Steam, which redirects back to `/api/auth/callback` with a signed assertion. The
//! assertion is verified by posting it back to Steam in `check_authentication` mode,
//! and the SteamID64 is taken from the claimed identifier.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::{form_urlencoded, Url};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    util::parse::parse_steam_id,
};

const STEAM_OPENID_ENDPOINT: &str = "https://steamcommunity.com/openid/login";
const STEAM_CLAIMED_ID_PREFIX: &str = "https://steamcommunity.com/openid/id/";
const STEAM_PLAYER_SUMMARIES_ENDPOINT: &str =
    "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/";
const OPENID_NS: &str = "http://specs.openid.net/auth/2.0";
const OPENID_IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

/// Path Steam redirects back to after login.
pub const CALLBACK_PATH: &str = "/api/auth/callback";

/// Public Steam profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamProfile {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesResponse {
    response: PlayerSummaries,
}

#[derive(Debug, Deserialize)]
struct PlayerSummaries {
    players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummary {
    personaname: String,
    avatarfull: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    app_url: &'a str,
    steam_api_key: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        app_url: &'a str,
        steam_api_key: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            http_client,
            app_url,
            steam_api_key,
        }
    }

    /// Steam login URL whose return address carries `state` for CSRF validation.
    pub fn login_url(&self, state: &str) -> Result<Url, AppError> {
        let return_to = self.return_to(state)?;
        build_login_url(self.app_url, &return_to)
    }

    /// Verifies the Steam assertion and logs the user in.
    ///
    /// Creates the user on first login. Name and avatar are refreshed from the Steam
    /// Web API when a key is configured. `set_admin` grants admin rights and is never
    /// used to revoke them.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AppError::AuthErr(SteamVerificationFailed))` - Assertion invalid or rejected
    /// - `Err(AppError::ReqwestErr)` - Steam could not be reached
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(
        &self,
        params: &HashMap<String, String>,
        state: &str,
        set_admin: bool,
    ) -> Result<User, AppError> {
        let return_to = self.return_to(state)?;
        let steam_id = extract_steam_id(params, return_to.as_str())?;

        self.verify_assertion(params).await?;

        let user_repo = UserRepository::new(self.db);
        let profile = match self.fetch_profile(&steam_id).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!("Failed to fetch Steam profile of {}: {}", steam_id, err);
                None
            }
        };

        let (name, avatar_url) = match profile {
            Some(profile) => (profile.name, profile.avatar_url),
            None => match user_repo.find_by_steam_id(&steam_id).await? {
                Some(existing) => (existing.name, existing.avatar_url),
                None => (steam_id.clone(), None),
            },
        };

        let user = user_repo
            .upsert(UpsertUserParam {
                steam_id,
                name,
                avatar_url,
                is_admin: set_admin.then_some(true),
            })
            .await?;

        if set_admin {
            tracing::info!("User {} has been set as admin", user.name);
        }

        Ok(user)
    }

    fn return_to(&self, state: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}{}", self.app_url, CALLBACK_PATH))
            .map_err(|e| AppError::InternalError(format!("Invalid APP_URL: {}", e)))?;
        url.query_pairs_mut().append_pair("state", state);
        Ok(url)
    }

    /// Posts the assertion back to Steam in `check_authentication` mode.
    async fn verify_assertion(&self, params: &HashMap<String, String>) -> Result<(), AppError> {
        let body = check_authentication_body(params);

        let response = self
            .http_client
            .post(STEAM_OPENID_ENDPOINT)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if !assertion_is_valid(&response) {
            return Err(AuthError::SteamVerificationFailed(
                "Steam rejected the assertion".to_string(),
            )
            .into());
        }

        Ok(())
    }

    async fn fetch_profile(&self, steam_id: &str) -> Result<Option<SteamProfile>, reqwest::Error> {
        let Some(key) = self.steam_api_key else {
            return Ok(None);
        };

        let summaries: PlayerSummariesResponse = self
            .http_client
            .get(STEAM_PLAYER_SUMMARIES_ENDPOINT)
            .query(&[("key", key), ("steamids", steam_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(summaries
            .response
            .players
            .into_iter()
            .next()
            .map(|player| SteamProfile {
                name: player.personaname,
                avatar_url: player.avatarfull,
            }))
    }
}

/// Builds the Steam OpenID `checkid_setup` URL.
pub fn build_login_url(realm: &str, return_to: &Url) -> Result<Url, AppError> {
    let mut url = Url::parse(STEAM_OPENID_ENDPOINT)
        .map_err(|e| AppError::InternalError(format!("Invalid Steam endpoint: {}", e)))?;

    url.query_pairs_mut()
        .append_pair("openid.ns", OPENID_NS)
        .append_pair("openid.mode", "checkid_setup")
        .append_pair("openid.return_to", return_to.as_str())
        .append_pair("openid.realm", realm)
        .append_pair("openid.identity", OPENID_IDENTIFIER_SELECT)
        .append_pair("openid.claimed_id", OPENID_IDENTIFIER_SELECT);

    Ok(url)
}

/// Validates the shape of a positive assertion and returns the SteamID64 it claims.
///
/// Only the local checks happen here. Whether Steam signed the assertion is checked
/// separately with `check_authentication`.
pub fn extract_steam_id(
    params: &HashMap<String, String>,
    expected_return_to: &str,
) -> Result<String, AuthError> {
    let get = |key: &str| params.get(key).map(String::as_str);
    let fail = |reason: &str| AuthError::SteamVerificationFailed(reason.to_string());

    if get("openid.mode") != Some("id_res") {
        return Err(fail("assertion is not a positive response"));
    }
    if get("openid.ns") != Some(OPENID_NS) {
        return Err(fail("unexpected OpenID namespace"));
    }
    if get("openid.op_endpoint") != Some(STEAM_OPENID_ENDPOINT) {
        return Err(fail("assertion was not issued by Steam"));
    }
    if get("openid.return_to") != Some(expected_return_to) {
        return Err(fail("return address does not match"));
    }

    let claimed_id = get("openid.claimed_id").ok_or_else(|| fail("missing claimed id"))?;
    if get("openid.identity") != Some(claimed_id) {
        return Err(fail("identity does not match claimed id"));
    }

    let steam_id = claimed_id
        .strip_prefix(STEAM_CLAIMED_ID_PREFIX)
        .and_then(parse_steam_id)
        .ok_or_else(|| fail("claimed id is not a SteamID64"))?;

    Ok(steam_id.to_string())
}

/// Form body echoing the assertion with the mode switched to `check_authentication`.
fn check_authentication_body(params: &HashMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if key.starts_with("openid.") && key != "openid.mode" {
            serializer.append_pair(key, value);
        }
    }
    serializer.append_pair("openid.mode", "check_authentication");
    serializer.finish()
}

/// Steam answers `check_authentication` with key-value lines.
fn assertion_is_valid(response: &str) -> bool {
    response
        .lines()
        .any(|line| line.trim() == "is_valid:true")
}
