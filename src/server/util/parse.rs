use chrono::NaiveDate;

use crate::server::error::AppError;

/// Lowest valid individual-account SteamID64 (`76561197960265728`).
const STEAM_ID64_BASE: u64 = 76_561_197_960_265_728;

/// Parses and validates a SteamID64.
///
/// Accepts the 17 digit individual-account form only. Leading and trailing whitespace
/// is ignored.
///
/// # Returns
/// - `Some(u64)` - Valid SteamID64
/// - `None` - Not a number, `0`, or outside the individual-account range
pub fn parse_steam_id(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.len() != 17 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let id = value.parse::<u64>().ok()?;
    (id > STEAM_ID64_BASE).then_some(id)
}

/// Parses a ranking month in `YYYY-MM` form.
///
/// # Returns
/// - `Ok(String)` - Normalized month string
/// - `Err(AppError::BadRequest)` - Value is not a valid calendar month
pub fn parse_month(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    let invalid = || AppError::BadRequest(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }

    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    Ok(format!("{:04}-{:02}", year, month))
}

/// Parses a mix day in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}
