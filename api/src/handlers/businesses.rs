//! Business handlers
//!
//! Endpoint for listing businesses, optionally only those open at a given
//! local time.

use std::sync::OnceLock;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Business, BusinessFilter, OpeningSchedule};
use crate::error::AppError;
use crate::AppState;

/// Lexical layout of the `local_time` query parameter (minute precision)
pub const LOCAL_TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M";

/// chrono accepts unpadded fields and a signed year, so the shape is checked first
const LOCAL_TIME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}$";

fn local_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(LOCAL_TIME_PATTERN).expect("local time pattern is a valid regex")
    })
}

/// Query parameters for listing businesses
///
/// Kept as raw strings so empty values fall back to defaults instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListBusinessesQuery {
    pub open: Option<String>,
    pub local_time: Option<String>,
}

impl ListBusinessesQuery {
    pub fn into_filter(self) -> Result<BusinessFilter, AppError> {
        let open = parse_bool(self.open.as_deref(), false)?;
        let local_time = parse_local_time(self.local_time.as_deref())?;
        Ok(BusinessFilter::new(open, local_time))
    }
}

fn parse_bool(value: Option<&str>, default: bool) -> Result<bool, AppError> {
    match value.map(str::trim).unwrap_or_default() {
        "" => Ok(default),
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::BadRequest(
            "open: invalid format: expect \"true\" or \"false\"".to_string(),
        )),
    }
}

fn parse_local_time(value: Option<&str>) -> Result<Option<NaiveDateTime>, AppError> {
    let s = value.map(str::trim).unwrap_or_default();
    if s.is_empty() {
        return Ok(None);
    }
    let invalid = || {
        AppError::BadRequest(format!(
            "local_time: {:?} does not match time layout \"YYYY-MM-DDThh:mm\"",
            s
        ))
    };
    if !local_time_regex().is_match(s) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(s, LOCAL_TIME_LAYOUT)
        .map(Some)
        .map_err(|_| invalid())
}

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub id: i32,
    pub name: String,
    /// Days serialize as names, clocks as `HH:MM`
    pub opening_hours: OpeningSchedule,
}

impl From<Business> for BusinessResponse {
    fn from(b: Business) -> Self {
        Self {
            id: b.id.0,
            name: b.name,
            opening_hours: b.opening_hours,
        }
    }
}

/// Response for listing businesses
#[derive(Debug, Serialize)]
pub struct ListBusinessesResponse {
    pub businesses: Vec<BusinessResponse>,
}

/// GET /businesses
///
/// List businesses. With `open=true`, only those open at `local_time`
/// (`YYYY-MM-DDThh:mm`, already in the business's local time).
pub async fn list_businesses(
    State(state): State<AppState>,
    query: Result<Query<ListBusinessesQuery>, QueryRejection>,
) -> Result<Json<ListBusinessesResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let filter = query.into_filter()?;

    let businesses = state.business_service.list_businesses(&filter).await?;

    Ok(Json(ListBusinessesResponse {
        businesses: businesses.into_iter().map(BusinessResponse::from).collect(),
    }))
}
