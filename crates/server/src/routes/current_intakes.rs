use crate::utils::date::resolve_selected_date;
use axum::{Json, extract::Query, http::StatusCode};
use chrono::Local;
use database::{
    db::create_connection,
    services::current_intakes::{CurrentIntakeService, CurrentIntakesReport},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CurrentIntakesParams {
    /// Report date as YYYY-MM-DD; anything else falls back to today
    pub date: Option<String>,
}

/// Get the intakes running at a date with their unstaffed deliveries
/// grouped by program and section
#[utoipa::path(
    get,
    path = "/api/current-intakes",
    params(CurrentIntakesParams),
    responses(
        (status = 200, description = "Current intakes with missing-professor statistics"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn get_current_intakes(
    Query(params): Query<CurrentIntakesParams>,
) -> Result<Json<CurrentIntakesReport>, StatusCode> {
    let selected_date =
        resolve_selected_date(params.date.as_deref(), Local::now().date_naive());

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let report = CurrentIntakeService::current_intakes(&db, selected_date)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(report))
}
