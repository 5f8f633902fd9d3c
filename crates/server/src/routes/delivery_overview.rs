use axum::{Json, extract::Query, http::StatusCode};
use database::{
    db::create_connection,
    services::delivery_overview::{DeliveryOverview, DeliveryOverviewService},
    services::query_delivery::DeliveryFilter,
};
use models::Semester;
use sea_orm::prelude::Uuid;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeliveryOverviewParams {
    pub program: Option<Uuid>,
    pub intake: Option<Uuid>,
    /// Semester code, "fall" or "spring"
    pub semester: Option<String>,
}

/// Get the campus and time-slot delivery matrix, grouped by course year
#[utoipa::path(
    get,
    path = "/api/delivery-overview",
    params(DeliveryOverviewParams),
    responses(
        (status = 200, description = "Delivery matrix grouped by year, section and course"),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn get_delivery_overview(
    Query(params): Query<DeliveryOverviewParams>,
) -> Result<Json<DeliveryOverview>, StatusCode> {
    let semester = match params.semester.as_deref() {
        None => None,
        Some(raw) => Some(
            Semester::ALL
                .into_iter()
                .find(|s| s.as_str() == raw)
                .ok_or(StatusCode::BAD_REQUEST)?,
        ),
    };

    let filter = DeliveryFilter {
        program_id: params.program,
        intake_id: params.intake,
        semester,
    };

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let overview = DeliveryOverviewService::delivery_overview(&db, &filter)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(overview))
}
