use crate::dtos::intake::IntakeResponse;
use axum::{Json, http::StatusCode};
use database::{db::create_connection, entities::intake};
use sea_orm::{EntityTrait, QueryOrder};

/// Get all intakes, newest first
#[utoipa::path(
    get,
    path = "/api/intakes",
    responses(
        (status = 200, description = "List of intakes retrieved successfully", body = [IntakeResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Intakes"
)]
pub async fn get_intakes() -> Result<Json<Vec<IntakeResponse>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let intakes = intake::Entity::find()
        .order_by_desc(intake::Column::StartDate)
        .all(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(
        intakes
            .into_iter()
            .map(|intake| IntakeResponse {
                id: intake.id.to_string(),
                semester: intake.semester.as_str().to_string(),
                semester_display: intake.semester.label().to_string(),
                name: intake.name,
                start_date: intake.start_date,
                end_date: intake.end_date,
                active: intake.active,
            })
            .collect(),
    ))
}
