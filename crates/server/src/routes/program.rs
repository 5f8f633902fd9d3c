use crate::dtos::program::ProgramResponse;
use axum::{Json, http::StatusCode};
use database::{db::create_connection, entities::program};
use sea_orm::{EntityTrait, QueryOrder};

/// Get all programs
#[utoipa::path(
    get,
    path = "/api/programs",
    responses(
        (status = 200, description = "List of programs retrieved successfully", body = [ProgramResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Programs"
)]
pub async fn get_programs() -> Result<Json<Vec<ProgramResponse>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let programs = program::Entity::find()
        .order_by_asc(program::Column::Code)
        .all(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(
        programs
            .into_iter()
            .map(|program| ProgramResponse {
                id: program.id.to_string(),
                school: program.school.as_str().to_string(),
                school_display: program.school.label().to_string(),
                program_type: program.program_type.as_str().to_string(),
                program_type_display: program.program_type.label().to_string(),
                name: program.name,
                code: program.code,
                years: program.years,
            })
            .collect(),
    ))
}
