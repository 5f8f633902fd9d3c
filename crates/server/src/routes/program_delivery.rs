use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    services::program_overview::{OverviewTable, ProgramIntakeOverview, ProgramOverviewService},
};
use sea_orm::prelude::Uuid;

/// Get the sections and deliveries of one program within one intake
#[utoipa::path(
    get,
    path = "/api/program-delivery/{program_id}/{intake_id}",
    params(
        ("program_id" = Uuid, Path, description = "Program ID"),
        ("intake_id" = Uuid, Path, description = "Intake ID")
    ),
    responses(
        (status = 200, description = "Program delivery overview"),
        (status = 404, description = "Program or intake not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn get_program_intake_overview(
    Path((program_id, intake_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ProgramIntakeOverview>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let overview = ProgramOverviewService::program_intake_overview(&db, program_id, intake_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match overview {
        Some(overview) => Ok(Json(overview)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Get per year and intake delivery tables of one program across its
/// active intakes
#[utoipa::path(
    get,
    path = "/api/program-delivery/{program_id}/tables",
    params(
        ("program_id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Delivery overview tables, one per year and intake"),
        (status = 404, description = "Program not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn get_program_overview_tables(
    Path(program_id): Path<Uuid>,
) -> Result<Json<Vec<OverviewTable>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let tables = ProgramOverviewService::program_overview_tables(&db, program_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match tables {
        Some(tables) => Ok(Json(tables)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
