use crate::dtos::pagination::PaginationMeta;
use crate::dtos::professor::{
    PaginatedProfessorsResponse, ProfessorQueryParams, ProfessorResponse,
};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{db::create_connection, entities::professor};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, prelude::Uuid,
};

/// Get paginated list of professors
#[utoipa::path(
    get,
    path = "/api/professors",
    params(ProfessorQueryParams),
    responses(
        (status = 200, description = "List of professors retrieved successfully", body = PaginatedProfessorsResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Professors"
)]
pub async fn get_professors(
    Query(params): Query<ProfessorQueryParams>,
) -> Result<Json<PaginatedProfessorsResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut condition = Condition::all();

    if let Some(professor_type) = params.professor_type {
        condition = condition.add(professor::Column::ProfessorType.eq(professor_type));
    }

    if let Some(missing) = params.missing_corporate_email {
        condition = if missing {
            condition.add(professor::Column::CorporateEmail.is_null())
        } else {
            condition.add(professor::Column::CorporateEmail.is_not_null())
        };
    }

    if let Some(search) = &params.search {
        condition = condition.add(
            Condition::any()
                .add(professor::Column::Name.contains(search))
                .add(professor::Column::LastName.contains(search))
                .add(professor::Column::Email.contains(search))
                .add(professor::Column::CorporateEmail.contains(search)),
        );
    }

    let query = professor::Entity::find()
        .filter(condition)
        .order_by_asc(professor::Column::LastName)
        .order_by_asc(professor::Column::Name);

    let total_items = query
        .clone()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let professors = query
        .paginate(&db, params.per_page)
        .fetch_page(params.page - 1)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(PaginatedProfessorsResponse {
        professors: professors.into_iter().map(convert_to_professor_response).collect(),
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}

/// Get a specific professor by ID
#[utoipa::path(
    get,
    path = "/api/professors/{id}",
    params(
        ("id" = Uuid, Path, description = "Professor ID")
    ),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 404, description = "Professor not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Professors"
)]
pub async fn get_professor_by_id(
    Path(id): Path<Uuid>,
) -> Result<Json<ProfessorResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let professor = professor::Entity::find_by_id(id)
        .one(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match professor {
        Some(professor) => Ok(Json(convert_to_professor_response(professor))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

fn convert_to_professor_response(professor: professor::Model) -> ProfessorResponse {
    ProfessorResponse {
        id: professor.id.to_string(),
        professor_type: professor.professor_type.as_str().to_string(),
        professor_type_display: professor.professor_type.label().to_string(),
        name: professor.name,
        last_name: professor.last_name,
        email: professor.email,
        corporate_email: professor.corporate_email,
        phone_number: professor.phone_number,
        campuses: professor.campuses,
        availabilities: professor.availabilities,
        minimum_sessions: professor.minimum_sessions,
        birth_year: professor.birth_year,
        joined_year: professor.joined_year,
        linkedin_profile: professor.linkedin_profile,
        accredited: professor.accredited,
    }
}
