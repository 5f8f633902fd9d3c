use std::collections::{HashMap, HashSet};

use crate::dtos::course::{
    AreaResponse, CourseQueryParams, CourseResponse, PaginatedCoursesResponse,
    ProgramSummaryResponse,
};
use crate::dtos::pagination::PaginationMeta;
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::{area, course, course_program, program},
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, prelude::Uuid,
};

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut condition = Condition::all();

    if let Some(course_type) = params.course_type {
        condition = condition.add(course::Column::CourseType.eq(course_type));
    }

    if let Some(area_id) = params.area {
        condition = condition.add(course::Column::AreaId.eq(area_id));
    }

    if let Some(program_id) = params.program {
        let course_ids: Vec<Uuid> = course_program::Entity::find()
            .select_only()
            .column(course_program::Column::CourseId)
            .filter(course_program::Column::ProgramId.eq(program_id))
            .into_tuple()
            .all(&db)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        condition = condition.add(course::Column::Id.is_in(course_ids));
    }

    if let Some(search) = &params.search {
        condition = condition.add(
            Condition::any()
                .add(course::Column::Code.contains(search))
                .add(course::Column::Name.contains(search)),
        );
    }

    let query = course::Entity::find()
        .filter(condition)
        .order_by_asc(course::Column::Code);

    let total_items = query
        .clone()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let paginator = query.paginate(&db, params.per_page);
    let courses = paginator
        .fetch_page(params.page - 1) // SeaORM uses 0-based pages
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let course_responses = convert_to_course_responses(&db, courses)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(PaginatedCoursesResponse {
        courses: course_responses,
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(Path(id): Path<Uuid>) -> Result<Json<CourseResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let course = course::Entity::find_by_id(id)
        .one(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match course {
        Some(course) => {
            let mut responses = convert_to_course_responses(&db, vec![course])
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
            Ok(Json(responses.remove(0)))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Attaches areas and program summaries with batched fetches
async fn convert_to_course_responses(
    db: &DatabaseConnection,
    courses: Vec<course::Model>,
) -> Result<Vec<CourseResponse>, DbErr> {
    if courses.is_empty() {
        return Ok(vec![]);
    }

    let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();

    let area_ids: HashSet<Uuid> = courses.iter().filter_map(|c| c.area_id).collect();
    let areas: HashMap<Uuid, area::Model> = if area_ids.is_empty() {
        HashMap::new()
    } else {
        area::Entity::find()
            .filter(area::Column::Id.is_in(area_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect()
    };

    let links = course_program::Entity::find()
        .filter(course_program::Column::CourseId.is_in(course_ids))
        .all(db)
        .await?;
    let program_ids: HashSet<Uuid> = links.iter().map(|l| l.program_id).collect();
    let programs: HashMap<Uuid, program::Model> = if program_ids.is_empty() {
        HashMap::new()
    } else {
        program::Entity::find()
            .filter(program::Column::Id.is_in(program_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    let mut programs_by_course: HashMap<Uuid, Vec<ProgramSummaryResponse>> = HashMap::new();
    for link in links {
        if let Some(program) = programs.get(&link.program_id) {
            programs_by_course
                .entry(link.course_id)
                .or_default()
                .push(ProgramSummaryResponse {
                    id: program.id.to_string(),
                    name: program.name.clone(),
                    code: program.code.clone(),
                });
        }
    }

    Ok(courses
        .into_iter()
        .map(|course| CourseResponse {
            id: course.id.to_string(),
            code: course.code,
            name: course.name,
            course_type: course.course_type.map(|t| t.as_str().to_string()),
            course_type_display: course
                .course_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            credits: course.credits,
            sessions: course.sessions,
            area: course.area_id.and_then(|id| {
                areas.get(&id).map(|a| AreaResponse {
                    id: a.id.to_string(),
                    name: a.name.clone(),
                })
            }),
            programs: programs_by_course.remove(&course.id).unwrap_or_default(),
        })
        .collect())
}
