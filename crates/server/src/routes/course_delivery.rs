use crate::dtos::course_delivery::{
    CourseDeliveryQueryParams, CourseDeliveryResponse, DeliveryCourseResponse,
    DeliveryProfessorResponse, DeliverySectionResponse, PaginatedCourseDeliveriesResponse,
};
use crate::dtos::pagination::PaginationMeta;
use axum::{Json, extract::Query, http::StatusCode};
use database::{
    db::create_connection,
    entities::course_delivery,
    services::query_delivery::{DeliveryQueryService, DeliveryWithRelations},
};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

/// Get paginated list of course deliveries with their related rows
#[utoipa::path(
    get,
    path = "/api/course-deliveries",
    params(CourseDeliveryQueryParams),
    responses(
        (status = 200, description = "List of course deliveries retrieved successfully", body = PaginatedCourseDeliveriesResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Course Deliveries"
)]
pub async fn get_course_deliveries(
    Query(params): Query<CourseDeliveryQueryParams>,
) -> Result<Json<PaginatedCourseDeliveriesResponse>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut condition = Condition::all();

    if let Some(course_id) = params.course {
        condition = condition.add(course_delivery::Column::CourseId.eq(course_id));
    }

    if let Some(professor_id) = params.professor {
        condition = condition.add(course_delivery::Column::ProfessorId.eq(professor_id));
    }

    if let Some(missing) = params.missing_professor {
        condition = if missing {
            condition.add(course_delivery::Column::ProfessorId.is_null())
        } else {
            condition.add(course_delivery::Column::ProfessorId.is_not_null())
        };
    }

    let query = course_delivery::Entity::find()
        .filter(condition)
        .order_by_desc(course_delivery::Column::CreatedAt);

    let total_items = query
        .clone()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let deliveries = query
        .paginate(&db, params.per_page)
        .fetch_page(params.page - 1)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // relations for the current page only, all batched
    let bundles = DeliveryQueryService::load_bundles(&db, deliveries)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(PaginatedCourseDeliveriesResponse {
        course_deliveries: bundles.iter().map(convert_to_delivery_response).collect(),
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}

fn convert_to_delivery_response(bundle: &DeliveryWithRelations) -> CourseDeliveryResponse {
    CourseDeliveryResponse {
        id: bundle.delivery.id.to_string(),
        course: bundle.course.as_ref().map(|course| DeliveryCourseResponse {
            id: course.id.to_string(),
            code: course.code.clone(),
            name: course.name.clone(),
        }),
        professor: bundle
            .professor
            .as_ref()
            .map(|professor| DeliveryProfessorResponse {
                id: professor.id.to_string(),
                name: professor.display_name(),
                email: professor.contact_email().to_string(),
            }),
        sections: bundle
            .sections
            .iter()
            .map(|section| DeliverySectionResponse {
                id: section.section.id.to_string(),
                name: section.section.name.clone(),
                campus: section.section.campus.as_str().to_string(),
                campus_display: section.section.campus.label().to_string(),
                course_year: section.section.course_year,
                intake_id: section.intake.id.to_string(),
                intake_name: section.intake.name.clone(),
            })
            .collect(),
    }
}
