use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryCourseResponse {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryProfessorResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliverySectionResponse {
    pub id: String,
    pub name: String,
    pub campus: String,
    pub campus_display: String,
    pub course_year: i16,
    pub intake_id: String,
    pub intake_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDeliveryResponse {
    pub id: String,
    pub course: Option<DeliveryCourseResponse>,
    pub professor: Option<DeliveryProfessorResponse>,
    pub sections: Vec<DeliverySectionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCourseDeliveriesResponse {
    pub course_deliveries: Vec<CourseDeliveryResponse>,
    pub pagination: super::pagination::PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseDeliveryQueryParams {
    #[serde(default = "crate::dtos::pagination::default_page")]
    pub page: u64,

    #[serde(default = "crate::dtos::pagination::default_per_page")]
    pub per_page: u64,

    pub course: Option<Uuid>,

    pub professor: Option<Uuid>,

    /// Only deliveries without an assigned professor (the staffing gaps)
    pub missing_professor: Option<bool>,
}
