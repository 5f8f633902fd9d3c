use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct AreaResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramSummaryResponse {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub course_type: Option<String>,
    pub course_type_display: String,
    pub credits: f64,
    pub sessions: i32,
    pub area: Option<AreaResponse>,
    pub programs: Vec<ProgramSummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub pagination: super::pagination::PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "crate::dtos::pagination::default_page")]
    pub page: u64,

    #[serde(default = "crate::dtos::pagination::default_per_page")]
    pub per_page: u64,

    /// Matches against course code and name
    pub search: Option<String>,

    /// Course type code, e.g. "OB"
    pub course_type: Option<String>,

    pub area: Option<Uuid>,

    pub program: Option<Uuid>,
}
