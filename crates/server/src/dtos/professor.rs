use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub corporate_email: Option<String>,
    pub phone_number: Option<String>,
    pub campuses: Vec<String>,
    pub availabilities: Vec<String>,
    pub professor_type: String,
    pub professor_type_display: String,
    pub minimum_sessions: i32,
    pub birth_year: Option<i32>,
    pub joined_year: Option<i32>,
    pub linkedin_profile: Option<String>,
    pub accredited: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProfessorsResponse {
    pub professors: Vec<ProfessorResponse>,
    pub pagination: super::pagination::PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ProfessorQueryParams {
    #[serde(default = "crate::dtos::pagination::default_page")]
    pub page: u64,

    #[serde(default = "crate::dtos::pagination::default_per_page")]
    pub per_page: u64,

    /// Matches against names and email addresses
    pub search: Option<String>,

    /// Professor type code, e.g. "f"
    pub professor_type: Option<String>,

    /// Only professors without a corporate address
    pub missing_corporate_email: Option<bool>,
}
