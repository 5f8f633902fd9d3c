use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramResponse {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub school: String,
    pub school_display: String,
    pub program_type: String,
    pub program_type_display: String,
    pub years: i32,
}
