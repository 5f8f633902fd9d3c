use crate::routes::{
    auth, course, course_delivery, current_intakes, delivery_overview, health, intake, professor,
    program, program_delivery, root,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::auth,
        course::get_courses,
        course::get_course_by_id,
        professor::get_professors,
        professor::get_professor_by_id,
        program::get_programs,
        intake::get_intakes,
        course_delivery::get_course_deliveries,
        current_intakes::get_current_intakes,
        program_delivery::get_program_intake_overview,
        program_delivery::get_program_overview_tables,
        delivery_overview::get_delivery_overview
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Professors", description = "Professor master-data endpoints"),
        (name = "Programs", description = "Program master-data endpoints"),
        (name = "Intakes", description = "Intake master-data endpoints"),
        (name = "Course Deliveries", description = "Course delivery assignment endpoints"),
        (name = "Reports", description = "Staffing gap and delivery overview reports"),
    ),
    info(
        title = "Delivery Planning API",
        version = "1.0.0",
        description = "University professor and course-delivery planning API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
