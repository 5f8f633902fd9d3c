mod doc;
mod dtos;
mod routes;
mod utils;

use axum::{Router, routing::get};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::routes::{
    auth, course, course_delivery, current_intakes, delivery_overview, health, intake, professor,
    program, program_delivery, root,
};
use crate::utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let issuer_url = std::env::var("OIDC_ISSUER_URL").expect("OIDC_ISSUER_URL is not set");

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(&issuer_url)
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    let api_routes = Router::new()
        .route("/auth", get(auth::auth))
        .route("/courses", get(course::get_courses))
        .route("/courses/{id}", get(course::get_course_by_id))
        .route("/professors", get(professor::get_professors))
        .route("/professors/{id}", get(professor::get_professor_by_id))
        .route("/programs", get(program::get_programs))
        .route("/intakes", get(intake::get_intakes))
        .route(
            "/course-deliveries",
            get(course_delivery::get_course_deliveries),
        )
        .route(
            "/current-intakes",
            get(current_intakes::get_current_intakes),
        )
        .route(
            "/program-delivery/{program_id}/{intake_id}",
            get(program_delivery::get_program_intake_overview),
        )
        .route(
            "/program-delivery/{program_id}/tables",
            get(program_delivery::get_program_overview_tables),
        )
        .route(
            "/delivery-overview",
            get(delivery_overview::get_delivery_overview),
        )
        .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(CompressionLayer::new());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
