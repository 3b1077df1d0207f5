use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;
use crate::error::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        crate::analytics::controller::get_stats_handler,
        crate::analytics::controller::get_active_users_handler,
        crate::analytics::controller::get_engagement_handler,
        crate::analytics::controller::get_certifications_handler,
        crate::analytics::controller::update_category_handler,
        crate::analytics::controller::update_completed_handler,
        crate::analytics::controller::get_credentials_handler,
    ),
    components(schemas(
        crate::health::HealthResponse,
        ApiError,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "analytics", description = "Dashboard statistics, engagement and certification review"),
    ),
    info(
        title = "Alumni Portal Admin API",
        description = "JSON API behind the alumni portal admin dashboard.\n\nList endpoints accept an optional `q` query parameter for case-insensitive substring search.",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:50002", description = "Development server"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
