use crate::analytics::repository::{AnalyticsRepository, InMemoryAnalyticsRepository};
use crate::analytics::usecase::{AnalyticsUseCase, AnalyticsUseCaseImpl};
use crate::error::ApiError;
use actix_web::{get, put, web, HttpResponse};
use shared::{parse_record_id, SearchParams, UpdateCategoryRequest, UpdateCompletedRequest};
use validator::Validate;

fn usecase<R>(repo: &web::Data<R>) -> AnalyticsUseCaseImpl<R>
where
    R: AnalyticsRepository + Clone + 'static,
{
    AnalyticsUseCaseImpl {
        repo: repo.get_ref().clone(),
    }
}

fn search_query(params: &SearchParams) -> Result<&str, ApiError> {
    params.validate()?;
    Ok(params.query())
}

/// Edit endpoints take the id from the path; anything that is not a record id is unknown
fn edit_id(raw: &str) -> Result<u32, ApiError> {
    parse_record_id(raw)
        .ok_or_else(|| ApiError::not_found(&format!("Certification {} not found", raw)))
}

pub async fn get_stats_handler_impl<R>(repo: web::Data<R>) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let stats = usecase(&repo).get_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub async fn get_active_users_handler_impl<R>(
    query: web::Query<SearchParams>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let q = search_query(&query)?;
    let users = usecase(&repo).search_active_users(q).await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_engagement_handler_impl<R>(
    query: web::Query<SearchParams>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let q = search_query(&query)?;
    let rows = usecase(&repo).search_engagement(q).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get_certifications_handler_impl<R>(
    query: web::Query<SearchParams>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let q = search_query(&query)?;
    let records = usecase(&repo).search_certifications(q).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn update_category_handler_impl<R>(
    path: web::Path<String>,
    body: web::Json<UpdateCategoryRequest>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let id = edit_id(&path)?;
    let record = usecase(&repo)
        .update_category(id, body.into_inner().category)
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn update_completed_handler_impl<R>(
    path: web::Path<String>,
    body: web::Json<UpdateCompletedRequest>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let id = edit_id(&path)?;
    let record = usecase(&repo)
        .update_completed(id, body.into_inner().completed)
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn get_credentials_handler_impl<R>(
    path: web::Path<String>,
    query: web::Query<SearchParams>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ApiError>
where
    R: AnalyticsRepository + Clone + 'static,
{
    let q = search_query(&query)?;
    let profile = usecase(&repo).get_applicant_credentials(&path, q).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[utoipa::path(
    get,
    path = "/api/analytics/stats",
    tag = "analytics",
    responses(
        (status = 200, description = "Dashboard stat cards")
    )
)]
#[get("/stats")]
pub async fn get_stats_handler(
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    get_stats_handler_impl(repo).await
}

#[utoipa::path(
    get,
    path = "/api/analytics/active-users",
    tag = "analytics",
    params(("q" = Option<String>, Query, description = "Case-insensitive search over name, company and email")),
    responses(
        (status = 200, description = "Matching active users"),
        (status = 400, description = "Invalid query", body = ApiError)
    )
)]
#[get("/active-users")]
pub async fn get_active_users_handler(
    query: web::Query<SearchParams>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    get_active_users_handler_impl(query, repo).await
}

#[utoipa::path(
    get,
    path = "/api/analytics/engagement",
    tag = "analytics",
    params(("q" = Option<String>, Query, description = "Case-insensitive search, status text included")),
    responses(
        (status = 200, description = "Matching engagement rows with derived status"),
        (status = 400, description = "Invalid query", body = ApiError)
    )
)]
#[get("/engagement")]
pub async fn get_engagement_handler(
    query: web::Query<SearchParams>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    get_engagement_handler_impl(query, repo).await
}

#[utoipa::path(
    get,
    path = "/api/analytics/certifications",
    tag = "analytics",
    params(("q" = Option<String>, Query, description = "Case-insensitive search over name, email, category and completed")),
    responses(
        (status = 200, description = "Matching certification records in their current state"),
        (status = 400, description = "Invalid query", body = ApiError)
    )
)]
#[get("/certifications")]
pub async fn get_certifications_handler(
    query: web::Query<SearchParams>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    get_certifications_handler_impl(query, repo).await
}

#[utoipa::path(
    put,
    path = "/api/analytics/certifications/{id}/category",
    tag = "analytics",
    params(("id" = String, Path, description = "Certification record id")),
    responses(
        (status = 200, description = "Updated certification record"),
        (status = 400, description = "Unknown category or malformed body", body = ApiError),
        (status = 404, description = "No record with this id", body = ApiError)
    )
)]
#[put("/certifications/{id}/category")]
pub async fn update_category_handler(
    path: web::Path<String>,
    body: web::Json<UpdateCategoryRequest>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    update_category_handler_impl(path, body, repo).await
}

#[utoipa::path(
    put,
    path = "/api/analytics/certifications/{id}/completed",
    tag = "analytics",
    params(("id" = String, Path, description = "Certification record id")),
    responses(
        (status = 200, description = "Updated certification record; negative or malformed counts become 0, empty text clears"),
        (status = 400, description = "Malformed body", body = ApiError),
        (status = 404, description = "No record with this id", body = ApiError)
    )
)]
#[put("/certifications/{id}/completed")]
pub async fn update_completed_handler(
    path: web::Path<String>,
    body: web::Json<UpdateCompletedRequest>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    update_completed_handler_impl(path, body, repo).await
}

#[utoipa::path(
    get,
    path = "/api/analytics/certifications/{id}/credentials",
    tag = "analytics",
    params(
        ("id" = String, Path, description = "Certification record id"),
        ("q" = Option<String>, Query, description = "Case-insensitive search over title, issuer, date and description")
    ),
    responses(
        (status = 200, description = "Applicant with matching credentials"),
        (status = 404, description = "Applicant not found", body = ApiError)
    )
)]
#[get("/certifications/{id}/credentials")]
pub async fn get_credentials_handler(
    path: web::Path<String>,
    query: web::Query<SearchParams>,
    repo: web::Data<InMemoryAnalyticsRepository>,
) -> Result<HttpResponse, ApiError> {
    get_credentials_handler_impl(path, query, repo).await
}

/// Mounts the analytics endpoints under `/api/analytics` with `repo` as shared state
pub fn configure_routes(cfg: &mut web::ServiceConfig, repo: InMemoryAnalyticsRepository) {
    log::debug!("Registering /api/analytics routes");
    cfg.service(
        web::scope("/api/analytics")
            .app_data(web::Data::new(repo))
            .service(get_stats_handler)
            .service(get_active_users_handler)
            .service(get_engagement_handler)
            .service(get_certifications_handler)
            .service(update_category_handler)
            .service(update_completed_handler)
            .service(get_credentials_handler),
    );
}
