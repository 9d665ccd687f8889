#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Liveness probe", body = String, content_type = "text/plain"),
    ),
    tag = "Health"
)]
pub async fn health_check() -> &'static str {
    "Server is healthy!"
}
