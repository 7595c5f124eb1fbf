use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware logging one line per request: method, path, status code
/// and handling time.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let millis = start.elapsed().as_millis();
    if response.status().is_server_error() {
        tracing::error!("{} {} -> {} in {}ms", method, path, status, millis);
    } else {
        tracing::info!("{} {} -> {} in {}ms", method, path, status, millis);
    }
    response
}
