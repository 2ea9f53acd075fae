use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::format_thousands;

/// HTTP request logging middleware
///
/// Prints time, duration (ms), response size, status, method and path
/// to the console.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // buffer the body to get its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {}: failed to read response body: {}", method, uri.path(), e);
            println!(
                "{}",
                log_line(start.elapsed().as_millis(), "error", parts.status.as_u16(), method.as_str(), uri.path())
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = format_thousands(bytes.len() as i64, '.');
    println!(
        "{}",
        log_line(start.elapsed().as_millis(), &size, parts.status.as_u16(), method.as_str(), uri.path())
    );
    tracing::debug!(status = parts.status.as_u16(), %method, path = uri.path(), bytes = bytes.len());

    Response::from_parts(parts, Body::from(bytes))
}

/// Console log line; the time is cyan for 200 and brown otherwise
fn log_line(millis: u128, size: &str, status: u16, method: &str, path: &str) -> String {
    let color_code = if status == 200 { "36" } else { "33" };
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status,
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_layout() {
        let line = log_line(12, "1.234", 200, "GET", "/api/a001/wards");
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("|    12ms |"));
        assert!(line.ends_with("200    GET /api/a001/wards"));

        let line = log_line(3, "error", 404, "GET", "/x");
        assert!(line.starts_with("\x1b[33m"));
    }
}
