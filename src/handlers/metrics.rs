//! Metrics endpoint handler.

use crate::services::AppMetrics;
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};

/// Prometheus metrics endpoint
///
/// Returns Prometheus-formatted metrics; typically scraped by monitoring
/// systems.
pub async fn get_metrics(req: HttpRequest) -> Result<HttpResponse, Error> {
    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        match metrics.render() {
            Ok(output) => Ok(HttpResponse::Ok()
                .content_type("text/plain; version=0.0.4; charset=utf-8")
                .body(output)),
            Err(e) => Err(actix_web::error::ErrorInternalServerError(format!(
                "Failed to render metrics: {e}"
            ))),
        }
    } else {
        Err(actix_web::error::ErrorServiceUnavailable(
            "Metrics not available",
        ))
    }
}
