//! Version information endpoint handler.

use crate::models::VersionResponse;
use actix_web::web;

/// Version information endpoint
///
/// Returns the crate version, commit hash, and build time. Commit and build
/// time fall back to "unknown" when the build ran outside a git checkout.
pub async fn version() -> web::Json<VersionResponse> {
    web::Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown").to_string(),
        build_time: option_env!("VERGEN_BUILD_TIMESTAMP")
            .unwrap_or("unknown")
            .to_string(),
    })
}
