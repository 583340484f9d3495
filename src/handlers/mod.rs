//! HTTP request handlers for the sandbox server.
//!
//! The sandbox mimics the production broker for local development: an
//! in-memory task store behind the same REST surface, plus the inbound
//! webhook receiver that exercises the verification core.

pub mod health;
pub mod metrics;
pub mod tasks;
pub mod version;
pub mod webhook;

pub use health::*;
pub use metrics::*;
pub use tasks::*;
pub use version::*;
pub use webhook::*;

use crate::{config::WebhookConfig, services::AppMetrics};
use actix_web::{App, web};

/// Build the sandbox application around already-shared state.
///
/// `HttpServer` invokes its app factory once per worker, so the task store
/// and metrics registry must be constructed once and cloned into each
/// worker; building them inside the factory would give every worker a
/// private store and make create→poll flake across connections.
pub fn create_sandbox_app_with(
    state: web::Data<SandboxState>,
    metrics: web::Data<AppMetrics>,
    webhook_config: web::Data<WebhookConfig>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(webhook_config)
        .app_data(metrics)
        .app_data(state)
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/v1/tasks").route(web::post().to(create_task)))
        .service(web::resource("/v1/tasks/{id}").route(web::get().to(get_task)))
        .service(web::resource("/webhooks/task").route(web::post().to(receive_task_event)))
}

/// Build a self-contained sandbox application with default configuration.
///
/// Convenient for `test::init_service`, which runs a single in-process
/// service. Multi-worker servers must share state across workers instead:
/// construct it once and hand clones to [`create_sandbox_app_with`] from the
/// factory closure, as `main` does.
pub fn create_sandbox_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = AppMetrics::new().expect("Failed to create metrics");

    create_sandbox_app_with(
        web::Data::new(SandboxState::new()),
        web::Data::new(metrics),
        web::Data::new(WebhookConfig::from_env()),
    )
}
