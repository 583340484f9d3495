use actix_web::{HttpServer, web};
use taskproxy::{AppMetrics, SandboxState, WebhookConfig, create_sandbox_app_with};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger (make sure to run with RUST_LOG=info, for example)
    env_logger::init();

    let bind = std::env::var("SANDBOX_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // Shared across all workers; the factory below only clones handles
    let state = web::Data::new(SandboxState::new());
    let metrics = web::Data::new(AppMetrics::new().expect("Failed to create metrics"));
    let webhook_config = web::Data::new(WebhookConfig::from_env());

    // Print a startup message for convenience.
    println!("Sandbox broker running at http://{bind}");

    HttpServer::new(move || {
        create_sandbox_app_with(state.clone(), metrics.clone(), webhook_config.clone())
    })
    .bind(bind)?
    .run()
    .await
}
