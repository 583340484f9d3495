//! Client round trips against a sandbox server bound to a real port.

use actix_web::{HttpServer, rt, web};
use taskproxy::{
    AppMetrics, PaymentConfig, PaymentError, SandboxState, TaskClient, TaskClientConfig,
    TaskClientError, TaskRequest, TaskStatus, WebhookConfig, create_sandbox_app_with,
    services::LightningClient,
};

fn fast_poll_config() -> TaskClientConfig {
    TaskClientConfig {
        request_timeout_seconds: 5,
        poll_base_delay_ms: 1,
        poll_max_delay_seconds: 1,
        poll_max_attempts: 10,
    }
}

fn sample_request(description: &str) -> TaskRequest {
    TaskRequest {
        description: description.to_string(),
        reward_sats: 2_500,
        tip_percent: 10,
        callback_url: None,
    }
}

/// Bind a sandbox like `main` does: state constructed once, cloned into
/// every worker's app.
async fn spawn_sandbox(workers: usize) -> (String, actix_web::dev::ServerHandle) {
    let state = web::Data::new(SandboxState::new());
    let metrics = web::Data::new(AppMetrics::new().expect("metrics"));
    let webhook_config = web::Data::new(WebhookConfig::default());

    let server = HttpServer::new(move || {
        create_sandbox_app_with(state.clone(), metrics.clone(), webhook_config.clone())
    })
    .workers(workers)
    .bind(("127.0.0.1", 0))
    .expect("bind sandbox");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    rt::spawn(server);

    (format!("http://{addr}"), handle)
}

#[actix_web::test]
async fn broadcast_then_poll_to_completion() {
    let (base_url, handle) = spawn_sandbox(1).await;
    let client = TaskClient::with_base_url(&base_url, fast_poll_config()).unwrap();

    let record = client
        .broadcast(&sample_request("transcode the clip"))
        .await
        .unwrap();
    assert_eq!(record.status, TaskStatus::Pending);

    let finished = client.wait_for_completion(record.id).await.unwrap();
    assert_eq!(finished.status, TaskStatus::Completed);
    assert!(finished.result.is_some());

    handle.stop(true).await;
}

#[actix_web::test]
async fn task_store_is_shared_across_workers() {
    // Every connection may land on a different worker; a task created on one
    // must be visible from all of them.
    let (base_url, handle) = spawn_sandbox(2).await;
    let client = TaskClient::with_base_url(&base_url, fast_poll_config()).unwrap();

    let record = client
        .broadcast(&sample_request("visible from every worker"))
        .await
        .unwrap();

    for attempt in 0..20 {
        // Fresh client per poll so connections spread across workers
        let http = reqwest::Client::new();
        let resp = http
            .get(format!("{base_url}/v1/tasks/{}", record.id))
            .send()
            .await
            .unwrap();
        assert_eq!(
            resp.status().as_u16(),
            200,
            "poll {attempt} lost the task to a per-worker store"
        );
    }

    handle.stop(true).await;
}

#[actix_web::test]
async fn polling_gives_up_when_attempts_run_out() {
    let (base_url, handle) = spawn_sandbox(1).await;

    // One poll is not enough for the sandbox's mock lifecycle to finish
    let config = TaskClientConfig {
        poll_max_attempts: 1,
        ..fast_poll_config()
    };
    let client = TaskClient::with_base_url(&base_url, config).unwrap();

    let record = client
        .broadcast(&sample_request("never finishes in time"))
        .await
        .unwrap();

    let err = client.wait_for_completion(record.id).await.unwrap_err();
    assert!(matches!(err, TaskClientError::Timeout(id) if id == record.id));

    handle.stop(true).await;
}

#[actix_web::test]
async fn poll_budget_counts_total_polls() {
    // The sandbox completes a task on its third poll, so a budget of three
    // succeeds and a budget of two times out. An off-by-one budget (extra
    // initial attempt) would make both succeed.
    let (base_url, handle) = spawn_sandbox(1).await;

    let two_polls = TaskClientConfig {
        poll_max_attempts: 2,
        ..fast_poll_config()
    };
    let client = TaskClient::with_base_url(&base_url, two_polls).unwrap();
    let record = client.broadcast(&sample_request("two polls")).await.unwrap();
    let err = client.wait_for_completion(record.id).await.unwrap_err();
    assert!(matches!(err, TaskClientError::Timeout(_)));

    let three_polls = TaskClientConfig {
        poll_max_attempts: 3,
        ..fast_poll_config()
    };
    let client = TaskClient::with_base_url(&base_url, three_polls).unwrap();
    let record = client
        .broadcast(&sample_request("three polls"))
        .await
        .unwrap();
    let finished = client.wait_for_completion(record.id).await.unwrap();
    assert_eq!(finished.status, TaskStatus::Completed);

    handle.stop(true).await;
}

#[actix_web::test]
async fn unknown_task_surfaces_the_broker_status() {
    let (base_url, handle) = spawn_sandbox(1).await;
    let client = TaskClient::with_base_url(&base_url, fast_poll_config()).unwrap();

    let err = client.poll(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, TaskClientError::Status(status) if status.as_u16() == 404));

    handle.stop(true).await;
}

#[actix_web::test]
async fn unreachable_node_is_a_transport_error() {
    let config = PaymentConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        macaroon_hex: String::new(),
        request_timeout_seconds: 2,
    };
    let client = LightningClient::new(config).unwrap();

    let err = client.pay_invoice("lnbc1notreal").await.unwrap_err();
    assert!(matches!(err, PaymentError::Http(_)));

    let err = client.lookup_invoice("00ff").await.unwrap_err();
    assert!(matches!(err, PaymentError::Http(_)));
}
