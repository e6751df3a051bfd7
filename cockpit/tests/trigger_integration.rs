use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cockpit::config::TriggerConfig;
use cockpit::error::AppError;
use cockpit::trigger::{GithubWorkflowTrigger, TriggerReceipt, UpdateTrigger, request_refresh};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Clone, Default)]
struct CountingTrigger {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl UpdateTrigger for CountingTrigger {
    async fn request_refresh(&self) -> Result<TriggerReceipt, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::TriggerRejected {
                status: 404,
                details: "Not Found".into(),
            });
        }
        Ok(TriggerReceipt {
            message: "ok".into(),
        })
    }
}

#[tokio::test]
async fn request_refresh_forwards_to_trigger() {
    let trigger = CountingTrigger::default();

    let receipt = request_refresh(&trigger).await.unwrap();

    assert_eq!(receipt.message, "ok");
    assert_eq!(trigger.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn request_refresh_surfaces_rejection() {
    let trigger = CountingTrigger {
        fail: true,
        ..Default::default()
    };

    let err = request_refresh(&trigger).await.unwrap_err();
    assert!(matches!(err, AppError::TriggerRejected { status: 404, .. }));
}

/// Single-shot HTTP stub: captures the raw request and answers with `response`.
async fn stub_server(response: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        // Read headers, then the body announced by Content-Length.
        loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
    });

    (format!("http://{addr}"), rx)
}

fn config(api_base: String) -> TriggerConfig {
    TriggerConfig {
        token: Some("ghp_test".into()),
        owner: Some("acme".into()),
        repo: "strategic-cockpit-dashboard".into(),
        workflow: "update_data.yml".into(),
        git_ref: "main".into(),
        api_base,
    }
}

#[tokio::test]
async fn github_trigger_posts_workflow_dispatch() {
    let (base, request) =
        stub_server("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n").await;
    let trigger = GithubWorkflowTrigger::from_config(&config(base)).unwrap();

    let receipt = trigger.request_refresh().await.unwrap();
    let raw = request.await.unwrap();
    let lower = raw.to_ascii_lowercase();

    assert_eq!(receipt.message, "Data refresh triggered successfully");
    assert!(raw.starts_with(
        "POST /repos/acme/strategic-cockpit-dashboard/actions/workflows/update_data.yml/dispatches"
    ));
    assert!(lower.contains("authorization: bearer ghp_test"));
    assert!(lower.contains("accept: application/vnd.github.v3+json"));
    assert!(raw.ends_with(r#"{"ref":"main"}"#));
}

#[tokio::test]
async fn github_trigger_reports_rejection_details() {
    let (base, _request) = stub_server(
        "HTTP/1.1 422 Unprocessable Entity\r\nContent-Length: 24\r\nConnection: close\r\n\r\nNo ref found for: main!!",
    )
    .await;
    let trigger = GithubWorkflowTrigger::from_config(&config(base)).unwrap();

    let err = trigger.request_refresh().await.unwrap_err();

    match err {
        AppError::TriggerRejected { status, details } => {
            assert_eq!(status, 422);
            assert_eq!(details, "No ref found for: main!!");
        }
        other => panic!("unexpected error: {other}"),
    }
}
