use std::path::PathBuf;
use std::process::Output;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

/// A request body captured by the mock deployment
#[derive(Debug, Clone)]
pub struct Received {
    pub route: String,
    pub body: Value,
}

struct MockState {
    status: StatusCode,
    reply: Value,
    received: Mutex<Vec<Received>>,
}

/// Stand-in for a Convex deployment answering every function call the same way
pub struct MockConvex {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockConvex {
    pub async fn start(status: StatusCode, reply: Value) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(MockState {
            status,
            reply,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/mutation", post(record))
            .route("/api/query", post(record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { base_url, state })
    }

    pub fn received(&self) -> Vec<Received> {
        self.state.received.lock().unwrap().clone()
    }

    pub fn single(&self) -> Received {
        let received = self.received();
        assert_eq!(received.len(), 1, "expected exactly one request, got {:?}", received);
        received.into_iter().next().unwrap()
    }
}

async fn record(State(state): State<Arc<MockState>>, uri: Uri, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(Received {
        route: uri.path().to_string(),
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// Env file path that is guaranteed not to exist
pub fn missing_env_file() -> PathBuf {
    std::env::temp_dir().join(format!("convex-todo-missing-{}.env", std::process::id()))
}

/// Run the compiled binary with a controlled environment
pub async fn run_cli(convex_url: Option<&str>, args: &[&str]) -> Result<Output> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_convex-todo"));
    cmd.current_dir(std::env::temp_dir())
        .env_remove("CONVEX_URL")
        .env_remove("CONVEX_TIMEOUT_SECS")
        .env_remove("CLI_VERBOSE")
        .env("RUST_LOG", "off")
        .args(args);

    if !args.contains(&"--env-file") {
        cmd.arg("--env-file").arg(missing_env_file());
    }
    if let Some(url) = convex_url {
        cmd.env("CONVEX_URL", url);
    }

    cmd.output().await.context("failed to run convex-todo binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
