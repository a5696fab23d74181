use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::shell::http;
use crate::shell::state::AppState;

/// Serves the fixture application on an ephemeral local port for the
/// duration of a test.
pub struct FixtureServer {
    addr: SocketAddr,
    state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
    serve_task: JoinHandle<()>,
}

impl FixtureServer {
    pub async fn start() -> anyhow::Result<Self> {
        let state = AppState::in_memory();
        let app = http::router(state.clone()).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown, rx) = oneshot::channel();
        let serve_task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = rx.await;
            });
            if let Err(err) = serve.await {
                tracing::error!(%err, "fixture server stopped with an error");
            }
        });

        tracing::info!(%addr, "fixture server listening");
        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown),
            serve_task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Application state behind the server, for asserting side effects.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let _ = (&mut self.serve_task).await;
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
