//! Server lifecycle traits

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Core server trait.
#[async_trait]
pub trait Server: Send + Sync + 'static {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Address the server is bound to, if running
    fn address(&self) -> Option<SocketAddr>;

    fn is_running(&self) -> bool;

    /// Serve until `shutdown` is cancelled, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or hits a fatal I/O error.
    async fn run(&self, shutdown: CancellationToken) -> Result<()>;
}

/// Convenience methods, implemented for every [`Server`].
pub trait ServerExt: Server + Sized {
    /// Run the server on a new task.
    ///
    /// Returns the task handle and the token that stops it.
    fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Run the server until Ctrl+C.
    fn run_with_ctrl_c(self) -> impl std::future::Future<Output = Result<()>> + Send {
        async move {
            let shutdown = crate::shutdown::ShutdownController::with_ctrl_c();
            self.run(shutdown.token()).await
        }
    }
}

impl<T: Server + Sized> ServerExt for T {}
