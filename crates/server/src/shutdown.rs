//! Graceful shutdown coordination
//!
//! A [`ShutdownController`] owns a `CancellationToken`; servers receive
//! clones of it and stop when it is cancelled.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Clone, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    /// Create a controller that cancels itself on Ctrl+C.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_ctrl_c() -> Self {
        let controller = Self::default();
        let token = controller.token.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown...");
                    token.cancel();
                }
                Err(e) => {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });

        controller
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}
