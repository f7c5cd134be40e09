// Worker Shutdown Token (the process-wide stop signal)

use std::sync::Arc;
use tokio::sync::watch;

/// Shutdown signal observed cooperatively by every loop
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for shutdown signal (returns immediately if already set)
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }
}

/// Shutdown sender (cloneable stop handle)
#[derive(Clone)]
pub struct ShutdownSender {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSender {
    /// Signal shutdown to all loops
    ///
    /// Returns `true` only for the call that flipped the signal; repeated
    /// calls are no-ops.
    pub fn shutdown(&self) -> bool {
        self.tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        })
    }

    pub fn is_shutdown(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Create a shutdown channel
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx: Arc::new(tx) }, ShutdownToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_initially_running() {
        let (tx, token) = shutdown_channel();
        assert!(!tx.is_shutdown());
        assert!(!token.is_shutdown());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (tx, token) = shutdown_channel();
        let other = tx.clone();

        assert!(tx.shutdown());
        assert!(!tx.shutdown());
        assert!(!other.shutdown());

        assert!(token.is_shutdown());
        assert!(tx.is_shutdown());
    }

    #[tokio::test]
    async fn test_wait_returns_when_already_set() {
        let (tx, mut token) = shutdown_channel();
        tx.shutdown();
        tokio::time::timeout(Duration::from_secs(1), token.wait())
            .await
            .expect("wait should not block once shutdown is set");
    }

    #[tokio::test]
    async fn test_wait_wakes_on_shutdown() {
        let (tx, token) = shutdown_channel();
        let mut waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });

        tokio::task::yield_now().await;
        tx.shutdown();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake")
            .expect("waiter task panicked");
        assert!(token.is_shutdown());
    }
}
