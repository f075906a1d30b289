//! Shutdown coordination for the dev server.

use std::sync::Arc;

use tokio::sync::watch;

/// Stop flag shared by the signal task and the server.
///
/// The flag is sticky: a `wait` started after `trigger` resolves at once.
#[derive(Debug, Clone)]
pub struct Shutdown {
    stopped: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self {
            stopped: Arc::new(stopped),
        }
    }

    /// Ask the server to stop accepting and drain.
    pub fn trigger(&self) {
        self.stopped.send_replace(true);
    }

    /// Resolves once `trigger` has been called on any clone.
    pub async fn wait(self) {
        let mut rx = self.stopped.subscribe();
        // Err means every sender is gone, which cannot happen while `self` lives.
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_resolves_after_trigger() {
        let shutdown = Shutdown::new();
        let waiter = tokio::spawn(shutdown.clone().wait());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("wait should resolve after trigger")
            .unwrap();
    }

    #[tokio::test]
    async fn test_trigger_before_wait_is_not_lost() {
        let shutdown = Shutdown::default();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), shutdown.wait())
            .await
            .expect("late waiter should see the earlier trigger");
    }
}
