// Ticker Cancellation Handle

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::error;

/// Cancellation signal observed by the tick loop
pub(crate) struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Check if cancellation was requested (or the handle is gone)
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait for the cancellation signal
    ///
    /// Also resolves once the handle has been dropped.
    pub(crate) async fn wait(&mut self) {
        let _ = self.rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Exclusive owner of a running tick loop
///
/// `cancel` stops future firings and may be called any number of times.
/// Dropping the handle cancels too, so the timer is released on every exit
/// path of the owner.
pub struct CancellationHandle {
    tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CancellationHandle {
    pub(crate) fn new(tx: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self {
            tx,
            task: Some(task),
        }
    }

    /// Signal the tick loop to stop (idempotent)
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// True once the tick loop has exited, for whatever reason
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the tick loop to exit without cancelling it
    ///
    /// Only returns on its own when the loop stops at expiry; otherwise pair
    /// it with `cancel`. Safe to use as a `select!` branch.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    error!(error = ?e, "Countdown tick loop panicked");
                }
            }
            self.task = None;
        }
    }
}

impl Drop for CancellationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Create a linked handle/token pair for a tick loop task
pub(crate) fn cancellation_channel() -> (watch::Sender<bool>, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (tx, CancelToken { rx })
}
