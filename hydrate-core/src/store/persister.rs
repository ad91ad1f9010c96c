//! Background writer that hands snapshots to the storage adapter in order.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::storage::KeyValueStorage;

enum PersistCommand {
    Write(String),
    Flush(oneshot::Sender<()>),
}

/// Handle to the writer task. Dropping it lets the task finish its queue and exit.
pub(crate) struct Persister {
    tx: mpsc::UnboundedSender<PersistCommand>,
}

impl Persister {
    /// Spawns the writer task on the current tokio runtime.
    pub(crate) fn spawn<S: KeyValueStorage>(storage: Arc<S>, key: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    PersistCommand::Write(snapshot) => {
                        if let Err(e) = storage.set(&key, snapshot).await {
                            tracing::warn!("Failed to persist '{}': {}", key, e);
                        }
                    }
                    PersistCommand::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            tracing::debug!("Writer for '{}' stopped", key);
        });

        Self { tx }
    }

    /// Queues a snapshot without waiting for it to be written.
    pub(crate) fn write(&self, snapshot: String) {
        if self.tx.send(PersistCommand::Write(snapshot)).is_err() {
            tracing::warn!("Writer task is gone, snapshot dropped");
        }
    }

    /// Waits until every snapshot queued before this call has been handled.
    pub(crate) async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(PersistCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}
