use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::{
    core::store::{ShowStore, StoreError},
    show::ShowRecord,
    types::{Revision, ShowIndex},
};

use super::events::ShowEvent;

/// Failure of a call made through [`ShowLogHandle`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The runtime loop has shut down.
    #[error("show runtime is no longer running")]
    ChannelClosed,
}

/// Sizing for the runtime's command queue and event broadcast.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pending commands buffered before callers wait.
    pub command_queue_bound: usize,
    /// Events retained for slow subscribers before they observe lag.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Cloneable handle to the single-writer show collection.
///
/// Every screen holds its own clone; all of them talk to the same store.
#[derive(Clone)]
pub struct ShowLogHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<ShowEvent>,
}

enum Command {
    Add {
        record: ShowRecord,
        resp: oneshot::Sender<ShowIndex>,
    },
    ReplaceAt {
        index: ShowIndex,
        record: ShowRecord,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    RemoveAt {
        index: ShowIndex,
        resp: oneshot::Sender<Result<(), RuntimeError>>,
    },
    List {
        resp: oneshot::Sender<Vec<ShowRecord>>,
    },
    Get {
        index: ShowIndex,
        resp: oneshot::Sender<Option<ShowRecord>>,
    },
    Len {
        resp: oneshot::Sender<usize>,
    },
    Revision {
        resp: oneshot::Sender<Revision>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `store` into a runtime task and returns a handle to it.
///
/// Commands are processed strictly one at a time, so each call is atomic with respect
/// to every other. Must be called from within a tokio runtime.
pub fn spawn_showlog(store: ShowStore, config: RuntimeConfig) -> ShowLogHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<ShowEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut store = store;
        info!(len = store.len(), "show runtime started");

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut store, &events_tx_loop) {
                break;
            }
        }

        info!(len = store.len(), revision = store.revision(), "show runtime stopped");
    });

    ShowLogHandle { cmd_tx, events_tx }
}

impl ShowLogHandle {
    /// Subscribes to mutation events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ShowEvent> {
        self.events_tx.subscribe()
    }

    /// Appends `record`, returning its index.
    pub async fn add(&self, record: ShowRecord) -> Result<ShowIndex, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Add { record, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Replaces the show at `index`.
    pub async fn replace_at(
        &self,
        index: ShowIndex,
        record: ShowRecord,
    ) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ReplaceAt {
            index,
            record,
            resp: tx,
        })
        .await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Removes the show at `index`.
    pub async fn remove_at(&self, index: ShowIndex) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::RemoveAt { index, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Snapshot of every show in collection order.
    pub async fn list(&self) -> Result<Vec<ShowRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::List { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Copy of the show at `index`, if present.
    pub async fn get(&self, index: ShowIndex) -> Result<Option<ShowRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Get { index, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Current number of shows.
    pub async fn len(&self) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Len { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Current store revision.
    pub async fn revision(&self) -> Result<Revision, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Revision { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Stops the runtime loop and drops the collection.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Shutdown { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// Applies one command; returns true when the loop should stop.
fn handle_command(
    cmd: Command,
    store: &mut ShowStore,
    events_tx: &broadcast::Sender<ShowEvent>,
) -> bool {
    match cmd {
        Command::Add { record, resp } => {
            let index = store.add(record);
            let _ = events_tx.send(ShowEvent::Added {
                index,
                revision: store.revision(),
            });
            let _ = resp.send(index);
        }
        Command::ReplaceAt { index, record, resp } => {
            let res = store
                .replace_at(index, record)
                .map(|_| {
                    let _ = events_tx.send(ShowEvent::Replaced {
                        index,
                        revision: store.revision(),
                    });
                })
                .map_err(RuntimeError::from);
            let _ = resp.send(res);
        }
        Command::RemoveAt { index, resp } => {
            let res = store
                .remove_at(index)
                .map(|_| {
                    let _ = events_tx.send(ShowEvent::Removed {
                        index,
                        revision: store.revision(),
                    });
                })
                .map_err(RuntimeError::from);
            let _ = resp.send(res);
        }
        Command::List { resp } => {
            let _ = resp.send(store.list_cloned());
        }
        Command::Get { index, resp } => {
            let _ = resp.send(store.get_cloned(index));
        }
        Command::Len { resp } => {
            let _ = resp.send(store.len());
        }
        Command::Revision { resp } => {
            let _ = resp.send(store.revision());
        }
        Command::Shutdown { resp } => {
            debug!("show runtime shutdown requested");
            let _ = resp.send(());
            return true;
        }
    }

    false
}
