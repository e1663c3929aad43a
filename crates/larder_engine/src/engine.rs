use std::sync::{mpsc, Arc};
use std::thread;

use larder_core::MealId;
use log::debug;

use crate::catalog::{CatalogClient, CatalogSettings, ReqwestCatalogClient};
use crate::types::{CatalogError, EngineEvent};

enum EngineCommand {
    Search { generation: u64, query: String },
    Filter { generation: u64, category: String },
    Lookup { id: MealId },
}

/// Handle to the background catalog worker. Commands go in over a channel,
/// finished fetches come back as events polled with [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = Arc::new(ReqwestCatalogClient::new(settings)?);
        Ok(Self::with_client(client))
    }

    /// Builds a handle around any catalog client implementation.
    pub fn with_client(client: Arc<dyn CatalogClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, generation: u64, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            generation,
            query: query.into(),
        });
    }

    pub fn in_category(&self, generation: u64, category: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Filter {
            generation,
            category: category.into(),
        });
    }

    pub fn lookup(&self, id: impl Into<MealId>) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup { id: id.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(client: &dyn CatalogClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search { generation, query } => {
            debug!("search fetch generation={} query={:?}", generation, query);
            EngineEvent::ListFetched {
                generation,
                result: client.search(&query).await,
            }
        }
        EngineCommand::Filter {
            generation,
            category,
        } => {
            debug!("category fetch generation={} category={}", generation, category);
            EngineEvent::ListFetched {
                generation,
                result: client.in_category(&category).await,
            }
        }
        EngineCommand::Lookup { id } => {
            debug!("detail fetch id={}", id);
            EngineEvent::DetailFetched {
                result: client.by_id(&id).await,
                id,
            }
        }
    }
}
