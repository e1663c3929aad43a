use std::sync::{mpsc, Arc};
use std::thread;

use larder_core::{Effect, Msg, SEARCH_DEBOUNCE};
use larder_engine::{EngineEvent, EngineHandle, FavoritesStore};
use log::warn;

/// Executes controller effects and maps finished engine work back into
/// messages for the update loop.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<FavoritesStore>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, store: Arc<FavoritesStore>, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            engine,
            store,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { token } => {
                    // Stale timers are dropped by the token check in the
                    // update function, so the thread never needs cancelling.
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(SEARCH_DEBOUNCE);
                        let _ = msg_tx.send(Msg::DebounceElapsed { token });
                    });
                }
                Effect::FetchSearch { generation, query } => {
                    self.engine.search(generation, query);
                }
                Effect::FetchCategory {
                    generation,
                    category,
                } => {
                    self.engine.in_category(generation, category.name());
                }
                Effect::LoadNextPage { generation } => {
                    // The window is already cached in state; bounce straight
                    // back through the message queue.
                    let _ = self.msg_tx.send(Msg::NextPageLoaded { generation });
                }
                Effect::FetchDetail { id } => {
                    self.engine.lookup(id);
                }
                Effect::PersistToggle { id } => {
                    if let Err(err) = self.store.toggle(&id) {
                        warn!("Failed to persist favorite toggle for {}: {}", id, err);
                    }
                }
            }
        }
    }

    /// Drains finished engine work. Failures are logged here and degraded
    /// to empty results; the controller treats them like "no data".
    pub fn drain_engine_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(match event {
                EngineEvent::ListFetched { generation, result } => {
                    let meals = result.unwrap_or_else(|err| {
                        warn!("List fetch failed (generation {}): {}", generation, err);
                        Vec::new()
                    });
                    Msg::ResultsLoaded { generation, meals }
                }
                EngineEvent::DetailFetched { id, result } => {
                    let meal = result.unwrap_or_else(|err| {
                        warn!("Detail fetch failed for {}: {}", id, err);
                        None
                    });
                    Msg::DetailLoaded { id, meal }
                }
            });
        }
        msgs
    }
}
