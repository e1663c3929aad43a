use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use larder_core::{update, AppState, Msg};
use larder_engine::{CatalogSettings, EngineHandle, FavoritesStore};
use log::info;

use crate::effects::EffectRunner;
use crate::input::{self, Intent};
use crate::render;

const FAVORITES_FILE: &str = "favorites.json";

/// How long the main loop waits on user input before pumping engine
/// events and timer messages again.
const PUMP_INTERVAL: Duration = Duration::from_millis(50);

pub fn run() -> anyhow::Result<()> {
    let data_dir = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("data");
    let store = Arc::new(FavoritesStore::new(data_dir.join(FAVORITES_FILE)));

    let engine =
        EngineHandle::new(CatalogSettings::default()).context("failed to build catalog client")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, store.clone(), msg_tx);

    let (intent_tx, intent_rx) = mpsc::channel::<Intent>();
    thread::spawn(move || input::read_loop(intent_tx));

    render::help();

    let mut state = AppState::new();
    state = dispatch(state, Msg::FavoritesRestored(store.list()), &runner);
    state = dispatch(state, Msg::Started, &runner);

    loop {
        for msg in runner.drain_engine_events() {
            state = dispatch(state, msg, &runner);
        }
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &runner);
        }

        match intent_rx.recv_timeout(PUMP_INTERVAL) {
            Ok(Intent::Quit) => break,
            Ok(Intent::ShowFavorites) => render::favorites(&store.list(), &state.view()),
            Ok(Intent::Core(msg)) => state = dispatch(state, msg, &runner),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("Shutting down");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        render::view(&state.view());
    }
    state
}
