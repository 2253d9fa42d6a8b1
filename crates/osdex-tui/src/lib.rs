//! osdex TUI — ratatui application shell.

use std::sync::mpsc;

use osdex_core::config::Config;
use osdex_core::loader::{self, AnySource, LoadError};
use osdex_core::types::ServiceOrder;

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// What the background fetch delivers to the event loop.
pub type LoadOutcome = (Vec<ServiceOrder>, Option<LoadError>);

/// Load config, start the background fetch, and run the TUI.
pub fn run() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let theme = theme::Theme::load_default();
    let load_rx = spawn_loader(&config);
    App::new(config, theme, load_rx).run()
}

/// Spawn the one-shot data fetch on a background thread and return the
/// channel the event loop polls for its outcome.
///
/// The fetch is the only asynchronous step in the program, so it gets a
/// private current-thread runtime instead of putting the whole UI behind
/// one. If even the runtime fails to start, the thread falls back to the
/// embedded dataset — same policy as any other load failure.
fn spawn_loader(config: &Config) -> mpsc::Receiver<LoadOutcome> {
    let source = AnySource::from_config(&config.data);
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let outcome = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(loader::load_or_fallback(&source)),
            Err(err) => {
                tracing::warn!(%err, "failed to start fetch runtime; using fallback data");
                (
                    loader::fallback_orders(),
                    Some(LoadError::Transport(err.to_string())),
                )
            }
        };
        // The receiver may already be gone if the user quit immediately.
        let _ = tx.send(outcome);
    });
    rx
}
