//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The dataset arrives from
//! a background thread (see [`crate::spawn_loader`]); until it does, the
//! store reports [`LoadState::Unloaded`] and searches answer `NotReady`.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        notification::{NotificationBanner, NotificationState},
        query_bar::{QueryBar, QueryBarState},
        results::{ResultsList, ResultsState},
        status_bar::StatusBar,
    },
    LoadOutcome,
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use osdex_core::{
    clipboard::{self, Clipboard, SystemClipboard},
    config::Config,
    store::Store,
    types::ServiceOrder,
    SearchError,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, sync::mpsc, time::Duration};

// ---------------------------------------------------------------------------
// Placeholder messages
// ---------------------------------------------------------------------------

const NOTICE_LOADING: &str = "Carregando dados...";
const NOTICE_PROMPT: &str = "Digite um código ou palavra-chave acima...";
const NOTICE_NOT_READY: &str = "Dados ainda não carregados. Aguarde...";
const NOTICE_EMPTY_QUERY: &str = "Digite algo para buscar.";

fn notice_no_matches(query: &str) -> String {
    format!("Nenhum resultado encontrado para \"{}\".", query.trim())
}

// ---------------------------------------------------------------------------
// Focus + state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    QueryBar,
}

pub struct AppState {
    pub store: Store,
    pub query: QueryBarState,
    pub results: ResultsState,
    pub notification: NotificationState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    /// Match count of the last completed search, shown in the query bar.
    pub match_count: Option<usize>,
    /// Query text of the last completed search, used for inline highlighting.
    pub last_query: String,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        let notification =
            NotificationState::new(Duration::from_millis(config.ui.notification_ms));
        Self {
            store: Store::new(),
            query: QueryBarState::default(),
            results: ResultsState::new(NOTICE_LOADING),
            notification,
            focus: Focus::QueryBar,
            theme,
            config,
            show_help: false,
            match_count: None,
            last_query: String::new(),
            quit: false,
        }
    }

    /// Accept the dataset delivered by the background loader.
    pub fn publish(&mut self, outcome: LoadOutcome) {
        let (orders, degraded) = outcome;
        self.store.publish(orders, degraded);
        if let Some(err) = self.store.load_error() {
            self.notification
                .error(format!("Falha ao carregar dados: {err}. Usando dados locais."));
        }
        // Only swap the placeholder if the user has not searched yet
        if self.match_count.is_none() && self.last_query.is_empty() {
            self.results.show_notice(NOTICE_PROMPT);
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    clipboard: SystemClipboard,
    load_rx: mpsc::Receiver<LoadOutcome>,
}

impl App {
    pub fn new(config: Config, theme: Theme, load_rx: mpsc::Receiver<LoadOutcome>) -> Self {
        App {
            state: AppState::new(config, theme),
            clipboard: SystemClipboard,
            load_rx,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            if let Ok(outcome) = self.load_rx.try_recv() {
                tracing::debug!(records = outcome.0.len(), "dataset received");
                self.state.publish(outcome);
            }
            self.state.notification.tick();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping while typing a query
                        let app_event = if self.state.focus == Focus::QueryBar {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            handle(&mut self.state, &mut self.clipboard, ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            handle(&mut self.state, &mut self.clipboard, ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Event handling
// ---------------------------------------------------------------------------

fn handle(s: &mut AppState, clipboard: &mut impl Clipboard, event: AppEvent) {
    // Help popup intercepts all events; only close keys pass through.
    if s.show_help {
        match event {
            AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            _ => {}
        }
        return;
    }

    match event {
        // Toggle help (only when not typing in the query bar)
        AppEvent::Char('?') if s.focus != Focus::QueryBar => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }

        AppEvent::Quit => {
            tracing::debug!("quit");
            s.quit = true;
        }

        // Return focus from the query bar
        AppEvent::Escape => {
            if s.focus == Focus::QueryBar {
                tracing::debug!("focus: QueryBar -> Results");
                s.focus = Focus::Results;
            }
        }

        AppEvent::FocusNext => {
            s.focus = match s.focus {
                Focus::Results => Focus::QueryBar,
                Focus::QueryBar => Focus::Results,
            };
            tracing::debug!(to = ?s.focus, "focus cycle");
        }

        AppEvent::QueryFocus => {
            tracing::debug!("focus -> QueryBar");
            s.focus = Focus::QueryBar;
        }

        AppEvent::Enter if s.focus == Focus::QueryBar => {
            run_search(s);
        }

        AppEvent::Yank if s.focus == Focus::Results => {
            yank_selected(s, clipboard);
        }

        // Terminal resize is handled automatically by ratatui
        AppEvent::Resize(_, _) => {}

        other => match s.focus {
            Focus::Results => s.results.handle(&other),
            Focus::QueryBar => s.query.handle(&other),
        },
    }
}

/// Run the search for the current query text and update the results pane.
///
/// Each failure mode gets its own placeholder so "still loading", "type
/// something" and "nothing matched" never look alike.
fn run_search(s: &mut AppState) {
    let query = s.query.query.clone();
    match s.store.search(&query) {
        Ok(matches) => {
            let owned: Vec<ServiceOrder> = matches.into_iter().cloned().collect();
            tracing::info!(query = %query, matches = owned.len(), "search done");
            s.match_count = Some(owned.len());
            s.last_query = query.clone();
            if owned.is_empty() {
                s.results.show_notice(notice_no_matches(&query));
            } else {
                s.results.set_matches(&owned, s.config.ui.show_codes);
                s.focus = Focus::Results;
            }
        }
        Err(SearchError::NotReady) => {
            tracing::debug!("search before dataset arrived");
            s.match_count = None;
            s.results.show_notice(NOTICE_NOT_READY);
        }
        Err(SearchError::EmptyQuery) => {
            tracing::debug!("search with empty query");
            s.match_count = None;
            s.results.show_notice(NOTICE_EMPTY_QUERY);
        }
    }
}

/// Copy the selected field to the clipboard and flash a confirmation.
fn yank_selected(s: &mut AppState, clipboard: &mut impl Clipboard) {
    let Some(row) = s.results.selected() else {
        return;
    };
    let field = row.field;
    let text = row.text.clone();
    match clipboard.write(&text) {
        Ok(()) => {
            tracing::debug!(?field, "field copied");
            s.notification.info(clipboard::confirmation(field));
        }
        Err(err) => {
            tracing::warn!(%err, "clipboard write failed");
            s.notification.error("Não foi possível copiar.");
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | results | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(
        StatusBar::new(
            state.store.status(),
            state.store.orders().len(),
            state.store.load_error().is_some(),
            &state.theme,
        ),
        vert[0],
    );
    frame.render_widget(
        ResultsList::new(
            &state.results,
            state.focus == Focus::Results,
            &state.theme,
            &state.last_query,
        ),
        vert[1],
    );
    frame.render_widget(
        QueryBar::new(
            &state.query,
            state.focus == Focus::QueryBar,
            &state.theme,
            state.match_count,
        ),
        vert[2],
    );

    // Notification banner overlays the top row of the results pane
    frame.render_widget(NotificationBanner::new(&state.notification, &state.theme), vert[1]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, true, &state.theme, state.match_count);
        let (cx, cy) = qb.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::results::ResultsView;
    use osdex_core::clipboard::MemoryClipboard;
    use osdex_core::types::Field;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        AppState::new(Config::defaults(), Theme::load_default())
    }

    fn dataset() -> Vec<ServiceOrder> {
        vec![
            ServiceOrder {
                code: "F003".to_string(),
                description: "Bucha".to_string(),
                sub_description: None,
                service_note: Some("Troca da junta".to_string()),
            },
            ServiceOrder {
                code: "F008".to_string(),
                description: "Bicos injetores".to_string(),
                sub_description: Some("Limpeza".to_string()),
                service_note: None,
            },
        ]
    }

    fn type_query(s: &mut AppState, clipboard: &mut MemoryClipboard, text: &str) {
        s.focus = Focus::QueryBar;
        for c in text.chars() {
            handle(s, clipboard, AppEvent::Char(c));
        }
    }

    #[test]
    fn quit_sets_flag() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.focus = Focus::Results;
        handle(&mut s, &mut cb, AppEvent::Quit);
        assert!(s.quit);
    }

    #[test]
    fn search_before_load_reports_not_ready() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        type_query(&mut s, &mut cb, "bucha");
        handle(&mut s, &mut cb, AppEvent::Enter);
        assert_eq!(s.results.view, ResultsView::Notice(NOTICE_NOT_READY.to_string()));
        assert_eq!(s.match_count, None);
    }

    #[test]
    fn empty_query_has_its_own_notice() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.publish((dataset(), None));
        type_query(&mut s, &mut cb, "   ");
        handle(&mut s, &mut cb, AppEvent::Enter);
        assert_eq!(
            s.results.view,
            ResultsView::Notice(NOTICE_EMPTY_QUERY.to_string())
        );
    }

    #[test]
    fn successful_search_fills_results_and_moves_focus() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.publish((dataset(), None));
        type_query(&mut s, &mut cb, "junta");
        handle(&mut s, &mut cb, AppEvent::Enter);

        assert_eq!(s.match_count, Some(1));
        assert_eq!(s.focus, Focus::Results);
        let ResultsView::Rows(rows) = &s.results.view else {
            panic!("expected rows");
        };
        assert!(rows.iter().any(|r| r.code == "F003"));
    }

    #[test]
    fn no_matches_notice_includes_query() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.publish((dataset(), None));
        type_query(&mut s, &mut cb, "xyz123");
        handle(&mut s, &mut cb, AppEvent::Enter);
        assert_eq!(s.match_count, Some(0));
        assert_eq!(
            s.results.view,
            ResultsView::Notice("Nenhum resultado encontrado para \"xyz123\".".to_string())
        );
    }

    #[test]
    fn yank_copies_selected_field() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.publish((dataset(), None));
        type_query(&mut s, &mut cb, "bucha");
        handle(&mut s, &mut cb, AppEvent::Enter);

        // Move off the code row onto the description
        handle(&mut s, &mut cb, AppEvent::Nav(crate::event::Direction::Down));
        handle(&mut s, &mut cb, AppEvent::Yank);

        assert_eq!(cb.contents.as_deref(), Some("Bucha"));
        let (msg, _) = s.notification.message().expect("confirmation shown");
        assert_eq!(msg, clipboard::confirmation(Field::Description));
    }

    #[test]
    fn publish_swaps_loading_placeholder_for_prompt() {
        let mut s = state();
        assert_eq!(s.results.view, ResultsView::Notice(NOTICE_LOADING.to_string()));
        s.publish((dataset(), None));
        assert_eq!(s.results.view, ResultsView::Notice(NOTICE_PROMPT.to_string()));
    }

    #[test]
    fn degraded_load_raises_error_notification() {
        use osdex_core::LoadError;
        let mut s = state();
        s.publish((dataset(), Some(LoadError::Transport("timeout".to_string()))));
        let (msg, severity) = s.notification.message().expect("error shown");
        assert!(msg.contains("dados locais"));
        assert_eq!(severity, crate::widgets::notification::Severity::Error);
    }

    #[test]
    fn help_popup_blocks_other_events() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.focus = Focus::Results;
        handle(&mut s, &mut cb, AppEvent::Char('?'));
        assert!(s.show_help);
        handle(&mut s, &mut cb, AppEvent::QueryFocus);
        assert_eq!(s.focus, Focus::Results, "events are swallowed while help is open");
        handle(&mut s, &mut cb, AppEvent::Escape);
        assert!(!s.show_help);
    }

    #[test]
    fn escape_returns_focus_from_query_bar() {
        let mut s = state();
        let mut cb = MemoryClipboard::default();
        s.focus = Focus::QueryBar;
        handle(&mut s, &mut cb, AppEvent::Escape);
        assert_eq!(s.focus, Focus::Results);
    }
}
