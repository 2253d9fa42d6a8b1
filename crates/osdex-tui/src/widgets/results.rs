//! Results widget — the scrollable pane listing the matching records.
//!
//! Each match is flattened into one row per copyable field: the code row
//! heads the group, the descriptive fields follow indented. The cursor
//! selects a single row; `y` in the App shell copies that row's text.
//!
//! When there is nothing to list — still loading, blank query, no matches —
//! the pane shows a placeholder notice instead. Those states are distinct
//! upstream ([`SearchError`](osdex_core::SearchError)) and each gets its own
//! message; this widget only displays whatever notice it is handed.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move selection up one row |
//! | `↓` / `j` | Move selection down one row |
//! | `PageUp` / `Ctrl+u` | Jump up one page |
//! | `PageDown` / `Ctrl+d` | Jump down one page |

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use osdex_core::types::{Field, ServiceOrder};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// One selectable, copyable row: a single field of one matching order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: Field,
    /// Code of the owning order (styles the group header).
    pub code: String,
    /// The raw field text handed to the clipboard on yank.
    pub text: String,
    /// True for the first row of each order's group.
    pub first_of_order: bool,
}

/// What the pane is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// A placeholder message: loading, not ready, prompt, or no matches.
    Notice(String),
    /// Flattened field rows of the current match list.
    Rows(Vec<FieldRow>),
}

pub struct ResultsState {
    pub view: ResultsView,
    /// Absolute index into the rows of the selected line.
    pub cursor: usize,
    /// Number of rows hidden above the window (top-anchored list).
    pub scroll_offset: usize,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl ResultsState {
    pub fn new(notice: impl Into<String>) -> Self {
        Self {
            view: ResultsView::Notice(notice.into()),
            cursor: 0,
            scroll_offset: 0,
            last_height: Cell::new(40),
        }
    }

    /// Replace the pane contents with a placeholder message.
    pub fn show_notice(&mut self, notice: impl Into<String>) {
        self.view = ResultsView::Notice(notice.into());
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Replace the pane contents with the rows for a fresh match list.
    pub fn set_matches(&mut self, matches: &[ServiceOrder], show_codes: bool) {
        let mut rows = Vec::new();
        for order in matches {
            let group_start = rows.len();
            if show_codes {
                rows.push(FieldRow {
                    field: Field::Code,
                    code: order.code.clone(),
                    text: order.code.clone(),
                    first_of_order: true,
                });
            }
            for field in [Field::Description, Field::SubDescription, Field::ServiceNote] {
                if let Some(text) = order.field(field) {
                    rows.push(FieldRow {
                        field,
                        code: order.code.clone(),
                        text: text.to_string(),
                        first_of_order: rows.len() == group_start,
                    });
                }
            }
        }
        tracing::debug!(orders = matches.len(), rows = rows.len(), "results: rows rebuilt");
        self.view = ResultsView::Rows(rows);
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// The row under the cursor, if the pane is showing rows.
    pub fn selected(&self) -> Option<&FieldRow> {
        match &self.view {
            ResultsView::Rows(rows) => rows.get(self.cursor),
            ResultsView::Notice(_) => None,
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = match &self.view {
            ResultsView::Rows(rows) => rows.len(),
            ResultsView::Notice(_) => return,
        };
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(total - 1);
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
            }
            _ => return,
        }

        // Keep the selection inside the visible window
        let height = self.height();
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        tracing::debug!(
            cursor = self.cursor,
            scroll_offset = self.scroll_offset,
            "results: selection moved"
        );
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    state: &'a ResultsState,
    focused: bool,
    theme: &'a Theme,
    /// The raw query of the last search, used for inline match highlighting.
    query: &'a str,
}

impl<'a> ResultsList<'a> {
    pub fn new(state: &'a ResultsState, focused: bool, theme: &'a Theme, query: &'a str) -> Self {
        Self {
            state,
            focused,
            theme,
            query,
        }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Resultados")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        let rows = match &self.state.view {
            ResultsView::Notice(notice) => {
                let line = Line::from(Span::styled(
                    notice.as_str(),
                    Style::default().add_modifier(Modifier::DIM),
                ));
                Paragraph::new(line).render(inner, buf);
                return;
            }
            ResultsView::Rows(rows) => rows,
        };

        let total = rows.len();
        let start = self.state.scroll_offset.min(total);
        let end = (start + height).min(total);

        let cursor_row: Option<usize> =
            if self.focused && self.state.cursor >= start && self.state.cursor < end {
                Some(self.state.cursor - start)
            } else {
                None
            };

        let lines: Vec<Line<'static>> = rows[start..end]
            .iter()
            .enumerate()
            .map(|(row, field_row)| {
                let mut line = render_row(field_row, self.query, self.theme);
                if Some(row) == cursor_row {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        // Split inner into text (fill) + 1-column scrollbar strip inside the
        // borders, keeping the thumb aligned with the visible rows.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row(row: &FieldRow, query: &str, theme: &Theme) -> Line<'static> {
    if row.field == Field::Code {
        return Line::from(Span::styled(row.text.clone(), theme.code_style(&row.code)));
    }

    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        format!("  {}: ", row.field),
        theme.field_label,
    )];
    spans.extend(highlight_spans(
        &row.text,
        query.trim(),
        theme.field_value,
        theme.search_highlight,
    ));
    Line::from(spans)
}

/// Split `text` into spans with the first ASCII-case-insensitive occurrence
/// of `needle` highlighted.
///
/// Best-effort: ASCII folding preserves byte offsets, so the split is safe;
/// matches that only exist after full normalization (diacritics,
/// punctuation) are shown unhighlighted.
fn highlight_spans(text: &str, needle: &str, base: Style, highlight: Style) -> Vec<Span<'static>> {
    if !needle.is_empty() {
        let haystack = text.to_ascii_lowercase();
        if let Some(at) = haystack.find(&needle.to_ascii_lowercase()) {
            let end = at + needle.len();
            if text.is_char_boundary(at) && text.is_char_boundary(end) {
                return vec![
                    Span::styled(text[..at].to_string(), base),
                    Span::styled(text[at..end].to_string(), highlight),
                    Span::styled(text[end..].to_string(), base),
                ];
            }
        }
    }
    vec![Span::styled(text.to_string(), base)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
