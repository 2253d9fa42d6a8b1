//! Status bar — the 1-line strip at the top of the screen.
//!
//! Shows the application name, the dataset state (loading / how many
//! records, and whether the embedded fallback is in use), and right-aligned
//! keybinding hints.

use crate::theme::Theme;
use osdex_core::store::LoadState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar<'a> {
    load_state: LoadState,
    record_count: usize,
    /// True when the dataset came from the embedded fallback.
    degraded: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        load_state: LoadState,
        record_count: usize,
        degraded: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            load_state,
            record_count,
            degraded,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            " osdex ",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        match self.load_state {
            LoadState::Unloaded => {
                spans.push(Span::styled(
                    "carregando dados...",
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
            LoadState::Loaded => {
                spans.push(Span::raw(format!("{} registros", self.record_count)));
                if self.degraded {
                    spans.push(Span::styled(
                        "  [dados locais]",
                        self.theme.notification_error,
                    ));
                }
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);

        // Keybinding hints at the right edge
        let hint = " /:buscar  y:copiar  ?:ajuda  q:sair ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
