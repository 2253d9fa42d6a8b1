//! Notification banner — short-lived one-line message overlaid on the top
//! row of the results pane.
//!
//! Used for copy confirmations ("Código copiado!") and clipboard errors.
//! The banner expires after a configurable duration; the event loop's tick
//! calls [`NotificationState::tick`] so an idle terminal still clears it.

use std::time::{Duration, Instant};

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug)]
struct Active {
    message: String,
    severity: Severity,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    active: Option<Active>,
    /// How long a banner stays visible.
    duration: Duration,
}

impl NotificationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: None,
            duration,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message.into(), Severity::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), Severity::Error);
    }

    fn show(&mut self, message: String, severity: Severity) {
        tracing::debug!(%message, ?severity, "notification shown");
        self.active = Some(Active {
            message,
            severity,
            expires_at: Instant::now() + self.duration,
        });
    }

    /// Drop the banner once its display window has passed.
    pub fn tick(&mut self) {
        if let Some(active) = &self.active {
            if Instant::now() >= active.expires_at {
                self.active = None;
            }
        }
    }

    pub fn message(&self) -> Option<(&str, Severity)> {
        self.active
            .as_ref()
            .map(|a| (a.message.as_str(), a.severity))
    }
}

pub struct NotificationBanner<'a> {
    state: &'a NotificationState,
    theme: &'a Theme,
}

impl<'a> NotificationBanner<'a> {
    pub fn new(state: &'a NotificationState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for NotificationBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((message, severity)) = self.state.message() else {
            return;
        };

        let style = match severity {
            Severity::Info => self.theme.notification_info,
            Severity::Error => self.theme.notification_error,
        };

        // Right-aligned box just wide enough for the message, one row tall
        let width = (message.chars().count() as u16 + 2).min(area.width);
        let banner = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: 1.min(area.height),
        };

        Clear.render(banner, buf);
        let line = Line::from(Span::styled(format!(" {message} "), style));
        Paragraph::new(line).render(banner, buf);
    }
}
