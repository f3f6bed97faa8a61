//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::notifications::ToastKind;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let toast = app.notifier.current();

        let (status_text, status_color) = if let Some(toast) = toast {
            let color = match toast.kind {
                ToastKind::Success => Color::Green,
                ToastKind::Error => Color::Red,
            };
            (toast.message, color)
        } else if app.controller.is_deleting() {
            ("🔄 Deleting product...".to_string(), Color::Yellow)
        } else if app.controller.is_loading() {
            ("🔄 Loading products...".to_string(), Color::Yellow)
        } else if let Some(error) = app.controller.error() {
            (format!("Error: {error}"), Color::Red)
        } else {
            // Show helpful shortcuts
            (
                "r: refresh • d: delete • a: add • e: edit • t/p/c: sort • q: quit".to_string(),
                Color::Gray,
            )
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
