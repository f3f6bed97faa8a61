//! Product create/edit form dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use super::super::super::app::{App, FormField, FormMode};
use super::super::super::layout::LayoutManager;
use super::common::{
    create_dialog_block, create_field_paragraph, create_input_paragraph, create_instructions_paragraph, shortcuts,
};

/// Product create/edit form dialog component
pub struct ProductFormDialog;

impl ProductFormDialog {
    /// Render the product form dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(form) = &app.form else {
            return;
        };

        // 4 input fields of 3 lines each, violations, instructions, borders
        let violation_lines = form.violations.len().min(4) as u16;
        let dialog_height = 4 * 3 + violation_lines + 1 + 2;
        let dialog_area = LayoutManager::centered_rect_lines(60, dialog_height, f.area());
        f.render_widget(Clear, dialog_area);

        let title = match form.mode {
            FormMode::Create => "📦 New Product",
            FormMode::Edit { .. } => "📦 Edit Product",
        };
        let dialog_block = create_dialog_block(title, Color::Cyan);
        let inner_area = dialog_block.inner(dialog_area);
        f.render_widget(dialog_block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(violation_lines),
                Constraint::Length(1),
            ])
            .split(inner_area);

        let fields = [
            (FormField::Title, &form.title, "Title"),
            (FormField::Price, &form.price, "Price"),
            (FormField::Description, &form.description, "Description"),
            (FormField::Category, &form.category, "Category"),
        ];

        for (i, (field, value, label)) in fields.into_iter().enumerate() {
            let paragraph = if form.focused == field {
                create_input_paragraph(value, label)
            } else {
                create_field_paragraph(value.clone(), label)
            };
            f.render_widget(paragraph, chunks[i]);
        }

        // Field-level violations from the last submit attempt
        if !form.violations.is_empty() {
            let lines: Vec<Line> = form
                .violations
                .iter()
                .take(4)
                .map(|violation| Line::from(violation.message.clone()))
                .collect();
            let violations_paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Red));
            f.render_widget(violations_paragraph, chunks[4]);
        }

        let instructions = create_instructions_paragraph(&[
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[5]);
    }
}
