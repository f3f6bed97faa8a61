//! Product table component

use ratatui::{
    layout::{Alignment, Constraint},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::super::app::{App, SortColumn, SortDirection};
use crate::utils::currency::format_usd;

/// Product table component
pub struct ProductsTable;

impl ProductsTable {
    /// Render the product table
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("🛒 Products")
            .title_alignment(Alignment::Center);

        let products = app.visible_products();

        if products.is_empty() {
            // Show empty state message
            let empty_message = "No products loaded. Press 'r' to refresh or 'a' to add a product.";
            let empty_table = Table::new(
                vec![Row::new(vec![Cell::from(empty_message)])],
                [Constraint::Percentage(100)],
            )
            .block(block);

            f.render_stateful_widget(empty_table, area, &mut app.table_state.clone());
            return;
        }

        let header = Row::new(vec![
            Self::header_cell("Title", SortColumn::Title, app),
            Self::header_cell("Price", SortColumn::Price, app),
            Self::header_cell("Category", SortColumn::Category, app),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows: Vec<Row> = products
            .iter()
            .map(|product| {
                Row::new(vec![
                    Cell::from(product.title.clone()),
                    Cell::from(Text::from(format_usd(product.price)).alignment(Alignment::Right)),
                    Cell::from(product.category.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(55),
                Constraint::Length(12),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(table, area, &mut app.table_state.clone());
    }

    /// Header cell with a sort arrow on the active column
    fn header_cell(label: &str, column: SortColumn, app: &App) -> Cell<'static> {
        let text = match app.sort {
            Some((active, SortDirection::Ascending)) if active == column => format!("{label} ↑"),
            Some((active, SortDirection::Descending)) if active == column => format!("{label} ↓"),
            _ => label.to_string(),
        };
        Cell::from(text)
    }
}
