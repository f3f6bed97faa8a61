//! Main UI rendering and coordination

use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{DeleteConfirmationDialog, ProductFormDialog},
    ProductsTable, StatusBar,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::catalog::{CatalogBackend, FakeStoreBackend};
use crate::config::Config;
use crate::notifications::Notifier;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state over the configured catalog
    let catalog: Arc<dyn CatalogBackend> = Arc::new(FakeStoreBackend::new(&config.api.base_url));
    let mut app = App::new(catalog, Notifier::new());

    // Load the product list before the first frame
    app.refresh().await;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout so expired toasts repaint promptly
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let _handled = handle_events(Event::Key(key), app).await?;
                    }
                }
                Event::Resize(_, _) => {
                    // Next draw picks up the new dimensions
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());

    // Render components
    ProductsTable::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    // Render overlays - the form sits above the table, the delete
    // confirmation above everything
    if app.form.is_some() {
        ProductFormDialog::render(f, app);
    }

    if app.controller.pending_delete().is_some() {
        DeleteConfirmationDialog::render(f, app);
    }
}
