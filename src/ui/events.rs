//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEventKind};

use super::app::{App, SortColumn};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle the product form dialog
            if app.form.is_some() {
                return handle_form_mode(key, app).await;
            }

            // Handle the delete confirmation dialog
            if app.controller.pending_delete().is_some() {
                return handle_delete_confirmation(key, app).await;
            }

            // Handle normal navigation and actions
            return handle_normal_mode(key, app).await;
        }
    }
    Ok(false)
}

/// Handle events when the delete confirmation dialog is open
async fn handle_delete_confirmation(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            // Confirm delete
            app.confirm_pending_delete().await;
            Ok(true)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            // Cancel delete
            app.cancel_pending_delete();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys during confirmation
    }
}

/// Handle events when the product form dialog is open
async fn handle_form_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Tab => {
            if let Some(form) = app.form.as_mut() {
                form.focus_next();
            }
            Ok(true)
        }
        KeyCode::BackTab => {
            if let Some(form) = app.form.as_mut() {
                form.focus_previous();
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form.as_mut() {
                form.focused_input_mut().pop();
            }
            Ok(true)
        }
        KeyCode::Enter => {
            // Validate and submit
            app.submit_form().await;
            Ok(true)
        }
        KeyCode::Esc => {
            app.cancel_form();
            Ok(true)
        }
        KeyCode::Char(c) if !c.is_control() => {
            if let Some(form) = app.form.as_mut() {
                form.focused_input_mut().push(c);
            }
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys while the form is open
    }
}

/// Handle events in normal mode
async fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('r') => {
            app.refresh().await;
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_product();
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_product();
            Ok(true)
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(true)
        }
        KeyCode::Char('a') => {
            app.start_create_form();
            Ok(true)
        }
        KeyCode::Char('e') => {
            app.start_edit_form();
            Ok(true)
        }
        KeyCode::Char('t') => {
            app.toggle_sort(SortColumn::Title);
            Ok(true)
        }
        KeyCode::Char('p') => {
            app.toggle_sort(SortColumn::Price);
            Ok(true)
        }
        KeyCode::Char('c') => {
            app.toggle_sort(SortColumn::Category);
            Ok(true)
        }
        _ => Ok(false),
    }
}
