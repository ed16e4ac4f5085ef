use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppAction};
use crate::ui::Ui;

pub fn handle_key_event(key: KeyEvent, app: &App, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        actions.push(AppAction::Quit);
        return actions;
    }

    // Help modal: Esc to close
    if ui.show_help_modal {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            ui.show_help_modal = false;
        }
        return actions;
    }

    // Full performer list: pick one or close
    if app.performer_list_open {
        let count = app.facets().performers.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => {
                actions.push(AppAction::ClosePerformerList);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 && ui.performer_modal_cursor < count - 1 {
                    ui.performer_modal_cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                ui.performer_modal_cursor = ui.performer_modal_cursor.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                ui.performer_modal_cursor = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                ui.performer_modal_cursor = count.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(fc) = app.facets().performers.get(ui.performer_modal_cursor) {
                    actions.push(AppAction::TogglePerformer(fc.value.clone()));
                    actions.push(AppAction::ClosePerformerList);
                }
            }
            _ => {}
        }
        return actions;
    }

    // Search input: every printable key edits the query
    if app.search_mode {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                actions.push(AppAction::ExitSearchMode);
            }
            KeyCode::Backspace => {
                let mut q = app.selection().query().to_string();
                q.pop();
                actions.push(AppAction::SetQuery(q));
            }
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
                actions.push(AppAction::SetQuery(String::new()));
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut q = app.selection().query().to_string();
                q.push(c);
                actions.push(AppAction::SetQuery(q));
            }
            _ => {}
        }
        return actions;
    }

    // Global keybindings first
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => {
            actions.push(AppAction::Quit);
            return actions;
        }
        (_, KeyCode::Char('/')) => {
            actions.push(AppAction::EnterSearchMode);
            return actions;
        }
        (_, KeyCode::Char('s')) => {
            actions.push(AppAction::CycleSortKey);
            return actions;
        }
        (_, KeyCode::Char('?')) => {
            ui.show_help_modal = true;
            return actions;
        }
        (_, KeyCode::Tab) => {
            actions.push(AppAction::FocusNext);
            return actions;
        }
        (_, KeyCode::BackTab) => {
            actions.push(AppAction::FocusPrev);
            return actions;
        }
        _ => {}
    }

    // Route to focused pane
    if let Some(action) = ui.focused_pane_mut(app.focus).handle_key(key, app) {
        if action == AppAction::OpenPerformerList {
            ui.performer_modal_cursor = 0;
        }
        actions.push(action);
    }

    actions
}
