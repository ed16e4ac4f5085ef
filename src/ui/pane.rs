use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, AppAction};
use crate::ui::theme::Theme;

pub trait Pane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme);
    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction>;
}
