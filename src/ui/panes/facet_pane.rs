use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, AppAction};
use crate::facet::{Facet, FacetCount};
use crate::ui::pane::Pane;
use crate::ui::theme::Theme;

/// A wrapped strip of facet chips with a cursor.
pub struct FacetPane {
    pub facet: Facet,
    pub cursor: usize,
}

impl FacetPane {
    pub fn new(facet: Facet) -> Self {
        Self { facet, cursor: 0 }
    }

    /// The chips this pane shows and how many performers sit behind "show all".
    fn chips<'a>(&self, app: &'a App) -> (Vec<&'a FacetCount>, usize) {
        match self.facet {
            Facet::Performer => {
                let visible = app.visible_performers();
                (visible.entries, visible.hidden)
            }
            facet => (app.facets().get(facet).iter().collect(), 0),
        }
    }

    fn chip_style(&self, value: &str, theme: &Theme) -> Style {
        match self.facet {
            Facet::Genre => theme.genre_chip(value),
            Facet::Tag => theme.tag_chip(value),
            Facet::Performer => theme.chip_style,
        }
    }
}

impl Pane for FacetPane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme) {
        let (chips, hidden) = self.chips(app);
        let total = app.facets().get(self.facet).len();
        if !chips.is_empty() {
            self.cursor = self.cursor.min(chips.len() - 1);
        }

        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border_unfocused
        };
        let title = if self.facet == Facet::Performer {
            format!(" {} ({}/{}) ", self.facet.title(), chips.len(), total)
        } else {
            format!(" {} ({}) ", self.facet.title(), total)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.fg
            }));

        let selected = app.selection().selected(self.facet);
        let mut spans = Vec::with_capacity(chips.len() * 2 + 1);
        for (i, chip) in chips.iter().enumerate() {
            let is_selected = selected == Some(chip.value.as_str());
            let mut style = self.chip_style(&chip.value, theme);
            if is_selected {
                style = style.add_modifier(theme.selected_chip);
            }
            if focused && i == self.cursor {
                style = Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg)
                    .add_modifier(Modifier::BOLD);
            }
            let mark = if is_selected { "\u{2713}" } else { "" };
            spans.push(Span::styled(
                format!(" {}{} {} ", mark, chip.value, chip.count),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        if hidden > 0 {
            spans.push(Span::styled(format!("+{} more (a)", hidden), theme.dim_style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction> {
        if self.facet == Facet::Performer {
            match key.code {
                KeyCode::Char('a') => return Some(AppAction::OpenPerformerList),
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    return Some(AppAction::GrowPerformerSlots)
                }
                KeyCode::Char('-') => return Some(AppAction::ShrinkPerformerSlots),
                _ => {}
            }
        }

        let (chips, _) = self.chips(app);
        let count = chips.len();
        if count == 0 {
            return None;
        }
        self.cursor = self.cursor.min(count - 1);

        match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor < count - 1 {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor = count - 1;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(App::toggle_action(self.facet, &chips[self.cursor].value))
            }
            _ => None,
        }
    }
}
