use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::state::LoadState;
use crate::app::{App, AppAction};
use crate::ui::pane::Pane;
use crate::ui::theme::Theme;

pub struct ResultsPane {
    pub selected: usize,
    pub scroll_offset: usize,
    /// Rows visible at the last render, used for paging.
    pub page: usize,
}

impl ResultsPane {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
            page: 10,
        }
    }

    fn keep_in_view(&mut self, count: usize, height: usize) {
        if count == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }
        self.selected = self.selected.min(count - 1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if height > 0 && self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }
}

impl Default for ResultsPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for ResultsPane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme) {
        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border_unfocused
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(
                " Songs ({}) \u{00B7} {} ",
                app.result_count(),
                app.selection().sort_key().label()
            ))
            .title_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.fg
            }));

        let inner = block.inner(area);
        let height = inner.height as usize;
        self.page = height.max(1);

        if app.result_count() == 0 {
            let message = match app.load_state {
                LoadState::Loading => "Loading catalog\u{2026}",
                LoadState::Ready => "No results.",
            };
            let empty = Paragraph::new(Line::from(Span::styled(message, theme.dim_style)))
                .alignment(ratatui::layout::Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.keep_in_view(app.result_count(), height);

        let width = inner.width as usize;
        let title_width = (width * 2 / 5).max(8);

        let items: Vec<ListItem> = app
            .results()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height)
            .map(|(i, song)| {
                let is_selected = i == self.selected && focused;
                let row_style = if is_selected {
                    Style::default()
                        .bg(theme.highlight_bg)
                        .fg(theme.highlight_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    theme.title_style
                };
                let performer_style = if is_selected {
                    row_style
                } else {
                    theme.performer_style
                };

                let mut spans = vec![
                    Span::styled(fit_width(&song.title, title_width), row_style),
                    Span::raw(" "),
                    Span::styled(song.joined_performers(), performer_style),
                ];
                for genre in &song.genres {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!(" {} ", genre), theme.genre_chip(genre)));
                }
                for label in &song.labels {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!(" {} ", label), theme.tag_chip(label)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction> {
        let count = app.result_count();
        if count == 0 {
            return None;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected < count - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.selected = (self.selected + self.page).min(count - 1);
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(self.page);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selected = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = count - 1;
            }
            _ => {}
        }
        None
    }
}

/// Pads or truncates `s` to exactly `width` terminal columns.
fn fit_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - s.width()));
        return out;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_pads_and_truncates_by_columns() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 4), "abc\u{2026}");
        // Hangul syllables are two columns wide
        assert_eq!(fit_width("봄날", 4), "봄날");
        assert_eq!(fit_width("봄날이", 4), "봄\u{2026} ");
    }

    #[test]
    fn selection_stays_in_view() {
        let mut pane = ResultsPane::new();
        pane.selected = 12;
        pane.keep_in_view(20, 5);
        assert_eq!(pane.scroll_offset, 8);
        pane.selected = 3;
        pane.keep_in_view(20, 5);
        assert_eq!(pane.scroll_offset, 3);
        pane.keep_in_view(0, 5);
        assert_eq!((pane.selected, pane.scroll_offset), (0, 0));
    }
}
