use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::App;
use crate::facet::Facet;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Every performer in count order, regardless of the chip window.
pub fn render_performer_modal(
    frame: &mut Frame,
    area: Rect,
    cursor: usize,
    app: &App,
    theme: &Theme,
) {
    let modal = centered_rect(45, 70, area);

    frame.render_widget(Clear, modal);

    let performers = &app.facets().performers;
    let selected = app.selection().selected(Facet::Performer);

    let hint = Line::from(Span::styled(
        " Enter: select  Esc: close ",
        Style::default().fg(Color::DarkGray),
    ));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" All performers ({}) ", performers.len()))
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .title_bottom(hint);

    let items: Vec<ListItem> = performers
        .iter()
        .map(|fc| {
            let is_selected = selected == Some(fc.value.as_str());
            let check = if is_selected { "\u{2713} " } else { "  " };
            let check_style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(check, check_style),
                Span::styled(fc.value.as_str(), Style::default().fg(theme.fg)),
                Span::styled(format!(" ({})", fc.count), theme.dim_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if !performers.is_empty() {
        state.select(Some(cursor.min(performers.len() - 1)));
    }
    frame.render_stateful_widget(list, modal, &mut state);
}
