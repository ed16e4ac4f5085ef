use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::theme::Theme;

pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let border_color = if app.search_mode {
        theme.border_focused
    } else {
        theme.border_unfocused
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search title or performer ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let input_style = if app.search_mode {
        theme.search_active
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if app.search_mode { "\u{258E}" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(" / ", Style::default().fg(Color::Cyan)),
        Span::styled(app.selection().query(), input_style),
        Span::styled(cursor, Style::default().fg(Color::White)),
    ]));
    frame.render_widget(input, cols[0]);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}", app.result_count()),
            Style::default().fg(theme.fg),
        ),
        Span::styled(
            format!(" of {} songs ", app.catalog().len()),
            theme.dim_style,
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(summary, cols[1]);
}
