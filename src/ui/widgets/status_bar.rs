use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::LoadState;
use crate::app::App;
use crate::facet::Facet;
use crate::ui::theme::Theme;

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = Vec::new();

    if app.load_state == LoadState::Loading {
        spans.push(Span::styled(
            " [LOADING] ",
            Style::default()
                .fg(Color::Rgb(255, 200, 80))
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        format!(" sort: {} ", app.selection().sort_key().label()),
        Style::default().fg(Color::Rgb(100, 220, 255)),
    ));
    spans.push(Span::styled(
        format!(
            "\u{2502} performer slots: {} ",
            app.selection().performer_visible_count()
        ),
        theme.dim_style,
    ));

    for facet in Facet::ALL {
        if let Some(value) = app.selection().selected(facet) {
            spans.push(Span::styled("\u{2502} ", theme.dim_style));
            spans.push(Span::styled(
                format!("{}: {} ", facet.title(), value),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ));
        }
    }

    spans.push(Span::styled(
        "\u{2502} / search  s sort  Tab focus  ? help  q quit",
        theme.dim_style,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
