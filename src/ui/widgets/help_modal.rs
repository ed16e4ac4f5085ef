use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("/", "Search title or performer"),
    ("Esc / Enter", "Leave search input"),
    ("s", "Toggle sort (title / performer)"),
    ("", ""),
    ("Tab / Shift+Tab", "Cycle pane focus"),
    ("h / l", "Previous / next chip"),
    ("Enter / Space", "Select or clear chip"),
    ("j / k", "Navigate results"),
    ("g / G", "Jump to first / last"),
    ("", ""),
    ("a", "All performers"),
    ("+ / -", "More / fewer performer chips"),
    ("?", "Help (this modal)"),
    ("q", "Quit"),
];

pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = centered_rect(50, 60, area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from("")
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {:20}", key),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc.to_string(), Style::default().fg(theme.fg)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
