use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone)]
pub struct LayoutAreas {
    pub search_bar: Rect,
    pub genres: Rect,
    pub performers: Rect,
    pub tags: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

impl LayoutAreas {
    pub fn compute(area: Rect, facet_width: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar (bordered)
                Constraint::Min(10),   // Facets | results
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(facet_width),
                Constraint::Percentage(100 - facet_width),
            ])
            .split(vertical[1]);

        let facets = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(columns[0]);

        Self {
            search_bar: vertical[0],
            genres: facets[0],
            performers: facets[1],
            tags: facets[2],
            results: columns[1],
            status_bar: vertical[2],
        }
    }
}

/// A `percent_x` by `percent_y` rectangle centered in `area`, for modals.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
