use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub title_style: Style,
    pub performer_style: Style,
    pub dim_style: Style,
    pub chip_style: Style,
    pub selected_chip: Modifier,
    pub search_active: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,
            highlight_bg: Color::Cyan,
            highlight_fg: Color::Black,
            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            performer_style: Style::default().fg(Color::Gray),
            dim_style: Style::default().fg(Color::DarkGray),
            chip_style: Style::default().fg(Color::Gray).bg(Color::Indexed(236)),
            selected_chip: Modifier::BOLD | Modifier::UNDERLINED,
            search_active: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Chip colors for known genres; anything else gets the plain chip.
    pub fn genre_chip(&self, genre: &str) -> Style {
        let (fg, bg) = match genre {
            "POP" => (Color::Rgb(7, 89, 133), Color::Rgb(186, 230, 253)),
            "R&B" => (Color::Rgb(107, 33, 168), Color::Rgb(233, 213, 255)),
            "KPOP" => (Color::Rgb(157, 23, 77), Color::Rgb(251, 207, 232)),
            "발라드" => (Color::Rgb(31, 41, 55), Color::Rgb(229, 231, 235)),
            "뮤지컬" => (Color::Rgb(17, 94, 89), Color::Rgb(153, 246, 228)),
            "JPOP" => (Color::Rgb(154, 52, 18), Color::Rgb(254, 215, 170)),
            "OST" => (Color::Rgb(55, 48, 163), Color::Rgb(199, 210, 254)),
            _ => return self.chip_style,
        };
        Style::default().fg(fg).bg(bg)
    }

    pub fn tag_chip(&self, tag: &str) -> Style {
        let (fg, bg) = match tag {
            "숙제곡" => (Color::Rgb(30, 64, 175), Color::Rgb(191, 219, 254)),
            "경연곡" => (Color::Rgb(133, 77, 14), Color::Rgb(254, 240, 138)),
            _ => return self.chip_style,
        };
        Style::default().fg(fg).bg(bg)
    }
}
