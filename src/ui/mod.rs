pub mod layout;
pub mod pane;
pub mod panes;
pub mod theme;
pub mod widgets;

use ratatui::Frame;

use crate::app::state::FocusedPane;
use crate::app::App;
use crate::facet::Facet;
use layout::LayoutAreas;
use pane::Pane;
use panes::facet_pane::FacetPane;
use panes::results_pane::ResultsPane;
use theme::Theme;
use widgets::{help_modal, performer_modal, search_bar, status_bar};

pub struct Ui {
    pub theme: Theme,
    pub genre_pane: FacetPane,
    pub performer_pane: FacetPane,
    pub tag_pane: FacetPane,
    pub results_pane: ResultsPane,
    /// Facet column width as a percentage of the body
    pub facet_width: u16,
    /// Help modal visible
    pub show_help_modal: bool,
    /// Cursor inside the full performer list
    pub performer_modal_cursor: usize,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            genre_pane: FacetPane::new(Facet::Genre),
            performer_pane: FacetPane::new(Facet::Performer),
            tag_pane: FacetPane::new(Facet::Tag),
            results_pane: ResultsPane::new(),
            facet_width: 35,
            show_help_modal: false,
            performer_modal_cursor: 0,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        let areas = LayoutAreas::compute(frame.area(), self.facet_width);

        search_bar::render_search_bar(frame, areas.search_bar, app, &self.theme);

        self.genre_pane.render(
            frame,
            areas.genres,
            app.focus == FocusedPane::Genre,
            app,
            &self.theme,
        );
        self.performer_pane.render(
            frame,
            areas.performers,
            app.focus == FocusedPane::Performer,
            app,
            &self.theme,
        );
        self.tag_pane.render(
            frame,
            areas.tags,
            app.focus == FocusedPane::Tag,
            app,
            &self.theme,
        );
        self.results_pane.render(
            frame,
            areas.results,
            app.focus == FocusedPane::Results,
            app,
            &self.theme,
        );

        status_bar::render_status_bar(frame, areas.status_bar, app, &self.theme);

        // Modal overlays (rendered last, on top of everything)
        if app.performer_list_open {
            performer_modal::render_performer_modal(
                frame,
                frame.area(),
                self.performer_modal_cursor,
                app,
                &self.theme,
            );
        }

        if self.show_help_modal {
            help_modal::render_help_modal(frame, frame.area(), &self.theme);
        }
    }

    pub fn focused_pane_mut(&mut self, focus: FocusedPane) -> &mut dyn Pane {
        match focus {
            FocusedPane::Genre => &mut self.genre_pane,
            FocusedPane::Performer => &mut self.performer_pane,
            FocusedPane::Tag => &mut self.tag_pane,
            FocusedPane::Results => &mut self.results_pane,
        }
    }

    /// Puts every cursor back on the first row; the catalog changed under them.
    pub fn reset_cursors(&mut self) {
        self.genre_pane.cursor = 0;
        self.performer_pane.cursor = 0;
        self.tag_pane.cursor = 0;
        self.results_pane.selected = 0;
        self.results_pane.scroll_offset = 0;
        self.performer_modal_cursor = 0;
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
