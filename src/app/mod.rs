pub mod handler;
pub mod state;

use tracing::{debug, info, warn};

use crate::catalog::loader::LoadOutcome;
use crate::catalog::song::Song;
use crate::catalog::Catalog;
use crate::facet::visibility::{visible_facets, VisibleFacets};
use crate::facet::{Facet, FacetIndex};
use crate::query::{sort_results, Collation, SortKey};
use state::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    SetQuery(String),
    ToggleGenre(String),
    TogglePerformer(String),
    ToggleTag(String),
    SetSortKey(SortKey),
    CycleSortKey,
    SetPerformerVisibleCount(usize),
    GrowPerformerSlots,
    ShrinkPerformerSlots,
    OpenPerformerList,
    ClosePerformerList,
    EnterSearchMode,
    ExitSearchMode,
    FocusNext,
    FocusPrev,
    FocusPane(FocusedPane),
}

pub struct App {
    pub should_quit: bool,
    pub focus: FocusedPane,
    pub load_state: LoadState,
    pub search_mode: bool,
    pub performer_list_open: bool,
    catalog: Catalog,
    facets: FacetIndex,
    selection: SelectionState,
    results: Vec<usize>,
    collation: Collation,
}

impl App {
    pub fn new(selection: SelectionState) -> Self {
        Self::with_collation(selection, Collation::new())
    }

    pub fn with_collation(selection: SelectionState, collation: Collation) -> Self {
        Self {
            should_quit: false,
            focus: FocusedPane::Genre,
            load_state: LoadState::Loading,
            search_mode: false,
            performer_list_open: false,
            catalog: Catalog::new(),
            facets: FacetIndex::default(),
            selection,
            results: Vec::new(),
            collation,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Replaces the catalog, rebuilds facet counts and drops selections whose
    /// value is gone from the new catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.facets = FacetIndex::build(&catalog);
        self.catalog = catalog;
        for facet in Facet::ALL {
            let vanished = self
                .selection
                .selected(facet)
                .is_some_and(|value| !self.facets.contains(facet, value));
            if vanished {
                debug!(?facet, "clearing selection missing from catalog");
                self.selection.clear(facet);
            }
        }
        self.load_state = LoadState::Ready;
        info!(
            songs = self.catalog.len(),
            genres = self.facets.genres.len(),
            performers = self.facets.performers.len(),
            tags = self.facets.tags.len(),
            "catalog ready"
        );
        self.refresh_results();
    }

    /// A failed first load yields the empty catalog. A failed reload keeps
    /// the catalog and selections already on screen.
    pub fn on_catalog_loaded(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Failed { source, error } if self.load_state == LoadState::Ready => {
                warn!(%source, %error, "catalog reload failed, keeping the current catalog");
            }
            outcome => self.set_catalog(outcome.into_catalog()),
        }
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::SetQuery(query) => {
                self.selection.set_query(query);
                self.refresh_results();
            }
            AppAction::ToggleGenre(value) => {
                self.selection.toggle_genre(&value);
                self.refresh_results();
            }
            AppAction::TogglePerformer(value) => {
                self.selection.toggle_performer(&value);
                self.refresh_results();
            }
            AppAction::ToggleTag(value) => {
                self.selection.toggle_tag(&value);
                self.refresh_results();
            }
            AppAction::SetSortKey(key) => {
                self.selection.set_sort_key(key);
                self.refresh_results();
            }
            AppAction::CycleSortKey => {
                let key = self.selection.sort_key().next();
                self.handle_action(AppAction::SetSortKey(key));
            }
            AppAction::SetPerformerVisibleCount(n) => {
                self.selection.set_performer_visible_count(n);
            }
            AppAction::GrowPerformerSlots => {
                let n = self.selection.performer_visible_count() + 1;
                self.handle_action(AppAction::SetPerformerVisibleCount(n));
            }
            AppAction::ShrinkPerformerSlots => {
                let n = self.selection.performer_visible_count().saturating_sub(1);
                self.handle_action(AppAction::SetPerformerVisibleCount(n));
            }
            AppAction::OpenPerformerList => {
                self.performer_list_open = true;
            }
            AppAction::ClosePerformerList => {
                self.performer_list_open = false;
            }
            AppAction::EnterSearchMode => {
                self.search_mode = true;
            }
            AppAction::ExitSearchMode => {
                self.search_mode = false;
            }
            AppAction::FocusNext => {
                self.focus = self.focus.next();
            }
            AppAction::FocusPrev => {
                self.focus = self.focus.prev();
            }
            AppAction::FocusPane(pane) => {
                self.focus = pane;
            }
        }
    }

    fn refresh_results(&mut self) {
        let songs = self.catalog.songs();
        let mut results = self.selection.filter().apply(songs);
        sort_results(songs, &mut results, self.selection.sort_key(), &self.collation);
        debug!(matched = results.len(), total = songs.len(), "results recomputed");
        self.results = results;
    }

    /// Filtered and sorted songs.
    pub fn results(&self) -> impl Iterator<Item = &Song> + '_ {
        self.results.iter().map(|&i| &self.catalog.songs()[i])
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn result_ids(&self) -> Vec<&str> {
        self.results().map(|s| s.id.as_str()).collect()
    }

    /// The performer chips to render, with the selection pinned if needed.
    pub fn visible_performers(&self) -> VisibleFacets<'_> {
        visible_facets(
            &self.facets.performers,
            self.selection.performer_visible_count(),
            self.selection.selected(Facet::Performer),
        )
    }

    /// The action that toggles `value` in `facet`.
    pub fn toggle_action(facet: Facet, value: &str) -> AppAction {
        match facet {
            Facet::Genre => AppAction::ToggleGenre(value.to_string()),
            Facet::Performer => AppAction::TogglePerformer(value.to_string()),
            Facet::Tag => AppAction::ToggleTag(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use std::path::PathBuf;

    fn two_song_app() -> App {
        let mut app = App::new(SelectionState::default());
        app.set_catalog(Catalog::from_songs(vec![
            Song::new("1", "Spring Day", vec!["BTS".into()], vec!["KPOP".into()], vec![]).unwrap(),
            Song::new(
                "2",
                "Gravity",
                vec!["Lee".into()],
                vec!["POP".into()],
                vec!["homework".into()],
            )
            .unwrap(),
        ]));
        app
    }

    #[test]
    fn starts_loading_with_empty_views() {
        let app = App::new(SelectionState::default());
        assert_eq!(app.load_state, LoadState::Loading);
        assert_eq!(app.result_count(), 0);
        assert!(app.visible_performers().entries.is_empty());
    }

    #[test]
    fn default_listing_sorted_by_title() {
        let app = two_song_app();
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.result_ids(), vec!["2", "1"]);
    }

    #[test]
    fn tag_selection_filters() {
        let mut app = two_song_app();
        app.handle_action(AppAction::ToggleTag("homework".into()));
        assert_eq!(app.result_ids(), vec!["2"]);
        app.handle_action(AppAction::ToggleTag("homework".into()));
        assert_eq!(app.result_ids(), vec!["2", "1"]);
    }

    #[test]
    fn query_filters_and_no_match_is_empty() {
        let mut app = two_song_app();
        app.handle_action(AppAction::SetQuery("grav".into()));
        assert_eq!(app.result_ids(), vec!["2"]);
        app.handle_action(AppAction::SetQuery("xyz".into()));
        assert!(app.result_ids().is_empty());
        assert_eq!(app.catalog().len(), 2);
    }

    #[test]
    fn sort_by_performer() {
        let mut app = two_song_app();
        app.handle_action(AppAction::CycleSortKey);
        assert_eq!(app.selection().sort_key(), SortKey::Performer);
        assert_eq!(app.result_ids(), vec!["1", "2"]);
    }

    #[test]
    fn performer_slots_clamp_at_bounds() {
        let mut app = App::new(SelectionState::with_visible_count(1));
        app.handle_action(AppAction::ShrinkPerformerSlots);
        assert_eq!(app.selection().performer_visible_count(), 1);
        app.handle_action(AppAction::SetPerformerVisibleCount(50));
        app.handle_action(AppAction::GrowPerformerSlots);
        assert_eq!(app.selection().performer_visible_count(), 50);
    }

    #[test]
    fn failed_reload_keeps_current_catalog() {
        let mut app = two_song_app();
        app.handle_action(AppAction::ToggleTag("homework".into()));
        let failed = LoadOutcome::fetch(&CatalogSource::File(PathBuf::from(
            "/nonexistent/songbook/song.json",
        )));
        assert!(!failed.is_loaded());
        app.on_catalog_loaded(failed);
        assert_eq!(app.catalog().len(), 2);
        assert_eq!(app.selection().selected(Facet::Tag), Some("homework"));
        assert_eq!(app.result_ids(), vec!["2"]);
    }

    #[test]
    fn failed_first_load_is_empty_and_ready() {
        let mut app = App::new(SelectionState::default());
        app.on_catalog_loaded(LoadOutcome::fetch(&CatalogSource::File(PathBuf::from(
            "/nonexistent/songbook/song.json",
        ))));
        assert_eq!(app.load_state, LoadState::Ready);
        assert!(app.catalog().is_empty());
    }

    #[test]
    fn reload_clears_vanished_selections() {
        let mut app = two_song_app();
        app.handle_action(AppAction::TogglePerformer("Lee".into()));
        app.handle_action(AppAction::ToggleGenre("KPOP".into()));
        app.set_catalog(Catalog::from_songs(vec![Song::new(
            "1",
            "Spring Day",
            vec!["BTS".into()],
            vec!["KPOP".into()],
            vec![],
        )
        .unwrap()]));
        assert_eq!(app.selection().selected(Facet::Performer), None);
        assert_eq!(app.selection().selected(Facet::Genre), Some("KPOP"));
        assert_eq!(app.result_ids(), vec!["1"]);
    }

    #[test]
    fn toggle_action_per_facet() {
        assert_eq!(
            App::toggle_action(Facet::Tag, "x"),
            AppAction::ToggleTag("x".into())
        );
        assert_eq!(
            App::toggle_action(Facet::Performer, "Lee"),
            AppAction::TogglePerformer("Lee".into())
        );
    }
}
