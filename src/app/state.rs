use crate::facet::visibility::clamp_visible_count;
use crate::facet::Facet;
use crate::query::{SongFilter, SortKey};

pub const DEFAULT_PERFORMER_VISIBLE_COUNT: usize = 15;

/// Everything the user has chosen: search text, at most one value per
/// facet, sort key and the size of the performer chip window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    query: String,
    genre: Option<String>,
    performer: Option<String>,
    tag: Option<String>,
    sort_key: SortKey,
    performer_visible_count: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: None,
            performer: None,
            tag: None,
            sort_key: SortKey::Title,
            performer_visible_count: DEFAULT_PERFORMER_VISIBLE_COUNT,
        }
    }
}

impl SelectionState {
    pub fn with_visible_count(n: usize) -> Self {
        Self {
            performer_visible_count: clamp_visible_count(n),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn selected(&self, facet: Facet) -> Option<&str> {
        self.slot(facet).as_deref()
    }

    /// Selects `value`, or clears the facet if `value` is already selected.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let slot = self.slot_mut(facet);
        if slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_string());
        }
    }

    pub fn toggle_genre(&mut self, value: &str) {
        self.toggle(Facet::Genre, value);
    }

    pub fn toggle_performer(&mut self, value: &str) {
        self.toggle(Facet::Performer, value);
    }

    pub fn toggle_tag(&mut self, value: &str) {
        self.toggle(Facet::Tag, value);
    }

    pub fn clear(&mut self, facet: Facet) {
        *self.slot_mut(facet) = None;
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn performer_visible_count(&self) -> usize {
        self.performer_visible_count
    }

    /// Out-of-range counts are clamped, never rejected.
    pub fn set_performer_visible_count(&mut self, n: usize) {
        self.performer_visible_count = clamp_visible_count(n);
    }

    pub fn filter(&self) -> SongFilter<'_> {
        SongFilter::new(
            &self.query,
            self.genre.as_deref(),
            self.performer.as_deref(),
            self.tag.as_deref(),
        )
    }

    fn slot(&self, facet: Facet) -> &Option<String> {
        match facet {
            Facet::Genre => &self.genre,
            Facet::Performer => &self.performer,
            Facet::Tag => &self.tag,
        }
    }

    fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::Genre => &mut self.genre,
            Facet::Performer => &mut self.performer,
            Facet::Tag => &mut self.tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Genre,
    Performer,
    Tag,
    Results,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Genre => FocusedPane::Performer,
            FocusedPane::Performer => FocusedPane::Tag,
            FocusedPane::Tag => FocusedPane::Results,
            FocusedPane::Results => FocusedPane::Genre,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Genre => FocusedPane::Results,
            FocusedPane::Performer => FocusedPane::Genre,
            FocusedPane::Tag => FocusedPane::Performer,
            FocusedPane::Results => FocusedPane::Tag,
        }
    }

    pub fn facet(self) -> Option<Facet> {
        match self {
            FocusedPane::Genre => Some(Facet::Genre),
            FocusedPane::Performer => Some(Facet::Performer),
            FocusedPane::Tag => Some(Facet::Tag),
            FocusedPane::Results => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = SelectionState::default();
        assert_eq!(s.query(), "");
        for facet in Facet::ALL {
            assert_eq!(s.selected(facet), None);
        }
        assert_eq!(s.sort_key(), SortKey::Title);
        assert_eq!(s.performer_visible_count(), DEFAULT_PERFORMER_VISIBLE_COUNT);
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        // from an empty facet
        let mut s = SelectionState::default();
        s.toggle_tag("homework");
        let before = s.clone();
        for facet in [Facet::Genre, Facet::Performer] {
            s.toggle(facet, "POP");
            s.toggle(facet, "POP");
            assert_eq!(s, before);
        }

        // from a facet already holding the value
        let mut s = SelectionState::default();
        s.toggle_genre("POP");
        let before = s.clone();
        s.toggle_genre("POP");
        assert_eq!(s.selected(Facet::Genre), None);
        s.toggle_genre("POP");
        assert_eq!(s, before);
    }

    #[test]
    fn toggling_another_value_replaces_selection() {
        let mut s = SelectionState::default();
        s.toggle_tag("homework");
        s.toggle_tag("competition");
        assert_eq!(s.selected(Facet::Tag), Some("competition"));
        s.toggle_tag("competition");
        assert_eq!(s.selected(Facet::Tag), None);

        s.toggle_genre("POP");
        s.toggle_genre("KPOP");
        assert_eq!(s.selected(Facet::Genre), Some("KPOP"));
        s.clear(Facet::Genre);
        assert_eq!(s.selected(Facet::Genre), None);
    }

    #[test]
    fn selections_are_independent_per_facet() {
        let mut s = SelectionState::default();
        s.toggle_genre("POP");
        s.toggle_performer("Lee");
        s.toggle_tag("homework");
        assert_eq!(s.selected(Facet::Genre), Some("POP"));
        assert_eq!(s.selected(Facet::Performer), Some("Lee"));
        assert_eq!(s.selected(Facet::Tag), Some("homework"));
    }

    #[test]
    fn visible_count_is_clamped() {
        let mut s = SelectionState::with_visible_count(0);
        assert_eq!(s.performer_visible_count(), 1);
        s.set_performer_visible_count(99);
        assert_eq!(s.performer_visible_count(), 50);
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut f = FocusedPane::Genre;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, FocusedPane::Genre);
        assert_eq!(f.prev().next(), f);
        assert_eq!(FocusedPane::Results.facet(), None);
    }
}
