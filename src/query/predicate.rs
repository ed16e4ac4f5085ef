use crate::catalog::song::Song;

/// The search text and facet selections a song has to satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter<'a> {
    needle: String,
    genre: Option<&'a str>,
    performer: Option<&'a str>,
    tag: Option<&'a str>,
}

impl<'a> SongFilter<'a> {
    pub fn new(
        query: &str,
        genre: Option<&'a str>,
        performer: Option<&'a str>,
        tag: Option<&'a str>,
    ) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            genre,
            performer,
            tag,
        }
    }

    /// Text matches the title or any single performer; each selected facet
    /// value must be present in its field.
    pub fn matches(&self, song: &Song) -> bool {
        self.matches_text(song)
            && self.genre.map_or(true, |g| song.has_genre(g))
            && self.performer.map_or(true, |p| song.has_performer(p))
            && self.tag.map_or(true, |t| song.has_label(t))
    }

    fn matches_text(&self, song: &Song) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        song.title.to_lowercase().contains(&self.needle)
            || song
                .performers
                .iter()
                .any(|p| p.to_lowercase().contains(&self.needle))
    }

    /// Positions in `songs` that match, in catalog order.
    pub fn apply(&self, songs: &[Song]) -> Vec<usize> {
        songs
            .iter()
            .enumerate()
            .filter(|(_, s)| self.matches(s))
            .map(|(i, _)| i)
            .collect()
    }
}
