pub mod visibility;

use std::collections::HashMap;

use crate::catalog::song::Song;
use crate::catalog::Catalog;

/// A filterable dimension of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Genre,
    Performer,
    Tag,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Genre, Facet::Performer, Facet::Tag];

    pub fn title(self) -> &'static str {
        match self {
            Facet::Genre => "Genre",
            Facet::Performer => "Performers",
            Facet::Tag => "Tags",
        }
    }

    pub fn values_of(self, song: &Song) -> &[String] {
        match self {
            Facet::Genre => &song.genres,
            Facet::Performer => &song.performers,
            Facet::Tag => &song.labels,
        }
    }
}

/// A facet value and how many songs in the whole catalog carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Counts the distinct values of `facet` across `songs`.
///
/// Genres come back in ascending byte order. Performers and tags come back
/// by descending count; equal counts keep the order in which the values were
/// first seen walking the catalog.
pub fn aggregate(songs: &[Song], facet: Facet) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    // Index of the last song that bumped each entry, so a song is counted
    // once per value even if its field repeats it.
    let mut last_song: Vec<usize> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for (song_idx, song) in songs.iter().enumerate() {
        for value in facet.values_of(song) {
            match position.get(value.as_str()) {
                Some(&i) => {
                    if last_song[i] != song_idx {
                        counts[i].count += 1;
                        last_song[i] = song_idx;
                    }
                }
                None => {
                    position.insert(value.as_str(), counts.len());
                    counts.push(FacetCount {
                        value: value.clone(),
                        count: 1,
                    });
                    last_song.push(song_idx);
                }
            }
        }
    }

    match facet {
        Facet::Genre => counts.sort_by(|a, b| a.value.cmp(&b.value)),
        // sort_by is stable, which gives the first-seen tie-break
        Facet::Performer | Facet::Tag => counts.sort_by(|a, b| b.count.cmp(&a.count)),
    }
    counts
}

/// Aggregated counts for every facet of one catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetIndex {
    pub genres: Vec<FacetCount>,
    pub performers: Vec<FacetCount>,
    pub tags: Vec<FacetCount>,
}

impl FacetIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let songs = catalog.songs();
        Self {
            genres: aggregate(songs, Facet::Genre),
            performers: aggregate(songs, Facet::Performer),
            tags: aggregate(songs, Facet::Tag),
        }
    }

    pub fn get(&self, facet: Facet) -> &[FacetCount] {
        match facet {
            Facet::Genre => &self.genres,
            Facet::Performer => &self.performers,
            Facet::Tag => &self.tags,
        }
    }

    pub fn count_of(&self, facet: Facet, value: &str) -> Option<usize> {
        self.get(facet)
            .iter()
            .find(|fc| fc.value == value)
            .map(|fc| fc.count)
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.count_of(facet, value).is_some()
    }
}
