use std::borrow::Cow;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use crate::catalog::song::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Performer,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::Title => SortKey::Performer,
            SortKey::Performer => SortKey::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Performer => "Performer",
        }
    }

    pub fn text_of(self, song: &Song) -> Cow<'_, str> {
        match self {
            SortKey::Title => Cow::Borrowed(&song.title),
            SortKey::Performer => Cow::Owned(song.joined_performers()),
        }
    }
}

/// Locale-aware string ordering backed by the ICU root collation.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(c) => Some(c),
            Err(err) => {
                warn!(?err, "ICU collator unavailable, falling back to case-folded ordering");
                None
            }
        };
        Self { collator }
    }

    /// Case-folded then code-point ordering, used without a collator.
    pub fn fallback() -> Self {
        Self { collator: None }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::new()
    }
}

/// Reorders `results` (positions into `songs`) ascending by `key`. Stable.
pub fn sort_results(songs: &[Song], results: &mut [usize], key: SortKey, collation: &Collation) {
    let mut keyed: Vec<(Cow<'_, str>, usize)> = results
        .iter()
        .map(|&i| (key.text_of(&songs[i]), i))
        .collect();
    keyed.sort_by(|a, b| collation.compare(&a.0, &b.0));
    for (slot, (_, i)) in results.iter_mut().zip(keyed) {
        *slot = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, title: &str, performers: &[&str]) -> Song {
        Song::new(
            id,
            title,
            performers.iter().map(|s| s.to_string()).collect(),
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn sorted_ids<'a>(songs: &'a [Song], key: SortKey, collation: &Collation) -> Vec<&'a str> {
        let mut results: Vec<usize> = (0..songs.len()).collect();
        sort_results(songs, &mut results, key, collation);
        results.iter().map(|&i| songs[i].id.as_str()).collect()
    }

    #[test]
    fn title_order() {
        let songs = vec![song("1", "Spring Day", &["BTS"]), song("2", "Gravity", &["Lee"])];
        for collation in [Collation::new(), Collation::fallback()] {
            assert_eq!(sorted_ids(&songs, SortKey::Title, &collation), vec!["2", "1"]);
        }
    }

    #[test]
    fn case_does_not_dominate_title_order() {
        let songs = vec![
            song("1", "banana", &["A"]),
            song("2", "Apple", &["A"]),
            song("3", "cherry", &["A"]),
        ];
        for collation in [Collation::new(), Collation::fallback()] {
            assert_eq!(sorted_ids(&songs, SortKey::Title, &collation), vec!["2", "1", "3"]);
        }
    }

    #[test]
    fn performer_order_uses_joined_names() {
        let songs = vec![
            song("1", "x", &["Lee", "Adams"]),
            song("2", "y", &["Lee"]),
            song("3", "z", &["Kim"]),
        ];
        // "Kim" < "Lee" < "Lee, Adams"
        assert_eq!(
            sorted_ids(&songs, SortKey::Performer, &Collation::new()),
            vec!["3", "2", "1"]
        );
    }

    #[test]
    fn mixed_scripts_sort_deterministically() {
        let songs = vec![
            song("1", "봄날", &["BTS"]),
            song("2", "Gravity", &["Lee"]),
            song("3", "夜に駆ける", &["YOASOBI"]),
            song("4", "가시", &["Buzz"]),
        ];
        let collation = Collation::new();
        let first = sorted_ids(&songs, SortKey::Title, &collation);
        let mut reversed = songs.clone();
        reversed.reverse();
        assert_eq!(first, sorted_ids(&reversed, SortKey::Title, &collation));
        // Hangul keeps its own alphabetical order
        let ga = first.iter().position(|&id| id == "4").unwrap();
        let bom = first.iter().position(|&id| id == "1").unwrap();
        assert!(ga < bom);
    }

    #[test]
    fn sorting_is_a_stable_permutation() {
        let songs = vec![
            song("1", "Same", &["B"]),
            song("2", "Other", &["A"]),
            song("3", "Same", &["C"]),
        ];
        let mut results = vec![2, 0, 1];
        sort_results(&songs, &mut results, SortKey::Title, &Collation::new());
        assert_eq!(results, vec![1, 2, 0]);

        let mut ids: Vec<&str> = results.iter().map(|&i| songs[i].id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn sort_key_cycles() {
        assert_eq!(SortKey::default(), SortKey::Title);
        assert_eq!(SortKey::Title.next(), SortKey::Performer);
        assert_eq!(SortKey::Performer.next(), SortKey::Title);
    }
}
