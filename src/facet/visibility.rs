use super::FacetCount;

pub const MIN_VISIBLE: usize = 1;
pub const MAX_VISIBLE: usize = 50;

pub fn clamp_visible_count(n: usize) -> usize {
    n.clamp(MIN_VISIBLE, MAX_VISIBLE)
}

/// The chips to render for a count-ordered facet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleFacets<'a> {
    pub entries: Vec<&'a FacetCount>,
    /// The selection sat outside the window and was moved to the front.
    pub pinned: bool,
    /// Entries left for the "show all" list.
    pub hidden: usize,
}

/// Takes the first `n` entries of `list`. If `selected` names an entry past
/// that window, it goes to position 0 and the window shrinks by one so the
/// length stays `n`; nothing else is reordered.
pub fn visible_facets<'a>(
    list: &'a [FacetCount],
    n: usize,
    selected: Option<&str>,
) -> VisibleFacets<'a> {
    let n = clamp_visible_count(n);
    let outside = selected.and_then(|sel| {
        list.iter()
            .position(|fc| fc.value == sel)
            .filter(|&pos| pos >= n)
    });

    let entries: Vec<&FacetCount> = match outside {
        Some(pos) => std::iter::once(&list[pos])
            .chain(list.iter().take(n - 1))
            .collect(),
        None => list.iter().take(n).collect(),
    };

    VisibleFacets {
        hidden: list.len() - entries.len(),
        pinned: outside.is_some(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(n: usize) -> Vec<FacetCount> {
        (0..n)
            .map(|i| FacetCount {
                value: format!("p{:02}", i + 1),
                count: 100 - i,
            })
            .collect()
    }

    fn values<'a>(v: &VisibleFacets<'a>) -> Vec<&'a str> {
        v.entries.iter().map(|fc| fc.value.as_str()).collect()
    }

    #[test]
    fn selection_outside_window_is_pinned_to_front() {
        let list = ranked(20);
        let v = visible_facets(&list, 15, Some("p18"));
        assert_eq!(v.entries.len(), 15);
        assert_eq!(v.entries[0].value, "p18");
        assert!(v.pinned);
        assert_eq!(v.hidden, 5);
        // the rest keep their natural order
        let expected: Vec<String> = (1..=14).map(|i| format!("p{:02}", i)).collect();
        let rest = values(&v)[1..].to_vec();
        assert_eq!(rest, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn selection_inside_window_changes_nothing() {
        let list = ranked(20);
        let plain = visible_facets(&list, 15, None);
        let selected = visible_facets(&list, 15, Some("p03"));
        assert_eq!(plain, selected);
        assert!(!selected.pinned);
        assert_eq!(values(&plain)[0], "p01");
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let list = ranked(5);
        let v = visible_facets(&list, 3, Some("nobody"));
        assert_eq!(values(&v), vec!["p01", "p02", "p03"]);
        assert!(!v.pinned);
    }

    #[test]
    fn slot_count_is_clamped() {
        let list = ranked(60);
        assert_eq!(visible_facets(&list, 0, None).entries.len(), 1);
        assert_eq!(visible_facets(&list, 500, None).entries.len(), 50);
        assert_eq!(clamp_visible_count(0), 1);
        assert_eq!(clamp_visible_count(51), 50);
        assert_eq!(clamp_visible_count(15), 15);
    }

    #[test]
    fn single_slot_shows_only_the_selection() {
        let list = ranked(4);
        let v = visible_facets(&list, 1, Some("p04"));
        assert_eq!(values(&v), vec!["p04"]);
        assert_eq!(v.hidden, 3);
    }

    #[test]
    fn short_list_shows_everything() {
        let list = ranked(3);
        let v = visible_facets(&list, 15, None);
        assert_eq!(v.entries.len(), 3);
        assert_eq!(v.hidden, 0);
        assert!(visible_facets(&[], 15, Some("x")).entries.is_empty());
    }

    #[test]
    fn length_bounded_and_selection_present_for_every_n() {
        let list = ranked(60);
        for n in MIN_VISIBLE..=MAX_VISIBLE {
            for sel in ["p01", "p25", "p50", "p60"] {
                let v = visible_facets(&list, n, Some(sel));
                assert!(v.entries.len() <= n);
                assert!(v.entries.iter().any(|fc| fc.value == sel), "n={n} sel={sel}");
            }
        }
    }
}
