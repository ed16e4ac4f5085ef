pub mod loader;
pub mod song;
pub mod watcher;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::CatalogError;
use song::{RawSong, Song};

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            CatalogSource::Url(s.to_string())
        } else {
            CatalogSource::File(PathBuf::from(s))
        }
    }

    fn read_to_string(&self) -> Result<String, CatalogError> {
        match self {
            CatalogSource::File(path) => fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            }),
            CatalogSource::Url(url) => {
                let resp = ureq::get(url)
                    .set("User-Agent", "songbook/0.1.0")
                    .call()
                    .map_err(|e| CatalogError::Http {
                        url: url.clone(),
                        reason: e.to_string(),
                    })?;
                resp.into_string().map_err(|e| CatalogError::Http {
                    url: url.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// The read-only song list for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Builds a catalog keeping the first song for each id.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(songs.len());
        for song in songs {
            if seen.insert(song.id.clone()) {
                kept.push(song);
            } else {
                warn!(id = %song.id, title = %song.title, "skipping song with duplicate id");
            }
        }
        Self { songs: kept }
    }

    /// Only a document that is not a JSON array is an error. Records that do
    /// not fit the song shape are logged and skipped one by one.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut songs = Vec::with_capacity(records.len());
        for (pos, value) in records.into_iter().enumerate() {
            let record: RawSong = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    warn!(record = pos, error = %err, "skipping malformed song record");
                    continue;
                }
            };
            let id = record.id();
            match record.into_song() {
                Some(song) => songs.push(song),
                None => warn!(%id, "skipping song without title or performers"),
            }
        }
        Ok(Self::from_songs(songs))
    }

    pub fn try_load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let json = source.read_to_string()?;
        let catalog = Self::from_json(&json)?;
        info!(%source, songs = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Like [`Catalog::try_load`], but an unreadable or malformed source
    /// yields an empty catalog.
    pub fn load(source: &CatalogSource) -> Self {
        match Self::try_load(source) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(%source, error = %err, "catalog unavailable, continuing with an empty one");
                Self::new()
            }
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_kind() {
        assert_eq!(
            CatalogSource::parse("https://example.com/data/song.json"),
            CatalogSource::Url("https://example.com/data/song.json".into())
        );
        assert_eq!(
            CatalogSource::parse(" data/song.json "),
            CatalogSource::File(PathBuf::from("data/song.json"))
        );
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let json = r#"[
            {"id":"1","title":"First","performers":["A"]},
            {"id":"1","title":"Second","performers":["B"]},
            {"id":"2","title":"Third","performers":["C"]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("1").unwrap().title, "First");
    }

    #[test]
    fn invalid_records_are_skipped() {
        let json = r#"[
            {"id":"1","title":"","performers":["A"]},
            {"id":"2","title":"Kept","performers":["B"]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("2").is_some());
    }

    #[test]
    fn records_missing_required_keys_are_skipped() {
        let json = r#"[
            {"id":"1","title":"Kept","performers":["A"]},
            {"id":"2","title":"No performers key"},
            {"id":"3","performers":["B"]},
            {"id":"4","title":null,"artist":"C"},
            {"title":"No id","artist":"D"},
            {"id":"6","title":["not","text"],"artist":"E"},
            {"id":"7","title":"Also kept","artist":"F"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let ids: Vec<&str> = catalog.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(Catalog::from_json(r#"{"id":"1"}"#).is_err());
    }

    #[test]
    fn unreadable_source_loads_empty() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/songbook/song.json"));
        assert!(matches!(
            Catalog::try_load(&source),
            Err(CatalogError::Io { .. })
        ));
        assert!(Catalog::load(&source).is_empty());
    }
}
