use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Display order, never empty.
    pub performers: Vec<String>,
    pub genres: Vec<String>,
    pub labels: Vec<String>,
}

impl Song {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        performers: Vec<String>,
        genres: Vec<String>,
        labels: Vec<String>,
    ) -> Option<Self> {
        let title = title.into();
        let performers = unique_values(performers);
        if title.trim().is_empty() || performers.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            title,
            performers,
            genres: unique_values(genres),
            labels: unique_values(labels),
        })
    }

    /// Performers joined in display order; also the `Performer` sort key.
    pub fn joined_performers(&self) -> String {
        self.performers.join(", ")
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn has_performer(&self, performer: &str) -> bool {
        self.performers.iter().any(|p| p == performer)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Trims each value, drops blanks and keeps the first of any duplicates.
fn unique_values(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() || out.iter().any(|v| v == value) {
            continue;
        }
        out.push(value.to_string());
    }
    out
}

/// A field the catalog encodes either as one string or as a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// One record as it appears in `song.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSong {
    id: RawId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "artist", alias = "artists")]
    performers: Option<OneOrMany>,
    #[serde(default, alias = "type")]
    genres: Option<OneOrMany>,
    #[serde(default, alias = "tag", alias = "tags")]
    labels: Option<OneOrMany>,
}

impl RawSong {
    pub(crate) fn id(&self) -> String {
        match &self.id {
            RawId::Text(s) => s.clone(),
            RawId::Number(n) => n.to_string(),
        }
    }

    /// `None` when the title or performers are missing, null or blank.
    pub(crate) fn into_song(self) -> Option<Song> {
        let id = self.id();
        Song::new(
            id,
            self.title?,
            self.performers?.into_vec(),
            self.genres.map(OneOrMany::into_vec).unwrap_or_default(),
            self.labels.map(OneOrMany::into_vec).unwrap_or_default(),
        )
    }
}
