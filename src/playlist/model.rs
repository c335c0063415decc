use serde::Deserialize;

/// A single playlist entry. Created at playlist load time, never mutated,
/// destroyed only by removal from the playlist.
#[derive(Clone, Debug, Deserialize)]
pub struct Track {
    /// Stable identity key, unique within a playlist.
    pub id: u64,
    pub title: String,
    pub artist: String,
    /// Track length in whole seconds, always greater than zero after loading.
    pub duration: u64,
    /// Opaque album-art URI. Fetching it is the presentation layer's problem.
    #[serde(default)]
    pub album_art: String,
}

impl Track {
    /// The now-playing display string, `"<artist> - <title>"`.
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

/// The ordered track collection owned by the player.
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Absolute position of the track with `id`, if present.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Remove the track with `id`. Returns the position it occupied, or
    /// `None` when no such track exists (removal of an unknown id is a no-op,
    /// not an error).
    pub fn remove(&mut self, id: u64) -> Option<usize> {
        let pos = self.position_of(id)?;
        self.tracks.remove(pos);
        Some(pos)
    }

    /// Absolute indices of all tracks whose title or artist contains `query`
    /// as a case-insensitive substring, preserving playlist order. An empty
    /// query returns every index. Recomputed on every call; the filtered view
    /// is never persisted.
    pub fn search(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.tracks.len()).collect();
        }

        let q = query.to_lowercase();
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                t.title.to_lowercase().contains(&q) || t.artist.to_lowercase().contains(&q)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of all track durations, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}
