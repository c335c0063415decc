use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::model::Track;

#[derive(Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Load a playlist from a TOML file of `[[tracks]]` entries.
///
/// Entries with a zero duration or a duplicate id are dropped; they cannot be
/// represented by the player (the clock divides by duration, and ids are the
/// removal key).
pub fn load(path: &Path) -> Result<Vec<Track>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let file: PlaylistFile = toml::from_str(&raw)?;
    Ok(sanitize(file.tracks))
}

pub(super) fn sanitize(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = std::collections::HashSet::new();
    tracks
        .into_iter()
        .filter(|t| t.duration > 0 && seen.insert(t.id))
        .collect()
}

/// The built-in demo playlist, used when no playlist file is configured or
/// loading one fails.
pub fn demo() -> Vec<Track> {
    const ART_A: &str =
        "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop";
    const ART_B: &str =
        "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=300&h=300&fit=crop";
    const ART_C: &str =
        "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?w=300&h=300&fit=crop";

    let entries: [(u64, &str, &str, u64, &str); 10] = [
        (1, "Take On Me", "a-ha", 225, ART_A),
        (2, "Sweet Dreams (Are Made of This)", "Eurythmics", 216, ART_B),
        (3, "Blue Monday", "New Order", 448, ART_A),
        (4, "Don't Stop Believin'", "Journey", 251, ART_C),
        (5, "Billie Jean", "Michael Jackson", 294, ART_A),
        (6, "Hotel California", "Eagles", 391, ART_B),
        (7, "Bohemian Rhapsody", "Queen", 355, ART_C),
        (8, "Stairway to Heaven", "Led Zeppelin", 482, ART_A),
        (9, "Imagine", "John Lennon", 183, ART_B),
        (10, "Like a Rolling Stone", "Bob Dylan", 370, ART_C),
    ];

    entries
        .into_iter()
        .map(|(id, title, artist, duration, art)| Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration,
            album_art: art.to_string(),
        })
        .collect()
}
