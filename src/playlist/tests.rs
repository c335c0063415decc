use super::load::sanitize;
use super::*;

fn t(id: u64, title: &str, artist: &str, duration: u64) -> Track {
    Track {
        id,
        title: title.into(),
        artist: artist.into(),
        duration,
        album_art: String::new(),
    }
}

#[test]
fn search_matches_title_and_artist_case_insensitive() {
    let pl = Playlist::new(vec![
        t(1, "Take On Me", "a-ha", 225),
        t(2, "Don't Stop Believin'", "Journey", 251),
        t(3, "Imagine", "John Lennon", 183),
    ]);

    // artist substring, different case
    assert_eq!(pl.search("java"), Vec::<usize>::new());
    assert_eq!(pl.search("jour"), vec![1]);
    assert_eq!(pl.search("JOURNEY"), vec![1]);
    // title substring
    assert_eq!(pl.search("imagine"), vec![2]);
    // matches across both fields, playlist order preserved
    assert_eq!(pl.search("on"), vec![0, 1, 2]);
    assert_eq!(pl.search("no match"), Vec::<usize>::new());
}

#[test]
fn search_empty_query_returns_everything_in_order() {
    let pl = Playlist::new(vec![t(1, "A", "X", 10), t(2, "B", "Y", 20)]);
    assert_eq!(pl.search(""), vec![0, 1]);
}

#[test]
fn remove_returns_position_and_ignores_unknown_ids() {
    let mut pl = Playlist::new(vec![t(1, "A", "X", 10), t(2, "B", "Y", 20)]);

    assert_eq!(pl.remove(999), None);
    assert_eq!(pl.len(), 2);

    assert_eq!(pl.remove(1), Some(0));
    assert_eq!(pl.len(), 1);
    assert_eq!(pl.position_of(2), Some(0));
}

#[test]
fn total_duration_sums_all_tracks() {
    let pl = Playlist::new(vec![t(1, "A", "X", 225), t(2, "B", "Y", 216), t(3, "C", "Z", 448)]);
    assert_eq!(pl.total_duration(), 889);
}

#[test]
fn sanitize_drops_zero_durations_and_duplicate_ids() {
    let tracks = sanitize(vec![
        t(1, "A", "X", 10),
        t(2, "B", "Y", 0),
        t(1, "A again", "X", 30),
        t(3, "C", "Z", 20),
    ]);

    let ids: Vec<u64> = tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(tracks[0].title, "A");
}

#[test]
fn load_parses_toml_playlist_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("playlist.toml");
    std::fs::write(
        &path,
        r#"
[[tracks]]
id = 1
title = "Take On Me"
artist = "a-ha"
duration = 225
album_art = "https://example.com/a.jpg"

[[tracks]]
id = 2
title = "Imagine"
artist = "John Lennon"
duration = 183
"#,
    )
    .unwrap();

    let tracks = load(&path).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].display(), "a-ha - Take On Me");
    assert_eq!(tracks[1].album_art, "");
}

#[test]
fn load_fails_on_missing_or_invalid_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load(&dir.path().join("nope.toml")).is_err());

    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "this is not toml [[").unwrap();
    assert!(load(&path).is_err());
}

#[test]
fn demo_playlist_has_unique_ids_and_positive_durations() {
    let tracks = demo();
    assert_eq!(tracks.len(), 10);
    assert_eq!(sanitize(tracks.clone()).len(), tracks.len());
}
