//! The playback controller: a state machine over the playlist store.
//!
//! `Player` is the single owner of all mutable player state. Commands are
//! synchronous and rely on guard conditions instead of errors: operations on
//! an empty playlist are no-ops, out-of-range inputs are clamped, and
//! removing an unknown id does nothing.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::playlist::{Playlist, Track};

use super::visualizer::Visualizer;
use super::{marquee, nav};

/// Upper bound of the volume and balance sliders.
pub const SLIDER_MAX: u8 = 100;

/// Format whole seconds as `M:SS` (seconds zero-padded, minutes not).
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The playback state machine: Stopped, Playing or Paused, where Paused keeps
/// the elapsed time and Stopped resets it.
pub struct Player {
    playlist: Playlist,
    /// Position of the current track; `None` only while the playlist is empty.
    current: Option<usize>,
    playing: bool,
    /// Elapsed seconds into the current track, `0..=duration`.
    elapsed: u64,
    volume: u8,
    balance: u8,
    shuffle: bool,
    repeat: bool,
    scroll_pos: usize,

    pub search_query: String,
    pub search_mode: bool,
    /// Playlist cursor for the UI, distinct from the current track.
    pub selected: usize,

    visualizer: Visualizer,
    rng: StdRng,
}

impl Player {
    /// Build a player over `tracks`. A `seed` pins shuffle and visualizer
    /// randomness, which tests use to assert determinism.
    pub fn new(tracks: Vec<Track>, bars: usize, seed: Option<u64>) -> Self {
        let playlist = Playlist::new(tracks);
        let current = if playlist.is_empty() { None } else { Some(0) };
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        Self {
            playlist,
            current,
            playing: false,
            elapsed: 0,
            volume: 70,
            balance: 50,
            shuffle: false,
            repeat: false,
            scroll_pos: 0,
            search_query: String::new(),
            search_mode: false,
            selected: 0,
            visualizer: Visualizer::new(bars),
            rng,
        }
    }

    // --- queries ---

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.playlist.get(i))
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.playlist.get(self.selected)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn balance(&self) -> u8 {
        self.balance
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn bars(&self) -> &[u8] {
        self.visualizer.bars()
    }

    /// The marquee source string, `"<artist> - <title>"`, empty when the
    /// playlist is.
    pub fn display_text(&self) -> String {
        self.current_track().map(Track::display).unwrap_or_default()
    }

    pub fn marquee_window(&self, width: usize) -> String {
        marquee::window(&self.display_text(), width, self.scroll_pos)
    }

    pub fn marquee_overflows(&self, width: usize) -> bool {
        marquee::overflows(&self.display_text(), width)
    }

    pub fn scroll_pos(&self) -> usize {
        self.scroll_pos
    }

    /// Absolute indices of the search-filtered playlist view.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.playlist.search(&self.search_query)
    }

    // --- transport ---

    pub fn play_pause(&mut self) {
        if !self.has_tracks() {
            return;
        }
        let playing = !self.playing;
        self.set_playing(playing);
    }

    /// Stop resets the elapsed time; pause (via `play_pause`) keeps it.
    pub fn stop(&mut self) {
        self.set_playing(false);
        self.elapsed = 0;
    }

    /// Advance to the next track per the navigation policy. Keeps the play
    /// state: a playing player continues on the new track from zero.
    pub fn next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        let cur = self.current.unwrap_or(0);
        let idx = nav::next_index(cur, len, self.shuffle, &mut self.rng);
        self.set_current(idx);
    }

    pub fn previous(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }
        let cur = self.current.unwrap_or(0);
        let idx = nav::prev_index(cur, len, self.shuffle, &mut self.rng);
        self.set_current(idx);
    }

    /// Seek to an absolute position, clamped to the track length. Allowed in
    /// any state and never changes play/pause.
    pub fn seek(&mut self, secs: u64) {
        let Some(track) = self.current_track() else {
            return;
        };
        self.elapsed = secs.min(track.duration);
    }

    /// Relative scrub used by the key bindings.
    pub fn seek_by(&mut self, delta: i64) {
        let Some(track) = self.current_track() else {
            return;
        };
        let target = (self.elapsed as i64 + delta).clamp(0, track.duration as i64);
        self.elapsed = target as u64;
    }

    // --- sliders and toggles ---

    pub fn set_volume(&mut self, v: u8) {
        self.volume = v.min(SLIDER_MAX);
    }

    pub fn set_balance(&mut self, v: u8) {
        self.balance = v.min(SLIDER_MAX);
    }

    pub fn volume_up(&mut self, step: u8) {
        self.set_volume(self.volume.saturating_add(step));
    }

    pub fn volume_down(&mut self, step: u8) {
        self.volume = self.volume.saturating_sub(step);
    }

    pub fn balance_right(&mut self, step: u8) {
        self.set_balance(self.balance.saturating_add(step));
    }

    pub fn balance_left(&mut self, step: u8) {
        self.balance = self.balance.saturating_sub(step);
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    // --- search ---

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.ensure_selected_visible();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.ensure_selected_visible();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.ensure_selected_visible();
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_mode = false;
        self.ensure_selected_visible();
    }

    // --- playlist mutation and selection ---

    /// Jump to the track with `id`, resolving it back to its absolute
    /// playlist position (the filtered view hands out ids, not positions).
    /// Play state is untouched.
    pub fn select_track(&mut self, id: u64) {
        if let Some(pos) = self.playlist.position_of(id) {
            self.set_current(pos);
            self.selected = pos;
        }
    }

    /// Remove the track with `id` and reconcile the positional back-references.
    pub fn remove_track(&mut self, id: u64) {
        let Some(pos) = self.playlist.remove(id) else {
            return;
        };

        let len = self.playlist.len();
        if len == 0 {
            self.current = None;
            self.set_playing(false);
            self.elapsed = 0;
            self.scroll_pos = 0;
            self.selected = 0;
            return;
        }

        if let Some(cur) = self.current {
            if pos < cur {
                // Same logical track, one slot earlier.
                self.current = Some(cur - 1);
            } else if pos == cur {
                // The track under the needle went away; whatever slid into
                // its slot starts from the beginning.
                self.set_current(cur.min(len - 1));
            }
        }

        if pos < self.selected {
            self.selected -= 1;
        }
        if self.selected >= len {
            self.selected = len - 1;
        }
        self.ensure_selected_visible();
    }

    /// Move the playlist cursor to the next visible track, wrapping.
    pub fn select_next(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        self.selected = match visible.iter().position(|&i| i == self.selected) {
            Some(p) => visible[(p + 1) % visible.len()],
            None => visible[0],
        };
    }

    /// Move the playlist cursor to the previous visible track, wrapping.
    pub fn select_prev(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        self.selected = match visible.iter().position(|&i| i == self.selected) {
            Some(0) | None => visible[visible.len() - 1],
            Some(p) => visible[p - 1],
        };
    }

    // --- periodic ticks (driven by the runtime's tickers) ---

    /// One playback-clock tick: a second of simulated playback. At the end of
    /// the track, repeat restarts it and no-repeat advances via the
    /// navigation policy, staying in Playing either way.
    pub fn tick_second(&mut self) {
        if !self.playing {
            return;
        }
        let Some(track) = self.current_track() else {
            return;
        };
        let duration = track.duration;

        self.elapsed += 1;
        if self.elapsed >= duration {
            if self.repeat {
                self.elapsed = 0;
            } else {
                self.next();
            }
        }
    }

    /// One marquee tick at the given window width. Idle (and reset) while the
    /// text fits the window.
    pub fn tick_marquee(&mut self, width: usize) {
        let text = self.display_text();
        if marquee::overflows(&text, width) {
            self.scroll_pos = marquee::advance(self.scroll_pos, text.chars().count());
        } else {
            self.scroll_pos = 0;
        }
    }

    /// One visualizer tick: regenerate the bars, but only while playing.
    pub fn tick_visualizer(&mut self) {
        if self.playing {
            self.visualizer.randomize(&mut self.rng);
        }
    }

    // --- internals ---

    fn set_playing(&mut self, on: bool) {
        self.playing = on;
        if !on {
            self.visualizer.silence();
        }
    }

    /// Switch tracks: elapsed time and marquee scroll start over.
    fn set_current(&mut self, idx: usize) {
        self.current = Some(idx);
        self.elapsed = 0;
        self.scroll_pos = 0;
    }

    /// Keep the cursor inside the filtered view, falling back to its first
    /// entry.
    fn ensure_selected_visible(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        if !visible.contains(&self.selected) {
            self.selected = visible[0];
        }
    }
}
