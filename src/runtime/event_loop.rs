use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::player::{Player, Ticker, marquee};
use crate::ui;

/// The three periodic feeds, owned by the event loop and coordinated only
/// through reads of player state. Everything runs on this one thread, so a
/// tick and a key press never interleave within an iteration.
struct Feeds {
    playback: Ticker,
    marquee: Ticker,
    visualizer: Ticker,
}

impl Feeds {
    fn new(timers: &config::TimerSettings) -> Self {
        Self {
            playback: Ticker::new(Duration::from_millis(timers.playback_tick_ms)),
            marquee: Ticker::new(Duration::from_millis(timers.marquee_tick_ms)),
            visualizer: Ticker::new(Duration::from_millis(timers.visualizer_tick_ms)),
        }
    }

    /// Arm or cancel each ticker from what the player is doing right now:
    /// clock and visualizer run while playing, the marquee runs while the
    /// display text overflows the window.
    fn sync(&mut self, player: &Player, marquee_width: usize, now: Instant) {
        if player.is_playing() {
            self.playback.start(now);
            self.visualizer.start(now);
        } else {
            self.playback.cancel();
            self.visualizer.cancel();
        }

        if player.marquee_overflows(marquee_width) {
            self.marquee.start(now);
        } else {
            self.marquee.cancel();
        }
    }

    /// Teardown: cancel everything. Safe to call on already-stopped feeds.
    fn shutdown(&mut self) {
        self.playback.cancel();
        self.marquee.cancel();
        self.visualizer.cancel();
    }
}

/// Main terminal event loop: fires due ticks, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut feeds = Feeds::new(&settings.timers);

    loop {
        let viewport = terminal.size()?;
        let width = marquee::width_for(viewport.width, &settings.marquee);

        let now = Instant::now();
        feeds.sync(player, width, now);
        for _ in 0..feeds.playback.poll(now) {
            player.tick_second();
        }
        for _ in 0..feeds.marquee.poll(now) {
            player.tick_marquee(width);
        }
        for _ in 0..feeds.visualizer.poll(now) {
            player.tick_visualizer();
        }
        // A tick can change the track or stop playback; re-check the arming
        // conditions before drawing so stale timers don't keep firing.
        feeds.sync(player, width, Instant::now());

        terminal.draw(|f| ui::draw(f, player, &settings.marquee, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, player) {
                    break;
                }
            }
        }
    }

    feeds.shutdown();
    Ok(())
}

/// Apply one key press to the player. Returns `true` to quit.
fn handle_key_event(key: KeyEvent, settings: &config::Settings, player: &mut Player) -> bool {
    if player.search_mode {
        match key.code {
            KeyCode::Esc => player.clear_search(),
            KeyCode::Backspace => player.pop_search_char(),
            KeyCode::Down => player.select_next(),
            KeyCode::Up => player.select_prev(),
            KeyCode::Enter => {
                // No visible results: nothing to select.
                if player.visible_indices().is_empty() {
                    return false;
                }
                player.exit_search_mode();
                if let Some(id) = player.selected_track().map(|t| t.id) {
                    player.select_track(id);
                }
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    player.push_search_char(c);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => player.enter_search_mode(),
        KeyCode::Char(' ') | KeyCode::Char('p') => player.play_pause(),
        KeyCode::Char('x') => player.stop(),
        KeyCode::Char('h') => player.previous(),
        KeyCode::Char('l') => player.next(),
        KeyCode::Char('H') => player.seek_by(-(settings.controls.scrub_seconds as i64)),
        KeyCode::Char('L') => player.seek_by(settings.controls.scrub_seconds as i64),
        KeyCode::Char('s') => player.toggle_shuffle(),
        KeyCode::Char('r') => player.toggle_repeat(),
        KeyCode::Char('j') | KeyCode::Down => player.select_next(),
        KeyCode::Char('k') | KeyCode::Up => player.select_prev(),
        KeyCode::Enter => {
            if let Some(id) = player.selected_track().map(|t| t.id) {
                player.select_track(id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = player.selected_track().map(|t| t.id) {
                player.remove_track(id);
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => player.volume_up(settings.controls.volume_step),
        KeyCode::Char('-') => player.volume_down(settings.controls.volume_step),
        KeyCode::Char('<') | KeyCode::Char(',') => {
            player.balance_left(settings.controls.balance_step)
        }
        KeyCode::Char('>') | KeyCode::Char('.') => {
            player.balance_right(settings.controls.balance_step)
        }
        _ => {}
    }

    false
}
