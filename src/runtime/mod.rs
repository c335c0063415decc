use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::player::Player;
use crate::playlist;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let tracks = match settings.playlist.path.as_deref() {
        Some(path) => playlist::load(path).unwrap_or_else(|e| {
            eprintln!("retroamp: failed to load playlist, using built-in demo: {e}");
            playlist::demo()
        }),
        None => playlist::demo(),
    };

    let mut player = Player::new(tracks, settings.visualizer.bars, settings.player.seed);
    player.set_volume(settings.player.volume);
    player.set_balance(settings.player.balance);
    if settings.player.shuffle {
        player.toggle_shuffle();
    }
    if settings.player.repeat {
        player.toggle_repeat();
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
