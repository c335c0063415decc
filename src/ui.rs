//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player skin with `ratatui`: the marquee display,
//! progress gauge, spectrum bars, sliders and the playlist window.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Sparkline, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::config::{ControlsSettings, MarqueeSettings};
use crate::player::{MAX_MAGNITUDE, Player, format_time, marquee};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("x".to_string(), "stop".to_string());
    map.insert("h/l".to_string(), "prev/next track".to_string());
    // H/L, +/- and </> are filled dynamically from config.
    map.insert("j/k".to_string(), "move cursor".to_string());
    map.insert("enter".to_string(), "play selected track".to_string());
    map.insert("d".to_string(), "remove track".to_string());
    map.insert("/".to_string(), "search".to_string());
    map.insert("s".to_string(), "shuffle".to_string());
    map.insert("r".to_string(), "repeat".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating the configured step sizes.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space/p", "x", "h/l", "H/L", "j/k", "enter", "d", "/", "s", "r", "+/-", "</>", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] seek -/+{}s", controls.scrub_seconds)),
            "+/-" => Some(format!("[+/-] volume ±{}", controls.volume_step)),
            "</>" => Some(format!("[</>] balance ±{}", controls.balance_step)),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// A ten-cell text slider, Winamp style: `VOL [#######---]  70`.
fn slider_text(label: &str, value: u8) -> String {
    let filled = (usize::from(value) * 10 + 50) / 100;
    format!(
        "{} [{}{}] {:>3}",
        label,
        "#".repeat(filled),
        "-".repeat(10 - filled),
        value
    )
}

/// Render the entire UI into the provided `frame` from the player state.
pub fn draw(
    frame: &mut Frame,
    player: &Player,
    marquee_settings: &MarqueeSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let width = marquee::width_for(frame.area().width, marquee_settings);

    // Display: marquee line, time line, status line.
    let display = {
        let mut lines: Vec<String> = Vec::new();

        let number = player
            .current_index()
            .map(|i| format!("{:02}", i + 1))
            .unwrap_or_else(|| "--".to_string());
        lines.push(format!("{}  [{}]", player.marquee_window(width), number));

        match player.current_track() {
            Some(track) => lines.push(format!(
                "{} / {}",
                format_time(player.elapsed()),
                format_time(track.duration)
            )),
            None => lines.push("0:00 / 0:00".to_string()),
        }

        let state = if player.is_playing() {
            "Playing"
        } else if player.elapsed() > 0 {
            "Paused"
        } else {
            "Stopped"
        };
        let shuffle = if player.shuffle() { "ON" } else { "OFF" };
        let repeat = if player.repeat() { "ON" } else { "OFF" };
        let mut status = format!("{state} | Shuffle: {shuffle} | Repeat: {repeat}");
        if player.search_mode || !player.search_query.is_empty() {
            status.push_str(" | Search: /");
            status.push_str(&player.search_query);
        }
        lines.push(status);

        lines.join("\n")
    };
    let display_par = Paragraph::new(display).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" retroamp ")
            .title_alignment(Alignment::Center)
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(display_par, chunks[0]);

    // Progress gauge.
    let (ratio, label) = match player.current_track() {
        Some(track) if track.duration > 0 => (
            player.elapsed() as f64 / track.duration as f64,
            format!(
                "{} / {}",
                format_time(player.elapsed()),
                format_time(track.duration)
            ),
        ),
        _ => (0.0, "-".to_string()),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" position "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, chunks[1]);

    // Spectrum bars. Zeroed while not playing; the player enforces that.
    let magnitudes: Vec<u64> = player.bars().iter().map(|&b| u64::from(b)).collect();
    let spectrum = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(" spectrum "))
        .style(Style::default().fg(Color::Green))
        .max(u64::from(MAX_MAGNITUDE))
        .data(&magnitudes);
    frame.render_widget(spectrum, chunks[2]);

    // Volume / balance sliders.
    let sliders = format!(
        "{}    {}",
        slider_text("VOL", player.volume()),
        slider_text("BAL", player.balance())
    );
    let sliders_par = Paragraph::new(sliders).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" mixer ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(sliders_par, chunks[3]);

    // Playlist window, filtered by the active search query.
    {
        let visible = player.visible_indices();
        let playlist = player.playlist();

        let items: Vec<ListItem> = visible
            .iter()
            .filter_map(|&i| playlist.get(i).map(|t| (i, t)))
            .map(|(i, track)| {
                let marker = if Some(i) == player.current_index() {
                    ">"
                } else {
                    " "
                };
                let line = format!(
                    "{} {:>2}. {} - {} [{}]",
                    marker,
                    i + 1,
                    track.artist,
                    track.title,
                    format_time(track.duration)
                );
                let item = ListItem::new(line);
                if Some(i) == player.current_index() {
                    item.style(Style::default().fg(Color::Yellow))
                } else {
                    item
                }
            })
            .collect();

        let title = format!(
            " playlist ({} tracks, {}) ",
            playlist.len(),
            format_time(playlist.total_duration())
        );
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ratatui::widgets::ListState::default();
        if let Some(pos) = visible.iter().position(|&i| i == player.selected) {
            state.select(Some(pos));
        }
        frame.render_stateful_widget(list, chunks[4], &mut state);
    }

    // Controls footer.
    let footer = Paragraph::new(controls_text(controls_settings))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
