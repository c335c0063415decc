use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/retroamp/config.toml` or `~/.config/retroamp/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RETROAMP__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub timers: TimerSettings,
    pub marquee: MarqueeSettings,
    pub visualizer: VisualizerSettings,
    pub controls: ControlsSettings,
    pub playlist: PlaylistSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Startup volume, 0-100.
    pub volume: u8,
    /// Startup stereo balance, 0-100 (50 is centered).
    pub balance: u8,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Whether repeat starts enabled.
    pub repeat: bool,
    /// Fixed RNG seed for shuffle and the visualizer.
    /// Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 70,
            balance: 50,
            shuffle: false,
            repeat: false,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Playback clock interval (milliseconds). One tick is one simulated
    /// second, so anything other than 1000 runs time fast or slow.
    pub playback_tick_ms: u64,
    /// Marquee scroll interval (milliseconds).
    pub marquee_tick_ms: u64,
    /// Visualizer refresh interval (milliseconds).
    pub visualizer_tick_ms: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            playback_tick_ms: 1000,
            marquee_tick_ms: 200,
            visualizer_tick_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarqueeSettings {
    /// Ticker window width on narrow viewports.
    pub narrow_width: usize,
    /// Ticker window width on wide viewports.
    pub wide_width: usize,
    /// Viewports narrower than this many columns use `narrow_width`.
    pub narrow_viewport_cols: u16,
}

impl Default for MarqueeSettings {
    fn default() -> Self {
        Self {
            narrow_width: 15,
            wide_width: 25,
            narrow_viewport_cols: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Number of spectrum bars.
    pub bars: usize,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self { bars: 20 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: u8,
    /// Balance change per `<` / `>` press.
    pub balance_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 5,
            balance_step: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Optional TOML playlist file. Unset means the built-in demo playlist.
    pub path: Option<PathBuf>,
}
