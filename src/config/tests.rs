use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_retroamp_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("RETROAMP_CONFIG_PATH", "/tmp/retroamp-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/retroamp-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("retroamp")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("retroamp")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
volume = 40
balance = 60
shuffle = true
repeat = true
seed = 99

[timers]
playback_tick_ms = 500
marquee_tick_ms = 100
visualizer_tick_ms = 50

[marquee]
narrow_width = 10
wide_width = 30
narrow_viewport_cols = 80

[visualizer]
bars = 12

[controls]
scrub_seconds = 9
volume_step = 2
balance_step = 3

[playlist]
path = "/tmp/some-playlist.toml"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETROAMP_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RETROAMP__PLAYER__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.volume, 40);
    assert_eq!(s.player.balance, 60);
    assert!(s.player.shuffle);
    assert!(s.player.repeat);
    assert_eq!(s.player.seed, Some(99));
    assert_eq!(s.timers.playback_tick_ms, 500);
    assert_eq!(s.timers.marquee_tick_ms, 100);
    assert_eq!(s.timers.visualizer_tick_ms, 50);
    assert_eq!(s.marquee.narrow_width, 10);
    assert_eq!(s.marquee.wide_width, 30);
    assert_eq!(s.marquee.narrow_viewport_cols, 80);
    assert_eq!(s.visualizer.bars, 12);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.volume_step, 2);
    assert_eq!(s.controls.balance_step, 3);
    assert_eq!(
        s.playlist.path,
        Some(std::path::PathBuf::from("/tmp/some-playlist.toml"))
    );
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
volume = 40
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETROAMP_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("RETROAMP__PLAYER__VOLUME", "85");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.volume, 85);
}

#[test]
fn validate_rejects_zero_intervals_and_empty_visualizers() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.timers.marquee_tick_ms = 0;
    assert!(s.validate().is_err());

    s.timers = TimerSettings::default();
    s.visualizer.bars = 0;
    assert!(s.validate().is_err());

    s.visualizer = VisualizerSettings::default();
    s.marquee.wide_width = 0;
    assert!(s.validate().is_err());
}
