//! System appearance signal.
//!
//! A terminal has no media query to ask; the closest ambient signals are,
//! in precedence order: the `FOLIO_APPEARANCE` override, an appearance
//! hint file written by theme-switcher hooks, and the `COLORFGBG`
//! convention. Anything else reads as dark.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::app::AppEvent;
use crate::paths;

pub const ENV_OVERRIDE: &str = "FOLIO_APPEARANCE";

const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

pub fn parse(value: &str) -> Option<Appearance> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(Appearance::Light),
        "dark" => Some(Appearance::Dark),
        _ => None,
    }
}

/// Hint file written by theme-switcher hooks: one line, `dark` or `light`.
pub fn hint_file() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join("appearance"))
}

/// `COLORFGBG` is `<fg>;<bg>`; background indices 7 and 15 are the light
/// ones.
pub fn parse_colorfgbg(value: &str) -> Option<Appearance> {
    let bg = value.rsplit(';').next()?;
    match bg.trim().parse::<u8>() {
        Ok(7) | Ok(15) => Some(Appearance::Light),
        Ok(_) => Some(Appearance::Dark),
        Err(_) => None,
    }
}

/// Read the current appearance from the environment.
pub fn detect() -> Appearance {
    if let Ok(value) = std::env::var(ENV_OVERRIDE)
        && let Some(appearance) = parse(&value)
    {
        return appearance;
    }
    if let Some(path) = hint_file()
        && let Ok(contents) = fs::read_to_string(&path)
        && let Some(appearance) = parse(&contents)
    {
        return appearance;
    }
    if let Ok(value) = std::env::var("COLORFGBG")
        && let Some(appearance) = parse_colorfgbg(&value)
    {
        return appearance;
    }
    Appearance::Dark
}

/// Watch for appearance flips, emitting an event on each change until
/// cancelled. Polls, because theme-switcher hooks write the hint file
/// from outside the process.
pub fn spawn_watcher(
    tx: UnboundedSender<AppEvent>,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut current = detect();
        let mut interval = tokio::time::interval(POLL_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    let next = detect();
                    if next != current {
                        current = next;
                        log::debug!("system appearance changed to {next:?}");
                        if tx.send(AppEvent::AppearanceChanged(next)).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_appearance_names() {
        assert_eq!(parse("dark"), Some(Appearance::Dark));
        assert_eq!(parse(" Light\n"), Some(Appearance::Light));
        assert_eq!(parse("solarized"), None);
    }

    #[test]
    fn parses_colorfgbg_backgrounds() {
        assert_eq!(parse_colorfgbg("15;0"), Some(Appearance::Dark));
        assert_eq!(parse_colorfgbg("0;15"), Some(Appearance::Light));
        assert_eq!(parse_colorfgbg("12;8;7"), Some(Appearance::Light));
        assert_eq!(parse_colorfgbg("default;default"), None);
    }
}
