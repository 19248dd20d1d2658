//! Runtime configuration.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the binary parses the
//! command line into a [`Config`] and [`install`]s it before starting the
//! program; [`App`](crate::shell::App) reads it back with [`current`].

use crate::clock_time::ClockTime;
use crate::error::{Error, Result};
use crate::sound::SoundMode;
use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Alarm asset used when none is given.
pub const DEFAULT_ALARM_SOUND: &str = "timer_assets/alarm.wav";

/// Countdown length used when none is given: five minutes.
pub const DEFAULT_TIMER_DURATION: &str = "00:05:00";

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Process configuration, built from [`Cli`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial countdown length.
    pub timer_duration: ClockTime,
    /// Sound asset played when the countdown ends.
    pub alarm_sound: PathBuf,
    /// How the alarm is sounded.
    pub sound: SoundMode,
    /// Log destination; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer_duration: ClockTime::from_total_millis(5 * 60 * 1_000),
            alarm_sound: PathBuf::from(DEFAULT_ALARM_SOUND),
            sound: SoundMode::default(),
            log_file: None,
        }
    }
}

/// Terminal timer and stopwatch.
#[derive(Parser, Debug)]
#[command(name = "clock", version, about)]
pub struct Cli {
    /// Initial countdown, as HH:MM:SS, MM:SS or SS.
    #[arg(short, long, default_value = DEFAULT_TIMER_DURATION)]
    pub duration: ClockTime,

    /// Sound file played when the countdown ends.
    #[arg(short, long, default_value = DEFAULT_ALARM_SOUND)]
    pub alarm: PathBuf,

    /// How to sound the alarm.
    #[arg(long, value_enum, default_value_t = SoundMode::Auto)]
    pub sound: SoundMode,

    /// Write logs to this file. Filter with CLOCK_LOG, e.g. CLOCK_LOG=debug.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            timer_duration: cli.duration,
            alarm_sound: cli.alarm,
            sound: cli.sound,
            log_file: cli.log_file,
        }
    }
}

/// Makes `config` the process configuration. Fails if one is already set.
pub fn install(config: Config) -> Result<()> {
    CONFIG.set(config).map_err(|_| Error::ConfigInstalled)
}

/// The installed configuration, or the defaults.
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timer_duration, ClockTime::new(0, 5, 0).unwrap());
        assert_eq!(config.alarm_sound, PathBuf::from("timer_assets/alarm.wav"));
        assert_eq!(config.sound, SoundMode::Auto);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["clock"]).unwrap();
        assert_eq!(Config::from(cli), Config::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "clock",
            "--duration",
            "1:30",
            "--alarm",
            "ding.wav",
            "--sound",
            "bell",
            "--log-file",
            "clock.log",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.timer_duration, ClockTime::new(0, 1, 30).unwrap());
        assert_eq!(config.alarm_sound, PathBuf::from("ding.wav"));
        assert_eq!(config.sound, SoundMode::Bell);
        assert_eq!(config.log_file, Some(PathBuf::from("clock.log")));
    }

    #[test]
    fn test_cli_rejects_bad_duration() {
        assert!(Cli::try_parse_from(["clock", "--duration", "24:00:00"]).is_err());
        assert!(Cli::try_parse_from(["clock", "-d", "ten"]).is_err());
    }

    #[test]
    fn test_second_install_is_refused() {
        let _ = install(Config::default());
        assert!(matches!(
            install(Config::default()),
            Err(Error::ConfigInstalled)
        ));
        assert_eq!(current(), Config::default());
    }

    #[test]
    fn test_cli_rejects_unknown_sound() {
        assert!(Cli::try_parse_from(["clock", "--sound", "loud"]).is_err());
    }
}
