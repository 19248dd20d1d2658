//! Alarm playback.
//!
//! Playback is fire-and-forget: nothing waits for the sound to finish. A
//! failure to play is logged and the terminal bell rings instead.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::thread;

/// Something that can play the alarm asset.
pub trait AlarmPlayer: Send + Sync {
    /// Starts playing `asset`. Must not block until playback ends.
    fn play(&self, asset: &Path);
}

/// How the alarm is sounded, as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SoundMode {
    /// Play the asset with a system audio player, ringing the terminal bell
    /// if none is installed.
    #[default]
    Auto,
    /// Only ring the terminal bell.
    Bell,
    /// No sound.
    Off,
}

impl SoundMode {
    /// The player implementing this mode.
    pub fn player(self) -> Box<dyn AlarmPlayer> {
        match self {
            SoundMode::Auto => Box::new(CommandPlayer::default()),
            SoundMode::Bell => Box::new(BellPlayer),
            SoundMode::Off => Box::new(SilentPlayer),
        }
    }
}

/// Players tried in order by [`CommandPlayer::default`].
pub const SYSTEM_PLAYERS: &[&str] = &["paplay", "aplay", "afplay"];

/// Spawns an external player process per alarm and never waits on it.
///
/// When the asset is missing or no player can be started, the fallback
/// player sounds the alarm instead; by default that is the terminal bell.
#[derive(Clone)]
pub struct CommandPlayer {
    programs: Vec<String>,
    fallback: Arc<dyn AlarmPlayer>,
}

impl fmt::Debug for CommandPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandPlayer")
            .field("programs", &self.programs)
            .finish_non_exhaustive()
    }
}

impl CommandPlayer {
    /// Tries `programs` in order, ringing the bell if none of them starts.
    pub fn new(programs: Vec<String>) -> Self {
        Self {
            programs,
            fallback: Arc::new(BellPlayer),
        }
    }

    /// Replaces the player used when the asset can't be played.
    pub fn with_fallback(mut self, fallback: Arc<dyn AlarmPlayer>) -> Self {
        self.fallback = fallback;
        self
    }

    fn spawn(&self, asset: &Path) -> io::Result<&str> {
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no audio player configured");
        for program in &self.programs {
            let spawned = Command::new(program)
                .arg(asset)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(child) => {
                    reap(child);
                    return Ok(program.as_str());
                }
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

/// Waits for `child` on a detached thread so it doesn't linger as a zombie.
fn reap(mut child: Child) {
    thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::debug!(error = %e, "couldn't wait for alarm player");
        }
    });
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::new(SYSTEM_PLAYERS.iter().map(|p| p.to_string()).collect())
    }
}

impl AlarmPlayer for CommandPlayer {
    fn play(&self, asset: &Path) {
        // Players happily start on a missing file and fail later, silently.
        if !asset.is_file() {
            tracing::warn!(asset = %asset.display(), "alarm sound not found, using fallback");
            self.fallback.play(asset);
            return;
        }
        match self.spawn(asset) {
            Ok(program) => tracing::debug!(%program, asset = %asset.display(), "alarm started"),
            Err(e) => {
                tracing::warn!(
                    asset = %asset.display(),
                    error = %e,
                    "couldn't play alarm, using fallback"
                );
                self.fallback.play(asset);
            }
        }
    }
}

/// Rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellPlayer;

impl AlarmPlayer for BellPlayer {
    fn play(&self, _asset: &Path) {
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "couldn't ring terminal bell");
        }
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl AlarmPlayer for SilentPlayer {
    fn play(&self, _asset: &Path) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AlarmPlayer;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// Records every asset it was asked to play.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingPlayer {
        pub played: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl RecordingPlayer {
        pub fn count(&self) -> usize {
            self.played.lock().unwrap().len()
        }
    }

    impl AlarmPlayer for RecordingPlayer {
        fn play(&self, asset: &Path) {
            self.played.lock().unwrap().push(asset.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingPlayer;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_mode_is_auto() {
        assert_eq!(SoundMode::default(), SoundMode::Auto);
    }

    #[test]
    fn test_missing_program_reports_error() {
        let player = CommandPlayer::new(vec!["definitely-not-an-audio-player-xyz".into()]);
        assert!(player.spawn(Path::new("alarm.wav")).is_err());
    }

    #[test]
    fn test_empty_program_list_reports_error() {
        let player = CommandPlayer::new(Vec::new());
        let err = player.spawn(Path::new("alarm.wav")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_recording_player_counts() {
        let player = RecordingPlayer::default();
        let boxed: Box<dyn AlarmPlayer> = Box::new(player.clone());
        boxed.play(Path::new("a.wav"));
        boxed.play(Path::new("b.wav"));
        assert_eq!(player.count(), 2);
    }

    fn existing_asset() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    #[test]
    fn test_missing_asset_uses_fallback() {
        let fallback = RecordingPlayer::default();
        let player = CommandPlayer::new(vec!["true".into()])
            .with_fallback(Arc::new(fallback.clone()));
        player.play(Path::new("no-such-dir/alarm.wav"));
        assert_eq!(fallback.count(), 1);
        assert_eq!(
            fallback.played.lock().unwrap()[0],
            PathBuf::from("no-such-dir/alarm.wav")
        );
    }

    #[test]
    fn test_unstartable_player_uses_fallback() {
        let fallback = RecordingPlayer::default();
        let player = CommandPlayer::new(vec!["definitely-not-an-audio-player-xyz".into()])
            .with_fallback(Arc::new(fallback.clone()));
        player.play(&existing_asset());
        assert_eq!(fallback.count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_started_player_skips_fallback() {
        let fallback = RecordingPlayer::default();
        let player = CommandPlayer::new(vec!["true".into()])
            .with_fallback(Arc::new(fallback.clone()));
        player.play(&existing_asset());
        assert_eq!(fallback.count(), 0);
    }

    #[test]
    fn test_silent_player_is_noop() {
        SilentPlayer.play(Path::new("alarm.wav"));
    }
}
