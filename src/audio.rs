//! Background music backed by an external player process.

use crate::config::AudioConfig;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, instrument, warn};
use wordgrid_core::{AudioError, AudioSwitch};

/// Loops a music file by running a player command in a child process.
///
/// Stopping kills the child. Dropping the switch stops playback.
#[derive(Debug)]
pub struct ProcessAudio {
    track: PathBuf,
    player: Vec<String>,
    child: Option<Child>,
}

impl ProcessAudio {
    /// Creates a stopped switch for `track` played by `player`.
    pub fn new(track: impl Into<PathBuf>, player: Vec<String>) -> Self {
        Self {
            track: track.into(),
            player,
            child: None,
        }
    }

    /// Creates a stopped switch from configuration.
    pub fn from_config(config: &AudioConfig) -> Self {
        Self::new(config.track().clone(), config.player().clone())
    }
}

impl AudioSwitch for ProcessAudio {
    #[instrument(skip(self), fields(track = %self.track.display()))]
    fn start(&mut self) -> Result<(), AudioError> {
        self.refresh();
        if self.child.is_some() {
            return Ok(());
        }

        if !self.track.exists() {
            let name = self
                .track
                .file_name()
                .map_or_else(|| self.track.display().to_string(), |n| n.to_string_lossy().into_owned());
            return Err(AudioError::new(format!("{} not found", name)));
        }

        let (cmd, args) = self
            .player
            .split_first()
            .ok_or_else(|| AudioError::new("No audio player configured"))?;

        debug!(command = %cmd, args = ?args, "Starting audio player");
        let child = Command::new(cmd)
            .args(args)
            .arg(&self.track)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AudioError::new(format!("Failed to start {}: {}", cmd, e)))?;

        info!(pid = child.id(), "Background music started");
        self.child = Some(child);
        Ok(())
    }

    #[instrument(skip(self))]
    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                warn!(error = %e, "Audio player already exited");
            }
            let _ = child.wait();
            info!("Background music stopped");
        }
    }

    fn is_playing(&self) -> bool {
        self.child.is_some()
    }

    fn refresh(&mut self) {
        let Some(child) = self.child.as_mut() else {
            return;
        };
        match child.try_wait() {
            Ok(None) => {}
            Ok(Some(status)) => {
                warn!(%status, "Audio player exited");
                self.child = None;
            }
            Err(e) => {
                warn!(error = %e, "Lost track of audio player");
                self.child = None;
            }
        }
    }
}

impl Drop for ProcessAudio {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_track_reports_file_name() {
        let mut audio = ProcessAudio::new("/nonexistent/dir/music.mp3", vec!["mpv".into()]);
        let err = audio.start().unwrap_err();
        assert_eq!(err.message, "music.mp3 not found");
        assert!(!audio.is_playing());
    }

    #[test]
    fn empty_player_is_an_error() {
        let track = tempfile::NamedTempFile::new().unwrap();
        let mut audio = ProcessAudio::new(track.path(), Vec::new());
        assert!(audio.start().is_err());
        assert!(!audio.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn start_and_stop_child() {
        let track = tempfile::NamedTempFile::new().unwrap();
        let player = vec!["sh".to_string(), "-c".to_string(), "sleep 5".to_string()];
        let mut audio = ProcessAudio::new(track.path(), player);

        audio.start().unwrap();
        assert!(audio.is_playing());
        // Second start is a no-op.
        audio.start().unwrap();

        assert!(!audio.toggle().unwrap());
        assert!(!audio.is_playing());
    }

    /// Polls until the player has exited or two seconds pass.
    #[cfg(unix)]
    fn wait_for_exit(audio: &mut ProcessAudio) {
        for _ in 0..40 {
            audio.refresh();
            if !audio.is_playing() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
    }

    #[cfg(unix)]
    #[test]
    fn exited_player_is_not_playing() {
        let track = tempfile::NamedTempFile::new().unwrap();
        let mut audio = ProcessAudio::new(track.path(), vec!["true".to_string()]);

        audio.start().unwrap();
        wait_for_exit(&mut audio);
        assert!(!audio.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn toggle_after_exit_restarts() {
        let track = tempfile::NamedTempFile::new().unwrap();
        let mut audio = ProcessAudio::new(track.path(), vec!["true".to_string()]);

        audio.start().unwrap();
        // Let the player die without refreshing; toggle must notice it.
        std::thread::sleep(std::time::Duration::from_millis(1000));
        assert!(audio.toggle().unwrap());
    }
}
