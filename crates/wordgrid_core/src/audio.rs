//! Optional background music capability.
//!
//! The session treats audio as an opaque on/off switch. Nothing about
//! gameplay depends on it, and a failing switch only produces a warning.

use crate::error::AudioError;

/// Start/stop control over background music.
pub trait AudioSwitch: std::fmt::Debug {
    /// Starts looping playback. Starting while playing is a no-op.
    fn start(&mut self) -> Result<(), AudioError>;

    /// Stops playback. Stopping while stopped is a no-op.
    fn stop(&mut self);

    /// Returns true while music is playing, as of the last refresh.
    fn is_playing(&self) -> bool;

    /// Re-reads the playing state from the underlying player, which may
    /// have stopped on its own.
    fn refresh(&mut self) {}

    /// Flips playback and reports the new state (true = playing).
    fn toggle(&mut self) -> Result<bool, AudioError> {
        self.refresh();
        if self.is_playing() {
            self.stop();
            Ok(false)
        } else {
            self.start()?;
            Ok(true)
        }
    }
}
