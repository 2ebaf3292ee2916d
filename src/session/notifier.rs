use anyhow::Result;
use tracing::info;

use crate::game::Difficulty;

/// Side channel told once per process that play has begun
///
/// Calls are fire-and-forget: the session logs an error and carries on, it
/// never retries and never shows the failure to the player.
pub trait SessionNotifier {
    fn notify_session_start(&mut self, difficulty: Difficulty) -> Result<()>;
}

/// Records the session start in the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl SessionNotifier for LogNotifier {
    fn notify_session_start(&mut self, difficulty: Difficulty) -> Result<()> {
        info!(%difficulty, "First session of this run started");
        Ok(())
    }
}
