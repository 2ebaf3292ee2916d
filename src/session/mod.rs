//! Session driver: owns the engine, its tick timer and the collaborators
//! that react to engine events.

pub mod controls;
pub mod listeners;
pub mod notifier;
pub mod timer;

pub use controls::Controls;
pub use listeners::{Cue, CuePlayer, EventLogger, GameEventListener};
pub use notifier::{LogNotifier, SessionNotifier};
pub use timer::TickTimer;

use tracing::{debug, warn};

use crate::game::{CollisionType, Difficulty, Direction, GameEngine, GameStatus, TickOutcome};
use crate::metrics::GameMetrics;

pub struct Session {
    engine: GameEngine,
    timer: TickTimer,
    controls: Controls,
    selected_difficulty: Difficulty,
    listening: bool,
    notifier: Box<dyn SessionNotifier>,
    notified: bool,
    cues: CuePlayer,
    last_collision: Option<CollisionType>,
    listeners: Vec<Box<dyn GameEventListener>>,
    metrics: GameMetrics,
}

impl Session {
    pub fn new(
        engine: GameEngine,
        difficulty: Difficulty,
        notifier: Box<dyn SessionNotifier>,
    ) -> Self {
        Self {
            engine,
            timer: TickTimer::new(),
            controls: Controls::new(),
            selected_difficulty: difficulty,
            listening: false,
            notifier,
            notified: false,
            cues: CuePlayer::new(),
            last_collision: None,
            listeners: Vec::new(),
            metrics: GameMetrics::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn GameEventListener>) {
        self.listeners.push(listener);
    }

    /// Change the selector; takes effect at the next start or restart
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.selected_difficulty = difficulty;
    }

    /// Begin a new session if the start control is enabled
    pub fn start(&mut self) -> bool {
        if !self.controls.start_enabled {
            debug!("Start ignored while a session is running");
            return false;
        }

        if self.engine.status() == GameStatus::GameOver {
            self.stop();
        }

        self.begin();
        true
    }

    /// Clear the finished session and start over; only valid after game over
    pub fn restart(&mut self) -> bool {
        if !self.controls.restart_enabled {
            debug!("Restart ignored before game over");
            return false;
        }

        self.begin();
        true
    }

    fn begin(&mut self) {
        // The old interval must be gone before a new one is armed
        self.timer.cancel();

        let difficulty = self.selected_difficulty;
        self.engine.initialize(difficulty);
        self.last_collision = None;
        self.timer.start(difficulty.tick_interval());
        self.listening = true;
        self.controls.on_session_start();
        self.metrics.on_game_start();

        if !self.notified {
            self.notified = true;
            if let Err(e) = self.notifier.notify_session_start(difficulty) {
                warn!("Session start notification failed: {:#}", e);
            }
        }

        self.dispatch();
    }

    /// Halt ticking and stop listening for input
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.listening = false;
        if self.engine.is_running() {
            self.metrics.on_stop();
        }
        self.engine.stop();
        self.controls.on_stop();
        self.dispatch();
    }

    /// Forward a turn request from the input source
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !self.listening {
            return false;
        }

        let accepted = self.engine.set_direction(direction);
        self.dispatch();
        accepted
    }

    /// Resolves on the next timer tick; pending forever while the timer is off
    pub async fn next_tick(&mut self) {
        self.timer.tick().await;
    }

    /// Run one engine tick and react to its outcome
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Moved | TickOutcome::Ate => self.metrics.on_tick(),
            TickOutcome::Collided(cause) => {
                self.last_collision = Some(cause);
                self.metrics.on_tick();
                self.timer.cancel();
                self.controls.on_game_over();
                self.metrics.on_game_over();
            }
        }

        self.dispatch();
        outcome
    }

    fn dispatch(&mut self) {
        for event in self.engine.drain_events() {
            self.cues.on_event(&event);
            for listener in self.listeners.iter_mut() {
                listener.on_event(&event);
            }
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected_difficulty
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_running()
    }

    pub fn tick_period(&self) -> Option<std::time::Duration> {
        self.timer.period()
    }

    /// Why the most recent game ended, cleared when a new one begins
    pub fn last_collision(&self) -> Option<CollisionType> {
        self.last_collision
    }

    pub fn cues(&self) -> &CuePlayer {
        &self.cues
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut GameMetrics {
        &mut self.metrics
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }
}
