use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::session::Session;

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Interactive play in the terminal
pub struct ArcadeMode {
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl ArcadeMode {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.session.stop();
        let cleanup = self.cleanup_terminal(&mut terminal);

        info!(
            high_score = self.session.engine().high_score(),
            games_played = self.session.metrics().games_played,
            "Exiting"
        );

        finish(result, cleanup)
    }

    async fn run_game_loop(&mut self, terminal: &mut Term) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Ticks come from the session timer; this only refreshes the clock
        let mut clock_timer = interval(Duration::from_millis(250));

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if self.handle_event(event) {
                            self.draw(terminal)?;
                        }
                    }
                }

                // Game logic tick, drawn as soon as state has moved
                _ = self.session.next_tick() => {
                    self.session.on_tick();
                    self.draw(terminal)?;
                }

                _ = clock_timer.tick() => {
                    self.session.metrics_mut().update();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Returns whether the screen needs a redraw
    fn handle_event(&mut self, event: Event) -> bool {
        let key = match event {
            Event::Key(key) => key,
            Event::Resize(_, _) => return true,
            _ => return false,
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => self.session.turn(direction),
            KeyAction::Start => self.session.start(),
            KeyAction::Restart => self.session.restart(),
            KeyAction::Stop => {
                self.session.stop();
                true
            }
            KeyAction::SelectDifficulty(difficulty) => {
                self.session.select_difficulty(difficulty);
                true
            }
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    fn draw(&mut self, terminal: &mut Term) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.session))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(&mut self, terminal: &mut Term) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Result of a run; when both the game loop and terminal cleanup failed the
/// cleanup error is returned and the loop error is logged.
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(run_err), Err(cleanup_err)) => {
            error!("Game loop failed: {:#}", run_err);
            Err(cleanup_err)
        }
        (result, Ok(())) => result,
        (Ok(()), Err(cleanup_err)) => Err(cleanup_err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, Direction, GameConfig, GameEngine, GameStatus};
    use crate::session::LogNotifier;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn mode() -> ArcadeMode {
        let engine = GameEngine::with_seed(GameConfig::default(), 5).unwrap();
        ArcadeMode::new(Session::new(
            engine,
            Difficulty::Medium,
            Box::new(LogNotifier),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_drive_session() {
        let mut mode = mode();

        assert!(mode.handle_event(key(KeyCode::Char('3'))));
        assert_eq!(mode.session.selected_difficulty(), Difficulty::Hard);

        assert!(mode.handle_event(key(KeyCode::Enter)));
        assert_eq!(mode.session.engine().status(), GameStatus::Running);
        assert_eq!(mode.session.engine().difficulty(), Difficulty::Hard);

        assert!(mode.handle_event(key(KeyCode::Up)));
        assert_eq!(mode.session.engine().direction(), Direction::Up);

        // Reversal is rejected, nothing to redraw
        assert!(!mode.handle_event(key(KeyCode::Down)));

        assert!(mode.handle_event(key(KeyCode::Char(' '))));
        assert_eq!(mode.session.engine().status(), GameStatus::NotStarted);

        assert!(!mode.handle_event(key(KeyCode::Char('q'))));
        assert!(mode.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_release_ignored() {
        let mut mode = mode();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        assert!(!mode.handle_event(release));
        assert_eq!(mode.session.engine().status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_finish_prefers_loop_error() {
        let err = finish(Err(anyhow::anyhow!("draw failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");

        let err = finish(Ok(()), Err(anyhow::anyhow!("raw mode"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");

        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_with_both_errors_returns_cleanup_error() {
        let err = finish(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("raw mode")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }
}
