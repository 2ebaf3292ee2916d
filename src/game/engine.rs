use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    config::{Difficulty, GameConfig},
    direction::Direction,
    error::ConfigError,
    events::GameEvent,
    state::{CollisionType, GameStatus, Position, Snake},
};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The move was fatal and the game is over
    Collided(CollisionType),
}

/// The game engine: owns every piece of board state for the process
///
/// Snake, food, score and status are rebuilt by [`GameEngine::initialize`];
/// the high score survives across sessions.
pub struct GameEngine {
    config: GameConfig,
    snake: Snake,
    food: Position,
    direction: Direction,
    score: u32,
    high_score: u32,
    status: GameStatus,
    difficulty: Difficulty,
    events: Vec<GameEvent>,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with deterministic food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::new(config.origin());
        let mut engine = Self {
            food: config.origin(),
            config,
            snake,
            direction: Direction::Right,
            score: 0,
            high_score: 0,
            status: GameStatus::NotStarted,
            difficulty: Difficulty::default(),
            events: Vec::new(),
            rng,
        };
        engine.food = engine.spawn_food();
        Ok(engine)
    }

    /// Reset the board and begin a session
    pub fn initialize(&mut self, difficulty: Difficulty) {
        self.snake = Snake::new(self.config.origin());
        self.direction = Direction::Right;
        self.food = self.spawn_food();
        self.score = 0;
        self.difficulty = difficulty;
        self.status = GameStatus::Running;

        info!(%difficulty, high_score = self.high_score, "Session initialized");
        self.events.push(GameEvent::Started { difficulty });
    }

    /// Apply a turn request. Returns whether it was accepted.
    ///
    /// Only turns onto the other axis are accepted, so reversing and
    /// repeating the current heading are both ignored.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        if !self.direction.is_turn_to(requested) {
            trace!(current = ?self.direction, ?requested, "Ignoring turn");
            return false;
        }

        self.direction = requested;
        self.events.push(GameEvent::DirectionChanged {
            direction: requested,
        });
        true
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let head = self.snake.head().stepped(self.direction, self.config.cell_size);

        if let Some(cause) = self.check_collision(head) {
            self.status = GameStatus::GameOver;
            info!(?cause, score = self.score, ?head, "Game over");
            self.events.push(GameEvent::GameOver {
                cause,
                score: self.score,
            });
            return TickOutcome::Collided(cause);
        }

        self.snake.push_head(head);

        let outcome = if head == self.food {
            self.score += self.config.food_reward;
            debug!(score = self.score, ?head, "Food eaten");
            self.events.push(GameEvent::FoodEaten {
                score: self.score,
                at: head,
            });
            self.food = self.spawn_food();

            if self.score > self.high_score {
                self.high_score = self.score;
                self.events.push(GameEvent::NewHighScore {
                    high_score: self.high_score,
                });
            }
            TickOutcome::Ate
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        };

        self.events.push(GameEvent::Render);
        outcome
    }

    /// Halt a running session without ending it as a game over
    pub fn stop(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::NotStarted;
            info!(score = self.score, "Session stopped");
            self.events.push(GameEvent::Stopped);
        }
    }

    /// Bounds are checked before the body
    fn check_collision(&self, head: Position) -> Option<CollisionType> {
        if !self.config.contains(head) {
            return Some(CollisionType::OutOfBounds);
        }

        if self.snake.occupies(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a random free cell by rejection sampling.
    ///
    /// Never returns while every cell is covered by the snake.
    pub fn spawn_food(&mut self) -> Position {
        let unit = self.config.cell_size;
        loop {
            let x = self.rng.gen_range(0..self.config.columns()) * unit;
            let y = self.rng.gen_range(0..self.config.rows()) * unit;
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                return pos;
            }
        }
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Difficulty of the current or most recent session
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[cfg(test)]
    pub(crate) fn arrange(&mut self, snake: Snake, direction: Direction, food: Position) {
        self.snake = snake;
        self.direction = direction;
        self.food = food;
    }
}
