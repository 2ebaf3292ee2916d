use tracing::{debug, info};

use crate::game::GameEvent;

/// Consumer of engine events; never touches engine state
pub trait GameEventListener {
    fn on_event(&mut self, event: &GameEvent);
}

/// Writes every event to the log as JSON
#[derive(Debug, Default)]
pub struct EventLogger;

impl GameEventListener for EventLogger {
    fn on_event(&mut self, event: &GameEvent) {
        if matches!(event, GameEvent::Render) {
            return;
        }

        match serde_json::to_string(event) {
            Ok(json) => info!(target: "snake_arcade::events", "{json}"),
            Err(e) => debug!("Failed to serialize event {:?}: {}", event, e),
        }
    }
}

/// Sound effect associated with a game event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    ChangeDirection,
    EatFood,
    GameOver,
    HighScore,
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::DirectionChanged { .. } => Some(Cue::ChangeDirection),
            GameEvent::FoodEaten { .. } => Some(Cue::EatFood),
            GameEvent::NewHighScore { .. } => Some(Cue::HighScore),
            GameEvent::GameOver { .. } => Some(Cue::GameOver),
            GameEvent::Started { .. } | GameEvent::Render | GameEvent::Stopped => None,
        }
    }

    /// Asset name the cue maps to
    pub fn name(&self) -> &'static str {
        match self {
            Cue::ChangeDirection => "change_direction",
            Cue::EatFood => "eat_food",
            Cue::GameOver => "game_over",
            Cue::HighScore => "high_score",
        }
    }
}

/// Tracks cues to play; the terminal has no audio so the last one is shown
/// in the status line instead.
#[derive(Debug, Default)]
pub struct CuePlayer {
    last: Option<Cue>,
}

impl CuePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Cue> {
        self.last
    }
}

impl GameEventListener for CuePlayer {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(cue) = Cue::for_event(event) {
            debug!(cue = cue.name(), "Playing cue");
            self.last = Some(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Difficulty, Direction, Position};

    #[test]
    fn test_cue_mapping() {
        assert_eq!(
            Cue::for_event(&GameEvent::DirectionChanged {
                direction: Direction::Up
            }),
            Some(Cue::ChangeDirection)
        );
        assert_eq!(
            Cue::for_event(&GameEvent::FoodEaten {
                score: 10,
                at: Position::new(0, 0)
            }),
            Some(Cue::EatFood)
        );
        assert_eq!(
            Cue::for_event(&GameEvent::GameOver {
                cause: CollisionType::SelfCollision,
                score: 0
            }),
            Some(Cue::GameOver)
        );
        assert_eq!(
            Cue::for_event(&GameEvent::NewHighScore { high_score: 10 }),
            Some(Cue::HighScore)
        );
        assert_eq!(Cue::for_event(&GameEvent::Render), None);
        assert_eq!(
            Cue::for_event(&GameEvent::Started {
                difficulty: Difficulty::Easy
            }),
            None
        );
    }

    #[test]
    fn test_cue_player_tracks_last_cue() {
        let mut player = CuePlayer::new();
        player.on_event(&GameEvent::Render);
        assert_eq!(player.last(), None);

        player.on_event(&GameEvent::FoodEaten {
            score: 10,
            at: Position::new(20, 20),
        });
        player.on_event(&GameEvent::NewHighScore { high_score: 10 });
        assert_eq!(player.last(), Some(Cue::HighScore));
        assert_eq!(Cue::HighScore.name(), "high_score");
    }

    #[test]
    fn test_events_serialize_with_tag() {
        let json = serde_json::to_string(&GameEvent::GameOver {
            cause: CollisionType::OutOfBounds,
            score: 30,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"event":"game_over","cause":"out_of_bounds","score":30}"#
        );
    }
}
