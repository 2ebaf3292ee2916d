use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{CollisionType, Difficulty, GameEngine, GameStatus, Position};
use crate::session::Session;

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

pub fn cell_at(engine: &GameEngine, pos: Position) -> CellKind {
    if pos == engine.snake().head() {
        CellKind::Head
    } else if engine.snake().occupies(pos) {
        CellKind::Body
    } else if pos == engine.food() {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

/// The running session's level, or the selector between sessions
fn shown_difficulty(session: &Session) -> Difficulty {
    if session.engine().is_running() {
        session.engine().difficulty()
    } else {
        session.selected_difficulty()
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let engine = session.engine();
        let body = match engine.status() {
            GameStatus::Running => self.render_board(engine),
            GameStatus::GameOver => self.render_game_over(session),
            GameStatus::NotStarted => self.render_title(session),
        };
        frame.render_widget(body, board_area);

        frame.render_widget(self.render_controls(session), chunks[2]);
    }

    fn render_board(&self, engine: &GameEngine) -> Paragraph<'static> {
        let config = engine.config();
        let unit = config.cell_size;

        let lines: Vec<Line> = (0..config.rows())
            .map(|row| {
                let spans: Vec<Span> = (0..config.columns())
                    .map(|col| {
                        let pos = Position::new(col * unit, row * unit);
                        match cell_at(engine, pos) {
                            CellKind::Head => Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(Color::Green)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            CellKind::Body => {
                                Span::styled("■ ", Style::default().fg(Color::LightGreen))
                            }
                            CellKind::Food => Span::styled(
                                "● ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            ),
                            CellKind::Empty => {
                                Span::styled(". ", Style::default().fg(Color::DarkGray))
                            }
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::LightRed))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &Session) -> Paragraph<'static> {
        let engine = session.engine();
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(engine.score().to_string(), value),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(engine.high_score().to_string(), value),
            Span::raw("    "),
            Span::styled("Difficulty: ", label),
            Span::styled(shown_difficulty(session).to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(
                session.metrics().format_time(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_title(&self, session: &Session) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(
                        "{} ({} ms per step)",
                        session.selected_difficulty(),
                        session.selected_difficulty().tick_millis()
                    ),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_game_over(&self, session: &Session) -> Paragraph<'static> {
        let cause = match session.last_collision() {
            Some(CollisionType::OutOfBounds) => "You hit the wall",
            Some(CollisionType::SelfCollision) => "You ran into yourself",
            None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.engine().score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, session: &Session) -> Paragraph<'static> {
        let controls = session.controls();
        let button = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };

        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" move | "),
            Span::styled("Enter start", button(controls.start_enabled)),
            Span::raw(" | "),
            Span::styled("R restart", button(controls.restart_enabled)),
            Span::raw(" | "),
            Span::styled("Space stop", button(session.is_ticking())),
            Span::raw(" | "),
            Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
            Span::raw(" difficulty | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ];

        if let Some(cue) = session.cues().last() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("♪ {}", cue.name()),
                Style::default().fg(Color::Magenta),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Snake};
    use crate::session::LogNotifier;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn session() -> Session {
        let engine = GameEngine::with_seed(GameConfig::small(), 11).unwrap();
        Session::new(engine, Difficulty::Easy, Box::new(LogNotifier))
    }

    #[test]
    fn test_cell_classification() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1).unwrap();
        engine.arrange(
            Snake::from_segments([Position::new(40, 0), Position::new(20, 0)]).unwrap(),
            Direction::Right,
            Position::new(100, 100),
        );

        assert_eq!(cell_at(&engine, Position::new(40, 0)), CellKind::Head);
        assert_eq!(cell_at(&engine, Position::new(20, 0)), CellKind::Body);
        assert_eq!(cell_at(&engine, Position::new(100, 100)), CellKind::Food);
        assert_eq!(cell_at(&engine, Position::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_title_screen() {
        let session = session();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &session))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("SNAKE"));
        assert!(text.contains("High Score: 0"));
        assert!(text.contains("easy (150 ms per step)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_board_and_game_over_screens() {
        let mut session = session();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        session.start();
        terminal
            .draw(|frame| renderer.render(frame, &session))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Snake"));
        assert!(text.contains("●"));

        session.engine_mut().arrange(
            Snake::new(Position::new(0, 0)),
            Direction::Up,
            Position::new(100, 100),
        );
        session.on_tick();
        terminal
            .draw(|frame| renderer.render(frame, &session))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You hit the wall"));
        assert!(text.contains("game_over"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_header_shows_running_difficulty() {
        let mut session = session();
        session.start();
        session.select_difficulty(Difficulty::Hard);
        assert_eq!(shown_difficulty(&session), Difficulty::Easy);

        session.stop();
        assert_eq!(shown_difficulty(&session), Difficulty::Hard);
    }
}
