use std::time::{Duration, Instant};

/// Per-process play statistics shown in the header
pub struct GameMetrics {
    started_at: Option<Instant>,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub ticks: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: None,
            elapsed_time: Duration::ZERO,
            games_played: 0,
            ticks: 0,
        }
    }

    /// Refresh the clock; a finished or stopped game keeps its final time
    pub fn update(&mut self) {
        if let Some(started_at) = self.started_at {
            self.elapsed_time = started_at.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
        self.ticks = 0;
    }

    pub fn on_tick(&mut self) {
        self.ticks += 1;
    }

    pub fn on_game_over(&mut self) {
        self.update();
        self.started_at = None;
        self.games_played += 1;
    }

    pub fn on_stop(&mut self) {
        self.update();
        self.started_at = None;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_game_over_freezes_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.on_game_over();

        let frozen = metrics.elapsed_time;
        assert!(frozen.as_millis() >= 20);
        assert!(metrics.started_at.is_none());

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
        assert_eq!(metrics.games_played, 1);
    }

    #[test]
    fn test_game_start_resets_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_tick();
        metrics.on_tick();
        assert_eq!(metrics.ticks, 2);

        metrics.on_stop();
        assert_eq!(metrics.games_played, 0);

        metrics.on_game_start();
        assert_eq!(metrics.ticks, 0);
        assert!(metrics.started_at.is_some());
    }
}
