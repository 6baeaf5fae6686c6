//! In-memory statistics for one run of the program

use std::time::{Duration, Instant};

/// Per-session play statistics
///
/// The round clock stops when a round ends, so the game-over screen shows
/// how long the round lasted.
#[derive(Debug, Clone)]
pub struct SessionStats {
    round_started: Instant,
    round_time: Duration,
    round_running: bool,
    pub high_score: u32,
    pub longest_snake: usize,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            round_time: Duration::ZERO,
            round_running: true,
            high_score: 0,
            longest_snake: 0,
            games_played: 0,
        }
    }

    /// Refresh the round clock; call once per frame
    pub fn update(&mut self) {
        if self.round_running {
            self.round_time = self.round_started.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.round_time = Duration::ZERO;
        self.round_running = true;
    }

    pub fn on_round_over(&mut self, final_score: u32, final_length: usize) {
        self.update();
        self.round_running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.longest_snake = self.longest_snake.max(final_length);
    }

    pub fn round_time(&self) -> Duration {
        self.round_time
    }

    /// Round time as `MM:SS`
    pub fn format_time(&self) -> String {
        let total_secs = self.round_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.round_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.round_time = Duration::ZERO;
        assert_eq!(stats.format_time(), "00:00");

        stats.round_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_bests_only_increase() {
        let mut stats = SessionStats::new();

        stats.on_round_over(30, 6);
        stats.on_round_over(10, 4);
        assert_eq!(stats.high_score, 30);
        assert_eq!(stats.longest_snake, 6);
        assert_eq!(stats.games_played, 2);

        stats.on_round_over(50, 8);
        assert_eq!(stats.high_score, 50);
        assert_eq!(stats.longest_snake, 8);
    }

    #[test]
    fn test_clock_stops_at_round_over() {
        let mut stats = SessionStats::new();
        stats.on_round_over(0, 3);
        let frozen = stats.round_time();

        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert_eq!(stats.round_time(), frozen);

        stats.on_round_start();
        stats.update();
        assert!(stats.round_time() < Duration::from_millis(20));
    }
}
