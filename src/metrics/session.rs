use std::time::{Duration, Instant};

/// Statistics for one sitting at the terminal
///
/// Survives restarts: the high score and games-played count accumulate
/// across games, while the clock restarts with each new game.
pub struct SessionStats {
    pub started_at: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the running clock
    ///
    /// Called once per rendered frame while a game is in progress, so the
    /// displayed time freezes at the moment of death.
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Elapsed time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
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
        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(59);
        assert_eq!(stats.format_time(), "00:59");

        stats.elapsed = Duration::from_secs(60);
        assert_eq!(stats.format_time(), "01:00");

        // Minutes keep counting past the hour
        stats.elapsed = Duration::from_secs(3700);
        assert_eq!(stats.format_time(), "61:40");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_game_over(8);
        assert_eq!(stats.high_score, 8);
        assert_eq!(stats.games_played, 1);

        stats.on_game_over(3);
        assert_eq!(stats.high_score, 8); // A worse game never lowers it
        assert_eq!(stats.games_played, 2);

        stats.on_game_over(21);
        assert_eq!(stats.high_score, 21);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();

        assert!(stats.elapsed.as_millis() >= 50);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed.as_millis() < 50);
    }

    #[test]
    fn test_high_score_survives_game_start() {
        let mut stats = SessionStats::new();
        stats.on_game_over(12);
        stats.on_game_start();

        assert_eq!(stats.high_score, 12);
        assert_eq!(stats.games_played, 1);
    }
}
