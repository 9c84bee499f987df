use std::time::{Duration, Instant};

/// Session counters that outlive the per-run engine resets.
pub struct GameMetrics {
    run_started: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub runs_completed: u32,
    pub reversals_eaten: u32,
    pub longest_body: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_started: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            runs_completed: 0,
            reversals_eaten: 0,
            longest_body: 1,
        }
    }

    /// Refresh the elapsed clock; called from the render loop.
    pub fn update(&mut self) {
        self.elapsed = self.run_started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.run_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_food(&mut self, reversed: bool, body_length: usize) {
        if reversed {
            self.reversals_eaten += 1;
        }
        self.longest_body = self.longest_body.max(body_length);
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.runs_completed += 1;
        self.best_score = self.best_score.max(final_score);
    }

    /// Elapsed run time as mm:ss.
    pub fn format_time(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
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
    fn test_format_time() {
        let mut metrics = GameMetrics::new();
        for (secs, formatted) in [(0, "00:00"), (59, "00:59"), (125, "02:05")] {
            metrics.elapsed = Duration::from_secs(secs);
            assert_eq!(metrics.format_time(), formatted);
        }
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(10);
        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.runs_completed, 2);
        metrics.on_game_over(15);
        assert_eq!(metrics.best_score, 15);
    }

    #[test]
    fn test_food_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_food(false, 2);
        metrics.on_food(true, 3);
        metrics.on_food(true, 3);
        assert_eq!(metrics.reversals_eaten, 2);
        assert_eq!(metrics.longest_body, 3);
    }
}
