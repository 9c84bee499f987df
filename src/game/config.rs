use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tick-speed presets, selectable before a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

impl Speed {
    /// The fixed interval between game ticks at this speed.
    pub fn tick_interval(self) -> Duration {
        match self {
            Speed::Fast => Duration::from_millis(30),
            Speed::Medium => Duration::from_millis(80),
            Speed::Slow => Duration::from_millis(140),
        }
    }

    /// Display name on the start screen.
    pub fn label(self) -> &'static str {
        match self {
            Speed::Fast => "Super Sonic",
            Speed::Medium => "Rapid",
            Speed::Slow => "Lazy",
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Height of the game grid
    pub grid_height: usize,
    /// Width of the game grid
    pub grid_width: usize,
    /// Probability that a spawned food reverses the snake
    pub reversal_probability: f64,
    /// Tick speed preset
    pub speed: Speed,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_height: 13,
            grid_width: 25,
            reversal_probability: 0.3,
            speed: Speed::Medium,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            grid_height: height,
            grid_width: width,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_height, 13);
        assert_eq!(config.grid_width, 25);
        assert_eq!(config.reversal_probability, 0.3);
        assert_eq!(config.speed, Speed::Medium);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 20);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.reversal_probability, 0.3);
    }

    #[test]
    fn test_speed_presets() {
        assert_eq!(Speed::Fast.tick_interval(), Duration::from_millis(30));
        assert_eq!(Speed::Medium.tick_interval(), Duration::from_millis(80));
        assert_eq!(Speed::Slow.tick_interval(), Duration::from_millis(140));
    }
}
