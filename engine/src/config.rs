use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{Direction, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_tick_interval_ms: u64,
    pub min_tick_interval_ms: u64,
    pub speed_step_ms: u64,
    pub score_step_for_speedup: u32,
    pub starting_snake_length: usize,
    pub starting_position: Point,
    pub starting_direction: Direction,
    /// Raw key identifier -> intent name, consumed by `InputRouter`.
    pub key_bindings: HashMap<String, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_tick_interval_ms: 150,
            min_tick_interval_ms: 50,
            speed_step_ms: 10,
            score_step_for_speedup: 3,
            starting_snake_length: 1,
            starting_position: Point::new(10, 10),
            starting_direction: Direction::Right,
            key_bindings: default_key_bindings(),
        }
    }
}

pub fn default_key_bindings() -> HashMap<String, String> {
    HashMap::from([
        ("a".to_string(), "left".to_string()),
        ("w".to_string(), "up".to_string()),
        ("d".to_string(), "right".to_string()),
        ("s".to_string(), "down".to_string()),
        ("space".to_string(), "toggle".to_string()),
    ])
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width < 1 || self.grid_height < 1 {
            return Err(GameError::Configuration(
                "grid dimensions must be positive".to_string(),
            ));
        }
        if self.initial_tick_interval_ms == 0 {
            return Err(GameError::Configuration(
                "initial_tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.min_tick_interval_ms == 0 {
            return Err(GameError::Configuration(
                "min_tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.min_tick_interval_ms > self.initial_tick_interval_ms {
            return Err(GameError::Configuration(
                "min_tick_interval_ms must not exceed initial_tick_interval_ms".to_string(),
            ));
        }
        if self.speed_step_ms == 0 {
            return Err(GameError::Configuration(
                "speed_step_ms must be positive".to_string(),
            ));
        }
        if self.score_step_for_speedup == 0 {
            return Err(GameError::Configuration(
                "score_step_for_speedup must be positive".to_string(),
            ));
        }
        if self.starting_snake_length == 0 {
            return Err(GameError::Configuration(
                "starting_snake_length must be at least 1".to_string(),
            ));
        }

        // The whole starting body must fit: segments trail opposite the
        // starting direction from the starting position.
        let (dx, dy) = self.starting_direction.delta();
        let head = self.starting_position;
        let tail = Point::new(
            head.x - dx * (self.starting_snake_length as i32 - 1),
            head.y - dy * (self.starting_snake_length as i32 - 1),
        );
        for cell in [head, tail] {
            if cell.x < 0 || cell.x >= self.grid_width || cell.y < 0 || cell.y >= self.grid_height {
                return Err(GameError::Configuration(
                    "starting snake does not fit on the grid".to_string(),
                ));
            }
        }

        // Food needs at least one free cell.
        let cells = (self.grid_width as usize) * (self.grid_height as usize);
        if self.starting_snake_length >= cells {
            return Err(GameError::Configuration(
                "grid too small for the starting snake plus food".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| GameError::Configuration(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GameError::Configuration(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }
}
