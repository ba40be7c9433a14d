use std::str::FromStr;

use crate::error::GameError;

use super::types::{Direction, Point};

/// Normalized input accepted by the engine. Raw key identifiers are mapped
/// to these by the `InputRouter`; the scheduler delivers `Tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    ToggleRunPause,
    Restart,
    Tick,
}

impl FromStr for Intent {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "left" => Ok(Intent::Turn(Direction::Left)),
            "right" => Ok(Intent::Turn(Direction::Right)),
            "up" => Ok(Intent::Turn(Direction::Up)),
            "down" => Ok(Intent::Turn(Direction::Down)),
            "toggle" => Ok(Intent::ToggleRunPause),
            "restart" => Ok(Intent::Restart),
            other => Err(GameError::InvalidInput(format!(
                "unknown intent name: {}",
                other
            ))),
        }
    }
}

/// Renderable description of one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub segments: Vec<Point>,
    pub food: Point,
    pub score: u32,
}

/// Lifecycle output consumed by the rendering, audio, and scheduling
/// collaborators. The engine knows nothing about their implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Frame(FrameSnapshot),
    FoodEaten { at: Point },
    SpeedChanged { interval_ms: u64 },
    GameOver { final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_parses_known_names() {
        assert_eq!("left".parse::<Intent>().unwrap(), Intent::Turn(Direction::Left));
        assert_eq!("toggle".parse::<Intent>().unwrap(), Intent::ToggleRunPause);
        assert_eq!("restart".parse::<Intent>().unwrap(), Intent::Restart);
    }

    #[test]
    fn test_intent_rejects_unknown_name() {
        let result = "jump".parse::<Intent>();
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }
}
