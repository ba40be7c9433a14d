pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logger;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{
    Direction, FoodSpawner, FrameSnapshot, GameEngine, GameEvent, GameSession, Grid, Intent,
    Point, RunState, SessionRng, Snake,
};
pub use input::InputRouter;
