mod engine;
mod events;
mod food;
mod grid;
mod session_rng;
mod snake;
mod types;

pub use engine::{GameEngine, GameSession};
pub use events::{FrameSnapshot, GameEvent, Intent};
pub use food::FoodSpawner;
pub use grid::Grid;
pub use session_rng::SessionRng;
pub use snake::Snake;
pub use types::{Direction, Point, RunState};
