use std::time::Duration;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::log;

use super::events::{FrameSnapshot, GameEvent, Intent};
use super::food::FoodSpawner;
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Direction, Point, RunState};

/// Everything that lives and dies with one game: reset wholesale on restart.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub run_state: RunState,
}

/// The authoritative state machine. Consumes normalized intents, produces
/// lifecycle events and frame snapshots. Owns no timers: the external
/// scheduler re-reads the tick interval after every `SpeedChanged`.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: SessionRng,
    pub session: GameSession,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, SessionRng::from_random())
    }

    pub fn with_rng(config: GameConfig, mut rng: SessionRng) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        let session = Self::new_session(&config, &grid, &mut rng)?;
        Ok(Self {
            config,
            grid,
            rng,
            session,
        })
    }

    fn new_session(
        config: &GameConfig,
        grid: &Grid,
        rng: &mut SessionRng,
    ) -> Result<GameSession, GameError> {
        let snake = Snake::new(
            config.starting_position,
            config.starting_direction,
            config.starting_snake_length,
        );
        let food = FoodSpawner::spawn(grid, snake.occupied(), rng)?;
        Ok(GameSession {
            snake,
            food,
            direction: config.starting_direction,
            score: 0,
            tick_interval_ms: config.initial_tick_interval_ms,
            run_state: RunState::Stopped,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.session.run_state
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.session.tick_interval_ms)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            segments: self.session.snake.segments().copied().collect(),
            food: self.session.food,
            score: self.session.score,
        }
    }

    /// Single input boundary. Intents are applied in arrival order; each one
    /// runs to completion before the next, so a direction change between two
    /// ticks affects only the next tick's movement.
    pub fn handle(&mut self, intent: Intent) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();
        match intent {
            Intent::Turn(direction) => self.turn(direction),
            Intent::ToggleRunPause => self.toggle(&mut events)?,
            Intent::Restart => self.restart(&mut events)?,
            Intent::Tick => self.tick(&mut events)?,
        }
        Ok(events)
    }

    fn turn(&mut self, direction: Direction) {
        // An exact reversal is normal key-repeat noise, not an error.
        if direction.is_opposite(&self.session.direction) {
            return;
        }
        self.session.direction = direction;
    }

    fn toggle(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        match self.session.run_state {
            RunState::Running => {
                self.session.run_state = RunState::Stopped;
                log!("Paused at score {}", self.session.score);
            }
            RunState::Stopped => {
                self.session.run_state = RunState::Running;
                log!("Running");
            }
            // The same key that pauses also restarts after a game over;
            // the router stays ignorant of this distinction.
            RunState::GameOver => self.restart(events)?,
        }
        Ok(())
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        self.session = Self::new_session(&self.config, &self.grid, &mut self.rng)?;
        self.session.run_state = RunState::Running;
        log!("Session restarted");
        events.push(GameEvent::Frame(self.snapshot()));
        Ok(())
    }

    fn tick(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        // Guards against a late scheduler callback racing a pause or stop.
        if self.session.run_state != RunState::Running {
            return Ok(());
        }

        let next_head = self.session.snake.peek_next_head(self.session.direction);
        let grew = next_head == self.session.food;

        if !self.grid.contains(&next_head) || self.session.snake.collides_with(&next_head, grew) {
            self.session.run_state = RunState::GameOver;
            log!("Game over. Final score: {}", self.session.score);
            events.push(GameEvent::GameOver {
                final_score: self.session.score,
            });
            events.push(GameEvent::Frame(self.snapshot()));
            return Ok(());
        }

        self.session.snake.advance(next_head, grew);

        if grew {
            self.session.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.session.score
            );
            events.push(GameEvent::FoodEaten { at: next_head });
            self.session.food =
                FoodSpawner::spawn(&self.grid, self.session.snake.occupied(), &mut self.rng)?;

            if self.session.score % self.config.score_step_for_speedup == 0
                && self.session.tick_interval_ms > self.config.min_tick_interval_ms
            {
                self.session.tick_interval_ms = self
                    .session
                    .tick_interval_ms
                    .saturating_sub(self.config.speed_step_ms)
                    .max(self.config.min_tick_interval_ms);
                events.push(GameEvent::SpeedChanged {
                    interval_ms: self.session.tick_interval_ms,
                });
            }
        }

        events.push(GameEvent::Frame(self.snapshot()));
        Ok(())
    }
}
