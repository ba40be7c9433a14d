use std::time::Instant;

use eframe::egui;
use snake_engine::log;
use snake_engine::{
    FrameSnapshot, GameEngine, GameEvent, InputRouter, Intent, Point, RunState,
};

pub const CELL_PX: f32 = 24.0;

/// Raw key identifiers forwarded to the router. The router decides which of
/// them mean anything; unmapped keys are dropped there.
const KEY_IDS: [(egui::Key, &str); 9] = [
    (egui::Key::A, "a"),
    (egui::Key::W, "w"),
    (egui::Key::D, "d"),
    (egui::Key::S, "s"),
    (egui::Key::Space, "space"),
    (egui::Key::ArrowLeft, "arrowleft"),
    (egui::Key::ArrowUp, "arrowup"),
    (egui::Key::ArrowRight, "arrowright"),
    (egui::Key::ArrowDown, "arrowdown"),
];

/// Rendering collaborator and tick scheduler. Draws from the last frame
/// snapshot the engine emitted, never from engine internals.
pub struct SnakeApp {
    engine: GameEngine,
    router: InputRouter,
    frame: FrameSnapshot,
    last_tick: Instant,
}

impl SnakeApp {
    pub fn new(engine: GameEngine, router: InputRouter) -> Self {
        let frame = engine.snapshot();
        Self {
            engine,
            router,
            frame,
            last_tick: Instant::now(),
        }
    }

    fn route_input(&mut self, ctx: &egui::Context) {
        let mut intents = Vec::new();
        ctx.input(|i| {
            for (key, id) in KEY_IDS {
                if i.key_pressed(key)
                    && let Some(intent) = self.router.resolve(id)
                {
                    intents.push(intent);
                }
            }
        });
        for intent in intents {
            self.dispatch(intent);
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let was_running = self.engine.run_state() == RunState::Running;
        match self.engine.handle(intent) {
            Ok(events) => self.apply_events(events),
            Err(e) => log!("Engine rejected intent: {}", e),
        }
        // Fresh timer on entering Running, so a resumed game does not
        // immediately fire a tick owed from before the pause.
        if !was_running && self.engine.run_state() == RunState::Running {
            self.last_tick = Instant::now();
        }
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Frame(snapshot) => self.frame = snapshot,
                GameEvent::SpeedChanged { interval_ms } => {
                    log!("Speed changed, tick interval now {}ms", interval_ms);
                }
                // Where the original played eat.mp3 / gameover.mp3.
                GameEvent::FoodEaten { at } => {
                    log!("Food eaten at ({}, {})", at.x, at.y);
                }
                GameEvent::GameOver { final_score } => {
                    log!("Game over, final score {}", final_score);
                }
            }
        }
    }

    /// The scheduler half of the contract: fires `Tick` when the interval
    /// elapses and re-reads the interval from the engine every pass, which
    /// covers `SpeedChanged` re-arming and restart resets alike.
    fn drive_ticks(&mut self, ctx: &egui::Context) {
        if self.engine.run_state() != RunState::Running {
            return;
        }

        let interval = self.engine.tick_interval();
        if self.last_tick.elapsed() >= interval {
            self.dispatch(Intent::Tick);
            self.last_tick = Instant::now();
        }

        let interval = self.engine.tick_interval();
        ctx.request_repaint_after(interval.saturating_sub(self.last_tick.elapsed()));
    }

    fn draw(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Score: {}", self.frame.score));
            ui.separator();

            let grid = self.engine.grid();
            let canvas = egui::Vec2::new(
                grid.width() as f32 * CELL_PX,
                grid.height() as f32 * CELL_PX,
            );
            let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);

            painter.rect_filled(
                cell_rect(origin, self.frame.food),
                0.0,
                egui::Color32::RED,
            );

            for (i, segment) in self.frame.segments.iter().enumerate() {
                let color = if i == 0 {
                    egui::Color32::from_rgb(0, 255, 0)
                } else {
                    egui::Color32::from_rgb(0, 128, 0)
                };
                // Shrink against the black background to outline each cell.
                painter.rect_filled(cell_rect(origin, *segment).shrink(1.0), 0.0, color);
            }

            let center = response.rect.center();
            match self.engine.run_state() {
                RunState::Running => {}
                RunState::Stopped => {
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        "Press SPACE to start",
                        egui::FontId::proportional(24.0),
                        egui::Color32::WHITE,
                    );
                }
                RunState::GameOver => {
                    painter.text(
                        center - egui::vec2(0.0, 20.0),
                        egui::Align2::CENTER_CENTER,
                        "Game Over!",
                        egui::FontId::proportional(30.0),
                        egui::Color32::WHITE,
                    );
                    painter.text(
                        center + egui::vec2(0.0, 20.0),
                        egui::Align2::CENTER_CENTER,
                        format!("Score: {} - Press SPACE to restart", self.frame.score),
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            }
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.route_input(ctx);
        self.drive_ticks(ctx);
        self.draw(ctx);
    }
}

fn cell_rect(origin: egui::Pos2, cell: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * CELL_PX,
            origin.y + cell.y as f32 * CELL_PX,
        ),
        egui::vec2(CELL_PX, CELL_PX),
    )
}
