use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::config::GameConfig;
use super::direction::Direction;
use super::state::{Position, RunState, Snake, Snapshot};

/// The snake simulation
///
/// Owns every piece of mutable game state and advances it one discrete
/// step at a time. There is no I/O in here; the host drives the engine
/// through three entry points (`tick` on the periodic timer,
/// `set_direction` and `restart` on key events) and reads it back
/// through `snapshot` when drawing a frame.
pub struct GameEngine {
    config: GameConfig,
    snake: Snake,
    food: Position,
    score: u32,
    tick_ms: u64,
    run_state: RunState,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a seeded RNG, for reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut engine = Self {
            snake: Snake::stacked(Position::new(0, 0), Direction::Right, 1),
            food: Position::new(0, 0),
            score: 0,
            tick_ms: 0,
            run_state: RunState::Running,
            rng,
            config,
        };
        engine.initialize();
        engine
    }

    /// Reset all mutable state to the starting configuration
    ///
    /// The snake starts as `initial_snake_length` segments stacked on the
    /// top-left cell, heading right, and unspools over the first few
    /// ticks as the head pulls away.
    fn initialize(&mut self) {
        self.snake = Snake::stacked(
            Position::new(0, 0),
            Direction::Right,
            self.config.initial_snake_length,
        );
        self.score = 0;
        self.tick_ms = self.config.base_tick_ms;
        self.run_state = RunState::Running;
        self.spawn_food();
    }

    /// Steer the snake
    ///
    /// Applied immediately, so the very next tick moves the new way and
    /// two quick turns between ticks land on the second one. Requests are
    /// ignored after a game over and when the requested direction is the
    /// exact reverse of the current heading.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.run_state != RunState::Running {
            return;
        }
        if !self.snake.direction().is_opposite(requested) {
            self.snake.turn(requested);
        }
    }

    /// Advance the simulation by one step
    ///
    /// A stray tick after a game over is a no-op. Within a step the order
    /// is fixed: the snake advances, food is handled (growth, score,
    /// speed-up, respawn), then the new head is checked against the body
    /// and the walls.
    pub fn tick(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }

        let new_head = self.snake.next_head();
        let ate = new_head == self.food;
        // Collision is judged against the occupancy from before the
        // advance: the cell the tail vacates this very tick still kills.
        let hit_self = self.snake.occupies(new_head);

        self.snake.advance(ate);

        if ate {
            self.score += 1;
            if self.score % self.config.foods_per_speedup == 0 {
                self.speed_up();
            }
            self.spawn_food();
        }

        if hit_self || !self.config.contains(new_head) {
            self.run_state = RunState::GameOver;
        }
    }

    /// Begin a fresh game after a game over
    ///
    /// Ignored while a game is in progress, so a stray restart key cannot
    /// wipe a live run.
    pub fn restart(&mut self) {
        if self.run_state == RunState::GameOver {
            self.initialize();
        }
    }

    /// Immutable view of the current state, for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            run_state: self.run_state,
            head: self.snake.head(),
            body: self.snake.body_segments(),
            food: self.food,
            score: self.score,
            grid: (self.config.cells_x(), self.config.cells_y()),
        }
    }

    /// Delay between simulation steps
    ///
    /// Shrinks as food is eaten, so the host re-reads it after every tick
    /// and reschedules its timer when the value changes.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    fn speed_up(&mut self) {
        self.tick_ms = self
            .tick_ms
            .saturating_sub(self.config.speedup_step_ms)
            .max(self.config.min_tick_ms);
    }

    /// Move the food to a random free cell of the spawn region
    ///
    /// Uniform over the region cells the snake does not occupy. If the
    /// snake covers the entire region the pick falls back to ignoring
    /// occupancy, so the operation always lands somewhere.
    fn spawn_food(&mut self) {
        let free: Vec<Position> = self
            .config
            .spawn_region()
            .filter(|cell| !self.snake.occupies(*cell))
            .collect();

        self.food = match free.choose(&mut self.rng) {
            Some(cell) => *cell,
            None => self.any_spawn_cell(),
        };
    }

    fn any_spawn_cell(&mut self) -> Position {
        let x = self.rng.gen_range(1..self.config.cells_x() - 1);
        let y = self.rng.gen_range(1..self.config.cells_y() - 1);
        Position::new(x, y)
    }
}
