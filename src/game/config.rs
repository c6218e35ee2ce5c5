use super::state::Position;

/// Gameplay constants
///
/// These are fixed at build time, not runtime-configurable: the playfield is
/// 600 x 600 pixels cut into 25-pixel cells, the snake starts six segments
/// long, and the game speeds up by 10 ms for every fifth food eaten, down to
/// a 20 ms floor. `width` and `height` must be multiples of `cell_size`, and
/// the grid must be at least 3 cells on a side so the food spawn region is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: u32,
    /// Playfield height in pixels
    pub height: u32,
    /// Pixels per grid cell
    pub cell_size: u32,
    /// Snake length at start and after a restart
    pub initial_snake_length: usize,
    /// Tick interval at start and after a restart, in milliseconds
    pub base_tick_ms: u64,
    /// How much the tick interval shrinks per speed-up, in milliseconds
    pub speedup_step_ms: u64,
    /// Lower bound on the tick interval, in milliseconds
    pub min_tick_ms: u64,
    /// A speed-up happens every time the score reaches a multiple of this
    pub foods_per_speedup: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 25,
            initial_snake_length: 6,
            base_tick_ms: 100,
            speedup_step_ms: 10,
            min_tick_ms: 20,
            foods_per_speedup: 5,
        }
    }
}

impl GameConfig {
    /// A 10 x 10 cell playfield for tests
    pub fn small() -> Self {
        Self {
            width: 250,
            height: 250,
            ..Default::default()
        }
    }

    /// Grid width in cells
    pub fn cells_x(&self) -> i32 {
        (self.width / self.cell_size) as i32
    }

    /// Grid height in cells
    pub fn cells_y(&self) -> i32 {
        (self.height / self.cell_size) as i32
    }

    /// Whether a cell lies on the playfield
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cells_x() && pos.y >= 0 && pos.y < self.cells_y()
    }

    /// Cells food may spawn on: the grid minus a one-cell border
    ///
    /// Food never lands on the outermost ring of cells.
    pub fn spawn_region(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.cells_x() - 1)
            .flat_map(move |x| (1..self.cells_y() - 1).map(move |y| Position::new(x, y)))
    }
}
