use super::direction::Direction;

/// A position on the cell grid
///
/// Cell units, not pixels: the playfield's pixel position is this times the
/// configured cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position one cell in a direction
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: ordered segment cells with the head at index 0, plus the
/// direction the head moves on the next advance
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
}

impl Snake {
    /// Create a snake with every segment stacked on `origin`
    ///
    /// This is the game's starting shape: the body unspools from the origin
    /// one cell per tick as the head advances.
    pub fn stacked(origin: Position, direction: Direction, length: usize) -> Self {
        Self {
            body: vec![origin; length],
            direction,
        }
    }

    /// Create a snake from explicit segment cells, head first
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty());
        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// The cell the head will occupy after the next advance
    pub fn next_head(&self) -> Position {
        self.head().stepped(self.direction)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// All segment cells, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Trailing segment cells (everything behind the head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Whether any segment currently occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell in the current direction
    ///
    /// Every trailing segment takes its predecessor's place. With `grow` the
    /// tail keeps its cell and the body gains a segment, which is exactly
    /// where the eaten food leaves the new segment.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the simulation is advancing or waiting for a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    GameOver,
}

/// Read-only view of the simulation for one frame
///
/// Everything the renderer needs: segment cells head-first, the food cell,
/// the score, and the grid dimensions in cells. Borrowed from the engine, so
/// it cannot outlive the state it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub run_state: RunState,
    pub head: Position,
    /// Trailing segments, nearest to the head first
    pub body: &'a [Position],
    pub food: Position,
    pub score: u32,
    /// Grid dimensions in cells (columns, rows)
    pub grid: (i32, i32),
}
