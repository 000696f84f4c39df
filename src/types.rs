//! Type definitions and constants shared by the grid, the movement rules and the game loop.

use std::fmt;

/// Number of columns in the grid.
pub const WIDTH: usize = 10;

/// Number of rows in the grid.
pub const HEIGHT: usize = 5;

/// Symbol of an empty, walkable cell.
pub const FLOOR: char = ' ';

/// Symbol of the cell currently occupied by the player.
pub const PLAYER: char = 'P';

/// Symbol of the exit cell.
pub const EXIT: char = 'E';

/// Symbol of an obstacle cell.
///
/// Obstacles are stamped once when the grid is initialized and never move afterwards. They are the
/// only cells the player can never step onto.
pub const OBSTACLE: char = 'X';

/// Cell the player starts on.
pub const START: Position = Position::new(0, 0);

/// Cell holding the exit.
pub const EXIT_POSITION: Position = Position::new(WIDTH - 1, HEIGHT - 1);

/// Fixed set of obstacle cells stamped at initialization.
pub const OBSTACLES: [Position; 3] = [
    Position::new(2, 1),
    Position::new(4, 2),
    Position::new(1, 3),
];

/// Column and row pair addressing a single cell.
///
/// Both coordinates are zero-based; `x` grows to the right and `y` grows downwards, so the first
/// rendered row of the grid is `y == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Builds a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a single player step.
///
/// This enumeration holds the four moves the player may request. Anything else typed at the
/// prompt does not map to a direction and results in a turn where nothing happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One row towards the top of the grid, bound to `w`.
    Up,
    /// One row towards the bottom of the grid, bound to `s`.
    Down,
    /// One column towards the left edge, bound to `a`.
    Left,
    /// One column towards the right edge, bound to `d`.
    Right,
}

impl Direction {
    /// All directions, in the order their keys appear on the prompt.
    #[cfg(test)]
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Maps a command character to a direction.
    ///
    /// Only the lowercase `w`, `a`, `s` and `d` keys are recognized; every other character yields
    /// [`None`].
    #[must_use]
    pub const fn from_command(command: char) -> Option<Self> {
        match command {
            'w' => Some(Self::Up),
            's' => Some(Self::Down),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the column and row displacement of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
