use crate::IllegalMove;

/// The smallest supported side length of the board.
pub const MIN_BOARD_SIZE: usize = 3;

/// The largest supported side length of the board.
pub const MAX_BOARD_SIZE: usize = 100;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, on every even step.
    X,
    O,
}

impl Player {
    /// The player whose turn it is on the given (0-based) step.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The symbol this player leaves on the board.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// The content of a single position on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '-';

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Taken(player) => player.mark(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A position on the board, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, column {})", self.row, self.column)
    }
}

/// A square grid of cells whose size is fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, always `size * size` long.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// Panics if `size` is outside of [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`];
    /// use [`Settings::new()`](crate::Settings::new) to validate user input first.
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {} is not supported",
            size
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Returns `None` if the coordinate is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        if self.is_in_bounds(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Puts the player's mark on an empty cell.
    ///
    /// On error the board is left unchanged.
    pub fn place(&mut self, coord: Coordinate, player: Player) -> Result<(), IllegalMove> {
        if !self.is_in_bounds(coord) {
            return Err(IllegalMove::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        let idx = self.index(coord);
        if let Cell::Taken(owner) = self.cells[idx] {
            return Err(IllegalMove::CellOccupied { coord, owner });
        }
        self.cells[idx] = Cell::Taken(player);
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// The cells of row `row`, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// The cells of column `column`, top to bottom.
    pub fn column(&self, column: usize) -> Vec<Cell> {
        self.cells
            .iter()
            .skip(column)
            .step_by(self.size)
            .copied()
            .collect()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size)
    }

    fn index(&self, coord: Coordinate) -> usize {
        coord.row * self.size + coord.column
    }
}
