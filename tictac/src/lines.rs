use crate::{Board, Cell, Coordinate, Player};

/// The four lines through a coordinate that can contain a freshly completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lines {
    /// The whole row.
    pub row: Vec<Cell>,
    /// The whole column.
    pub column: Vec<Cell>,
    /// Up to `2K-1` cells from bottom-left to top-right.
    pub slash: Vec<Cell>,
    /// Up to `2K-1` cells from top-left to bottom-right.
    pub back_slash: Vec<Cell>,
}

impl Lines {
    pub fn iter(&self) -> impl Iterator<Item = &[Cell]> {
        [
            self.row.as_slice(),
            self.column.as_slice(),
            self.slash.as_slice(),
            self.back_slash.as_slice(),
        ]
        .into_iter()
    }

    /// Does any of the four lines contain `win_length` marks of `player` in a row?
    pub fn has_run(&self, player: Player, win_length: usize) -> bool {
        self.iter().any(|line| contains_run(line, player, win_length))
    }
}

impl Board {
    /// Extracts the row, the column and the two diagonal windows through `coord`.
    ///
    /// The diagonal windows reach `win_length - 1` cells to either side of
    /// `coord`. Positions that fall off the board are left out rather than
    /// padded, so the windows get shorter near the edges.
    ///
    /// Panics if `coord` is out of bounds.
    pub fn lines_through(&self, coord: Coordinate, win_length: usize) -> Lines {
        assert!(self.is_in_bounds(coord), "{} is off the board", coord);
        let reach = win_length.saturating_sub(1) as isize;

        Lines {
            row: self.row(coord.row).to_vec(),
            column: self.column(coord.column),
            // Going right means going up for the slash.
            slash: self.diagonal_window(coord, reach, -1),
            back_slash: self.diagonal_window(coord, reach, 1),
        }
    }

    // Walks from column offset -reach to +reach, moving `row_step` rows per column.
    fn diagonal_window(&self, coord: Coordinate, reach: isize, row_step: isize) -> Vec<Cell> {
        (-reach..=reach)
            .filter_map(|offset| {
                let row = coord.row.checked_add_signed(offset * row_step)?;
                let column = coord.column.checked_add_signed(offset)?;
                self.get(Coordinate { row, column })
            })
            .collect()
    }
}

/// Renders a line as a flat string of cell symbols, e.g. `"-xxo"`.
pub fn line_to_string(line: &[Cell]) -> String {
    line.iter().map(|cell| cell.symbol()).collect()
}

/// Does `line` contain `win_length` consecutive marks of `player`?
///
/// This is the same as asking whether the rendered line contains the player's
/// mark repeated `win_length` times as a substring.
pub fn contains_run(line: &[Cell], player: Player, win_length: usize) -> bool {
    if win_length == 0 {
        return true;
    }
    line.windows(win_length)
        .any(|window| window.iter().all(|&cell| cell == Cell::Taken(player)))
}
