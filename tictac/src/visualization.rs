use itertools::Itertools;

use crate::Board;

/// Renders the board with column indices on top and row indices on the left.
///
/// ```text
///   0 1 2
/// 0 x - -
/// 1 - o -
/// 2 - - -
/// ```
///
/// Indices are right-aligned, so that boards with more than ten rows stay
/// readable.
pub fn render_board(board: &Board) -> String {
    let width = board.size().saturating_sub(1).to_string().len();
    let mut result = format!(
        "{:width$} {}",
        "",
        (0..board.size())
            .map(|column| format!("{:>width$}", column))
            .join(" ")
    );
    for (row, cells) in board.rows().enumerate() {
        result += &format!(
            "\n{:>width$} {}",
            row,
            cells
                .iter()
                .map(|cell| format!("{:>width$}", cell.symbol()))
                .join(" ")
        );
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_board(self))
    }
}
