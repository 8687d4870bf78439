use crate::{Coordinate, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_WIN_LENGTH};

/// The error type for [`Game::execute_turn()`](crate::Game::execute_turn), i.e. for placing a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { coord: Coordinate, size: usize },
    CellOccupied { coord: Coordinate, owner: Player },
    GameOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { coord, size } => write!(
                f,
                "Coordinate {} is outside of the board, it must be in 0 - {}",
                coord,
                size - 1
            ),
            IllegalMove::CellOccupied { coord, owner } => write!(
                f,
                "This cell is already occupied: {} belongs to '{}'",
                coord, owner
            ),
            IllegalMove::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// The error type for [`Settings::new()`](crate::Settings::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSettings {
    BoardTooSmall { size: usize },
    BoardTooLarge { size: usize },
    WinLengthOutOfRange { win_length: usize, size: usize },
}

impl std::error::Error for InvalidSettings {}

impl std::fmt::Display for InvalidSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSettings::BoardTooSmall { size } => {
                write!(f, "Size must be >= {}, got {}", MIN_BOARD_SIZE, size)
            }
            InvalidSettings::BoardTooLarge { size } => {
                write!(f, "Size must be <= {}, got {}", MAX_BOARD_SIZE, size)
            }
            InvalidSettings::WinLengthOutOfRange { win_length, size } => write!(
                f,
                "Win size must be from {} to {}, got {}",
                MIN_WIN_LENGTH, size, win_length
            ),
        }
    }
}
