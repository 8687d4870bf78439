use quickcheck::{Arbitrary, Gen};

use crate::{Board, Cell, Coordinate, Game, Player, Settings};

/// A random line of cells together with a player and a run length to look for.
#[derive(Clone, Debug)]
pub struct ArbitraryLine {
    pub line: Vec<Cell>,
    pub player: Player,
    pub win_length: usize,
}

/// A randomly filled board (not necessarily reachable in a real game) and a
/// coordinate on it.
#[derive(Clone, Debug)]
pub struct FilledBoard {
    pub board: Board,
    pub win_length: usize,
    pub coord: Coordinate,
}

/// Settings plus a sequence of legal moves, ending at or before the move that
/// finishes the game.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub settings: Settings,
    pub moves: Vec<Coordinate>,
}

fn below(g: &mut Gen, bound: usize) -> usize {
    usize::arbitrary(g) % bound
}

fn arbitrary_settings(g: &mut Gen, max_size: usize) -> Settings {
    let size = 3 + below(g, max_size - 2);
    let win_length = 3 + below(g, size - 2);
    Settings::new(size, win_length).unwrap()
}

fn shuffled_coordinates(g: &mut Gen, size: usize) -> Vec<Coordinate> {
    let mut coords: Vec<Coordinate> = (0..size)
        .flat_map(|row| (0..size).map(move |column| Coordinate::new(row, column)))
        .collect();
    for i in (1..coords.len()).rev() {
        coords.swap(i, below(g, i + 1));
    }
    coords
}

/// Counts the run through `coord` in each of the four directions, without
/// any windowing.
pub fn has_run_through(
    board: &Board,
    coord: Coordinate,
    player: Player,
    win_length: usize,
) -> bool {
    let owned = |row: isize, column: isize| -> bool {
        if row < 0 || column < 0 {
            return false;
        }
        board.get(Coordinate::new(row as usize, column as usize)) == Some(Cell::Taken(player))
    };
    let (row, column) = (coord.row as isize, coord.column as isize);
    if !owned(row, column) {
        return false;
    }
    [(0, 1), (1, 0), (1, 1), (1, -1)].into_iter().any(|(d_row, d_column)| {
        let mut count = 1;
        for sign in [1, -1] {
            let mut k = 1;
            while owned(row + sign * k * d_row, column + sign * k * d_column) {
                count += 1;
                k += 1;
            }
        }
        count >= win_length
    })
}

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::X, Player::O]).unwrap()
    }
}

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Cell::Empty, Cell::Taken(Player::X), Cell::Taken(Player::O)])
            .unwrap()
    }
}

impl Arbitrary for ArbitraryLine {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = below(g, 13);
        Self {
            line: (0..len).map(|_| Cell::arbitrary(g)).collect(),
            player: Player::arbitrary(g),
            win_length: 1 + below(g, 5),
        }
    }
}

impl Arbitrary for FilledBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let settings = arbitrary_settings(g, 8);
        let size = settings.size();
        let mut board = Board::new(size);
        for coord in shuffled_coordinates(g, size) {
            if let Cell::Taken(player) = Cell::arbitrary(g) {
                board.place(coord, player).unwrap();
            }
        }
        let coord = Coordinate::new(below(g, size), below(g, size));
        Self {
            board,
            win_length: settings.win_length(),
            coord,
        }
    }
}

impl Arbitrary for PlayedGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let settings = arbitrary_settings(g, 6);
        let mut game = Game::new(settings);
        let mut moves = Vec::new();
        for coord in shuffled_coordinates(g, settings.size()) {
            moves.push(coord);
            if game.execute_turn(coord).unwrap().is_terminal() {
                break;
            }
        }
        // Cut off at a random point, so that unfinished games are covered too
        let len = below(g, moves.len() + 1);
        moves.truncate(len);
        Self { settings, moves }
    }
}
