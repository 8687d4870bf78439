use crate::{
    Board, Coordinate, IllegalMove, InvalidSettings, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

/// The shortest run that may be required to win.
pub const MIN_WIN_LENGTH: usize = 3;

/// Board size and win length, validated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    size: usize,
    win_length: usize,
}

impl Settings {
    pub fn new(size: usize, win_length: usize) -> Result<Self, InvalidSettings> {
        Self::check_size(size)?;
        if !(MIN_WIN_LENGTH..=size).contains(&win_length) {
            return Err(InvalidSettings::WinLengthOutOfRange { win_length, size });
        }
        Ok(Self { size, win_length })
    }

    /// Validates a board size on its own, before a win length is known.
    pub fn check_size(size: usize) -> Result<usize, InvalidSettings> {
        if size < MIN_BOARD_SIZE {
            return Err(InvalidSettings::BoardTooSmall { size });
        }
        if size > MAX_BOARD_SIZE {
            return Err(InvalidSettings::BoardTooLarge { size });
        }
        Ok(size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Normal,
    Won { player: Player, step: usize },
    /// The last empty cell was filled without completing a run.
    Draw { step: usize },
}

impl TurnOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnOutcome::Normal)
    }
}

/// The state of one game: the board plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    settings: Settings,
    board: Board,
    step: usize,
    outcome: Option<TurnOutcome>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            board: Board::new(settings.size()),
            step: 0,
            outcome: None,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The 0-based index of the move that is about to be played.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// The final result, once the game has ended.
    pub fn outcome(&self) -> Option<TurnOutcome> {
        self.outcome
    }

    /// Places the current player's mark at `coord` and decides whether the game is over.
    ///
    /// Only the lines through `coord` are inspected, since a new run must
    /// include the new mark. An illegal move leaves the game untouched and
    /// the same player stays on turn.
    pub fn execute_turn(&mut self, coord: Coordinate) -> Result<TurnOutcome, IllegalMove> {
        if self.outcome.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let player = self.current_player();
        self.board.place(coord, player)?;

        let step = self.step;
        let outcome = if self
            .board
            .lines_through(coord, self.settings.win_length())
            .has_run(player, self.settings.win_length())
        {
            TurnOutcome::Won { player, step }
        } else if self.board.is_full() {
            TurnOutcome::Draw { step }
        } else {
            TurnOutcome::Normal
        };

        self.step += 1;
        if outcome.is_terminal() {
            self.outcome = Some(outcome);
        }
        Ok(outcome)
    }
}
