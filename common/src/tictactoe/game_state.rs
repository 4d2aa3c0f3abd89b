use crate::tictactoe::board::{Board, Cell};
use crate::tictactoe::input::{MoveError, RawMove, ValidMove};
use crate::tictactoe::player::Player;
use serde::{Deserialize, Serialize};

// The 8 winning lines: rows, then columns, then diagonals. The first
// matching line decides, so the scan order is part of the contract.
const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Board::default(), Player::X)
    }
}

impl GameState {
    pub fn new(board: Board, active_player: Player) -> Self {
        let outcome = evaluate(&board);
        GameState {
            board,
            active_player,
            outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    // Write the active player's marker, hand the turn over and re-evaluate
    // the board. The winning move still flips the turn; `outcome` decides
    // whether the flipped player ever gets to act.
    pub fn place(&mut self, mov: ValidMove) {
        self.board.set(mov.index(), self.active_player);
        self.active_player = self.active_player.other();
        self.outcome = evaluate(&self.board);
    }

    // Validate-then-place. On an error the state is left untouched, so the
    // view layer can treat any rejected click as a no-op.
    pub fn apply(&mut self, raw: RawMove) -> Result<(), MoveError> {
        let mov = ValidMove::new(raw, self)?;
        self.place(mov);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = GameState::default();
    }
}

pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for [a, b, c] in WINNING_TRIPLES {
        if let Cell::Marked { player } = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Win(player);
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
