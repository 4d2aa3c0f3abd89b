use crate::tictactoe::board::{CellIndex, CellIndexError};
use crate::tictactoe::game_state::{GameState, Outcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoveError {
    #[error("Invalid cell index: {0}")]
    InvalidIndex(CellIndexError),
    #[error("Cell {0} is already occupied")]
    Occupied(usize),
    #[error("The game is already decided")]
    GameOver,
}

// A move exactly as the view layer produces it from a click
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RawMove {
    pub index: usize,
}

#[derive(Copy, Clone, Debug)]
pub struct ValidMove {
    index: CellIndex,
}

impl ValidMove {
    // validates:
    // - the game is still ongoing
    // - the index refers to a cell on the board
    // - the target cell is empty
    pub fn new(raw: RawMove, state: &GameState) -> Result<Self, MoveError> {
        if !matches!(state.outcome(), Outcome::Ongoing) {
            return Err(MoveError::GameOver);
        }
        let index = CellIndex::new(raw.index).map_err(MoveError::InvalidIndex)?;
        if !state.board()[index].is_empty() {
            return Err(MoveError::Occupied(raw.index));
        }
        Ok(ValidMove { index })
    }

    pub fn index(&self) -> CellIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::{Board, Cell};
    use crate::tictactoe::player::Player;

    #[test]
    fn accepts_an_empty_cell_while_ongoing() {
        let state = GameState::default();
        let mov = ValidMove::new(RawMove { index: 4 }, &state).unwrap();
        assert_eq!(mov.index().get(), 4);
    }

    #[test]
    fn rejects_an_out_of_range_index() {
        let state = GameState::default();
        let result = ValidMove::new(RawMove { index: 9 }, &state);
        assert!(matches!(result, Err(MoveError::InvalidIndex(_))));
    }

    #[test]
    fn rejects_an_occupied_cell() {
        let e = Cell::Empty;
        let x = Cell::Marked { player: Player::X };
        let board = Board::new([x, e, e, e, e, e, e, e, e]);
        let state = GameState::new(board, Player::O);
        let result = ValidMove::new(RawMove { index: 0 }, &state);
        assert!(matches!(result, Err(MoveError::Occupied(0))));
    }

    #[test]
    fn rejects_any_move_once_the_game_is_decided() {
        let e = Cell::Empty;
        let x = Cell::Marked { player: Player::X };
        let o = Cell::Marked { player: Player::O };
        let board = Board::new([x, x, x, o, o, e, e, e, e]);
        let state = GameState::new(board, Player::O);
        let result = ValidMove::new(RawMove { index: 5 }, &state);
        assert!(matches!(result, Err(MoveError::GameOver)));
    }
}
