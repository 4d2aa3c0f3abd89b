pub mod tictactoe;

pub use tictactoe::{
    evaluate, Board, Cell, CellIndex, CellIndexError, GameState, MoveError, Outcome, Player,
    RawMove, ValidMove, BOARD_CELLS, BOARD_SIZE,
};
