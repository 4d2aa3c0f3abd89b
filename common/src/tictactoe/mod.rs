mod board;
mod game_state;
mod input;
mod player;

pub use board::{Board, Cell, CellIndex, CellIndexError, BOARD_CELLS, BOARD_SIZE};
pub use game_state::{evaluate, GameState, Outcome};
pub use input::{MoveError, RawMove, ValidMove};
pub use player::Player;
