mod matrix_game;
mod payoff;
mod player;

pub use self::matrix_game::MatrixGame;
pub use self::payoff::{ActionId, PayoffMatrix, NUM_ACTIONS};
pub use self::player::Player;
