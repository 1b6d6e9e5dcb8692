// Two-player games in normal form, specialized to two actions per player.
// Payoffs are plain f64 entries; "forbidden" outcomes are encoded by the
// instance data as large finite sentinels and receive no special treatment
// in the arithmetic.

#[macro_use]
extern crate approx;

pub mod game;
pub mod strategy;

pub use self::game::{ActionId, MatrixGame, PayoffMatrix, Player, NUM_ACTIONS};
pub use self::strategy::MixedStrategy;
