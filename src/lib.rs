#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod deck;
pub mod fleet;
#[cfg(feature = "std")]
mod logging;
mod ship;
pub mod validation;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use deck::Deck;
pub use fleet::random_fleet;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use ship::*;
pub use validation::validate_fleet;
