#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod common;
mod config;
mod game;
mod grid;
mod input;
mod placement;
mod session;
mod ship;
mod shot;
#[cfg(feature = "std")]
mod autopilot;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use input::*;
pub use placement::*;
pub use session::*;
pub use ship::*;
pub use shot::resolve;
#[cfg(feature = "std")]
pub use autopilot::Autopilot;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use ui::*;
