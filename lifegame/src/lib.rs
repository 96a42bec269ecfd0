//! Conway's Game of Life on a fixed board, painted with a pointer and
//! played back on a timer.
//!
//! [`Grid`] holds the cells and the transition rule. [`LifeGame`] maps
//! surface pixels to cells, redraws onto a [`Surface`] and tracks the
//! pointer and playback flags. [`Session`] shares a game with the playback
//! task that steps it while running.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod runner;
pub mod surface;

pub use config::LifeConfig;
pub use controller::LifeGame;
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use runner::{Session, run_loop};
pub use surface::{DrawCommand, RecordingSurface, Surface};
