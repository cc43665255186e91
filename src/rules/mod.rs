//! Game rules for N-by-N tic-tac-toe.
//!
//! This module contains pure functions for evaluating player marks
//! against the winning lines. Rules are separated from state storage
//! to enable composition into contract systems.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winning};
