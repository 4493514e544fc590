//! Decision core for two-player tic-tac-toe: board state management,
//! terminal-state detection, and adversarial move selection.
//!
//! Presentation (rendering, input, timing of the AI move) belongs to the
//! caller; the core is synchronous and performs no I/O.

pub mod engine;
pub mod logic;
