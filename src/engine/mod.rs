use crate::logic::game::GameSession;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod search;

/// Counters reported alongside a selected move.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes expanded by the minimax recursion; 0 when the difficulty
    /// policy short-circuited to a random move.
    pub nodes: u32,
    /// True when the move came from the random branch of the policy.
    pub randomized: bool,
}

pub trait Searcher {
    /// Selects a move for the session's AI marker, or `None` when no
    /// moves remain. The session itself is never mutated.
    fn select_move(&mut self, session: &GameSession) -> Option<(usize, SearchStats)>;
}
