use crate::engine::config::Difficulty;
use crate::logic::board::{Board, Marker};
use crate::logic::rules;
use serde::{Deserialize, Serialize};

/// Outcome of a terminal-state check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Continue,
    HumanWin,
    AiWin,
    Tie,
}

/// Win/tie counters. They persist across `reset_board` within a session
/// and are cleared only by an explicit reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub ties: u32,
}

impl Statistics {
    fn record(&mut self, end: GameEnd) {
        match end {
            GameEnd::HumanWin => self.human_wins += 1,
            GameEnd::AiWin => self.ai_wins += 1,
            GameEnd::Tie => self.ties += 1,
            GameEnd::Continue => {}
        }
    }

    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "YOU: {}    AI: {}    TIES: {}",
            self.human_wins, self.ai_wins, self.ties
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One game of tic-tac-toe against the AI, owned by the caller. The AI
/// marker is always the complement of the human's. Run one session per
/// concurrent game; nothing here is shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    human: Marker,
    ai: Marker,
    game_over: bool,
    difficulty: Difficulty,
    stats: Statistics,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Marker::X, Difficulty::Hard)
    }
}

impl GameSession {
    #[must_use]
    pub fn new(human: Marker, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human,
            ai: human.opposite(),
            game_over: false,
            difficulty,
            stats: Statistics::default(),
        }
    }

    /// Applies `marker` at `position`. Fails silently (returns false, no
    /// mutation) once the game is over or when the target cell is not
    /// empty.
    pub fn apply_move(&mut self, position: usize, marker: Marker) -> bool {
        if self.game_over {
            return false;
        }
        self.board.place(position, marker)
    }

    /// Detects a terminal state, latching `game_over` and recording the
    /// outcome. The transition fires at most once per game: repeated calls
    /// after game over return the same result without touching the
    /// statistics.
    pub fn check_game_end(&mut self) -> GameEnd {
        let end = self.terminal_state();
        if end != GameEnd::Continue && !self.game_over {
            self.game_over = true;
            self.stats.record(end);
            log::info!("game over: {:?} [{}]", end, self.board.layout_string());
        }
        end
    }

    fn terminal_state(&self) -> GameEnd {
        match rules::winner(&self.board) {
            Some(marker) if marker == self.human => GameEnd::HumanWin,
            Some(_) => GameEnd::AiWin,
            None if self.board.is_full() => GameEnd::Tie,
            None => GameEnd::Continue,
        }
    }

    #[must_use]
    pub fn available_moves(&self) -> Vec<usize> {
        self.board.available_moves()
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(&self.board)
    }

    /// Clears the board for a new game. Statistics carry over.
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.game_over = false;
    }

    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }

    #[must_use]
    pub fn formatted_statistics(&self) -> String {
        self.stats.formatted()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub const fn human_marker(&self) -> Marker {
        self.human
    }

    #[must_use]
    pub const fn ai_marker(&self) -> Marker {
        self.ai
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_marker_is_complement() {
        let session = GameSession::new(Marker::O, Difficulty::Easy);
        assert_eq!(session.human_marker(), Marker::O);
        assert_eq!(session.ai_marker(), Marker::X);
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_human_win_updates_stats_and_line() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XX.OO....").unwrap();

        assert!(session.apply_move(2, Marker::X));
        assert_eq!(session.check_game_end(), GameEnd::HumanWin);
        assert!(session.is_game_over());
        assert_eq!(session.winning_line(), Some([0, 1, 2]));
        assert_eq!(session.statistics().human_wins, 1);
    }

    #[test]
    fn test_ai_win_updates_stats() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("OO.XX....").unwrap();

        assert!(session.apply_move(2, Marker::O));
        assert_eq!(session.check_game_end(), GameEnd::AiWin);
        assert_eq!(session.statistics().ai_wins, 1);
    }

    #[test]
    fn test_full_board_is_a_tie() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XOXXOOOXX").unwrap();

        assert_eq!(session.check_game_end(), GameEnd::Tie);
        assert!(session.is_game_over());
        assert_eq!(session.winning_line(), None);
        assert_eq!(session.statistics().ties, 1);
    }

    #[test]
    fn test_check_game_end_is_idempotent() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XXXOO....").unwrap();

        assert_eq!(session.check_game_end(), GameEnd::HumanWin);
        assert_eq!(session.check_game_end(), GameEnd::HumanWin);
        assert_eq!(session.statistics().human_wins, 1);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XXXOO....").unwrap();
        session.check_game_end();

        assert!(!session.apply_move(5, Marker::O));
        assert!(!session.apply_move(8, Marker::X));
        assert_eq!(session.board.get(5), None);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        assert!(session.apply_move(4, Marker::X));
        assert!(!session.apply_move(4, Marker::O));
        assert_eq!(session.board.get(4), Some(Marker::X));
    }

    #[test]
    fn test_reset_board_keeps_stats() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XXXOO....").unwrap();
        session.check_game_end();

        session.reset_board();
        assert!(!session.is_game_over());
        assert_eq!(session.board, Board::new());
        assert_eq!(session.statistics().human_wins, 1);
        assert!(session.apply_move(0, Marker::X));
    }

    #[test]
    fn test_reset_statistics() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.board = Board::from_layout("XXXOO....").unwrap();
        session.check_game_end();

        session.reset_statistics();
        assert_eq!(session.statistics(), Statistics::default());
    }

    #[test]
    fn test_formatted_statistics() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        assert_eq!(session.formatted_statistics(), "YOU: 0    AI: 0    TIES: 0");

        session.board = Board::from_layout("XXXOO....").unwrap();
        session.check_game_end();
        assert_eq!(session.formatted_statistics(), "YOU: 1    AI: 0    TIES: 0");
    }

    #[test]
    fn test_set_difficulty() {
        let mut session = GameSession::new(Marker::X, Difficulty::Hard);
        session.set_difficulty(Difficulty::Medium);
        assert_eq!(session.difficulty(), Difficulty::Medium);

        // Unknown labels never reach the session; the prior level stands.
        assert_eq!(Difficulty::from_name("Impossible"), None);
        assert_eq!(session.difficulty(), Difficulty::Medium);
    }
}
