use crate::engine::config::EngineConfig;
use crate::engine::{SearchStats, Searcher};
use crate::logic::board::{Board, Marker, CELL_COUNT};
use crate::logic::game::GameSession;
use crate::logic::rules;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// An AI win at the recursion root scores `WIN_SCORE`; a win at depth `d`
/// scores `WIN_SCORE - d` and a loss `d - WIN_SCORE`, so the search
/// prefers faster wins and slower losses.
const WIN_SCORE: i32 = 10;
const SCORE_MIN: i32 = -1000;
const SCORE_MAX: i32 = 1000;

/// Exhaustive minimax with alpha-beta pruning, maximizing for the AI
/// marker. Lower difficulties replace the search result with a uniformly
/// random available move part of the time; the RNG is seedable so that
/// selection stays reproducible under test.
pub struct MinimaxEngine {
    config: EngineConfig,
    rng: SmallRng,
    nodes_searched: u32,
}

impl MinimaxEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rng: SmallRng::from_entropy(),
            nodes_searched: 0,
        }
    }

    /// Engine with a fixed RNG seed, for reproducible move selection.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// Best move for `ai` on `board`. Each candidate is applied, scored by
    /// the minimizing recursion, and reverted; a later candidate replaces
    /// the best only on a strictly greater score, so ties go to the
    /// earliest index.
    fn best_move(&mut self, board: &mut Board, ai: Marker) -> Option<usize> {
        let moves = board.available_moves();
        let mut best_move = *moves.first()?;
        let mut best_score = SCORE_MIN;

        for position in moves {
            board.place(position, ai);
            let score = self.minimax(board, 0, false, SCORE_MIN, SCORE_MAX, ai);
            board.clear_cell(position);

            if score > best_score {
                best_score = score;
                best_move = position;
            }
        }
        Some(best_move)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        ai: Marker,
    ) -> i32 {
        self.nodes_searched += 1;

        if let Some(winner) = rules::winner(board) {
            return if winner == ai {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if board.is_full() {
            return 0;
        }

        // Candidate moves are always tried in ascending index order.
        if maximizing {
            let mut max_score = SCORE_MIN;
            for position in 0..CELL_COUNT {
                if board.get(position).is_some() {
                    continue;
                }
                board.place(position, ai);
                let score = self.minimax(board, depth + 1, false, alpha, beta, ai);
                board.clear_cell(position);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = SCORE_MAX;
            for position in 0..CELL_COUNT {
                if board.get(position).is_some() {
                    continue;
                }
                board.place(position, ai.opposite());
                let score = self.minimax(board, depth + 1, true, alpha, beta, ai);
                board.clear_cell(position);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}

impl Searcher for MinimaxEngine {
    fn select_move(&mut self, session: &GameSession) -> Option<(usize, SearchStats)> {
        let available = session.available_moves();
        if available.is_empty() {
            return None;
        }

        let chance = self.config.random_move_chance(session.difficulty());
        if chance > 0.0 && self.rng.gen::<f64>() < chance {
            let position = available.choose(&mut self.rng).copied()?;
            log::debug!(
                "random move {} ({})",
                position,
                session.difficulty().name()
            );
            return Some((
                position,
                SearchStats {
                    nodes: 0,
                    randomized: true,
                },
            ));
        }

        self.nodes_searched = 0;
        let mut board = session.board.clone();
        let position = self.best_move(&mut board, session.ai_marker())?;
        let stats = SearchStats {
            nodes: self.nodes_searched,
            randomized: false,
        };
        log::debug!("search complete: move {} after {} nodes", position, stats.nodes);
        Some((position, stats))
    }
}
