//! Game session: the board, the engine and the outcome of one game
//!
//! A [`GameSession`] is what a front end talks to. The human always plays
//! [`Stone::Opponent`] and moves first; every accepted human move is answered
//! by the engine within the same call.
//!
//! The session has no internal locking. Callers that share it between
//! threads must serialize `apply_player_move` and `restart`.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameSession, Outcome};
//!
//! let mut session = GameSession::new();
//! let outcome = session.apply_player_move(7, 7).unwrap();
//! assert_eq!(outcome, Outcome::Ongoing);
//! assert_eq!(session.snapshot().stone_count(), 2);
//!
//! session.restart();
//! assert!(session.snapshot().is_board_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{check_win, check_winner, find_winning_line};
use crate::search::generate_candidates;

/// State of the game after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    OpponentWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Status text shown to the player
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Ongoing => "Your turn",
            Outcome::OpponentWin => "You win!",
            Outcome::ComputerWin => "AI wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

/// Message shown on a fresh board
pub const START_MESSAGE: &str = "Game started, make your move";

/// Wire view of a session: rows of 0/1/2, the game-over flag and status text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub board: Vec<Vec<u8>>,
    pub game_over: bool,
    pub outcome: Outcome,
    pub message: String,
}

/// One game against the computer.
pub struct GameSession {
    board: Board,
    engine: AIEngine,
    outcome: Outcome,
    message: String,
    last_player_move: Option<Pos>,
    last_ai_move: Option<Pos>,
    last_ai_result: Option<MoveResult>,
    winning_line: Option<Vec<Pos>>,
}

impl GameSession {
    /// New session on the default 15x15 board with the default engine.
    pub fn new() -> Self {
        Self::with_parts(Board::new(), AIEngine::new())
    }

    /// New session sized and tuned from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GameError> {
        let board = Board::with_size(config.board_size)?;
        Ok(Self::with_parts(board, AIEngine::from_config(config)))
    }

    /// Session starting from an existing position, with the human to move.
    pub fn with_parts(board: Board, engine: AIEngine) -> Self {
        Self {
            board,
            engine,
            outcome: Outcome::Ongoing,
            message: START_MESSAGE.to_string(),
            last_player_move: None,
            last_ai_move: None,
            last_ai_result: None,
            winning_line: None,
        }
    }

    /// Resume a game from a wire view, e.g. one saved as JSON.
    ///
    /// The board is validated cell by cell; the outcome is recomputed from
    /// the stones rather than trusted from the view.
    pub fn from_view(view: &GameView, engine: AIEngine) -> Result<Self, GameError> {
        let board = Board::from_rows(&view.board)?;
        let mut session = Self::with_parts(board, engine);
        match check_winner(&session.board) {
            Some(color) => {
                let outcome = if color == Stone::Opponent {
                    Outcome::OpponentWin
                } else {
                    Outcome::ComputerWin
                };
                let anchor = session
                    .board
                    .stones(color)
                    .find(|&pos| check_win(&session.board, pos, color));
                session.finish(outcome, anchor, color);
            }
            None if session.board.is_full() => {
                session.finish(Outcome::Draw, None, Stone::Empty);
            }
            None if !session.board.is_board_empty() => {
                session.message = Outcome::Ongoing.message().to_string();
            }
            None => {}
        }
        Ok(session)
    }

    /// Play the human's stone at (row, col) and let the computer answer.
    ///
    /// Fails with [`GameError::OutOfRange`] or [`GameError::InvalidMove`]
    /// without touching the board, and with [`GameError::GameOver`] once the
    /// game has been decided.
    pub fn apply_player_move(&mut self, row: i32, col: i32) -> Result<Outcome, GameError> {
        if self.outcome.is_over() {
            warn!(row, col, "move rejected, game is over");
            return Err(GameError::GameOver);
        }

        let pos = self.board.pos(row, col).inspect_err(|err| warn!(%err, "move rejected"))?;
        if !self.board.is_empty(pos) {
            warn!(%pos, "move rejected, cell occupied");
            return Err(GameError::InvalidMove { row: pos.row, col: pos.col });
        }

        // Human move
        self.board.set(pos, Stone::Opponent)?;
        self.last_player_move = Some(pos);
        self.last_ai_move = None;
        if check_win(&self.board, pos, Stone::Opponent) {
            return Ok(self.finish(Outcome::OpponentWin, Some(pos), Stone::Opponent));
        }

        // Computer reply
        let result = self.engine.get_move_with_stats(&mut self.board);
        let ai_move = result.best_move;
        self.last_ai_result = Some(result);
        if let Some(ai_pos) = ai_move {
            self.board.set(ai_pos, Stone::Computer)?;
            self.last_ai_move = Some(ai_pos);
            if check_win(&self.board, ai_pos, Stone::Computer) {
                return Ok(self.finish(Outcome::ComputerWin, Some(ai_pos), Stone::Computer));
            }
        }

        if generate_candidates(&self.board).is_empty() {
            return Ok(self.finish(Outcome::Draw, None, Stone::Empty));
        }

        self.message = Outcome::Ongoing.message().to_string();
        Ok(Outcome::Ongoing)
    }

    fn finish(&mut self, outcome: Outcome, anchor: Option<Pos>, color: Stone) -> Outcome {
        self.outcome = outcome;
        self.message = outcome.message().to_string();
        self.winning_line = anchor.and_then(|pos| find_winning_line(&self.board, pos, color));
        info!(?outcome, stones = self.board.stone_count(), "game over");
        outcome
    }

    /// Clear the board and start over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.outcome = Outcome::Ongoing;
        self.message = START_MESSAGE.to_string();
        self.last_player_move = None;
        self.last_ai_move = None;
        self.last_ai_result = None;
        self.winning_line = None;
        info!(size = self.board.size(), "game restarted");
    }

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Wire view of the current state.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.to_rows(),
            game_over: self.outcome.is_over(),
            outcome: self.outcome,
            message: self.message.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn last_player_move(&self) -> Option<Pos> {
        self.last_player_move
    }

    pub fn last_ai_move(&self) -> Option<Pos> {
        self.last_ai_move
    }

    /// Diagnostics of the engine's latest reply
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Stones of the winning run, once someone has won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;

    fn session_with(opponent: &[(u8, u8)], computer: &[(u8, u8)]) -> GameSession {
        let mut board = Board::new();
        for &(r, c) in opponent {
            board.set(Pos::new(r, c), Stone::Opponent).unwrap();
        }
        for &(r, c) in computer {
            board.set(Pos::new(r, c), Stone::Computer).unwrap();
        }
        GameSession::with_parts(board, AIEngine::with_config(2))
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.message(), START_MESSAGE);
        assert!(session.snapshot().is_board_empty());
    }

    #[test]
    fn test_first_move_gets_reply() {
        let mut session = GameSession::new();
        let outcome = session.apply_player_move(7, 6).unwrap();

        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(session.message(), "Your turn");
        assert_eq!(session.last_player_move(), Some(Pos::new(7, 6)));
        let ai = session.last_ai_move().unwrap();
        assert_eq!(session.board().get(ai), Ok(Stone::Computer));
        assert_eq!(session.board().stone_count(), 2);
        assert!(session.last_ai_result().is_some());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut session = GameSession::new();
        let err = session.apply_player_move(15, 0).unwrap_err();
        assert_eq!(err, GameError::OutOfRange { row: 15, col: 0, size: 15 });
        let err = session.apply_player_move(0, -1).unwrap_err();
        assert!(matches!(err, GameError::OutOfRange { .. }));
        assert!(session.snapshot().is_board_empty());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = session_with(&[], &[(3, 3)]);
        let before = session.snapshot();
        let err = session.apply_player_move(3, 3).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { row: 3, col: 3 });
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_opponent_completes_five() {
        let mut session = session_with(&[(7, 6), (7, 7), (7, 8), (7, 9)], &[(6, 6), (8, 8)]);
        let outcome = session.apply_player_move(7, 10).unwrap();

        assert_eq!(outcome, Outcome::OpponentWin);
        assert_eq!(session.message(), "You win!");
        assert_eq!(session.last_ai_move(), None);
        assert_eq!(session.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_computer_completes_five() {
        let mut session = session_with(&[(0, 0)], &[(5, 3), (5, 4), (5, 5), (5, 6)]);
        let outcome = session.apply_player_move(0, 14).unwrap();

        assert_eq!(outcome, Outcome::ComputerWin);
        assert_eq!(session.message(), "AI wins!");
        assert_eq!(session.last_ai_move(), Some(Pos::new(5, 2)));
        assert_eq!(
            session.last_ai_result().map(|r| r.search_type),
            Some(SearchType::ImmediateWin)
        );
        assert_eq!(session.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_computer_blocks_four() {
        let mut session = session_with(&[(4, 4), (4, 5), (4, 6)], &[(4, 3), (9, 9)]);
        let outcome = session.apply_player_move(4, 7).unwrap();

        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(session.last_ai_move(), Some(Pos::new(4, 8)));
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut session = session_with(&[(7, 6), (7, 7), (7, 8), (7, 9)], &[]);
        session.apply_player_move(7, 5).unwrap();
        assert_eq!(session.apply_player_move(0, 0), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_on_full_board() {
        // 3x3 board: nobody can make five, the board fills up
        let board = Board::with_size(3).unwrap();
        let mut session = GameSession::with_parts(board, AIEngine::with_config(1));

        let mut outcome = Outcome::Ongoing;
        for pos in Board::with_size(3).unwrap().positions() {
            if !session.board().is_empty(pos) {
                continue;
            }
            outcome = session
                .apply_player_move(i32::from(pos.row), i32::from(pos.col))
                .unwrap();
            if outcome.is_over() {
                break;
            }
        }

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(session.message(), "Draw!");
        assert!(session.board().is_full());
        assert!(session.winning_line().is_none());
    }

    #[test]
    fn test_restart_then_snapshot() {
        let mut session = session_with(&[(7, 6), (7, 7), (7, 8), (7, 9)], &[]);
        session.apply_player_move(7, 10).unwrap();
        assert!(session.outcome().is_over());

        session.restart();
        let snapshot = session.snapshot();
        assert!(snapshot.is_board_empty());
        assert!(snapshot.to_rows().iter().flatten().all(|&v| v == 0));
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.message(), START_MESSAGE);
        assert!(session.winning_line().is_none());
    }

    #[test]
    fn test_view_wire_format() {
        let mut session = GameSession::from_config(&EngineConfig { board_size: 5, max_depth: 1 }).unwrap();
        session.apply_player_move(0, 0).unwrap();

        let view = session.view();
        assert_eq!(view.board.len(), 5);
        assert!(view.board.iter().all(|row| row.len() == 5));
        assert_eq!(view.board[0][0], 1);
        assert_eq!(view.board.iter().flatten().filter(|&&v| v == 2).count(), 1);
        assert!(!view.game_over);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["gameOver"], serde_json::json!(false));
        assert_eq!(json["outcome"], serde_json::json!("ongoing"));
        assert_eq!(json["message"], serde_json::json!("Your turn"));
        assert_eq!(json["board"][0][0], serde_json::json!(1));
    }

    #[test]
    fn test_from_view_resumes_game() {
        let mut session = GameSession::from_config(&EngineConfig { board_size: 7, max_depth: 1 }).unwrap();
        session.apply_player_move(3, 3).unwrap();
        let view = session.view();

        let mut resumed = GameSession::from_view(&view, AIEngine::with_config(1)).unwrap();
        assert_eq!(resumed.snapshot(), session.snapshot());
        assert_eq!(resumed.view(), view);
        assert_eq!(resumed.apply_player_move(0, 0), Ok(Outcome::Ongoing));
    }

    #[test]
    fn test_from_view_recomputes_outcome() {
        let mut rows = vec![vec![0u8; 15]; 15];
        for row in rows.iter_mut().take(5) {
            row[4] = 2;
        }
        rows[9][9] = 1;
        let view = GameView {
            board: rows,
            game_over: false,
            outcome: Outcome::Ongoing,
            message: String::new(),
        };

        let session = GameSession::from_view(&view, AIEngine::new()).unwrap();
        assert_eq!(session.outcome(), Outcome::ComputerWin);
        assert_eq!(session.message(), "AI wins!");
        let expected: Vec<Pos> = (0..5).map(|r| Pos::new(r, 4)).collect();
        assert_eq!(session.winning_line(), Some(expected.as_slice()));
    }

    #[test]
    fn test_from_view_rejects_bad_cells() {
        let mut view = GameSession::new().view();
        view.board[2][5] = 7;
        assert_eq!(
            GameSession::from_view(&view, AIEngine::new()).err(),
            Some(GameError::InvalidCell { row: 2, col: 5, value: 7 })
        );

        view.board[2][5] = 0;
        view.board[4].pop();
        assert_eq!(
            GameSession::from_view(&view, AIEngine::new()).err(),
            Some(GameError::RaggedRows { row: 4, expected: 15, found: 14 })
        );

        view.board.clear();
        assert_eq!(
            GameSession::from_view(&view, AIEngine::new()).err(),
            Some(GameError::InvalidBoardSize(0))
        );
    }

    #[test]
    fn test_from_config_rejects_bad_size() {
        let config = EngineConfig { board_size: 0, max_depth: 3 };
        assert!(matches!(
            GameSession::from_config(&config),
            Err(GameError::InvalidBoardSize(0))
        ));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Ongoing.message(), "Your turn");
        assert_eq!(Outcome::OpponentWin.message(), "You win!");
        assert_eq!(Outcome::ComputerWin.message(), "AI wins!");
        assert_eq!(Outcome::Draw.message(), "Draw!");
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::Draw.is_over());
    }
}
