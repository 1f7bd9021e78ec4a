//! Game state management for the Gomoku GUI
//!
//! The [`GameSession`] lives behind an `Arc<Mutex<_>>`. Each human move is
//! handed to a worker thread that holds the lock while the engine searches,
//! so the frame loop never blocks; it only copies the session's state after
//! the worker reports back.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::{Board, GameError, GameSession, MoveResult, Outcome, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<Outcome, GameError>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    session: Arc<Mutex<GameSession>>,
    /// Copy of the session's board as of the last refresh
    pub board: Board,
    pub outcome: Outcome,
    pub message: String,
    pub last_player_move: Option<Pos>,
    pub last_ai_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub winning_line: Option<Vec<Pos>>,
    /// Human stone submitted but not yet committed by the worker
    pub pending_move: Option<Pos>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    /// Last rejected move, shown until the next accepted one
    pub error: Option<String>,
}

impl GameState {
    pub fn new(session: GameSession) -> Self {
        let mut state = Self {
            board: session.snapshot(),
            outcome: session.outcome(),
            message: session.message().to_string(),
            session: Arc::new(Mutex::new(session)),
            last_player_move: None,
            last_ai_move: None,
            last_ai_result: None,
            winning_line: None,
            pending_move: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            error: None,
        };
        state.refresh();
        state
    }

    /// Build from engine settings, falling back to the default session.
    pub fn from_config(config: &EngineConfig) -> Self {
        let session = GameSession::from_config(config).unwrap_or_else(|err| {
            warn!(%err, "invalid engine config, using defaults");
            GameSession::new()
        });
        Self::new(session)
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy the session's state into the display fields.
    fn refresh(&mut self) {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        self.board = session.snapshot();
        self.outcome = session.outcome();
        self.message = session.message().to_string();
        self.last_player_move = session.last_player_move();
        self.last_ai_move = session.last_ai_move();
        self.last_ai_result = session.last_ai_result().cloned();
        self.winning_line = session.winning_line().map(<[Pos]>::to_vec);
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Most recent stone on the board
    pub fn last_move(&self) -> Option<Pos> {
        self.last_ai_move.or(self.last_player_move)
    }

    /// Submit a human move; the session applies it on a worker thread.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err(GameError::GameOver.to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::InvalidMove { row: pos.row, col: pos.col }.to_string());
        }

        self.move_timer.stop();
        self.pending_move = Some(pos);
        self.error = None;

        let session = Arc::clone(&self.session);
        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
            let result = session.apply_player_move(i32::from(pos.row), i32::from(pos.col));
            let _ = tx.send(result);
        });

        debug!(%pos, "move submitted");
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
        Ok(())
    }

    /// Check if the worker has finished the move
    pub fn check_ai_result(&mut self) {
        let (result, elapsed) = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.pending_move = None;
                    self.error = Some("AI error".to_string());
                    self.refresh();
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.pending_move = None;
        self.move_timer.set_ai_time(elapsed);
        if let Err(err) = result {
            self.error = Some(err.to_string());
        }
        self.refresh();
        if !self.is_game_over() {
            self.move_timer.start();
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Start a new game. Ignored while a move is in flight.
    pub fn restart(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        self.lock().restart();
        self.pending_move = None;
        self.error = None;
        self.move_timer = MoveTimer::default();
        self.refresh();
    }
}
