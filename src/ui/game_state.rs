//! Game state management for the Gomoku front ends
//!
//! Turn-taking lives here, outside the engine: the engine is called once per
//! AI turn, on a worker thread for the GUI or inline for headless play.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{GameConfig, GameMode};
use crate::error::GameError;
use crate::rules::{has_won, winning_line};
use crate::{AIEngine, Board, MoveResult, Pos, Stone};

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(MoveResult, AIEngine)>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Stone,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    /// Engine between AI turns; moved to the worker thread while thinking
    engine: Option<AIEngine>,
    turn_started: Instant,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let engine = AIEngine::with_config(&config);
        let board = Board::with_size(config.board_size, config.win_length);
        tracing::info!(mode = ?config.mode, size = config.board_size, "new game");
        Self {
            board,
            config,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            engine: Some(engine),
            turn_started: Instant::now(),
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Start over in another mode
    pub fn restart_with_mode(&mut self, mode: GameMode) {
        let mut config = self.config.clone();
        config.mode = mode;
        *self = Self::new(config);
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Cells of the winning run, if the game was won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Some(GameOutcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.config.mode {
            GameMode::HumanVsAi { human_color } => self.current_turn == human_color,
            GameMode::AiVsAi => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Pause before the AI may start its turn
    pub fn ai_delay(&self) -> Duration {
        let ms = match self.config.mode {
            GameMode::HumanVsAi { .. } => self.config.ai_delay_ms,
            GameMode::AiVsAi => self.config.ai_vs_ai_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Whether the AI should start thinking now
    pub fn ai_due(&self) -> bool {
        self.is_ai_turn() && !self.is_ai_thinking() && self.turn_started.elapsed() >= self.ai_delay()
    }

    /// Attempt to place a human stone at the given position.
    ///
    /// The only occupancy rule is that the cell is Empty; it need not be
    /// near other stones.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err(GameError::OutOfTurn);
        }
        self.execute_move(pos)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn;
        self.board.place(pos, color)?;

        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.message = None;
        tracing::info!(color = color.name(), row = pos.row, col = pos.col, "move played");

        if has_won(&self.board, color) {
            let line = winning_line(&self.board, color).unwrap_or_default();
            tracing::info!(winner = color.name(), moves = self.move_history.len(), "game won");
            self.outcome = Some(GameOutcome::Win { winner: color, line });
            return Ok(());
        }
        if self.board.is_full() {
            tracing::info!(moves = self.move_history.len(), "game drawn");
            self.outcome = Some(GameOutcome::Draw);
            return Ok(());
        }

        self.current_turn = color.opponent();
        self.turn_started = Instant::now();
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let board = self.board.clone();
        let color = self.current_turn;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send((result, engine));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let polled = match &self.ai_state {
            AiState::Thinking { receiver, .. } => receiver.try_recv(),
            AiState::Idle => return,
        };

        match polled {
            Ok((result, engine)) => {
                self.ai_state = AiState::Idle;
                self.engine = Some(engine);
                self.apply_ai_result(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tracing::error!("AI worker exited without a result");
                self.ai_state = AiState::Idle;
                self.engine = Some(AIEngine::with_config(&self.config));
                self.message = Some("AI error".to_string());
            }
        }
    }

    /// Run the AI turn on the calling thread.
    ///
    /// Returns the move played, or `None` if the engine found no move.
    pub fn play_ai_turn_blocking(&mut self) -> Result<Option<Pos>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return Err(GameError::OutOfTurn);
        }
        let engine = self
            .engine
            .get_or_insert_with(|| AIEngine::with_config(&self.config));
        let result = engine.get_move_with_stats(&self.board, self.current_turn);
        let played = result.best_move;
        self.apply_ai_result(result);
        Ok(played)
    }

    fn apply_ai_result(&mut self, result: MoveResult) {
        let best = result.best_move;
        self.last_ai_result = Some(result);
        match best {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    tracing::error!(%err, "engine produced an illegal move");
                    self.message = Some(err.to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Who plays what, e.g. "Human (Black) vs AI - Minimax (White)"
    pub fn players_text(&self) -> String {
        match self.config.mode {
            GameMode::HumanVsAi { human_color } => {
                let ai_color = human_color.opponent();
                format!(
                    "Human ({}) vs AI - {} ({})",
                    human_color.name(),
                    self.config.strategy_for(ai_color),
                    ai_color.name()
                )
            }
            GameMode::AiVsAi => format!(
                "AI ({} - Black) vs AI ({} - White)",
                self.config.black_strategy, self.config.white_strategy
            ),
        }
    }

    /// One-line status: result when over, otherwise the side to move
    pub fn status_text(&self) -> String {
        match &self.outcome {
            Some(GameOutcome::Win { winner, .. }) => format!("{} wins!", winner.name()),
            Some(GameOutcome::Draw) => "The game is a draw!".to_string(),
            None => format!("Current Turn: {}", self.current_turn.name()),
        }
    }
}
