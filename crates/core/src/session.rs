//! Game session module - drives the per-frame cycle
//!
//! A session owns one board, one active piece and one generator. The runner
//! forwards input with [`GameSession::apply_action`] and calls
//! [`GameSession::tick`] exactly once per rendered frame with the elapsed
//! wall-clock time; the session never sleeps.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::{Board, Grid};
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase, LOSS_MESSAGE, LOSS_PAUSE_MS};

/// Actions buffered between two frames; later ones are dropped.
pub const MAX_PENDING_ACTIONS: usize = 16;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    phase: Phase,
    seed: u32,
    pending: ArrayVec<GameAction, MAX_PENDING_ACTIONS>,
    locked_pieces: u32,
    loss_timer_ms: u32,
    quit_requested: bool,
}

impl GameSession {
    /// Create a session on the menu screen with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::spawn(&mut rng);

        Self {
            board: Board::new(),
            active,
            rng,
            phase: Phase::Menu,
            seed,
            pending: ArrayVec::new(),
            locked_pieces: 0,
            loss_timer_ms: 0,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    #[doc(hidden)]
    pub fn active_mut(&mut self) -> &mut ActivePiece {
        &mut self.active
    }

    /// The render surface: settled cells with the active piece on top
    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    pub fn lines_cleared(&self) -> u32 {
        self.board.lines_cleared()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Message for the loss screen, only while the session is over
    pub fn loss_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Terminal => Some(LOSS_MESSAGE),
            _ => None,
        }
    }

    /// True once the loss screen has been shown long enough
    pub fn finished(&self) -> bool {
        self.phase == Phase::Terminal && self.loss_timer_ms >= LOSS_PAUSE_MS
    }

    /// Forward one input event
    pub fn apply_action(&mut self, action: GameAction) {
        if action == GameAction::Quit {
            info!(phase = self.phase.as_str(), "quit requested");
            self.quit_requested = true;
            return;
        }

        match self.phase {
            Phase::Menu => self.start(),
            Phase::Playing => {
                if self.pending.try_push(action).is_err() {
                    debug!(action = action.as_str(), "input queue full, dropping action");
                }
            }
            Phase::Terminal => {}
        }
    }

    /// Leave the menu and begin play
    pub fn start(&mut self) {
        if self.phase != Phase::Menu {
            return;
        }
        info!(seed = self.seed, "session started");
        self.phase = Phase::Playing;
    }

    /// Advance one frame by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> Phase {
        match self.phase {
            Phase::Menu => {}
            Phase::Playing => self.play_frame(elapsed_ms),
            Phase::Terminal => {
                self.loss_timer_ms = self.loss_timer_ms.saturating_add(elapsed_ms);
            }
        }
        self.phase
    }

    fn play_frame(&mut self, elapsed_ms: u32) {
        self.board.rebuild_grid();
        self.board.apply_gravity(&mut self.active, elapsed_ms);

        let pending = std::mem::take(&mut self.pending);
        for action in pending {
            self.apply_move(action);
        }

        self.board.overlay_active_piece(&self.active);

        if let Some(next) = self.board.commit_lock_if_pending(&self.active, &mut self.rng) {
            self.active = next;
            self.locked_pieces += 1;
        }

        if self.board.is_game_over() {
            info!(
                locked_pieces = self.locked_pieces,
                lines_cleared = self.board.lines_cleared(),
                "game over"
            );
            self.phase = Phase::Terminal;
            self.loss_timer_ms = 0;
        }
    }

    /// Apply one movement action, reverting it if the board rejects it
    fn apply_move(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.try_translate(-1, 0),
            GameAction::MoveRight => self.try_translate(1, 0),
            GameAction::SoftDrop => self.try_translate(0, 2),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::Quit | GameAction::AnyKey => true,
        };
    }

    /// Translate the active piece; returns whether the move stuck
    pub fn try_translate(&mut self, dx: i8, dy: i8) -> bool {
        self.active.translate(dx, dy);
        if self.board.is_valid(&self.active) {
            return true;
        }
        self.active.translate(-dx, -dy);
        false
    }

    /// Rotate the active piece one state forward; returns whether it stuck
    pub fn try_rotate(&mut self) -> bool {
        self.active.rotate(1);
        if self.board.is_valid(&self.active) {
            return true;
        }
        self.active.rotate(-1);
        false
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.phase = self.phase;
        out.active = match self.phase {
            Phase::Playing => Some(ActiveSnapshot::from(self.active)),
            _ => None,
        };
        out.fall_ms = self.board.fall_time_ms();
        out.lock_pending = self.board.lock_pending();
        out.locked_pieces = self.locked_pieces;
        out.lines_cleared = self.board.lines_cleared();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
