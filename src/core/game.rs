//! Game session module - the complete engine state machine
//!
//! Owns the board, the active falling piece, and the derived statistics
//! (score, rows cleared, level). All mutation goes through the methods here
//! and is atomic with respect to the session value; the collision gate in
//! `Board::collides` runs before every move, rotation, and drop. The session
//! does no I/O and never blocks.

use crate::core::pieces::random_kind;
use crate::core::player::Player;
use crate::core::rng::SimpleRng;
use crate::core::scoring;
use crate::core::snapshot::{GameSnapshot, SnapshotCell};
use crate::core::Board;
use crate::types::{CellStatus, GameAction, PieceKind, RotationDir, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state for one session.
///
/// `best_score` survives `start()`; everything else resets. The drop timer
/// itself lives in the event loop and derives its interval from
/// `drop_interval_ms()`, so pausing or losing synchronously stops gravity.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    player: Option<Player>,
    rng: SimpleRng,
    score: u32,
    rows_cleared: u32,
    level: u32,
    best_score: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            player: None,
            rng: SimpleRng::new(seed),
            score: 0,
            rows_cleared: 0,
            level: 0,
            best_score: 0,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Start a new game: reset board, stats, and flags, spawn the first
    /// piece. The best score persists across games.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.rows_cleared = 0;
        self.level = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;

        let kind = random_kind(&mut self.rng);
        self.player = Some(Player::spawn(kind));
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Seed the session with a previously persisted best score.
    pub fn set_best_score(&mut self, best: u32) {
        self.best_score = self.best_score.max(best);
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn player(&self) -> Option<Player> {
        self.player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted scenarios and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with a specific kind at the spawn position.
    /// Scenario hook; normal play draws pieces from the RNG.
    pub fn spawn(&mut self, kind: PieceKind) {
        self.player = Some(Player::spawn(kind));
    }

    /// Current gravity interval, or None while the timer must not fire
    /// (paused, game over, or not started).
    pub fn drop_interval_ms(&self) -> Option<u32> {
        if !self.started || self.paused || self.game_over {
            None
        } else {
            Some(scoring::drop_interval_ms(self.level))
        }
    }

    /// Shift the falling piece one column left (-1) or right (+1).
    /// Silently rejected while paused/game-over or when the target collides.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(player) = self.player else {
            return false;
        };

        if self.board.collides(&player.shape, player.x + dir, player.y) {
            return false;
        }

        self.player = Some(Player {
            x: player.x + dir,
            ..player
        });
        true
    }

    /// Rotate the falling piece a quarter turn, with wall-kick resolution.
    ///
    /// The candidate shape is tested as a trial value: while it collides at
    /// the current position, x shifts by the oscillating offset sequence
    /// +1, -2, +3, -4, ... Once the absolute offset exceeds the shape's
    /// width the rotation is abandoned and nothing changes.
    pub fn rotate(&mut self, dir: RotationDir) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(player) = self.player else {
            return false;
        };

        let shape = player.shape.rotated(dir);
        let mut x = player.x;
        let mut offset: i8 = 1;

        while self.board.collides(&shape, x, player.y) {
            x += offset;
            offset = -(offset + offset.signum());
            if offset.unsigned_abs() > shape.size() as u8 {
                return false;
            }
        }

        self.player = Some(Player { shape, x, ..player });
        true
    }

    /// Manual fast descent: one gravity step, identical to the timer tick.
    pub fn soft_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.drop_step();
        true
    }

    /// One gravity tick.
    ///
    /// Level progression is re-evaluated first, independent of the collision
    /// outcome; the drop interval shortens automatically because it is
    /// derived from the level. Then the piece either descends one row or
    /// locks in place.
    pub fn drop_step(&mut self) {
        if !self.started || self.paused || self.game_over {
            return;
        }

        if scoring::should_level_up(self.rows_cleared, self.level) {
            self.level += 1;
        }

        let Some(player) = self.player else {
            return;
        };

        if self.board.collides(&player.shape, player.x, player.y + 1) {
            self.lock_player(player);
        } else {
            self.player = Some(Player {
                y: player.y + 1,
                ..player
            });
        }
    }

    /// Merge the piece into the board, then either end the game (locked
    /// before ever descending past the spawn row) or spawn the next piece
    /// and sweep full rows.
    fn lock_player(&mut self, player: Player) {
        self.board
            .merge(&player.shape, player.x, player.y, player.kind);

        if player.y <= 0 {
            self.game_over = true;
            self.player = None;
            return;
        }

        let kind = random_kind(&mut self.rng);
        self.player = Some(Player::spawn(kind));

        let cleared = self.board.sweep_full_rows().len();
        if cleared > 0 {
            self.score += scoring::line_clear_points(cleared, self.level);
            self.rows_cleared += cleared as u32;
            if self.score > self.best_score {
                self.best_score = self.score;
            }
        }
    }

    /// Toggle pause. No-op once the game is over or before it starts.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Apply a player input event.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::RotateCw => self.rotate(RotationDir::Clockwise),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::NewGame => {
                self.start();
                true
            }
        }
    }

    /// Compose the render snapshot: merged board cells plus the falling
    /// piece painted with Clear status.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let kind = self.board.get(x as i8, y as i8).unwrap_or(None);
                out.grid[y][x] = SnapshotCell {
                    kind,
                    status: if kind.is_some() {
                        CellStatus::Merged
                    } else {
                        CellStatus::Clear
                    },
                };
            }
        }

        if let Some(player) = self.player {
            for (x, y) in player.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    out.grid[y as usize][x as usize] = SnapshotCell {
                        kind: Some(player.kind),
                        status: CellStatus::Clear,
                    };
                }
            }
        }

        out.score = self.score;
        out.best_score = self.best_score;
        out.level = self.level;
        out.rows_cleared = self.rows_cleared;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.started = self.started;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
