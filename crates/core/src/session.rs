//! Game session: the single mutable aggregate and its state machine.
//!
//! States: NotStarted -> Running <-> Paused -> GameOver, with Reset back to
//! NotStarted. All commands are synchronous and atomic; commands issued in a
//! state where they do not apply (move before start, rotate while paused,
//! anything after game over except Start/Reset) are no-ops rather than
//! errors.
//!
//! Gravity is wall-clock driven: the host calls [`Session::tick`] with a
//! monotonic millisecond timestamp every frame, and a down-move is applied
//! whenever at least the current drop interval has elapsed since the last
//! one. The session never schedules anything itself.

use blockfall_types::{Direction, GameCommand, PieceKind, SPAWN_X, SPAWN_Y};

use crate::collision::collides;
use crate::grid::Grid;
use crate::rng::GameRng;
use crate::shape::{base_shape, Shape};
use crate::snapshot::{PieceSnapshot, PreviewSnapshot, Snapshot};
use crate::speed::{drop_interval_ms, level_for_lines};

/// The falling piece: current rotation matrix plus board position of the
/// matrix's top-left corner. Rotation replaces the matrix wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece of `kind` in spawn orientation at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: Option<ActivePiece>,
    next: Option<PieceKind>,
    rng: GameRng,
    cleared_lines: u32,
    level: u32,
    drop_interval_ms: u64,
    running: bool,
    paused: bool,
    game_over: bool,
    /// Timestamp of the last gravity-applied down-move (or of the first
    /// observed tick after start).
    last_drop_at: Option<u64>,
}

impl Session {
    /// A not-yet-started session with a seeded piece sequence.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// A not-yet-started session drawing pieces from the given generator.
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            next: None,
            rng,
            cleared_lines: 0,
            level: 1,
            drop_interval_ms: drop_interval_ms(1),
            running: false,
            paused: false,
            game_over: false,
            last_drop_at: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval(&self) -> u64 {
        self.drop_interval_ms
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Apply one command. Returns whether the session state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => {
                self.start();
                true
            }
            GameCommand::Reset => {
                self.reset();
                true
            }
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Move(direction) => self.move_piece(direction),
            GameCommand::Rotate => self.rotate(),
        }
    }

    /// Begin (or restart) a game: fresh grid and counters, spawn a new
    /// active piece from a fresh draw, pre-draw the next piece.
    pub fn start(&mut self) {
        self.grid = Grid::new();
        self.cleared_lines = 0;
        self.level = 1;
        self.drop_interval_ms = drop_interval_ms(1);
        self.running = true;
        self.paused = false;
        self.game_over = false;
        self.last_drop_at = None;
        self.active = Some(ActivePiece::spawn(self.rng.next_kind()));
        self.next = Some(self.rng.next_kind());
    }

    /// Return to a fresh, not-started session. The piece sequence continues
    /// from the current generator state so consecutive games differ.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
    }

    /// Flip pause. Only meaningful while a game is running.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Move the active piece one cell. A blocked sideways move is a no-op;
    /// a blocked down-move locks the piece. Returns whether anything
    /// changed.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if !self.accepting_play_commands() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let (dx, dy) = direction.delta();
        let (next_x, next_y) = (active.x + dx, active.y + dy);

        if !collides(&active.shape, &self.grid, next_x, next_y) {
            if let Some(active) = self.active.as_mut() {
                active.x = next_x;
                active.y = next_y;
            }
            return true;
        }

        if direction == Direction::Down {
            self.lock();
            return true;
        }

        false
    }

    /// Rotate the active piece clockwise in place. A rotation whose result
    /// would collide is rejected and the prior shape kept (no wall kicks).
    pub fn rotate(&mut self) -> bool {
        if !self.accepting_play_commands() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        if collides(&rotated, &self.grid, active.x, active.y) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.shape = rotated;
        }
        true
    }

    /// Advance wall-clock time. Applies one gravity down-move when at least
    /// the current drop interval has elapsed since the last one. Returns
    /// whether a down-move was applied.
    ///
    /// The first tick after start only records the timestamp, so the first
    /// descent happens one full interval after play begins.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.accepting_play_commands() {
            return false;
        }

        let Some(last) = self.last_drop_at else {
            self.last_drop_at = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(last) < self.drop_interval_ms {
            return false;
        }

        self.last_drop_at = Some(now_ms);
        self.move_piece(Direction::Down)
    }

    /// Read-only state for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            active: self.active.as_ref().map(|piece| PieceSnapshot {
                kind: piece.kind,
                shape: piece.shape.clone(),
                x: piece.x,
                y: piece.y,
            }),
            next: self.next.map(|kind| PreviewSnapshot {
                kind,
                shape: base_shape(kind),
            }),
            cleared_lines: self.cleared_lines,
            level: self.level,
            running: self.running,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    fn accepting_play_commands(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }

    /// Merge the active piece into the grid, resolve line clears, update
    /// counters, and spawn the promoted next piece. A spawn collision ends
    /// the game. Only reachable from a blocked down-move.
    fn lock(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let merged = self
            .grid
            .with_locked(&active.shape, active.x, active.y, active.kind);
        let (compacted, cleared) = merged.clear_full_rows();
        self.grid = compacted;
        self.cleared_lines += cleared;

        let level = level_for_lines(self.cleared_lines);
        if level > self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.rng.next_kind(),
        };
        let piece = ActivePiece::spawn(kind);
        self.next = Some(self.rng.next_kind());

        if collides(&piece.shape, &self.grid, piece.x, piece.y) {
            self.game_over = true;
            self.running = false;
        } else {
            self.active = Some(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::{BOARD_WIDTH, BASE_DROP_MS};

    fn started(seed: u32) -> Session {
        let mut session = Session::new(seed);
        session.start();
        session
    }

    /// Replace the active piece with an I bar at the given position.
    fn place_i_bar(session: &mut Session, x: i8, y: i8) {
        session.active = Some(ActivePiece {
            kind: PieceKind::I,
            shape: base_shape(PieceKind::I),
            x,
            y,
        });
    }

    /// Fill row `y` except the four columns `gap_x..gap_x+4`.
    fn fill_row_with_gap(session: &mut Session, y: i8, gap_x: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            if x < gap_x || x >= gap_x + 4 {
                session.grid.set(x, y, Some(PieceKind::Z));
            }
        }
    }

    #[test]
    fn new_session_is_not_started() {
        let session = Session::new(12345);
        assert!(!session.running());
        assert!(!session.paused());
        assert!(!session.game_over());
        assert!(session.active().is_none());
        assert!(session.next_kind().is_none());
        assert_eq!(session.level(), 1);
        assert_eq!(session.cleared_lines(), 0);
    }

    #[test]
    fn commands_before_start_are_noops() {
        let mut session = Session::new(12345);
        let before = session.snapshot();

        assert!(!session.apply(GameCommand::Move(Direction::Left)));
        assert!(!session.apply(GameCommand::Rotate));
        assert!(!session.apply(GameCommand::TogglePause));
        assert!(!session.tick(10_000));

        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn start_spawns_at_spawn_position() {
        let session = started(12345);
        assert!(session.running());
        let active = session.active().expect("active piece after start");
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(active.shape, base_shape(active.kind));
        assert!(session.next_kind().is_some());
        assert_eq!(session.drop_interval(), BASE_DROP_MS);
    }

    #[test]
    fn seeded_sessions_play_identically() {
        let mut a = started(99);
        let mut b = started(99);
        for _ in 0..50 {
            a.apply(GameCommand::Move(Direction::Down));
            b.apply(GameCommand::Move(Direction::Down));
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn sideways_move_commits_or_noops() {
        let mut session = started(12345);
        let x = session.active().map(|p| p.x).expect("active");

        assert!(session.move_piece(Direction::Right));
        assert_eq!(session.active().map(|p| p.x), Some(x + 1));
        assert!(session.move_piece(Direction::Left));
        assert_eq!(session.active().map(|p| p.x), Some(x));

        // Walk into the left wall: each blocked attempt changes nothing.
        while session.move_piece(Direction::Left) {}
        let at_wall = session.active().map(|p| p.x);
        assert!(!session.move_piece(Direction::Left));
        assert_eq!(session.active().map(|p| p.x), at_wall);
    }

    #[test]
    fn rotation_reverts_when_blocked() {
        let mut session = started(12345);
        // Vertical I bar against boxed-in cells cannot rotate back to
        // horizontal: surround its column.
        place_i_bar(&mut session, 0, 10);
        let vertical = session
            .active()
            .map(|p| p.shape.rotate_cw())
            .expect("active");
        if let Some(active) = session.active.as_mut() {
            active.shape = vertical.clone();
        }
        for y in 10..14 {
            session.grid.set(1, y, Some(PieceKind::Z));
        }

        assert!(!session.rotate());
        assert_eq!(session.active().map(|p| p.shape.clone()), Some(vertical));
    }

    #[test]
    fn blocked_down_move_locks_into_grid() {
        let mut session = started(12345);
        place_i_bar(&mut session, 3, 19);

        assert!(session.move_piece(Direction::Down));
        // Piece merged at the bottom row; a new one spawned.
        for x in 3..7 {
            assert_eq!(session.grid().get(x, 19), Some(Some(PieceKind::I)));
        }
        let active = session.active().expect("respawned piece");
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn lock_clears_completed_row() {
        let mut session = started(12345);
        fill_row_with_gap(&mut session, 19, 3);
        session.grid.set(0, 18, Some(PieceKind::L));
        place_i_bar(&mut session, 3, 19);

        session.move_piece(Direction::Down);

        assert_eq!(session.cleared_lines(), 1);
        // Row above shifted down by one; cleared row gone.
        assert_eq!(session.grid().get(0, 19), Some(Some(PieceKind::L)));
        assert_eq!(session.grid().get(0, 18), Some(None));
        assert_eq!(session.grid().get(5, 19), Some(None));
    }

    #[test]
    fn level_bumps_exactly_on_tenth_line() {
        let mut session = started(12345);
        session.cleared_lines = 9;
        fill_row_with_gap(&mut session, 19, 3);
        place_i_bar(&mut session, 3, 19);

        session.move_piece(Direction::Down);

        assert_eq!(session.cleared_lines(), 10);
        assert_eq!(session.level(), 2);
        assert_eq!(session.drop_interval(), drop_interval_ms(2));

        // A lock with no clear at 10 lines does not bump again.
        place_i_bar(&mut session, 3, 19 - 1);
        session.grid.set(3, 19, Some(PieceKind::Z));
        session.move_piece(Direction::Down);
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn spawn_collision_ends_the_game() {
        let mut session = started(12345);
        // Wall off the spawn area, then force a lock.
        for x in 3..8 {
            for y in 0..2 {
                session.grid.set(x, y, Some(PieceKind::Z));
            }
        }
        place_i_bar(&mut session, 3, 19);
        session.move_piece(Direction::Down);

        assert!(session.game_over());
        assert!(!session.running());
        assert!(session.active().is_none());
    }

    #[test]
    fn game_over_freezes_everything_but_start_and_reset() {
        let mut session = started(12345);
        session.game_over = true;
        session.running = false;
        let frozen = session.snapshot();

        assert!(!session.apply(GameCommand::Move(Direction::Left)));
        assert!(!session.apply(GameCommand::Move(Direction::Down)));
        assert!(!session.apply(GameCommand::Rotate));
        assert!(!session.apply(GameCommand::TogglePause));
        assert!(!session.tick(1_000_000));
        assert_eq!(session.snapshot(), frozen);

        assert!(session.apply(GameCommand::Start));
        assert!(session.running());
        assert!(!session.game_over());
    }

    #[test]
    fn pause_suspends_play_commands() {
        let mut session = started(12345);
        assert!(session.toggle_pause());
        assert!(session.paused());

        let frozen = session.snapshot();
        assert!(!session.move_piece(Direction::Down));
        assert!(!session.rotate());
        assert!(!session.tick(1_000_000));
        assert_eq!(session.snapshot(), frozen);

        assert!(session.toggle_pause());
        assert!(!session.paused());
        assert!(session.move_piece(Direction::Down));
    }

    #[test]
    fn tick_applies_gravity_after_one_interval() {
        let mut session = started(12345);
        let y = session.active().map(|p| p.y).expect("active");

        // First tick only arms the timer.
        assert!(!session.tick(0));
        assert_eq!(session.active().map(|p| p.y), Some(y));

        assert!(!session.tick(BASE_DROP_MS - 1));
        assert!(session.tick(BASE_DROP_MS));
        assert_eq!(session.active().map(|p| p.y), Some(y + 1));

        // Interval restarts from the applied move.
        assert!(!session.tick(BASE_DROP_MS + 1));
        assert!(session.tick(2 * BASE_DROP_MS));
        assert_eq!(session.active().map(|p| p.y), Some(y + 2));
    }

    #[test]
    fn reset_returns_to_fresh_state_with_rolling_sequence() {
        let mut session = started(12345);
        session.cleared_lines = 17;
        session.level = 2;

        session.reset();
        assert!(!session.running());
        assert!(!session.game_over());
        assert!(!session.paused());
        assert_eq!(session.cleared_lines(), 0);
        assert_eq!(session.level(), 1);
        assert!(session.active().is_none());
        assert_eq!(session.grid(), &Grid::new());
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut session = started(12345);
        let snapshot = session.snapshot();
        for _ in 0..5 {
            session.move_piece(Direction::Down);
        }
        // The earlier snapshot still shows the spawn-time state.
        assert_eq!(
            snapshot.active.as_ref().map(|p| p.y),
            Some(SPAWN_Y)
        );
        assert_eq!(snapshot.grid, Grid::new());
    }
}
