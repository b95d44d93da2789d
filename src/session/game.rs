use log::{debug, warn};

use crate::board::{flood_fill, Grid};
use crate::core::{Color, GameError, Palette, Result};

use super::history::History;
use super::score::Score;

/// Board side of the standard game.
pub const DEFAULT_SIDE: usize = 9;

const DEFAULT_REPLACEMENT: Color = Color::rgb(255, 255, 255);

type Listener = Box<dyn FnMut(&Grid, u32)>;

/// One game: grid history, score, selected replacement color, and the
/// renderer hooks. All mutable state lives here, so independent sessions
/// can run side by side and tests need no shared fixtures.
pub struct GameSession {
    palette: Palette,
    history: History,
    score: Score,
    replacement: Color,
    listeners: Vec<Listener>,
    moves: u32,
}

impl GameSession {
    /// Starts a game on a freshly randomized `side` x `side` board with the
    /// standard five-color palette.
    pub fn new(side: usize) -> Result<Self> {
        let palette = Palette::standard();
        let grid = Grid::random(side, &palette, &mut rand::thread_rng())?;
        Ok(Self::from_parts(grid, palette))
    }

    /// Starts a game on a caller-supplied board, e.g. one loaded from a
    /// fixture file.
    pub fn with_grid(grid: Grid) -> Self {
        Self::from_parts(grid, Palette::standard())
    }

    fn from_parts(grid: Grid, palette: Palette) -> Self {
        let cells = (grid.side() * grid.side()) as u32;
        Self {
            palette,
            history: History::new(grid),
            score: Score::new(cells),
            replacement: DEFAULT_REPLACEMENT,
            listeners: Vec::new(),
            moves: 0,
        }
    }

    /// Registers a renderer callback. It fires once immediately with the
    /// current state, then again after every state change.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&Grid, u32) + 'static) {
        listener(self.history.current(), self.score.value());
        self.listeners.push(Box::new(listener));
    }

    /// Applies a fill at the given cell. Out-of-bounds coordinates and
    /// cells that already hold the replacement color are ignored without
    /// touching history or score; a committed fill costs exactly one point.
    pub fn apply_at(&mut self, row: usize, col: usize) {
        let original = match self.history.current().get(row, col) {
            Some(color) => color,
            None => {
                warn!("activation out of bounds: ({}, {})", row, col);
                return;
            }
        };
        if original == self.replacement {
            debug!("redundant move at ({}, {}): cell is already {}", row, col, original);
            return;
        }

        let mut next = self.history.current().clone();
        let recolored = flood_fill(&mut next, row, col, self.replacement);
        debug!(
            "fill at ({}, {}): {} -> {}, {} cells",
            row, col, original, self.replacement, recolored
        );
        self.history.commit(next);
        self.score.decrement();
        self.moves += 1;
        self.notify();
    }

    /// Steps back one move. At the initial board this does nothing; score
    /// is not refunded either way.
    pub fn undo(&mut self) {
        if self.history.rollback() {
            debug!("undo: history depth {}", self.history.len());
            self.notify();
        }
    }

    /// Returns to the originally generated board and resets the score.
    pub fn restart(&mut self) {
        self.history.restart();
        self.score.reset();
        self.moves = 0;
        debug!("restart");
        self.notify();
    }

    /// Transposes every board in history across the main diagonal, so an
    /// undo after rotating stays consistent.
    pub fn rotate(&mut self) {
        self.history.transpose_all();
        self.notify();
    }

    /// Selects the replacement color by palette name.
    pub fn select_color(&mut self, name: &str) -> Result<()> {
        match self.palette.get(name) {
            Some(color) => {
                self.replacement = color;
                debug!("replacement color: {} ({})", name, color);
                Ok(())
            }
            None => Err(GameError::UnknownColor(name.to_string())),
        }
    }

    /// Sets the replacement color directly, for callers holding a `Color`.
    pub fn set_replacement(&mut self, color: Color) {
        self.replacement = color;
    }

    pub fn grid(&self) -> &Grid {
        self.history.current()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn replacement(&self) -> Color {
        self.replacement
    }

    pub fn side(&self) -> usize {
        self.history.current().side()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Committed fills since the last (re)start. Distinct from history
    /// depth, which shrinks again on undo.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn notify(&mut self) {
        let grid = self.history.current();
        let score = self.score.value();
        for listener in &mut self.listeners {
            listener(grid, score);
        }
    }
}
