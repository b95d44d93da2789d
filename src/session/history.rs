use crate::board::Grid;

/// Snapshot history for undo, oldest first. Non-empty by construction: the
/// initial snapshot can never be rolled back, so `current` is always valid.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    pub fn new(grid: Grid) -> Self {
        Self { snapshots: vec![grid] }
    }

    /// Appends a snapshot; it becomes the current state.
    pub fn commit(&mut self, grid: Grid) {
        self.snapshots.push(grid);
    }

    /// Drops the most recent snapshot and reports whether one was dropped.
    /// The initial snapshot always stays.
    pub fn rollback(&mut self) -> bool {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> &Grid {
        self.snapshots.last().expect("history is never empty")
    }

    pub fn initial(&self) -> &Grid {
        &self.snapshots[0]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Collapses back to the originally generated grid, discarding every
    /// later snapshot.
    pub fn restart(&mut self) {
        self.snapshots.truncate(1);
    }

    /// Transposes every snapshot, not just the current one, so an undo
    /// after a rotation lands on a consistently rotated board.
    pub fn transpose_all(&mut self) {
        for grid in &mut self.snapshots {
            grid.transpose();
        }
    }
}
