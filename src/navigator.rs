use log::trace;

use crate::grids::{Direction, Neighbor, WallGrid};

/// A cursor that walks through the carved portion of a maze.
///
/// Independent of the generator's cursor: it can move at any point during or
/// after generation, and only through passages that have already been opened.
/// Several navigators can share one grid since moves never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    position: Neighbor,
}

impl Navigator {
    /// Starts at the maze origin `(0, 0)`.
    pub fn new() -> Self {
        Self::at((0, 0))
    }

    pub fn at(position: Neighbor) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Neighbor {
        self.position
    }

    /// Attempts a one-cell move. Returns `false` and stays put when the move
    /// is blocked, by either a wall or the grid boundary.
    pub fn try_move(&mut self, grid: &WallGrid, dir: Direction) -> bool {
        let Some(target) = grid.neighbor(self.position, dir) else {
            trace!("move {:?} from {:?} blocked by boundary", dir, self.position);
            return false;
        };

        if !grid.passage_open(self.position, dir) {
            trace!("move {:?} from {:?} blocked by wall", dir, self.position);
            return false;
        }

        self.position = target;
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
