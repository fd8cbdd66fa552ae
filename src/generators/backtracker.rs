use log::{debug, trace};
use rand::prelude::*;

use crate::generators::{Generator, GeneratorState};
use crate::grids::{GridError, Neighbor, WallGrid};

/// Randomized depth-first maze carving with an explicit backtracking stack.
///
/// Every step either carves a passage into a previously unvisited cell,
/// backtracks one cell along the stack, or completes. A passage is only ever
/// opened toward an unvisited cell, so the carved passages always form a
/// tree; when the last cell has been visited and the stack drains, the open
/// passages are a spanning tree over the whole grid (a perfect maze).
///
/// Pausing between steps is free: the grid and stack are valid at every
/// intermediate state, so a driver can stop, inspect, and resume at will.
pub struct RecursiveBacktracker {
    grid: WallGrid,
    stack: Vec<Neighbor>,
    current: Neighbor,
    rng: StdRng,
    state: GeneratorState,
}

impl RecursiveBacktracker {
    /// Starts a generator at the origin cell `(0, 0)`, already visited.
    ///
    /// The same seed over the same dimensions reproduces the same maze and
    /// the same number of steps; `None` seeds from OS entropy.
    pub fn new(columns: usize, rows: usize, seed: Option<u64>) -> Result<Self, GridError> {
        let mut grid = WallGrid::with_dims(columns, rows)?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let current = (0, 0);
        grid.mark_visited(current);

        Ok(Self {
            grid,
            stack: Vec::new(),
            current,
            rng,
            state: GeneratorState::Running,
        })
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// The generator's cursor, for highlighting during animation.
    pub fn current(&self) -> Neighbor {
        self.current
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }
}

impl Generator for RecursiveBacktracker {
    fn step_generation(&mut self) {
        if self.state == GeneratorState::Complete {
            return;
        }

        let candidates = self.grid.unvisited_neighbors(self.current);

        if !candidates.is_empty() {
            let next = candidates[self.rng.gen_range(0..candidates.len())];

            self.grid.mark_visited(next);
            self.stack.push(self.current);
            self.grid.remove_wall_between(self.current, next);

            trace!("carved {:?} -> {:?}", self.current, next);
            self.current = next;
        } else if let Some(previous) = self.stack.pop() {
            trace!("backtracked {:?} -> {:?}", self.current, previous);
            self.current = previous;
        } else {
            debug!(
                "generation complete, {} cells visited, {} passages",
                self.grid.visited_count(),
                self.grid.open_passages()
            );
            self.state = GeneratorState::Complete;
        }
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        loop {
            self.step_generation();
            if self.is_done() {
                break;
            }
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.state == GeneratorState::Complete
    }
}
