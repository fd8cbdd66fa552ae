pub mod backtracker;

pub use backtracker::RecursiveBacktracker;

use crate::grids::WallGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Running,
    Complete,
}

/// An incremental maze generator. A driver calls `step_generation` on a
/// cadence of its choosing (once per tick, per keypress, or in a tight loop
/// via `generate_maze`) and reads the grid back between steps.
pub trait Generator {
    fn step_generation(&mut self);

    /// One step, then the grid, for drivers that redraw after every step.
    fn next_step(&mut self) -> &WallGrid;

    /// Run to completion in one call.
    fn generate_maze(&mut self) -> &WallGrid;

    fn is_done(&self) -> bool;
}
