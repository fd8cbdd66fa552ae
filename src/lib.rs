//! Incremental maze generation by randomized depth-first search.
//!
//! A [`WallGrid`] holds the cells, a [`RecursiveBacktracker`] carves a
//! perfect maze into it one [`Generator::step_generation`] call at a time,
//! and a [`Navigator`] walks the carved passages. The core does no I/O and
//! never blocks; an external driver decides the stepping cadence.

pub mod generators;
pub mod grids;
pub mod navigator;

pub use generators::{Generator, GeneratorState, RecursiveBacktracker};
pub use grids::{Cell, Dimensions, Direction, GridError, Neighborhood, WallGrid};
pub use navigator::Navigator;
