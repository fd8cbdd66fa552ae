use thiserror::Error;

use crate::grids::{Cell, Dimensions, Direction, Neighbor, Neighborhood, DIRECTIONS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    EmptyDimensions { columns: usize, rows: usize },
}

/// A rectangular grid of cells with walls on all four sides of every cell.
///
/// Cells live in a single flat arena indexed by `(column, row)`; neighbor
/// relationships are computed from coordinates rather than stored, so there
/// are no reference cycles. The wall between two adjacent cells is one
/// logical edge stored redundantly in both cells and only ever toggled as a
/// pair, keeping the two sides in agreement at all times.
#[derive(Debug)]
pub struct WallGrid {
    pub dims: Dimensions,
    pub cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::EmptyDimensions { columns, rows });
        }

        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(column, row));
            }
        }

        Ok(Self {
            dims: Dimensions { columns, rows },
            cells,
        })
    }

    #[inline]
    fn index_of(&self, column: usize, row: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn cell(&self, (column, row): Neighbor) -> Option<&Cell> {
        if column < self.dims.columns && row < self.dims.rows {
            Some(&self.cells[self.index_of(column, row)])
        } else {
            None
        }
    }

    /// The adjacent cell's coordinates in the given compass direction, or
    /// `None` when that would fall off the grid. A boundary is a normal
    /// lookup outcome, not an error.
    pub fn neighbor(&self, (column, row): Neighbor, dir: Direction) -> Option<Neighbor> {
        match dir {
            Direction::North => row.checked_sub(1).map(|r| (column, r)),
            Direction::East => {
                if column + 1 < self.dims.columns {
                    Some((column + 1, row))
                } else {
                    None
                }
            }
            Direction::South => {
                if row + 1 < self.dims.rows {
                    Some((column, row + 1))
                } else {
                    None
                }
            }
            Direction::West => column.checked_sub(1).map(|c| (c, row)),
        }
    }

    pub fn neighborhood_of(&self, coords: Neighbor) -> Neighborhood {
        let mut hood = Neighborhood::new();
        for dir in DIRECTIONS {
            if let Some(neighbor) = self.neighbor(coords, dir) {
                hood.set(dir, neighbor);
            }
        }
        hood
    }

    /// All existing neighbors with `visited == false`, enumerated fresh on
    /// every call since visited flags change throughout generation.
    pub fn unvisited_neighbors(&self, coords: Neighbor) -> Vec<Neighbor> {
        self.neighborhood_of(coords)
            .map(|(neighbor, _)| neighbor)
            .filter(|&(c, r)| !self.cells[self.index_of(c, r)].visited)
            .collect()
    }

    pub fn mark_visited(&mut self, (column, row): Neighbor) {
        let index = self.index_of(column, row);
        self.cells[index].visited = true;
    }

    pub fn is_visited(&self, (column, row): Neighbor) -> bool {
        self.cells[self.index_of(column, row)].visited
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Number of carved passages, counting each shared edge once.
    pub fn open_passages(&self) -> usize {
        let open_flags: usize = self
            .cells
            .iter()
            .map(|cell| cell.walls.iter().filter(|&&wall| !wall).count())
            .sum();
        open_flags / 2
    }

    /// Carve the passage between two grid-adjacent cells by clearing both
    /// sides of their shared wall. Callers only ever pass true 4-neighbors.
    pub fn remove_wall_between(&mut self, one: Neighbor, two: Neighbor) {
        let dir = direction_between(one, two);

        let index_one = self.index_of(one.0, one.1);
        let index_two = self.index_of(two.0, two.1);

        self.cells[index_one].walls[dir as usize] = false;
        self.cells[index_two].walls[(-dir) as usize] = false;
    }

    /// Whether the shared wall toward `dir` is open, i.e. a passage exists.
    pub fn passage_open(&self, coords: Neighbor, dir: Direction) -> bool {
        match self.cell(coords) {
            Some(cell) => !cell.wall(dir) && self.neighbor(coords, dir).is_some(),
            None => false,
        }
    }
}

/// The single compass direction from `one` to `two`. The coordinates must
/// differ by exactly 1 in exactly one axis.
fn direction_between(one: Neighbor, two: Neighbor) -> Direction {
    let d_col = two.0 as isize - one.0 as isize;
    let d_row = two.1 as isize - one.1 as isize;

    match (d_col, d_row) {
        (0, -1) => Direction::North,
        (1, 0) => Direction::East,
        (0, 1) => Direction::South,
        (-1, 0) => Direction::West,
        _ => unreachable!("cells {:?} and {:?} are not 4-adjacent", one, two),
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            WallGrid::with_dims(0, 5).unwrap_err(),
            GridError::EmptyDimensions { columns: 0, rows: 5 }
        );
        assert!(WallGrid::with_dims(5, 0).is_err());
        assert!(WallGrid::with_dims(0, 0).is_err());
        assert!(WallGrid::with_dims(1, 1).is_ok());
    }

    #[test]
    fn all_walls_up_initially() {
        let grid = WallGrid::with_dims(3, 2).unwrap();

        assert_eq!(grid.cells.len(), 6);
        for cell in &grid.cells {
            assert_eq!(cell.walls, [true; 4]);
            assert!(!cell.visited);
        }
        assert_eq!(grid.open_passages(), 0);
    }

    #[test]
    fn neighbor_lookup_respects_boundaries() {
        let grid = WallGrid::with_dims(3, 3).unwrap();

        assert_eq!(grid.neighbor((0, 0), Direction::North), None);
        assert_eq!(grid.neighbor((0, 0), Direction::West), None);
        assert_eq!(grid.neighbor((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor((0, 0), Direction::South), Some((0, 1)));

        assert_eq!(grid.neighbor((2, 2), Direction::East), None);
        assert_eq!(grid.neighbor((2, 2), Direction::South), None);
        assert_eq!(grid.neighbor((2, 2), Direction::North), Some((2, 1)));
        assert_eq!(grid.neighbor((2, 2), Direction::West), Some((1, 2)));
    }

    #[test]
    fn cell_lookup_out_of_range_is_none() {
        let grid = WallGrid::with_dims(2, 2).unwrap();

        assert!(grid.cell((1, 1)).is_some());
        assert!(grid.cell((2, 0)).is_none());
        assert!(grid.cell((0, 2)).is_none());
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        let grid = WallGrid::with_dims(3, 3).unwrap();
        let hood = grid.neighborhood_of((1, 1));

        assert_eq!(hood.north, Some((1, 0)));
        assert_eq!(hood.east, Some((2, 1)));
        assert_eq!(hood.south, Some((1, 2)));
        assert_eq!(hood.west, Some((0, 1)));
    }

    #[test]
    fn unvisited_neighbors_tracks_visited_flags() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();

        assert_eq!(grid.unvisited_neighbors((1, 1)).len(), 4);

        grid.mark_visited((1, 0));
        grid.mark_visited((0, 1));

        let remaining = grid.unvisited_neighbors((1, 1));
        assert_eq!(remaining, vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn wall_removal_clears_both_sides() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        grid.remove_wall_between((0, 0), (1, 0));

        let left = grid.cell((0, 0)).unwrap();
        let right = grid.cell((1, 0)).unwrap();
        assert!(!left.wall(Direction::East));
        assert!(!right.wall(Direction::West));

        // untouched edges stay up on both sides
        assert!(left.wall(Direction::South));
        assert!(grid.cell((0, 1)).unwrap().wall(Direction::North));

        assert_eq!(grid.open_passages(), 1);
    }

    #[test]
    fn wall_removal_vertical_pair() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        grid.remove_wall_between((1, 1), (1, 0));

        assert!(!grid.cell((1, 1)).unwrap().wall(Direction::North));
        assert!(!grid.cell((1, 0)).unwrap().wall(Direction::South));
    }

    #[test]
    fn passage_open_requires_carved_wall() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();

        assert!(!grid.passage_open((0, 0), Direction::East));
        grid.remove_wall_between((0, 0), (1, 0));
        assert!(grid.passage_open((0, 0), Direction::East));
        assert!(grid.passage_open((1, 0), Direction::West));

        // boundary is never an open passage
        assert!(!grid.passage_open((0, 0), Direction::West));
        assert!(!grid.passage_open((5, 5), Direction::North));
    }
}
