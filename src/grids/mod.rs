pub mod wall_grid;

pub use wall_grid::{GridError, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

/// Compass directions, in wall-array order. North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

/// One grid square: immutable coordinates, four wall flags keyed by
/// `Direction as usize`, and a visited flag owned by the generator.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    pub walls: [bool; 4],
    pub visited: bool,
}

impl Cell {
    pub fn new(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            walls: [true; 4],
            visited: false,
        }
    }

    #[inline]
    pub fn wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }
}

pub type Neighbor = (usize, usize);

/// The up-to-four existing neighbors of a cell, recomputed per call so
/// visited flags are never stale. Iterates in N, E, S, W order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Neighbor>,
    pub east: Option<Neighbor>,
    pub south: Option<Neighbor>,
    pub west: Option<Neighbor>,

    counter: Option<Direction>,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            east: None,
            south: None,
            west: None,
            counter: Some(Direction::North),
        }
    }

    pub fn get(&self, dir: Direction) -> Option<Neighbor> {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, dir: Direction, neighbor: Neighbor) {
        match dir {
            Direction::North => self.north = Some(neighbor),
            Direction::East => self.east = Some(neighbor),
            Direction::South => self.south = Some(neighbor),
            Direction::West => self.west = Some(neighbor),
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = self.counter {
            self.counter = match dir {
                Direction::North => Some(Direction::East),
                Direction::East => Some(Direction::South),
                Direction::South => Some(Direction::West),
                Direction::West => None,
            };

            if let Some(neighbor) = self.get(dir) {
                return Some((neighbor, dir));
            }
        }

        None
    }
}

#[cfg(test)]
mod test_directions {
    use super::*;

    #[test]
    fn opposites() {
        for dir in DIRECTIONS {
            assert_eq!(-(-dir), dir);
        }
        assert_eq!(-Direction::North, Direction::South);
        assert_eq!(-Direction::East, Direction::West);
    }

    #[test]
    fn neighborhood_iterates_existing_only() {
        let mut hood = Neighborhood::new();
        hood.set(Direction::East, (1, 0));
        hood.set(Direction::South, (0, 1));

        let items: Vec<_> = hood.collect();
        assert_eq!(
            items,
            vec![((1, 0), Direction::East), ((0, 1), Direction::South)]
        );
    }

    #[test]
    fn empty_neighborhood_yields_nothing() {
        assert_eq!(Neighborhood::new().count(), 0);
    }
}
