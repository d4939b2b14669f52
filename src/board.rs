use std::collections::HashSet;

use rand::Rng;

use crate::input::Direction;

/// Grid cell in logical board coordinates, top-left origin.
///
/// Signed so that candidate positions one step outside the board stay
/// representable for bounds checking.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square play field of `side` × `side` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    side: u16,
}

impl Board {
    #[must_use]
    pub fn new(side: u16) -> Self {
        debug_assert!(side > 0);
        Self { side }
    }

    /// Side length in cells.
    #[must_use]
    pub fn side(self) -> u16 {
        self.side
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// Returns true when the cell lies inside the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < i32::from(self.side) && cell.y < i32::from(self.side)
    }

    /// The center cell (rounded toward the lower-right on even sides).
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: i32::from(self.side / 2),
            y: i32::from(self.side / 2),
        }
    }

    /// Picks a uniformly random cell not in `occupied` by rejection
    /// sampling.
    ///
    /// Returns `None` when every cell is occupied; callers treat that as a
    /// terminal condition rather than an error.
    #[must_use]
    pub fn random_free_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Option<Cell> {
        if occupied.len() >= self.total_cells() {
            return None;
        }

        loop {
            let cell = Cell {
                x: rng.gen_range(0..i32::from(self.side)),
                y: rng.gen_range(0..i32::from(self.side)),
            };
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::input::Direction;

    use super::{Board, Cell};

    #[test]
    fn contains_accepts_interior_and_rejects_exterior() {
        let board = Board::new(20);

        assert!(board.contains(Cell { x: 0, y: 0 }));
        assert!(board.contains(Cell { x: 19, y: 19 }));
        assert!(!board.contains(Cell { x: -1, y: 5 }));
        assert!(!board.contains(Cell { x: 5, y: -1 }));
        assert!(!board.contains(Cell { x: 20, y: 5 }));
        assert!(!board.contains(Cell { x: 5, y: 20 }));
    }

    #[test]
    fn step_moves_one_cell() {
        let cell = Cell { x: 4, y: 7 };

        assert_eq!(cell.step(Direction::Up), Cell { x: 4, y: 6 });
        assert_eq!(cell.step(Direction::Down), Cell { x: 4, y: 8 });
        assert_eq!(cell.step(Direction::Left), Cell { x: 3, y: 7 });
        assert_eq!(cell.step(Direction::Right), Cell { x: 5, y: 7 });
    }

    #[test]
    fn random_free_cell_avoids_occupied_cells() {
        let board = Board::new(4);
        let mut rng = StdRng::seed_from_u64(7);
        let mut occupied = HashSet::new();
        for x in 0..4 {
            for y in 0..3 {
                occupied.insert(Cell { x, y });
            }
        }

        // Only row y == 3 is free.
        for _ in 0..50 {
            let cell = board
                .random_free_cell(&mut rng, &occupied)
                .expect("a free row remains");
            assert_eq!(cell.y, 3);
            assert!(board.contains(cell));
        }
    }

    #[test]
    fn full_board_yields_no_cell() {
        let board = Board::new(2);
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<Cell> = (0..2)
            .flat_map(|x| (0..2).map(move |y| Cell { x, y }))
            .collect();

        assert_eq!(board.random_free_cell(&mut rng, &occupied), None);
    }
}
