use std::collections::{HashSet, VecDeque};

use crate::board::{Board, Cell};
use crate::input::Direction;

/// Snake body and direction state.
///
/// Segments are stored head-first in a deque so that one movement tick is a
/// push at the front plus a pop at the back, O(1) regardless of length.
/// Direction intents are buffered in a single slot and committed at the
/// start of the next tick only.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// Creates the reset-state snake: a horizontal run of `length` cells
    /// centered on `board`, head rightmost, moving right.
    #[must_use]
    pub fn spawn_centered(board: Board, length: u16) -> Self {
        debug_assert!(length >= 1);
        debug_assert!(length <= board.side());

        let capacity = usize::from(length);
        let length = i32::from(length.max(1));
        let side = i32::from(board.side());
        let y = board.center().y;
        let head_x = (side - length) / 2 + length - 1;

        let mut body = VecDeque::with_capacity(capacity);
        for offset in 0..length {
            body.push_back(Cell {
                x: head_x - offset,
                y,
            });
        }

        Self {
            body,
            direction: Direction::Right,
            pending: None,
        }
    }

    /// Creates a snake from explicit segments, head first.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
            direction,
            pending: None,
        }
    }

    /// Buffers a direction intent for the next tick.
    ///
    /// The exact opposite of the direction the snake is *currently* moving
    /// is rejected outright — the pending slot is not consulted, so two
    /// quick presses within one tick cannot queue an instant reversal. An
    /// accepted intent replaces any earlier unapplied one.
    pub fn buffer_intent(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    /// Commits the buffered intent, making it the movement direction.
    pub fn commit_intent(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
    }

    /// The cell the head would move into this tick.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.direction)
    }

    /// Appends a new head segment.
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Removes the oldest segment.
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// All occupied cells as a set, for food placement.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the buffered, not yet applied direction intent.
    #[must_use]
    pub fn pending_intent(&self) -> Option<Direction> {
        self.pending
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
