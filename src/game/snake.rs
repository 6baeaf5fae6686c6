use std::collections::VecDeque;

use super::{action::Direction, position::Position};

/// Type of collision that ends a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head landed on another segment
    SelfCollision,
}

/// The snake: an ordered body plus committed and buffered directions
///
/// The body is never empty. Index 0 is the head, the last element the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Create a straight snake with its head at `head`, trailing away from `direction`
    ///
    /// `length` is clamped to at least one segment.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Build a snake from explicit segments, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_body<I>(segments: I, direction: Direction) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            pending_direction: direction,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Body segments, head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True if any segment, head included, occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Buffer a direction change for the next tick
    ///
    /// A reversal of the *committed* direction is silently ignored. Checking
    /// against the committed rather than the pending direction means a burst
    /// of inputs between two ticks can never chain into a reversal.
    pub fn set_pending_direction(&mut self, new_direction: Direction) {
        if self.direction.is_opposite(new_direction) {
            tracing::trace!(
                current = ?self.direction,
                requested = ?new_direction,
                "rejected reversal"
            );
            return;
        }
        self.pending_direction = new_direction;
    }

    /// Apply the buffered direction. Called once per tick, before `advance`.
    pub fn commit_direction(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Move one cell in the committed direction
    ///
    /// The new head is prepended; the tail is dropped unless the new head
    /// lands on `food`, which is the only way the snake grows. Bounds and
    /// self-collision are not checked here.
    ///
    /// Returns whether the food was eaten.
    pub fn advance(&mut self, food: Position) -> bool {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.push_front(new_head);

        if new_head == food {
            return true;
        }

        self.body.pop_back();
        false
    }

    /// Classify the collision of the current head, if any
    pub fn collision(&self, grid_size: usize) -> Option<CollisionType> {
        let head = self.head();
        if !head.is_within(grid_size) {
            return Some(CollisionType::Wall);
        }
        if self.body.iter().skip(1).any(|&segment| segment == head) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// True if the head is off the grid or on another segment
    pub fn check_collision(&self, grid_size: usize) -> bool {
        self.collision(grid_size).is_some()
    }
}
