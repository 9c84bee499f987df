use std::collections::{HashSet, VecDeque};

use crate::game::grid::{CellId, Coord};

/// One unit of the snake's body at a specific cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub coord: Coord,
    pub cell: CellId,
}

impl Segment {
    pub fn new(coord: Coord, cell: CellId) -> Self {
        Self { coord, cell }
    }
}

/// Set view of the body's cell ids.
///
/// Insertion order is part of the contract, not an implementation detail:
/// the engine's reversal probe inspects the most recent and the very first
/// insertions, and growth appends the new tail cell after the head cell, so
/// after eating the order deliberately diverges from body order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedSet {
    order: Vec<CellId>,
    members: HashSet<CellId>,
}

impl OccupiedSet {
    fn insert(&mut self, id: CellId) {
        if self.members.insert(id) {
            self.order.push(id);
        }
    }

    fn remove(&mut self, id: CellId) {
        if self.members.remove(&id) {
            self.order.retain(|&cell| cell != id);
        }
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The id inserted `back` insertions ago. `from_latest(0)` is the most
    /// recent insertion.
    pub fn from_latest(&self, back: usize) -> Option<CellId> {
        self.order
            .len()
            .checked_sub(back + 1)
            .and_then(|index| self.order.get(index).copied())
    }

    /// The oldest id still in the set.
    pub fn first_inserted(&self) -> Option<CellId> {
        self.order.first().copied()
    }

    /// All ids in insertion order.
    pub fn insertion_order(&self) -> &[CellId] {
        &self.order
    }
}

/// The snake's body: oldest segment (the tail) at the front of the deque,
/// the head at the back. Never empty.
///
/// The body and its occupied-set view are mutated only through
/// [`advance`](Self::advance), [`grow`](Self::grow) and
/// [`reverse`](Self::reverse), so the two can never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Segment>,
    occupied: OccupiedSet,
}

impl SnakeBody {
    /// A body of length 1 at the given seed segment.
    pub fn new(seed: Segment) -> Self {
        let mut occupied = OccupiedSet::default();
        occupied.insert(seed.cell);
        let mut segments = VecDeque::new();
        segments.push_back(seed);
        Self { segments, occupied }
    }

    pub fn head(&self) -> Segment {
        *self.segments.back().unwrap()
    }

    pub fn tail(&self) -> Segment {
        *self.segments.front().unwrap()
    }

    /// The segment the tail is linked to, toward the head.
    pub fn tail_successor(&self) -> Option<Segment> {
        self.segments.get(1).copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupied(&self) -> &OccupiedSet {
        &self.occupied
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Append a new head and retire the current tail. Length is unchanged.
    pub fn advance(&mut self, new_head: Segment) {
        let old_tail = self.segments.pop_front().unwrap();
        self.occupied.remove(old_tail.cell);
        self.segments.push_back(new_head);
        self.occupied.insert(new_head.cell);
    }

    /// Prepend a new tail segment. The cell is recorded as the most recent
    /// insertion in the occupied set.
    pub fn grow(&mut self, new_tail: Segment) {
        self.occupied.insert(new_tail.cell);
        self.segments.push_front(new_tail);
    }

    /// Reverse the traversal order so the former tail leads. The occupied
    /// set's insertion order is untouched.
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(row: i32, col: i32) -> Segment {
        // 13x25 grid ids
        Segment::new(Coord::new(row, col), (row * 25 + col + 1) as CellId)
    }

    #[test]
    fn test_new_body() {
        let body = SnakeBody::new(segment(4, 8));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), body.tail());
        assert!(body.occupied().contains(109));
        assert_eq!(body.occupied().len(), 1);
    }

    #[test]
    fn test_advance_keeps_length_and_set_in_sync() {
        let mut body = SnakeBody::new(segment(4, 8));
        body.advance(segment(4, 9));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), segment(4, 9));
        assert!(!body.occupied().contains(109));
        assert!(body.occupied().contains(110));
        assert_eq!(body.occupied().len(), body.len());
    }

    #[test]
    fn test_grow_appends_most_recent_insertion() {
        let mut body = SnakeBody::new(segment(4, 8));
        body.advance(segment(4, 9));
        body.grow(segment(4, 8));

        assert_eq!(body.len(), 2);
        assert_eq!(body.tail(), segment(4, 8));
        assert_eq!(body.head(), segment(4, 9));
        // The grown tail is the most recent insertion, not the head.
        assert_eq!(body.occupied().from_latest(0), Some(109));
        assert_eq!(body.occupied().from_latest(1), Some(110));
        assert_eq!(body.occupied().first_inserted(), Some(110));
    }

    #[test]
    fn test_reverse_twice_restores_body() {
        let mut body = SnakeBody::new(segment(4, 10));
        body.grow(segment(4, 9));
        body.grow(segment(4, 8));
        let before = body.clone();

        body.reverse();
        assert_eq!(body.head(), segment(4, 8));
        assert_eq!(body.tail(), segment(4, 10));

        body.reverse();
        assert_eq!(body, before);
    }

    #[test]
    fn test_reverse_preserves_insertion_order() {
        let mut body = SnakeBody::new(segment(4, 10));
        body.grow(segment(4, 9));
        let order_before = body.occupied().insertion_order().to_vec();
        body.reverse();
        assert_eq!(body.occupied().insertion_order(), &order_before[..]);
    }

    #[test]
    fn test_tail_successor() {
        let mut body = SnakeBody::new(segment(4, 10));
        assert_eq!(body.tail_successor(), None);
        body.grow(segment(4, 9));
        assert_eq!(body.tail_successor(), Some(segment(4, 10)));
    }

    #[test]
    fn test_from_latest_out_of_range() {
        let body = SnakeBody::new(segment(4, 8));
        assert_eq!(body.occupied().from_latest(0), Some(109));
        assert_eq!(body.occupied().from_latest(1), None);
        assert_eq!(body.occupied().from_latest(2), None);
    }
}
