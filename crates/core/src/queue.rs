//! Circular lookahead queue of upcoming pieces.
//!
//! The queue behaves like an endless conveyor shown through a window of
//! [`QUEUE_CAPACITY`] slots: every removal is immediately followed by a
//! refill from the generator, so once filled it stays full.
//!
//! Storage is a fixed array indexed with modulo wraparound. Nothing is ever
//! reallocated.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::rng::PieceGenerator;
use crate::types::{Piece, QUEUE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Physical index of the oldest piece.
    front: usize,
    /// Physical index the next enqueue writes to.
    back: usize,
    count: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            back: 0,
            count: 0,
        }
    }

    /// Create a queue pre-filled to capacity.
    pub fn filled(generator: &mut PieceGenerator) -> Self {
        let mut queue = Self::new();
        while queue.enqueue(generator) {}
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Append a freshly generated piece at the back.
    ///
    /// Returns `false` (and generates nothing) when the queue is already full.
    pub fn enqueue(&mut self, generator: &mut PieceGenerator) -> bool {
        if self.is_full() {
            return false;
        }

        let piece = generator.generate();
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % QUEUE_CAPACITY;
        self.count += 1;
        trace!(%piece, count = self.count, "enqueued");
        true
    }

    /// Remove the front piece, then refill the freed slot.
    ///
    /// Returns `None` without touching the queue or the generator if the
    /// queue is empty; correct callers never hit that case because the
    /// queue refills after every removal.
    pub fn dequeue(&mut self, generator: &mut PieceGenerator) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }

        let piece = self.slots[self.front].take()?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.count -= 1;
        trace!(%piece, "dequeued");

        self.enqueue(generator);
        Some(piece)
    }

    /// The piece that will be played next.
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at `rank` positions behind the front (rank 0 = front).
    pub fn get(&self, rank: usize) -> Option<&Piece> {
        if rank >= self.count {
            return None;
        }
        self.slots[self.physical(rank)].as_ref()
    }

    pub(crate) fn get_mut(&mut self, rank: usize) -> Option<&mut Piece> {
        if rank >= self.count {
            return None;
        }
        let idx = self.physical(rank);
        self.slots[idx].as_mut()
    }

    /// The first `K` pieces, front first. `None` when fewer than `K` are queued.
    pub(crate) fn front_mut<const K: usize>(&mut self) -> Option<[&mut Piece; K]> {
        if K > self.count {
            return None;
        }
        let front = self.front;
        let mut ranked: ArrayVec<(usize, &mut Piece), QUEUE_CAPACITY> = self
            .slots
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, slot)| {
                let rank = (idx + QUEUE_CAPACITY - front) % QUEUE_CAPACITY;
                if rank < K {
                    slot.as_mut().map(|piece| (rank, piece))
                } else {
                    None
                }
            })
            .collect();
        ranked.sort_unstable_by_key(|(rank, _)| *rank);
        ranked
            .into_iter()
            .map(|(_, piece)| piece)
            .collect::<ArrayVec<_, K>>()
            .into_inner()
            .ok()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |rank| self.get(rank))
    }

    fn physical(&self, rank: usize) -> usize {
        (self.front + rank) % QUEUE_CAPACITY
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &PieceQueue) -> Vec<u64> {
        queue.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = PieceQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn test_filled_queue() {
        let mut generator = PieceGenerator::new(1);
        let queue = PieceQueue::filled(&mut generator);

        assert!(queue.is_full());
        assert_eq!(ids(&queue), vec![0, 1, 2, 3, 4]);
        assert_eq!(generator.next_id(), 5);
    }

    #[test]
    fn test_enqueue_on_full_is_noop() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::filled(&mut generator);

        assert!(!queue.enqueue(&mut generator));
        assert_eq!(queue.len(), QUEUE_CAPACITY);
        // No id was consumed.
        assert_eq!(generator.next_id(), 5);
    }

    #[test]
    fn test_dequeue_refills() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::filled(&mut generator);

        let played = queue.dequeue(&mut generator).unwrap();
        assert_eq!(played.id, 0);
        assert!(queue.is_full());
        assert_eq!(ids(&queue), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_wraparound_keeps_order() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::filled(&mut generator);

        for expected in 0..23 {
            assert_eq!(queue.dequeue(&mut generator).unwrap().id, expected);
            assert_eq!(queue.len(), QUEUE_CAPACITY);
        }
        assert_eq!(ids(&queue), vec![23, 24, 25, 26, 27]);
    }

    #[test]
    fn test_dequeue_on_empty_returns_none() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();

        assert_eq!(queue.dequeue(&mut generator), None);
        assert!(queue.is_empty());
        assert_eq!(generator.next_id(), 0);
    }

    #[test]
    fn test_partial_queue_dequeue_grows_back_by_one() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();
        queue.enqueue(&mut generator);
        queue.enqueue(&mut generator);

        // Refill only restores the removed slot.
        assert_eq!(queue.dequeue(&mut generator).unwrap().id, 0);
        assert_eq!(ids(&queue), vec![1, 2]);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut generator = PieceGenerator::new(1);
        let queue = PieceQueue::filled(&mut generator);
        assert_eq!(queue.get(QUEUE_CAPACITY), None);
        assert_eq!(queue.get(4).map(|p| p.id), Some(4));
    }

    #[test]
    fn test_front_mut_follows_wraparound() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::filled(&mut generator);
        // Front now sits at physical slot 3, so ranks 2.. wrap to slot 0.
        for _ in 0..3 {
            queue.dequeue(&mut generator).unwrap();
        }
        assert_eq!(ids(&queue), vec![3, 4, 5, 6, 7]);

        let [a, b, c] = queue.front_mut::<3>().unwrap();
        assert_eq!((a.id, b.id, c.id), (3, 4, 5));
    }

    #[test]
    fn test_front_mut_short_queue() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();
        queue.enqueue(&mut generator);
        queue.enqueue(&mut generator);

        assert!(queue.front_mut::<3>().is_none());
        let [a, b] = queue.front_mut::<2>().unwrap();
        assert_eq!((a.id, b.id), (0, 1));
    }
}
