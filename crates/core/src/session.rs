//! Session - the queue, the reserve and the generator that feeds them.
//!
//! A session maps each menu option onto one atomic operation. Successful
//! commands return an [`Outcome`] describing what happened, rejected ones a
//! [`CoreError`]. Either way the session stays playable.

use tracing::{debug, instrument};

use crate::error::CoreError;
use crate::exchange::{swap_front, swap_triple};
use crate::queue::PieceQueue;
use crate::rng::{PieceGenerator, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::stack::ReserveStack;
use crate::types::{MenuOption, Piece, Variant};

/// Result of a successfully applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The front piece was played.
    Played(Piece),
    /// The front piece moved to the reserve.
    Reserved(Piece),
    /// The top reserved piece was played.
    UsedReserve(Piece),
    SwappedFront,
    SwappedTriple,
    /// The player asked to end the session.
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    generator: PieceGenerator,
    queue: PieceQueue,
    stack: ReserveStack,
    variant: Variant,
    /// Mutating commands applied so far.
    turn: u32,
}

impl Session {
    /// Start a session with a deterministic seed.
    pub fn new(seed: u32, variant: Variant) -> Self {
        Self::with_generator(PieceGenerator::new(seed), variant)
    }

    /// Start a session seeded from the wall clock.
    pub fn from_time(variant: Variant) -> Self {
        Self::with_generator(PieceGenerator::with_rng(SimpleRng::from_time()), variant)
    }

    pub fn with_generator(mut generator: PieceGenerator, variant: Variant) -> Self {
        let queue = PieceQueue::filled(&mut generator);
        debug!(seed = generator.seed(), variant = variant.as_str(), "session started");
        Self {
            generator,
            queue,
            stack: ReserveStack::new(),
            variant,
            turn: 0,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Apply one menu command.
    #[instrument(level = "debug", skip(self), fields(turn = self.turn))]
    pub fn apply(&mut self, option: MenuOption) -> Result<Outcome, CoreError> {
        if !self.variant.allows(option) {
            debug!("rejected: not offered by variant");
            return Err(CoreError::Unavailable(option));
        }

        let outcome = match option {
            MenuOption::Quit => return Ok(Outcome::Quit),
            MenuOption::Play => Outcome::Played(self.play()?),
            MenuOption::Reserve => Outcome::Reserved(self.reserve()?),
            MenuOption::UseReserve => Outcome::UsedReserve(self.use_reserve()?),
            MenuOption::SwapFront => {
                swap_front(&mut self.queue, &mut self.stack)?;
                Outcome::SwappedFront
            }
            MenuOption::SwapTriple => {
                swap_triple(&mut self.queue, &mut self.stack)?;
                Outcome::SwappedTriple
            }
        };

        self.turn += 1;
        debug!(?outcome, "applied");
        Ok(outcome)
    }

    /// Play the front piece; the queue refills behind it.
    pub fn play(&mut self) -> Result<Piece, CoreError> {
        self.queue
            .dequeue(&mut self.generator)
            .ok_or(CoreError::OperandEmpty)
    }

    /// Move the front piece to the reserve.
    ///
    /// The reserve is checked before the queue is touched so that a full
    /// reserve does not swallow the front piece.
    pub fn reserve(&mut self) -> Result<Piece, CoreError> {
        if self.stack.is_full() {
            return Err(CoreError::CapacityExceeded);
        }
        let piece = self.play()?;
        self.stack.push(piece)?;
        Ok(piece)
    }

    /// Play the top reserved piece.
    pub fn use_reserve(&mut self) -> Result<Piece, CoreError> {
        if self.stack.is_empty() {
            return Err(CoreError::ReserveEmpty);
        }
        self.stack.pop().ok_or(CoreError::ReserveEmpty)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
