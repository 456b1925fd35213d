//! The signal sequence the player has to reproduce.
//!
//! Provides [`SignalSequence`], a fixed-capacity buffer that only grows at the
//! tail and is reseeded with a single signal on every new game.

use crate::schedule::PlaybackSchedule;
use crate::time::TimeDuration;
use crate::types::{Generation, SequenceError, Signal};
use heapless::Vec;

/// The pattern the player has to reproduce.
///
/// Append-only between resets: rounds only ever push to the tail, and a new
/// game clears the buffer and reseeds it with a single signal.
///
/// # Type Parameters
/// * `N` - Maximum number of signals this sequence can hold. Must be at least
///   one, checked at compile time:
///
/// ```compile_fail
/// use simon_sequencer::SignalSequence;
///
/// let _ = SignalSequence::<0>::new();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSequence<const N: usize> {
    signals: Vec<Signal, N>,
}

impl<const N: usize> SignalSequence<N> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        const { assert!(N > 0, "sequence capacity must be at least one") };
        Self {
            signals: Vec::new(),
        }
    }

    /// Creates a sequence from existing signals.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` signals were given
    pub fn from_slice(signals: &[Signal]) -> Result<Self, SequenceError> {
        const { assert!(N > 0, "sequence capacity must be at least one") };
        let signals = Vec::from_slice(signals).map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(Self { signals })
    }

    /// Clears the sequence and starts it again with `first`.
    pub fn reseed(&mut self, first: Signal) {
        self.signals.clear();
        // N > 0 and the buffer was just cleared, so the push always fits.
        let _ = self.signals.push(first);
    }

    /// Appends a signal to the tail.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence already holds `N` signals
    pub fn push(&mut self, signal: Signal) -> Result<(), SequenceError> {
        self.signals
            .push(signal)
            .map_err(|_| SequenceError::CapacityExceeded)
    }

    /// Removes every signal.
    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Returns the signal at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Signal> {
        self.signals.get(index).copied()
    }

    /// Returns the most recently appended signal.
    #[inline]
    pub fn last(&self) -> Option<Signal> {
        self.signals.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Returns true when no more signals fit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.signals.is_full()
    }

    /// Maximum number of signals.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn as_slice(&self) -> &[Signal] {
        &self.signals
    }

    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.signals.iter().copied()
    }

    /// Builds the playback schedule for the current contents.
    ///
    /// The schedule owns a snapshot; later pushes do not affect it.
    pub fn schedule<D: TimeDuration>(&self, generation: Generation) -> PlaybackSchedule<D, N> {
        PlaybackSchedule::new(self.signals.clone(), generation)
    }
}

impl<const N: usize> Default for SignalSequence<N> {
    fn default() -> Self {
        Self::new()
    }
}
