//! Playback scheduling.
//!
//! Turns a snapshot of the sequence into a list of timed cues. Offsets are
//! relative to the moment playback starts, so the same schedule can be fed
//! to a hardware timer, an async executor or a virtual clock in tests.
//!
//! For a sequence `[a, b, c]` the cues are:
//!
//! ```text
//!    0ms  Show(a)
//!  600ms  Hide
//! 1600ms  Show(b)
//! 2200ms  Hide
//! 3200ms  Show(c)
//! 4200ms  Hide
//! 4200ms  TurnEnabled
//! ```

use crate::time::TimeDuration;
use crate::types::{Generation, Signal};
use core::marker::PhantomData;
use heapless::Vec;

/// How long a signal stays visible before the background is restored.
pub const SHOW_HOLD_MS: u64 = 600;

/// Pause after a signal is hidden, and the hold time of the final signal.
pub const SIGNAL_GAP_MS: u64 = 1000;

/// Distance between two consecutive `Show` cues.
pub const STEP_PERIOD_MS: u64 = SHOW_HOLD_MS + SIGNAL_GAP_MS;

/// A single playback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Display the signal's color and play its sound.
    Show(Signal),
    /// Restore the background.
    Hide,
    /// Playback is over, the player may start selecting.
    TurnEnabled,
}

/// A cue with its offset from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCue<D: TimeDuration> {
    /// Time since playback started.
    pub offset: D,
    /// Schedule this cue belongs to.
    pub generation: Generation,
    pub cue: Cue,
}

/// Timed cues replaying a whole sequence.
///
/// Yields `2 * len + 1` cues in offset order for a non-empty sequence and
/// nothing for an empty one. Cues sharing an offset (the final `Hide` and
/// `TurnEnabled`) are yielded in that order.
///
/// # Type Parameters
/// * `D` - The duration type used for offsets
/// * `N` - Maximum number of signals in the snapshot
#[derive(Debug, Clone)]
pub struct PlaybackSchedule<D: TimeDuration, const N: usize> {
    signals: Vec<Signal, N>,
    generation: Generation,
    position: usize,
    _duration: PhantomData<D>,
}

impl<D: TimeDuration, const N: usize> PlaybackSchedule<D, N> {
    pub(crate) fn new(signals: Vec<Signal, N>, generation: Generation) -> Self {
        Self {
            signals,
            generation,
            position: 0,
            _duration: PhantomData,
        }
    }

    /// Generation stamped on every cue of this schedule.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The sequence snapshot being replayed.
    #[inline]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Total number of cues, including ones already consumed.
    pub fn cue_count(&self) -> usize {
        match self.signals.len() {
            0 => 0,
            n => 2 * n + 1,
        }
    }

    /// Returns true once every cue has been yielded.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.position >= self.cue_count()
    }

    /// Offset of the final `TurnEnabled` cue.
    pub fn total_duration(&self) -> D {
        match self.signals.len() {
            0 => D::ZERO,
            n => D::from_millis((n as u64 - 1) * STEP_PERIOD_MS + SIGNAL_GAP_MS),
        }
    }

    /// Computes the cue at `index` without consuming anything.
    pub fn cue_at(&self, index: usize) -> Option<ScheduledCue<D>> {
        let count = self.signals.len();
        if count == 0 || index >= self.cue_count() {
            return None;
        }

        // Every signal but the last contributes a Show/Hide pair.
        let paired = 2 * (count - 1);
        let (offset_ms, cue) = if index < paired {
            let step = index / 2;
            let start = step as u64 * STEP_PERIOD_MS;
            if index % 2 == 0 {
                (start, Cue::Show(self.signals[step]))
            } else {
                (start + SHOW_HOLD_MS, Cue::Hide)
            }
        } else {
            let start = (count as u64 - 1) * STEP_PERIOD_MS;
            match index - paired {
                0 => (start, Cue::Show(self.signals[count - 1])),
                1 => (start + SIGNAL_GAP_MS, Cue::Hide),
                _ => (start + SIGNAL_GAP_MS, Cue::TurnEnabled),
            }
        };

        Some(ScheduledCue {
            offset: D::from_millis(offset_ms),
            generation: self.generation,
            cue,
        })
    }

    /// Returns the next cue without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<ScheduledCue<D>> {
        self.cue_at(self.position)
    }
}

impl<D: TimeDuration, const N: usize> Iterator for PlaybackSchedule<D, N> {
    type Item = ScheduledCue<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let cue = self.cue_at(self.position)?;
        self.position += 1;
        Some(cue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cue_count().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<D: TimeDuration, const N: usize> ExactSizeIterator for PlaybackSchedule<D, N> {}

impl<D: TimeDuration, const N: usize> core::iter::FusedIterator for PlaybackSchedule<D, N> {}
