//! Core game types: the signal alphabet, round state and generation tokens.

use crate::colors;
use palette::Srgb;

/// One element of the fixed four-signal alphabet.
///
/// Discriminants are the identifiers the presentation shell uses for its
/// buttons (`1..=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Signal {
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
}

impl Signal {
    /// Number of signals in the alphabet.
    pub const COUNT: usize = 4;

    /// All signals in identifier order.
    pub const ALL: [Signal; Signal::COUNT] =
        [Signal::Red, Signal::Green, Signal::Blue, Signal::Yellow];

    /// Returns the shell-facing identifier (`1..=4`).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a signal by identifier. Returns `None` outside `1..=4`.
    pub const fn from_id(id: u8) -> Option<Signal> {
        match id {
            1 => Some(Signal::Red),
            2 => Some(Signal::Green),
            3 => Some(Signal::Blue),
            4 => Some(Signal::Yellow),
            _ => None,
        }
    }

    /// Hue in degrees used to derive the color hint.
    pub const fn hue_degrees(self) -> f32 {
        match self {
            Signal::Red => 0.0,
            Signal::Green => 120.0,
            Signal::Blue => 240.0,
            Signal::Yellow => 60.0,
        }
    }

    /// Color hint the shell should paint while this signal is shown.
    #[inline]
    pub fn color(self) -> Srgb {
        colors::hue(self.hue_degrees())
    }
}

impl TryFrom<u8> for Signal {
    type Error = SignalError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Signal::from_id(id).ok_or(SignalError::UnknownSignal(id))
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.id()
    }
}

/// Phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundState {
    /// No game started yet.
    Idle,
    /// The sequence is being played back. Player input is ignored.
    Playing,
    /// Playback finished, the player reproduces the sequence.
    AwaitingInput,
    /// The player made a mistake. Only held while the restart is emitted.
    GameOver,
}

/// Tag identifying one playback schedule.
///
/// Every new schedule gets the next generation. Cues carrying an older
/// generation are stale and must not touch the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Generation(pub u32);

impl Generation {
    /// Returns the generation following this one (wrapping).
    #[inline]
    pub const fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// Signal lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalError {
    /// Identifier outside the alphabet.
    UnknownSignal(u8),
}

impl core::fmt::Display for SignalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignalError::UnknownSignal(id) => {
                write!(f, "unknown signal id {} (expected 1-{})", id, Signal::COUNT)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignalError {}

/// Sequence buffer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
