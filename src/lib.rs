#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Signal`**: One of the four colored signals (`Red`, `Green`, `Blue`, `Yellow`, ids 1-4)
//! - **`SignalSequence`**: The pattern to reproduce, growing by one signal per round
//! - **`RoundController`**: The round state machine: sequence, cursor, score and generation
//! - **`GameShell`**: Trait to implement for your display, sound and score output
//! - **`SignalSource`**: Trait for uniform random signal draws (implemented for `fastrand::Rng`)
//! - **`PlaybackSchedule`**: Timed `Show` / `Hide` / `TurnEnabled` cues replaying the whole sequence
//! - **`RoundDriver`**: Plays schedules against a `TimeSource` and reports when to service next
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`GameAction`**: Commands that can be sent to a driver
//!
//! Every schedule is stamped with a `Generation`. Cues from an older generation
//! are discarded by the controller, so timers armed for an abandoned playback
//! can be left to expire harmlessly.

// Must come first so the logging macros are visible to the modules below.
mod fmt;

pub mod colors;
pub mod command;
pub mod controller;
pub mod driver;
pub mod schedule;
pub mod sequence;
pub mod source;
pub mod time;
pub mod types;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use command::GameAction;
pub use controller::{CueOutcome, GameShell, RoundController, SelectOutcome};
pub use driver::{RoundDriver, ServiceTiming};
pub use schedule::{Cue, PlaybackSchedule, ScheduledCue, SHOW_HOLD_MS, SIGNAL_GAP_MS, STEP_PERIOD_MS};
pub use sequence::SignalSequence;
pub use source::SignalSource;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Generation, RoundState, SequenceError, Signal, SignalError};

#[cfg(feature = "std")]
pub use source::entropy_source;
#[cfg(feature = "std")]
pub use time::StdTimeSource;

/// Default maximum sequence length.
pub const DEFAULT_CAPACITY: usize = 64;

/// Round controller with the default capacity.
pub type SimonController<D, S, R> = RoundController<D, S, R, DEFAULT_CAPACITY>;

/// Round driver with the default capacity.
pub type SimonDriver<'t, I, S, R, T> = RoundDriver<'t, I, S, R, T, DEFAULT_CAPACITY>;
