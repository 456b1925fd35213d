//! Round state machine.
//!
//! Provides [`RoundController`], which owns the sequence, cursor and score,
//! decides round outcomes and hands out playback schedules. Also defines the
//! [`GameShell`] trait through which every observable effect is emitted.
//!
//! The controller holds no timers. Each schedule it returns is stamped with a
//! fresh [`Generation`]; cues are fed back through [`RoundController::fire`],
//! which drops any cue from an older generation.

use crate::schedule::{Cue, PlaybackSchedule, ScheduledCue};
use crate::sequence::SignalSequence;
use crate::source::SignalSource;
use crate::time::TimeDuration;
use crate::types::{Generation, RoundState, Signal};
use core::marker::PhantomData;
use palette::Srgb;

/// Trait for abstracting the presentation layer.
///
/// Implement this for whatever renders the game: a window, an LED board, a
/// terminal. Calls are made synchronously from inside controller methods
/// and cannot fail.
pub trait GameShell {
    /// Paint the signal's color and play its sound.
    fn show(&mut self, signal: Signal, color: Srgb);

    /// Restore the background.
    fn hide(&mut self);

    /// Playback finished, accept player input.
    fn turn_enabled(&mut self);

    /// The score changed.
    fn score_changed(&mut self, score: u32);

    /// The player selected the wrong signal. A new game follows immediately.
    fn game_over(&mut self);

    /// A new game is starting.
    fn game_started(&mut self) {}

    /// Feedback for a tap accepted during the player's turn.
    fn player_echo(&mut self, _signal: Signal, _color: Srgb) {}

    /// A round was completed with the sequence at capacity. A new game
    /// follows immediately.
    fn sequence_mastered(&mut self, _score: u32) {}
}

/// Result of a player selection.
#[derive(Debug, Clone)]
pub enum SelectOutcome<D: TimeDuration, const N: usize> {
    /// Not the player's turn, or an unknown signal id.
    Ignored,

    /// Correct signal, more to go. `cursor` is the next expected position.
    Matched { cursor: usize },

    /// Whole sequence reproduced, one signal appended. Play this schedule.
    RoundComplete(PlaybackSchedule<D, N>),

    /// Wrong signal. The game was restarted; play this schedule.
    Mismatch(PlaybackSchedule<D, N>),

    /// Round completed at full capacity. The game was restarted; play this
    /// schedule.
    Mastered(PlaybackSchedule<D, N>),
}

impl<D: TimeDuration, const N: usize> SelectOutcome<D, N> {
    /// Returns the schedule to play, if the selection started one.
    pub fn into_schedule(self) -> Option<PlaybackSchedule<D, N>> {
        match self {
            SelectOutcome::RoundComplete(schedule)
            | SelectOutcome::Mismatch(schedule)
            | SelectOutcome::Mastered(schedule) => Some(schedule),
            SelectOutcome::Ignored | SelectOutcome::Matched { .. } => None,
        }
    }
}

/// Result of firing a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CueOutcome {
    /// The cue was emitted to the shell.
    Applied,
    /// The cue belongs to an older schedule and was discarded.
    Stale,
    /// The cue is current but playback is no longer running (e.g. a repeated
    /// `TurnEnabled`). Discarded.
    OutOfPhase,
}

/// Memory game round controller.
///
/// # Type Parameters
/// * `D` - Duration type used for schedule offsets
/// * `S` - Presentation shell
/// * `R` - Random signal source
/// * `N` - Maximum sequence length
pub struct RoundController<D: TimeDuration, S: GameShell, R: SignalSource, const N: usize> {
    shell: S,
    source: R,
    sequence: SignalSequence<N>,
    state: RoundState,
    cursor: usize,
    score: u32,
    generation: Generation,
    _duration: PhantomData<D>,
}

impl<D: TimeDuration, S: GameShell, R: SignalSource, const N: usize> RoundController<D, S, R, N> {
    /// Creates an idle controller. Nothing is emitted until [`start`](Self::start).
    pub fn new(shell: S, source: R) -> Self {
        const { assert!(N > 0, "sequence capacity must be at least one") };
        Self {
            shell,
            source,
            sequence: SignalSequence::new(),
            state: RoundState::Idle,
            cursor: 0,
            score: 0,
            generation: Generation::default(),
            _duration: PhantomData,
        }
    }

    /// Starts a new game. Can be called from any state.
    ///
    /// Any schedule handed out earlier becomes stale.
    pub fn start(&mut self) -> PlaybackSchedule<D, N> {
        self.new_game()
    }

    /// Handles a tap on the button with the given id.
    ///
    /// Unknown ids are ignored, as is any input outside the player's turn.
    pub fn player_select(&mut self, id: u8) -> SelectOutcome<D, N> {
        match Signal::from_id(id) {
            Some(signal) => self.select(signal),
            None => {
                trace!("ignoring unknown signal id {}", id);
                SelectOutcome::Ignored
            }
        }
    }

    /// Checks `signal` against the expected position.
    pub fn select(&mut self, signal: Signal) -> SelectOutcome<D, N> {
        if self.state != RoundState::AwaitingInput {
            trace!("ignoring {} in state {}", signal, self.state);
            return SelectOutcome::Ignored;
        }

        self.shell.player_echo(signal, signal.color());

        let expected = self.sequence.get(self.cursor);
        if expected != Some(signal) {
            debug!("mismatch at {}: expected {}, got {}", self.cursor, expected, signal);
            self.state = RoundState::GameOver;
            self.shell.game_over();
            return SelectOutcome::Mismatch(self.new_game());
        }

        self.cursor += 1;
        if self.cursor < self.sequence.len() {
            return SelectOutcome::Matched {
                cursor: self.cursor,
            };
        }

        let extended =
            !self.sequence.is_full() && self.sequence.push(self.source.next_signal()).is_ok();
        self.set_score(self.score.saturating_add(1));

        if !extended {
            debug!("sequence mastered at length {}", self.sequence.len());
            self.state = RoundState::GameOver;
            self.shell.sequence_mastered(self.score);
            return SelectOutcome::Mastered(self.new_game());
        }

        debug!(
            "round complete, score {}, appended {}",
            self.score,
            self.sequence.last()
        );
        self.state = RoundState::Playing;
        SelectOutcome::RoundComplete(self.begin_playback())
    }

    /// Emits a scheduled cue if it belongs to the current playback.
    pub fn fire(&mut self, cue: ScheduledCue<D>) -> CueOutcome {
        if cue.generation != self.generation {
            trace!(
                "discarding stale cue from generation {} (current {})",
                cue.generation,
                self.generation
            );
            return CueOutcome::Stale;
        }

        if self.state != RoundState::Playing {
            return CueOutcome::OutOfPhase;
        }

        match cue.cue {
            Cue::Show(signal) => self.shell.show(signal, signal.color()),
            Cue::Hide => self.shell.hide(),
            Cue::TurnEnabled => {
                self.cursor = 0;
                self.state = RoundState::AwaitingInput;
                self.shell.turn_enabled();
            }
        }

        CueOutcome::Applied
    }

    fn new_game(&mut self) -> PlaybackSchedule<D, N> {
        let first = self.source.next_signal();
        self.sequence.reseed(first);
        self.state = RoundState::Playing;
        debug!("new game, first signal {}", first);

        self.shell.game_started();
        self.set_score(0);
        self.begin_playback()
    }

    fn begin_playback(&mut self) -> PlaybackSchedule<D, N> {
        self.cursor = 0;
        self.generation = self.generation.next();
        self.sequence.schedule(self.generation)
    }

    fn set_score(&mut self, score: u32) {
        if score != self.score {
            self.score = score;
            self.shell.score_changed(score);
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Completed rounds since the last new game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rebuilds the schedule of the playback in progress.
    ///
    /// Returns `None` outside [`RoundState::Playing`]. The schedule carries the
    /// current generation, so it can replace one that was dropped or never
    /// armed.
    pub fn current_schedule(&self) -> Option<PlaybackSchedule<D, N>> {
        match self.state {
            RoundState::Playing => Some(self.sequence.schedule(self.generation)),
            _ => None,
        }
    }

    /// Position the player has to match next.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Generation of the most recent schedule.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn sequence(&self) -> &SignalSequence<N> {
        &self.sequence
    }

    /// The signal the player has to select next, during their turn.
    pub fn expected_signal(&self) -> Option<Signal> {
        match self.state {
            RoundState::AwaitingInput => self.sequence.get(self.cursor),
            _ => None,
        }
    }

    /// Returns true while the player may select signals.
    pub fn is_player_turn(&self) -> bool {
        self.state == RoundState::AwaitingInput
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    /// Consumes the controller, returning the shell and signal source.
    pub fn into_parts(self) -> (S, R) {
        (self.shell, self.source)
    }
}
