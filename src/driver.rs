//! Clock-driven round driver.
//!
//! Provides [`RoundDriver`], which owns a [`RoundController`] and plays its
//! schedules against a [`TimeSource`]. Call [`service`](RoundDriver::service)
//! whenever the returned delay expires or input arrives; the driver fires
//! every cue that has come due and reports how long to sleep.

use crate::command::GameAction;
use crate::controller::{GameShell, RoundController};
use crate::schedule::PlaybackSchedule;
use crate::source::SignalSource;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::RoundState;

/// Timing information returned by service operations.
///
/// Indicates when the driver needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Playback in progress. Service again after the specified delay.
    Delay(D),

    /// Playback finished and the player's turn is open. No servicing is
    /// needed until the next input.
    AwaitingInput,

    /// No game has been started.
    Idle,
}

/// Plays a round controller's schedules against a clock.
///
/// Only the most recent schedule is kept. Starting a new schedule drops the
/// previous one, so its remaining cues never fire.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Presentation shell
/// * `R` - Random signal source
/// * `T` - Time source implementation type
/// * `N` - Maximum sequence length
pub struct RoundDriver<'t, I, S, R, T, const N: usize>
where
    I: TimeInstant,
    S: GameShell,
    R: SignalSource,
    T: TimeSource<I>,
{
    controller: RoundController<I::Duration, S, R, N>,
    time_source: &'t T,
    playback: Option<PlaybackSchedule<I::Duration, N>>,
    playback_start: Option<I>,
}

impl<'t, I, S, R, T, const N: usize> RoundDriver<'t, I, S, R, T, N>
where
    I: TimeInstant,
    S: GameShell,
    R: SignalSource,
    T: TimeSource<I>,
{
    /// Creates an idle driver.
    pub fn new(shell: S, source: R, time_source: &'t T) -> Self {
        Self::from_controller(RoundController::new(shell, source), time_source)
    }

    /// Wraps an existing controller.
    pub fn from_controller(
        controller: RoundController<I::Duration, S, R, N>,
        time_source: &'t T,
    ) -> Self {
        Self {
            controller,
            time_source,
            playback: None,
            playback_start: None,
        }
    }

    /// Dispatches an action to [`start`](Self::start) or
    /// [`player_select`](Self::player_select).
    pub fn handle_action(&mut self, action: GameAction) -> ServiceTiming<I::Duration> {
        match action {
            GameAction::Start => self.start(),
            GameAction::Select(id) => self.player_select(id),
        }
    }

    /// Starts a new game and fires the first cue.
    pub fn start(&mut self) -> ServiceTiming<I::Duration> {
        let schedule = self.controller.start();
        self.arm(schedule);
        self.service()
    }

    /// Forwards a selection to the controller, arming the next playback if
    /// the selection ended a round or the game.
    pub fn player_select(&mut self, id: u8) -> ServiceTiming<I::Duration> {
        if let Some(schedule) = self.controller.player_select(id).into_schedule() {
            self.arm(schedule);
        }
        self.service()
    }

    /// Fires every cue that has come due.
    ///
    /// # Returns
    /// - `ServiceTiming::Delay(duration)` - Service again after this delay
    /// - `ServiceTiming::AwaitingInput` - The player's turn is open, wait for input
    /// - `ServiceTiming::Idle` - No game started
    pub fn service(&mut self) -> ServiceTiming<I::Duration> {
        self.rearm_if_outdated();

        if let (Some(schedule), Some(start)) = (self.playback.as_mut(), self.playback_start) {
            let elapsed = self.time_source.now().duration_since(start);

            while let Some(cue) = schedule.peek() {
                if cue.offset.as_millis() > elapsed.as_millis() {
                    return ServiceTiming::Delay(cue.offset.saturating_sub(elapsed));
                }
                schedule.next();
                self.controller.fire(cue);
            }

            self.playback = None;
            self.playback_start = None;
        }

        match self.controller.state() {
            RoundState::Idle => ServiceTiming::Idle,
            RoundState::AwaitingInput => ServiceTiming::AwaitingInput,
            // The turn is not open yet, so never report AwaitingInput here.
            RoundState::Playing | RoundState::GameOver => ServiceTiming::Delay(I::Duration::ZERO),
        }
    }

    fn arm(&mut self, schedule: PlaybackSchedule<I::Duration, N>) {
        self.playback = Some(schedule);
        self.playback_start = Some(self.time_source.now());
    }

    /// Picks up a playback the controller started without going through the
    /// driver, e.g. via [`controller_mut`](Self::controller_mut).
    fn rearm_if_outdated(&mut self) {
        let armed = self.playback.as_ref().map(|schedule| schedule.generation());
        if armed == Some(self.controller.generation()) {
            return;
        }
        if let Some(schedule) = self.controller.current_schedule() {
            debug!(
                "arming playback for generation {}",
                self.controller.generation()
            );
            self.arm(schedule);
        } else if armed.is_some() {
            self.playback = None;
            self.playback_start = None;
        }
    }

    /// Returns true while a schedule still has cues to fire.
    pub fn is_playing_back(&self) -> bool {
        self.playback.is_some()
    }

    /// Time elapsed since the current playback started, if any.
    pub fn playback_elapsed(&self) -> Option<I::Duration> {
        self.playback_start
            .map(|start| self.time_source.now().duration_since(start))
    }

    pub fn state(&self) -> RoundState {
        self.controller.state()
    }

    pub fn score(&self) -> u32 {
        self.controller.score()
    }

    pub fn controller(&self) -> &RoundController<I::Duration, S, R, N> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RoundController<I::Duration, S, R, N> {
        &mut self.controller
    }

    /// Consumes the driver, returning the controller.
    pub fn into_controller(self) -> RoundController<I::Duration, S, R, N> {
        self.controller
    }
}
