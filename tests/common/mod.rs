//! Shared test infrastructure for simon-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use simon_sequencer::{GameShell, Signal, SignalSource, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Shell
// ============================================================================

/// Everything a shell can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Show(Signal),
    Hide,
    TurnEnabled,
    Score(u32),
    GameOver,
    Started,
    Echo(Signal),
    Mastered(u32),
}

/// Shell that records every call in order
pub struct RecordingShell {
    events: Vec<ShellEvent>,
    last_color: Option<Srgb>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            last_color: None,
        }
    }

    pub fn events(&self) -> &[ShellEvent] {
        &self.events
    }

    pub fn last_color(&self) -> Option<Srgb> {
        self.last_color
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, event: ShellEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl GameShell for RecordingShell {
    fn show(&mut self, signal: Signal, color: Srgb) {
        self.last_color = Some(color);
        self.events.push(ShellEvent::Show(signal));
    }

    fn hide(&mut self) {
        self.events.push(ShellEvent::Hide);
    }

    fn turn_enabled(&mut self) {
        self.events.push(ShellEvent::TurnEnabled);
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(ShellEvent::Score(score));
    }

    fn game_over(&mut self) {
        self.events.push(ShellEvent::GameOver);
    }

    fn game_started(&mut self) {
        self.events.push(ShellEvent::Started);
    }

    fn player_echo(&mut self, signal: Signal, _color: Srgb) {
        self.events.push(ShellEvent::Echo(signal));
    }

    fn sequence_mastered(&mut self, score: u32) {
        self.events.push(ShellEvent::Mastered(score));
    }
}

// ============================================================================
// Scripted Signal Source
// ============================================================================

/// Draws signals from a fixed script, cycling when exhausted
pub struct ScriptedSource {
    script: Vec<Signal>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: &[Signal]) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: script.to_vec(),
            position: 0,
        }
    }

    /// Number of signals drawn so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl SignalSource for ScriptedSource {
    fn next_signal(&mut self) -> Signal {
        let signal = self.script[self.position % self.script.len()];
        self.position += 1;
        signal
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
