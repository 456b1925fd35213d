//! Random signal draws.

use crate::types::Signal;

/// Trait for abstracting where new signals come from.
///
/// Implementations must draw uniformly over [`Signal::ALL`] with
/// replacement: the same signal may come up several times in a row.
pub trait SignalSource {
    /// Draws the next signal.
    fn next_signal(&mut self) -> Signal;
}

impl SignalSource for fastrand::Rng {
    #[inline]
    fn next_signal(&mut self) -> Signal {
        Signal::ALL[self.usize(..Signal::COUNT)]
    }
}

impl<S: SignalSource + ?Sized> SignalSource for &mut S {
    #[inline]
    fn next_signal(&mut self) -> Signal {
        (**self).next_signal()
    }
}

/// Creates a generator seeded from the operating system.
#[cfg(feature = "std")]
pub fn entropy_source() -> fastrand::Rng {
    fastrand::Rng::new()
}
