//! Command-based control for round drivers.

/// Player and menu input, e.g. sent over a channel from a button task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameAction {
    /// Start (or restart) a game.
    Start,
    /// Button with this signal id was pressed.
    Select(u8),
}
