//! Elapsed play time shown in the controls frame.
use std::fmt;

/// Whole seconds since the current game started.
///
/// The frontend calls [`GameClock::tick`] once per second; a stopped clock
/// ignores ticks until [`GameClock::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    elapsed: u64,
    stopped: bool,
}

impl GameClock {
    pub const fn new() -> Self {
        Self {
            elapsed: 0,
            stopped: false,
        }
    }

    /// Advances by one second. Returns `true` when the display changed.
    pub fn tick(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        true
    }

    /// Back to zero and running again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// `"{minutes}m {seconds}s"`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s", self.elapsed / 60, self.elapsed % 60)
    }
}
