//! Countdown timer for a drill session.
//!
//! The clock does not read time on its own. The host calls [`SessionClock::tick`]
//! once per second; each call is one atomic step of the countdown.

use crate::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    Idle,
    Running,
    Paused,
    /// Halted before reaching zero; expiry will never fire.
    Stopped,
    Expired,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The clock was not running.
    Ignored,
    /// One second elapsed, this many remain.
    Counted(u32),
    /// This tick took the clock from 1 to 0.
    Expired,
}

type ExpireCallback = Box<dyn FnOnce() + Send>;

pub struct SessionClock {
    state: ClockState,
    total_seconds: u32,
    remaining_seconds: u32,
    on_expire: Option<ExpireCallback>,
}

impl std::fmt::Debug for SessionClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClock")
            .field("state", &self.state)
            .field("total_seconds", &self.total_seconds)
            .field("remaining_seconds", &self.remaining_seconds)
            .field("on_expire", &self.on_expire.is_some())
            .finish()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            state: ClockState::Idle,
            total_seconds: 0,
            remaining_seconds: 0,
            on_expire: None,
        }
    }

    /// Start counting down from `total_seconds`. Only valid from Idle.
    pub fn start(&mut self, total_seconds: u32) -> Result<()> {
        if self.state != ClockState::Idle {
            return Err(DrillError::ClockAlreadyStarted);
        }
        if total_seconds == 0 {
            return Err(DrillError::InvalidClockDuration { seconds: 0 });
        }
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
        self.state = ClockState::Running;
        debug!(total_seconds, "clock started");
        Ok(())
    }

    /// Returns true if the clock was running.
    pub fn pause(&mut self) -> bool {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
            true
        } else {
            false
        }
    }

    /// Returns true if the clock was paused.
    pub fn resume(&mut self) -> bool {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
            true
        } else {
            false
        }
    }

    /// Halt the countdown and drop the expiry callback.
    /// No effect once stopped or expired.
    pub fn stop(&mut self) {
        match self.state {
            ClockState::Stopped | ClockState::Expired => {}
            _ => {
                self.state = ClockState::Stopped;
                self.on_expire = None;
                debug!(remaining = self.remaining_seconds, "clock stopped");
            }
        }
    }

    /// Register the callback run when the countdown reaches zero.
    /// Replaces any earlier registration; runs at most once.
    pub fn on_expire<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_expire = Some(Box::new(callback));
    }

    /// Advance one second.
    pub fn tick(&mut self) -> Tick {
        if self.state != ClockState::Running {
            return Tick::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return Tick::Counted(self.remaining_seconds);
        }

        self.state = ClockState::Expired;
        debug!(total_seconds = self.total_seconds, "clock expired");
        if let Some(callback) = self.on_expire.take() {
            callback();
        }
        Tick::Expired
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_expired(&self) -> bool {
        self.state == ClockState::Expired
    }
}
