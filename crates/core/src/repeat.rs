//! Auto-repeat timing for held directions.
//!
//! The first tick a direction is held fires immediately. Further moves wait
//! for the initial delay to pass, then fire once per repeat interval. Time
//! past the delay carries into the interval accumulator, so a 200ms delay with
//! a 100ms interval fires at 0, 300, 400, 500ms...
//!
//! Releasing the direction resets every timer.

use crate::config::RepeatTiming;

/// What a repeater decided for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatFire {
    /// Nothing to do this tick
    Idle,
    /// First tick of a new hold
    Pressed,
    /// Auto-repeat after the initial delay
    Repeated,
}

impl RepeatFire {
    pub fn fired(self) -> bool {
        !matches!(self, RepeatFire::Idle)
    }
}

/// Delay/interval state machine for one held input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRepeat {
    timing: RepeatTiming,
    held: bool,
    delay_timer_ms: u32,
    repeat_accumulator_ms: u32,
}

impl AutoRepeat {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            held: false,
            delay_timer_ms: 0,
            repeat_accumulator_ms: 0,
        }
    }

    /// Advance by one tick with the input's held state
    pub fn update(&mut self, held: bool, elapsed_ms: u32) -> RepeatFire {
        if !held {
            self.release();
            return RepeatFire::Idle;
        }

        if !self.held {
            self.held = true;
            self.delay_timer_ms = 0;
            self.repeat_accumulator_ms = 0;
            return RepeatFire::Pressed;
        }

        let delay = self.timing.delay_ms;
        let prev_delay = self.delay_timer_ms;
        self.delay_timer_ms = self.delay_timer_ms.saturating_add(elapsed_ms);
        if self.delay_timer_ms < delay {
            return RepeatFire::Idle;
        }

        let excess = if prev_delay < delay {
            self.delay_timer_ms - delay
        } else {
            elapsed_ms
        };
        self.repeat_accumulator_ms = self.repeat_accumulator_ms.saturating_add(excess);

        // At most one move per tick; leftover time stays in the accumulator.
        if self.repeat_accumulator_ms >= self.timing.interval_ms {
            self.repeat_accumulator_ms -= self.timing.interval_ms;
            RepeatFire::Repeated
        } else {
            RepeatFire::Idle
        }
    }

    /// Forget the current hold
    pub fn release(&mut self) {
        self.held = false;
        self.delay_timer_ms = 0;
        self.repeat_accumulator_ms = 0;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// True once the initial delay has elapsed for the current hold
    pub fn repeat_started(&self) -> bool {
        self.held && self.delay_timer_ms >= self.timing.delay_ms
    }
}
