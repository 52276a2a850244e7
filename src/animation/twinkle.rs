//! Twinkle animation
//!
//! Every frame lights a handful of random LEDs in random palette colors on a
//! dark strip.

use embassy_time::Instant;

use super::{Animation, Cadence, FrameTimer};
use crate::{
    color::{Color, PALETTE, clear},
    math8::Rng,
};

/// LEDs lit per frame; collisions may light fewer
const SPARKLES_PER_FRAME: usize = 10;
const SEED: u64 = 0x7457_696e_6b6c_6521;

#[derive(Debug, Clone)]
pub struct TwinkleAnimation {
    timer: FrameTimer,
    rng: Rng,
}

impl TwinkleAnimation {
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            timer: FrameTimer::new(cadence),
            rng: Rng::new(SEED),
        }
    }

    pub const fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

impl Animation for TwinkleAnimation {
    fn initialize(&mut self, now: Instant) {
        self.rng = Rng::new(SEED ^ now.as_ticks());
        self.timer.arm(now);
    }

    fn process(&mut self, now: Instant, frame: &mut [Color]) -> bool {
        if !self.timer.poll(now) {
            return false;
        }

        clear(frame);
        if frame.is_empty() {
            return true;
        }

        for _ in 0..SPARKLES_PER_FRAME {
            let led = self.rng.below(frame.len());
            frame[led] = PALETTE[self.rng.below(PALETTE.len())];
        }
        true
    }

    fn stop(&mut self) {
        self.timer.disarm();
    }
}
