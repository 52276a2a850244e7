//! Color sweep animation
//!
//! Fills the whole strip with one dim color at a time and steps through
//! blue, red and green.

use embassy_time::Instant;

use super::{Animation, Cadence, FrameTimer, idle::DIM_COLORS};
use crate::color::Color;

#[derive(Debug, Clone)]
pub struct ColorSweepAnimation {
    timer: FrameTimer,
    color_index: usize,
}

impl ColorSweepAnimation {
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            timer: FrameTimer::new(cadence),
            color_index: 0,
        }
    }

    pub const fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

impl Animation for ColorSweepAnimation {
    fn initialize(&mut self, now: Instant) {
        self.color_index = 0;
        self.timer.arm(now);
    }

    fn process(&mut self, now: Instant, frame: &mut [Color]) -> bool {
        if !self.timer.poll(now) {
            return false;
        }

        frame.fill(DIM_COLORS[self.color_index]);
        self.color_index = (self.color_index + 1) % DIM_COLORS.len();
        true
    }

    fn stop(&mut self) {
        self.timer.disarm();
    }
}
