//! Idle animation
//!
//! A single dim dot walks along the strip, changing color on every step.

use embassy_time::Instant;

use super::{Animation, Cadence, FrameTimer};
use crate::color::{Color, clear};

/// Colors of the walking dot, in order
pub(super) const DIM_COLORS: [Color; 3] = [
    Color::new(0, 0, 0x11),
    Color::new(0x11, 0, 0),
    Color::new(0, 0x0A, 0),
];

#[derive(Debug, Clone)]
pub struct IdleAnimation {
    timer: FrameTimer,
    position: usize,
    color_index: usize,
}

impl IdleAnimation {
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            timer: FrameTimer::new(cadence),
            position: 0,
            color_index: 0,
        }
    }

    pub const fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

impl Animation for IdleAnimation {
    fn initialize(&mut self, now: Instant) {
        self.position = 0;
        self.color_index = 0;
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

        let position = self.position % frame.len();
        frame[position] = DIM_COLORS[self.color_index];

        self.color_index = (self.color_index + 1) % DIM_COLORS.len();
        self.position = (position + 1) % frame.len();
        true
    }

    fn stop(&mut self) {
        self.timer.disarm();
    }
}
