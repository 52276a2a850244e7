//! Soft glow animation
//!
//! Each LED slowly fades in and out at its own rate and picks a new random
//! color every time it reaches black.

use embassy_time::Instant;

use super::{Animation, Cadence, FrameTimer};
use crate::{
    color::Color,
    math8::{Rng, fade8},
};

const SEED: u64 = 0x536f_6674_476c_6f77;
const MAX_FADE_RATE: u8 = 5;

#[derive(Debug, Clone, Copy, Default)]
struct GlowState {
    color: Color,
    fade: u8,
    fade_rate: u8,
    fading_out: bool,
}

impl GlowState {
    #[allow(clippy::cast_possible_truncation)]
    fn randomize(rng: &mut Rng) -> Self {
        let color = Color::from_packed(rng.next_u32());
        let fade = rng.next_u8();
        // 1..=MAX_FADE_RATE
        let fade_rate = rng.below(usize::from(MAX_FADE_RATE)) as u8 + 1;
        Self {
            color,
            fade,
            fade_rate,
            fading_out: rng.next_bool(),
        }
    }

    fn advance(&mut self) {
        if self.fading_out {
            if self.fade > self.fade_rate {
                self.fade -= self.fade_rate;
            } else {
                self.fade = 0;
                self.fading_out = false;
            }
        } else if self.fade < u8::MAX - self.fade_rate {
            self.fade += self.fade_rate;
        } else {
            self.fade = u8::MAX;
            self.fading_out = true;
        }
    }
}

#[derive(Debug, Clone)]
pub struct SoftGlowAnimation<const N: usize> {
    timer: FrameTimer,
    rng: Rng,
    leds: [GlowState; N],
}

impl<const N: usize> SoftGlowAnimation<N> {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            timer: FrameTimer::new(cadence),
            rng: Rng::new(SEED),
            leds: [GlowState::default(); N],
        }
    }

    pub const fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

impl<const N: usize> Animation for SoftGlowAnimation<N> {
    fn initialize(&mut self, now: Instant) {
        self.rng = Rng::new(SEED ^ now.as_ticks());
        for led in &mut self.leds {
            *led = GlowState::randomize(&mut self.rng);
        }
        self.timer.arm(now);
    }

    fn process(&mut self, now: Instant, frame: &mut [Color]) -> bool {
        if !self.timer.poll(now) {
            return false;
        }

        // Pixels without glow state stay dark
        frame.fill(Color::BLACK);

        for (pixel, led) in frame.iter_mut().zip(self.leds.iter_mut()) {
            if led.fade == 0 {
                led.color = Color::from_packed(self.rng.next_u32());
            }

            let fade = led.fade;
            *pixel = led.color.map_channels(|channel| fade8(channel, fade));
            led.advance();
        }
        true
    }

    fn stop(&mut self) {
        self.timer.disarm();
    }
}
