//! Global brightness
//!
//! Animations render at full intensity. Brightness is applied afterwards, once
//! per produced frame, so the animation code never has to know about it.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{color::Color, math8::percent8};

/// Brightness level as a whole percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    pub const FULL: Self = Self(100);

    /// Create a brightness level, clamping to 100 %
    pub const fn from_percent(percent: u8) -> Self {
        if percent > 100 { Self(100) } else { Self(percent) }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Scale one 8-bit channel, truncating
    pub const fn scale(self, channel: u8) -> u8 {
        percent8(channel, self.0)
    }
}

/// Configuration for the brightness button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessConfig {
    /// Level used at startup
    pub default: Brightness,
    /// Increment applied by each press, in percent
    pub step: u8,
    /// Level the step wraps to; a visible floor, never off
    pub min: Brightness,
    /// Reaching or passing this level wraps to `min`
    pub max: Brightness,
}

impl BrightnessConfig {
    pub const DEFAULT: Self = Self {
        default: Brightness(20),
        step: 10,
        min: Brightness(10),
        max: Brightness(100),
    };
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Brightness state and scaling
#[derive(Debug, Clone)]
pub struct BrightnessFilter {
    config: BrightnessConfig,
    current: Brightness,
}

impl BrightnessFilter {
    pub const fn new(config: BrightnessConfig) -> Self {
        Self {
            current: config.default,
            config,
        }
    }

    pub const fn current(&self) -> Brightness {
        self.current
    }

    /// Advance by one step, wrapping to the minimum once the maximum is reached
    pub fn step(&mut self) -> Brightness {
        let next = self.current.percent().saturating_add(self.config.step);
        self.current = if next >= self.config.max.percent() {
            self.config.min
        } else {
            Brightness::from_percent(next)
        };
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessFilter.step] brightness is now {}%", self.current.percent());
        self.current
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Color]) {
        let current = self.current;

        if current == Brightness::FULL {
            return;
        }

        if current.percent() == 0 {
            frame.fill(Color::BLACK);
            return;
        }

        for pixel in frame.iter_mut() {
            *pixel = pixel.map_channels(|channel| current.scale(channel));
        }
    }
}
