//! Fixed parameters of the light
//!
//! Everything here is decided at build time; nothing is changed at runtime
//! or persisted.

use embassy_time::Duration;

use crate::animation::{ANIMATION_COUNT, AnimationId, Cadence};
use crate::filter::BrightnessConfig;

/// Default poll loop period
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(10);

/// Default time a button must stay pressed after its edge
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Configuration for the animator and its poll loop
#[derive(Debug, Clone)]
pub struct Config {
    /// Period of the poll loop tick
    pub poll_period: Duration,
    /// Debounce window of both buttons
    pub debounce: Duration,
    /// Global brightness default, step and bounds
    pub brightness: BrightnessConfig,
    /// Animation active after startup
    pub initial: AnimationId,
    /// Cadence per animation slot; `None` leaves the slot empty
    pub animations: [Option<Cadence>; ANIMATION_COUNT],
}

impl Config {
    pub const DEFAULT: Self = Self {
        poll_period: DEFAULT_POLL_PERIOD,
        debounce: DEFAULT_DEBOUNCE,
        brightness: BrightnessConfig::DEFAULT,
        initial: AnimationId::Idle,
        animations: [
            Some(AnimationId::Idle.default_cadence()),
            Some(AnimationId::ColorSweep.default_cadence()),
            Some(AnimationId::Twinkle.default_cadence()),
            Some(AnimationId::SoftGlow.default_cadence()),
        ],
    };

    #[must_use]
    pub const fn with_poll_period(mut self, period: Duration) -> Self {
        self.poll_period = period;
        self
    }

    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: BrightnessConfig) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_initial(mut self, initial: AnimationId) -> Self {
        self.initial = initial;
        self
    }

    /// Enable an animation with the given cadence
    #[must_use]
    pub const fn with_cadence(mut self, id: AnimationId, cadence: Cadence) -> Self {
        self.animations[id.index()] = Some(cadence);
        self
    }

    /// Leave an animation's slot empty
    #[must_use]
    pub const fn without(mut self, id: AnimationId) -> Self {
        self.animations[id.index()] = None;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
