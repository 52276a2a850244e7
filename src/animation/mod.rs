//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait.

mod color_sweep;
mod idle;
mod soft_glow;
mod timer;
mod twinkle;

use embassy_time::{Duration, Instant};

pub use color_sweep::ColorSweepAnimation;
pub use idle::IdleAnimation;
pub use soft_glow::SoftGlowAnimation;
pub use timer::{Cadence, FrameTimer};
pub use twinkle::TwinkleAnimation;

use crate::color::Color;

/// Number of known animation kinds, and so of slots in a [`SlotTable`]
pub const ANIMATION_COUNT: usize = 4;

/// Delay between activation and the first frame of every animation
const START_DELAY: Duration = Duration::from_millis(500);

pub trait Animation {
    /// Reset per-animation state and arm the frame timer
    ///
    /// Calling it again without `stop` in between starts over from the same
    /// state.
    fn initialize(&mut self, now: Instant);

    /// Draw the next frame if it is due
    ///
    /// Returns `true` only when `frame` was written, in which case every
    /// pixel of it has been defined by this call. The previous content of
    /// `frame` belongs to whatever ran before and must not be relied on.
    fn process(&mut self, now: Instant, frame: &mut [Color]) -> bool;

    /// Release what `initialize` set up
    fn stop(&mut self) {}
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot<const N: usize> {
    /// Single dot walking along the strip
    Idle(IdleAnimation),
    /// Whole strip stepping through a few dim colors
    ColorSweep(ColorSweepAnimation),
    /// Random sparkles from the festive palette
    Twinkle(TwinkleAnimation),
    /// Every LED fading in and out on its own
    SoftGlow(SoftGlowAnimation<N>),
}

/// Known animation ids, in cycling order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Idle = 0,
    ColorSweep = 1,
    Twinkle = 2,
    SoftGlow = 3,
}

impl AnimationId {
    /// Every id, indexed by its slot
    pub const ALL: [Self; ANIMATION_COUNT] =
        [Self::Idle, Self::ColorSweep, Self::Twinkle, Self::SoftGlow];

    /// Slot index of this animation
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cadence used unless configured otherwise
    pub const fn default_cadence(self) -> Cadence {
        let interval = match self {
            Self::Idle => Duration::from_millis(100),
            Self::ColorSweep => Duration::from_millis(1000),
            Self::Twinkle => Duration::from_millis(250),
            Self::SoftGlow => Duration::from_millis(25),
        };
        Cadence::new(START_DELAY, interval)
    }

    pub fn to_slot<const N: usize>(self, cadence: Cadence) -> AnimationSlot<N> {
        match self {
            Self::Idle => AnimationSlot::Idle(IdleAnimation::new(cadence)),
            Self::ColorSweep => AnimationSlot::ColorSweep(ColorSweepAnimation::new(cadence)),
            Self::Twinkle => AnimationSlot::Twinkle(TwinkleAnimation::new(cadence)),
            Self::SoftGlow => AnimationSlot::SoftGlow(SoftGlowAnimation::new(cadence)),
        }
    }
}

impl<const N: usize> AnimationSlot<N> {
    pub fn initialize(&mut self, now: Instant) {
        match self {
            Self::Idle(animation) => animation.initialize(now),
            Self::ColorSweep(animation) => animation.initialize(now),
            Self::Twinkle(animation) => animation.initialize(now),
            Self::SoftGlow(animation) => animation.initialize(now),
        }
    }

    /// Draw the next frame of the current animation if it is due
    pub fn process(&mut self, now: Instant, frame: &mut [Color]) -> bool {
        match self {
            Self::Idle(animation) => animation.process(now, frame),
            Self::ColorSweep(animation) => animation.process(now, frame),
            Self::Twinkle(animation) => animation.process(now, frame),
            Self::SoftGlow(animation) => animation.process(now, frame),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Self::Idle(animation) => Animation::stop(animation),
            Self::ColorSweep(animation) => Animation::stop(animation),
            Self::Twinkle(animation) => Animation::stop(animation),
            Self::SoftGlow(animation) => Animation::stop(animation),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Idle(_) => AnimationId::Idle,
            Self::ColorSweep(_) => AnimationId::ColorSweep,
            Self::Twinkle(_) => AnimationId::Twinkle,
            Self::SoftGlow(_) => AnimationId::SoftGlow,
        }
    }

    /// Deadline of the next frame, if the animation is running
    pub fn next_update(&self) -> Option<Instant> {
        match self {
            Self::Idle(animation) => animation.timer().next_update(),
            Self::ColorSweep(animation) => animation.timer().next_update(),
            Self::Twinkle(animation) => animation.timer().next_update(),
            Self::SoftGlow(animation) => animation.timer().next_update(),
        }
    }
}

/// Fixed registry from slot index to an optional animation
///
/// Slot `i` can only ever hold the animation whose id has index `i`.
#[derive(Debug, Clone)]
pub struct SlotTable<const N: usize> {
    slots: [Option<AnimationSlot<N>>; ANIMATION_COUNT],
}

impl<const N: usize> SlotTable<N> {
    /// Table with every slot absent
    pub const fn empty() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }

    /// Table with one instance per enabled animation
    pub fn from_cadences(cadences: &[Option<Cadence>; ANIMATION_COUNT]) -> Self {
        let mut table = Self::empty();
        for (id, cadence) in AnimationId::ALL.into_iter().zip(cadences) {
            if let Some(cadence) = cadence {
                table.insert(id.to_slot(*cadence));
            }
        }
        table
    }

    /// Put an animation into its slot, returning the one it replaced
    pub fn insert(&mut self, slot: AnimationSlot<N>) -> Option<AnimationSlot<N>> {
        self.slots[slot.id().index()].replace(slot)
    }

    /// Empty a slot, returning what it held
    pub fn remove(&mut self, id: AnimationId) -> Option<AnimationSlot<N>> {
        self.slots[id.index()].take()
    }

    pub fn is_present(&self, id: AnimationId) -> bool {
        self.slots[id.index()].is_some()
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn get(&self, id: AnimationId) -> Option<&AnimationSlot<N>> {
        self.slots[id.index()].as_ref()
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut AnimationSlot<N>> {
        self.slots[id.index()].as_mut()
    }

    /// First present slot at or after `start`, wrapping around
    pub fn first_present_from(&self, start: AnimationId) -> Option<AnimationId> {
        (0..ANIMATION_COUNT)
            .map(|offset| AnimationId::ALL[(start.index() + offset) % ANIMATION_COUNT])
            .find(|id| self.is_present(*id))
    }

    /// Next present slot after `current`, wrapping around
    ///
    /// With no current slot the search starts at the first one. Visits every
    /// slot at most once, so an empty table yields `None` instead of spinning.
    pub fn next_present(&self, current: Option<AnimationId>) -> Option<AnimationId> {
        let start = match current {
            Some(id) => AnimationId::ALL[(id.index() + 1) % ANIMATION_COUNT],
            None => AnimationId::ALL[0],
        };
        self.first_present_from(start)
    }
}

impl<const N: usize> Default for SlotTable<N> {
    fn default() -> Self {
        Self::empty()
    }
}
