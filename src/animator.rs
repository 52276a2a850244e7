use embassy_time::Instant;
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::TransferEngine;
use crate::animation::{AnimationId, AnimationSlot, SlotTable};
use crate::button::{ButtonId, ButtonPanel};
use crate::config::Config;
use crate::filter::{Brightness, BrightnessFilter, Filter};
use crate::frame::FrameBuffers;

/// Handler tokens bound to the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the active animation and start the next present one
    CycleAnimation,
    /// Step the global brightness, wrapping to the minimum
    StepBrightness,
}

/// Animation scheduler - owns the animations, the brightness and the frames
pub struct Animator<T: TransferEngine, const N: usize> {
    buffers: FrameBuffers<T, N>,
    slots: SlotTable<N>,
    active: Option<AnimationId>,
    brightness: BrightnessFilter,
}

impl<T: TransferEngine, const N: usize> Animator<T, N> {
    /// Create an animator with one slot per animation enabled in `config`
    pub fn new(buffers: FrameBuffers<T, N>, config: &Config, now: Instant) -> Self {
        Self::with_slots(buffers, SlotTable::from_cadences(&config.animations), config, now)
    }

    /// Create an animator over a prepared slot table
    ///
    /// Starts the configured initial animation, or the next present one if
    /// its slot is empty. With an empty table nothing runs.
    pub fn with_slots(
        buffers: FrameBuffers<T, N>,
        slots: SlotTable<N>,
        config: &Config,
        now: Instant,
    ) -> Self {
        let mut animator = Self {
            buffers,
            active: slots.first_present_from(config.initial),
            slots,
            brightness: BrightnessFilter::new(config.brightness),
        };
        if let Some(slot) = animator.active_slot_mut() {
            slot.initialize(now);
        }
        #[cfg(feature = "esp32-log")]
        println!("[Animator.new] starting with {:?}", animator.active);
        animator
    }

    /// Bind the animator's commands to the two buttons
    pub fn bind_buttons<PB: InputPin, PA: InputPin>(
        panel: &mut ButtonPanel<'_, PB, PA, Command>,
    ) {
        panel.on_press(ButtonId::Bright, Command::StepBrightness);
        panel.on_press(ButtonId::Action, Command::CycleAnimation);
    }

    /// Advance the active animation by one tick
    ///
    /// When the animation produced a frame it is scaled by the global
    /// brightness and published. Returns whether a frame was published.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(id) else {
            return false;
        };

        if !slot.process(now, self.buffers.render()) {
            return false;
        }

        self.brightness.apply(self.buffers.render());
        self.buffers.swap();
        true
    }

    /// Run a fired button command
    pub fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::CycleAnimation => {
                self.cycle_animation(now);
            }
            Command::StepBrightness => {
                self.step_brightness();
            }
        }
    }

    /// Switch to the next present animation
    ///
    /// The running animation is stopped and a blank frame is pushed before
    /// the next one starts. Returns the newly active animation.
    pub fn cycle_animation(&mut self, now: Instant) -> Option<AnimationId> {
        let stopped = match self.active_slot_mut() {
            Some(slot) => {
                slot.stop();
                true
            }
            None => false,
        };
        if stopped {
            self.buffers.clear_render();
            self.buffers.swap();
        }

        self.active = self.slots.next_present(self.active);
        if let Some(slot) = self.active_slot_mut() {
            slot.initialize(now);
        }
        #[cfg(feature = "esp32-log")]
        println!("[Animator.cycle_animation] switched to {:?}", self.active);
        self.active
    }

    /// Step the global brightness and drop both frames
    ///
    /// Clearing keeps a transfer from mixing pixels scaled at two different
    /// levels.
    pub fn step_brightness(&mut self) -> Brightness {
        let brightness = self.brightness.step();
        self.buffers.reset();
        brightness
    }

    pub const fn active(&self) -> Option<AnimationId> {
        self.active
    }

    pub const fn brightness(&self) -> Brightness {
        self.brightness.current()
    }

    pub const fn buffers(&self) -> &FrameBuffers<T, N> {
        &self.buffers
    }

    pub fn buffers_mut(&mut self) -> &mut FrameBuffers<T, N> {
        &mut self.buffers
    }

    pub const fn slots(&self) -> &SlotTable<N> {
        &self.slots
    }

    fn active_slot_mut(&mut self) -> Option<&mut AnimationSlot<N>> {
        let id = self.active?;
        self.slots.get_mut(id)
    }
}
