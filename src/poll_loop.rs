//! Fixed-period poll loop
//!
//! Each tick drains the debounced button events and then runs one animator
//! tick. The loop does not sleep on its own; [`PollLoop::tick`] reports how
//! long the caller should wait, and [`PollLoop::run`] does the waiting with a
//! blocking delay.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::TransferEngine;
use crate::animator::{Animator, Command};
use crate::button::ButtonPanel;
use crate::config::Config;

/// Result of a poll loop tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether this tick published a new frame.
    pub frame_pushed: bool,
}

/// Poll loop that ties the buttons to the animator.
///
/// # Usage
///
/// ```ignore
/// let buffers = FrameBuffers::new(engine)?;
/// let animator = Animator::new(buffers, &config, Instant::now());
/// let buttons = ButtonPanel::new(&LATCHES, bright_pin, action_pin, config.debounce);
/// let mut poll_loop = PollLoop::new(animator, buttons, &config);
///
/// poll_loop.run();
/// ```
pub struct PollLoop<'a, T: TransferEngine, PB, PA, const N: usize> {
    animator: Animator<T, N>,
    buttons: ButtonPanel<'a, PB, PA, Command>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, T, PB, PA, const N: usize> PollLoop<'a, T, PB, PA, N>
where
    T: TransferEngine,
    PB: InputPin,
    PA: InputPin,
{
    /// Create a poll loop and bind the buttons to the animator.
    pub fn new(
        animator: Animator<T, N>,
        mut buttons: ButtonPanel<'a, PB, PA, Command>,
        config: &Config,
    ) -> Self {
        Animator::<T, N>::bind_buttons(&mut buttons);
        Self {
            animator,
            buttons,
            next_tick: Instant::from_millis(0),
            period: config.poll_period,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Runs the handlers of debounced button presses, bright first
    /// 3. Advances the active animation, publishing a frame if one was drawn
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // If we've fallen more than two periods behind, restart from now
        // instead of bursting through the backlog
        let max_drift = self.period + self.period;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        for command in self.buttons.poll(now) {
            self.animator.handle(command, now);
        }
        let frame_pushed = self.animator.tick(now);

        self.next_tick += self.period;

        let sleep_duration = self
            .next_tick
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            frame_pushed,
        }
    }

    /// Tick forever, busy-waiting between ticks.
    pub fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            embassy_time::block_for(result.sleep_duration);
        }
    }

    /// Get a reference to the animator.
    pub const fn animator(&self) -> &Animator<T, N> {
        &self.animator
    }

    /// Get a mutable reference to the animator.
    pub fn animator_mut(&mut self) -> &mut Animator<T, N> {
        &mut self.animator
    }

    /// Get a mutable reference to the buttons.
    pub fn buttons_mut(&mut self) -> &mut ButtonPanel<'a, PB, PA, Command> {
        &mut self.buttons
    }
}
