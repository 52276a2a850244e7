//! Debounced push buttons
//!
//! Each button is split in two halves:
//! - an [`EdgeLatch`], shared with the GPIO interrupt, which records the first
//!   falling edge and ignores the bounce that follows it
//! - a [`Button`], owned by the poll loop, which re-samples the line once the
//!   debounce window has elapsed and yields the registered handler if the
//!   button is still held
//!
//! The buttons are wired to ground, so a pressed button reads low.
//!
//! # Usage
//!
//! ```ignore
//! static LATCHES: ButtonLatches = ButtonLatches::new();
//!
//! // GPIO interrupt handler
//! fn on_gpio_irq(id: ButtonId, edge: Edge) {
//!     LATCHES.on_edge(id, edge, Instant::now());
//! }
//!
//! // Poll loop
//! let mut panel = ButtonPanel::new(&LATCHES, bright_pin, action_pin, config.debounce);
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// Number of physical buttons on the board
pub const BUTTON_COUNT: usize = 2;

/// Signal transition reported by the GPIO interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// The physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    /// Steps the global brightness
    Bright,
    /// Cycles through the animations
    Action,
}

#[allow(clippy::cast_possible_truncation)]
const fn millis32(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// Interrupt-side half of a button
///
/// Single producer (the interrupt) and single consumer (the poll loop). The
/// interrupt only ever sets `pending` and only after the timestamp is written;
/// the poll loop is the only one to clear it.
#[derive(Debug)]
pub struct EdgeLatch {
    pending: AtomicBool,
    pressed_at_ms: AtomicU32,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            pressed_at_ms: AtomicU32::new(0),
        }
    }

    /// Record an edge; call from the interrupt handler
    ///
    /// Only falling edges count. While a press is pending further edges are
    /// ignored. Returns whether the edge opened a new debounce window.
    pub fn on_edge(&self, edge: Edge, now: Instant) -> bool {
        if edge != Edge::Falling || self.pending.load(Ordering::Acquire) {
            return false;
        }

        self.pressed_at_ms.store(millis32(now), Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Whether a press is waiting for its debounce window
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Boot-relative time of the pending press, in milliseconds
    pub fn pressed_at_ms(&self) -> Option<u32> {
        if !self.is_pending() {
            return None;
        }
        Some(self.pressed_at_ms.load(Ordering::Relaxed))
    }

    /// Whether the pending press has been held for at least `window`
    ///
    /// Uses wrapping arithmetic so the 32-bit millisecond counter may roll over.
    fn is_settled(&self, now: Instant, window: Duration) -> bool {
        let Some(pressed_at) = self.pressed_at_ms() else {
            return false;
        };
        u64::from(millis32(now).wrapping_sub(pressed_at)) >= window.as_millis()
    }

    fn release(&self) {
        self.pending.store(false, Ordering::Release);
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge latches for both buttons, meant to live in a `static`
#[derive(Debug, Default)]
pub struct ButtonLatches {
    pub bright: EdgeLatch,
    pub action: EdgeLatch,
}

impl ButtonLatches {
    pub const fn new() -> Self {
        Self {
            bright: EdgeLatch::new(),
            action: EdgeLatch::new(),
        }
    }

    pub const fn latch(&self, id: ButtonId) -> &EdgeLatch {
        match id {
            ButtonId::Bright => &self.bright,
            ButtonId::Action => &self.action,
        }
    }

    /// Route an interrupt edge to the matching latch
    pub fn on_edge(&self, id: ButtonId, edge: Edge, now: Instant) -> bool {
        self.latch(id).on_edge(edge, now)
    }
}

/// Poll-side half of a button
///
/// `H` is the handler token yielded when a debounced press fires.
pub struct Button<'a, P, H> {
    latch: &'a EdgeLatch,
    pin: P,
    debounce: Duration,
    handler: Option<H>,
}

impl<'a, P: InputPin, H: Copy> Button<'a, P, H> {
    pub const fn new(latch: &'a EdgeLatch, pin: P, debounce: Duration) -> Self {
        Self {
            latch,
            pin,
            debounce,
            handler: None,
        }
    }

    /// Register the handler for this button, replacing any previous one
    pub fn on_press(&mut self, handler: H) {
        self.handler = Some(handler);
    }

    pub const fn handler(&self) -> Option<H> {
        self.handler
    }

    /// Sample the line; a failed read counts as released
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Resolve a pending press whose debounce window has elapsed
    ///
    /// Yields the handler if the button is still held. Either way the latch
    /// is released, so every press resolves exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<H> {
        if !self.latch.is_settled(now, self.debounce) {
            return None;
        }

        let handler = self.handler;
        let fired = match handler {
            Some(handler) if self.is_pressed() => Some(handler),
            _ => None,
        };
        self.latch.release();
        fired
    }
}

/// Both buttons of the board, polled in a fixed order
pub struct ButtonPanel<'a, PB, PA, H> {
    bright: Button<'a, PB, H>,
    action: Button<'a, PA, H>,
}

impl<'a, PB: InputPin, PA: InputPin, H: Copy> ButtonPanel<'a, PB, PA, H> {
    pub const fn new(
        latches: &'a ButtonLatches,
        bright_pin: PB,
        action_pin: PA,
        debounce: Duration,
    ) -> Self {
        Self {
            bright: Button::new(&latches.bright, bright_pin, debounce),
            action: Button::new(&latches.action, action_pin, debounce),
        }
    }

    /// Register the handler for one button
    pub fn on_press(&mut self, id: ButtonId, handler: H) {
        match id {
            ButtonId::Bright => self.bright.on_press(handler),
            ButtonId::Action => self.action.on_press(handler),
        }
    }

    /// Resolve both buttons, bright first, and return the fired handlers
    pub fn poll(&mut self, now: Instant) -> Vec<H, BUTTON_COUNT> {
        [self.bright.poll(now), self.action.poll(now)]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn bright_mut(&mut self) -> &mut Button<'a, PB, H> {
        &mut self.bright
    }

    pub fn action_mut(&mut self) -> &mut Button<'a, PA, H> {
        &mut self.action
    }
}
