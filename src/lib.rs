#![no_std]

pub mod animation;
pub mod animator;
pub mod button;
pub mod color;
pub mod config;
pub mod filter;
pub mod frame;
pub mod math8;
pub mod poll_loop;
pub mod transfer;

pub use animation::{Animation, AnimationId, AnimationSlot, Cadence, FrameTimer, SlotTable};
pub use animator::{Animator, Command};
pub use button::{Button, ButtonId, ButtonLatches, ButtonPanel, Edge, EdgeLatch};
pub use config::Config;
pub use filter::{Brightness, BrightnessConfig};
pub use frame::{Bank, FrameBuffers, InitError};
pub use poll_loop::{PollLoop, TickResult};
pub use transfer::{SmartLedsTransfer, encode_wire};

pub use color::{Color, Rgb};
pub use embassy_time::{Duration, Instant};

/// Hardware-assisted frame transfer
///
/// Implement this trait to stream frames to the strip on a given platform
/// (PIO + DMA, SPI, RMT, ...). A transfer is fire-and-forget: once started it
/// runs to completion and cannot fail.
pub trait TransferEngine {
    /// Error reported when the engine cannot be brought up
    type Error: core::fmt::Debug;

    /// Claim and configure whatever the engine needs for `led_count` LEDs
    ///
    /// Called exactly once, before the first transfer.
    fn prepare(&mut self, led_count: usize) -> Result<(), Self::Error>;

    /// Start streaming `frame` to the strip
    ///
    /// The engine is responsible for the channel remap to wire order. The
    /// caller will not mutate `frame` until the transfer has completed.
    fn start_transfer(&mut self, frame: &[Color]);

    /// Whether a transfer is currently running
    fn transfer_in_flight(&self) -> bool;

    /// Block until the running transfer, if any, has completed
    fn wait_for_transfer(&mut self);
}
