//! Double-buffered frame storage
//!
//! One bank is being drawn into ("render") while the other is owned by the
//! transfer engine ("display"). Swapping only exchanges roles; pixels are never
//! copied between banks.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::TransferEngine;
use crate::color::Color;

/// Error raised while bringing up the frame pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError<E> {
    /// The strip has no LEDs
    EmptyStrip,
    /// The transfer engine could not be prepared
    Transfer(E),
}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => f.write_str("LED strip has no LEDs"),
            Self::Transfer(err) => write!(f, "transfer engine init failed: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for InitError<E> {}

/// Identity of one of the two frame banks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    First,
    Second,
}

impl Bank {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Render/display bank pair bound to a transfer engine
pub struct FrameBuffers<T: TransferEngine, const N: usize> {
    engine: T,
    banks: [[Color; N]; 2],
    render: Bank,
}

impl<T: TransferEngine, const N: usize> FrameBuffers<T, N> {
    /// Prepare the engine and push one blank frame to the strip
    ///
    /// Fails once, up front, when the engine cannot be prepared; the poll loop
    /// must not be started in that case.
    pub fn new(mut engine: T) -> Result<Self, InitError<T::Error>> {
        if N == 0 {
            return Err(InitError::EmptyStrip);
        }
        engine.prepare(N).map_err(InitError::Transfer)?;

        let mut buffers = Self {
            engine,
            banks: [[Color::BLACK; N]; 2],
            render: Bank::First,
        };
        #[cfg(feature = "esp32-log")]
        println!("[FrameBuffers.new] {} LEDs ready", N);
        buffers.swap();
        Ok(buffers)
    }

    /// Number of LEDs on the strip
    pub const fn count(&self) -> usize {
        N
    }

    /// Bank currently being drawn into
    pub const fn render_bank(&self) -> Bank {
        self.render
    }

    /// Bank currently owned by the transfer engine
    pub const fn display_bank(&self) -> Bank {
        self.render.other()
    }

    /// Frame being drawn into; valid until the next [`swap`](Self::swap)
    pub fn render(&mut self) -> &mut [Color] {
        &mut self.banks[self.render.index()]
    }

    /// Frame last handed to the transfer engine
    pub fn display(&self) -> &[Color] {
        &self.banks[self.display_bank().index()]
    }

    /// Zero the render frame only
    pub fn clear_render(&mut self) {
        self.render().fill(Color::BLACK);
    }

    /// Publish the render frame
    ///
    /// Waits for the running transfer, exchanges the roles of the two banks
    /// and starts streaming the new display bank.
    pub fn swap(&mut self) {
        self.settle();
        self.render = self.render.other();
        let display = &self.banks[self.render.other().index()];
        self.engine.start_transfer(display);
    }

    /// Zero both banks once the running transfer has completed
    ///
    /// Nothing is transmitted; the next [`swap`](Self::swap) pushes the
    /// cleared content.
    pub fn reset(&mut self) {
        self.settle();
        for bank in &mut self.banks {
            bank.fill(Color::BLACK);
        }
    }

    pub const fn engine(&self) -> &T {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut T {
        &mut self.engine
    }

    fn settle(&mut self) {
        if self.engine.transfer_in_flight() {
            self.engine.wait_for_transfer();
        }
    }
}
