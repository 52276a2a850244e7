//! Transfer engine adapters

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::TransferEngine;
use crate::color::{Color, Rgb};

/// Encode a frame into left-aligned GRB wire words
///
/// For engines that shift 24 bits per LED out of a 32-bit FIFO, MSB first.
/// Returns the number of words written, which is the shorter of the two
/// slices.
pub fn encode_wire(frame: &[Color], words: &mut [u32]) -> usize {
    let mut written = 0;
    for (word, color) in words.iter_mut().zip(frame) {
        *word = color.to_wire();
        written += 1;
    }
    written
}

/// Transfer engine backed by a blocking `smart-leds` driver
///
/// The write completes inside [`start_transfer`](TransferEngine::start_transfer),
/// so a transfer is never observed in flight. Driver errors cannot be
/// surfaced per frame; they are counted instead.
pub struct SmartLedsTransfer<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsTransfer<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the driver refused to write
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> TransferEngine for SmartLedsTransfer<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = Infallible;

    fn prepare(&mut self, _led_count: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    fn start_transfer(&mut self, frame: &[Color]) {
        if self.writer.write(frame.iter().copied()).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
        }
    }

    fn transfer_in_flight(&self) -> bool {
        false
    }

    fn wait_for_transfer(&mut self) {}
}
