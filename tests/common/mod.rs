#![allow(dead_code, unreachable_pub)]

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};
use holly_jolly::{Color, TransferEngine};

/// Transfer engine that records every frame and stays in flight until waited on
#[derive(Debug, Default)]
pub struct MockTransfer {
    pub frames: Vec<Vec<Color>>,
    pub prepared_for: Option<usize>,
    pub in_flight: bool,
    pub waits: usize,
    pub fail_prepare: bool,
}

impl MockTransfer {
    pub fn failing() -> Self {
        Self {
            fail_prepare: true,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &[Color] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareFailed;

impl TransferEngine for MockTransfer {
    type Error = PrepareFailed;

    fn prepare(&mut self, led_count: usize) -> Result<(), Self::Error> {
        if self.fail_prepare {
            return Err(PrepareFailed);
        }
        self.prepared_for = Some(led_count);
        Ok(())
    }

    fn start_transfer(&mut self, frame: &[Color]) {
        assert!(!self.in_flight, "transfer started while another is in flight");
        self.frames.push(frame.to_vec());
        self.in_flight = true;
    }

    fn transfer_in_flight(&self) -> bool {
        self.in_flight
    }

    fn wait_for_transfer(&mut self) {
        self.waits += 1;
        self.in_flight = false;
    }
}

/// Button line whose level is controlled by the test; `true` means pressed
pub struct MockPin<'a> {
    pressed: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub fn new(pressed: &'a Cell<bool>) -> Self {
        Self { pressed }
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

#[derive(Debug)]
pub struct ReadError;

impl digital::Error for ReadError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Button line that cannot be read
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ReadError;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ReadError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ReadError)
    }
}
