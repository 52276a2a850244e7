//! Packed 24-bit strip colors
//!
//! Colors are kept in memory as `0x00BBRRGG` words. The strip itself wants
//! GRB, most significant bit first; that remap happens once, when a frame is
//! handed to the transfer engine (see [`Color::to_wire`]).

mod palette;

use smart_leds::RGB8;

pub use palette::{
    BLUE, CYAN, GREEN, LIME, MAGENTA, ORANGE, PALETTE, PINK, PURPLE, RED, YELLOW,
};

pub type Rgb = RGB8;

/// Bitmask for the blue channel
pub const BLUE_MASK: u32 = 0x00FF_0000;
/// Bitmask for the red channel
pub const RED_MASK: u32 = 0x0000_FF00;
/// Bitmask for the green channel
pub const GREEN_MASK: u32 = 0x0000_00FF;
/// Bitmask for all color data
pub const DATA_MASK: u32 = 0x00FF_FFFF;

const BLUE_SHIFT: u32 = 16;
const RED_SHIFT: u32 = 8;

/// A single LED color packed as `0x00BBRRGG`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    /// All channels off
    pub const BLACK: Self = Self(0);

    /// Build a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((blue as u32) << BLUE_SHIFT) | ((red as u32) << RED_SHIFT) | green as u32)
    }

    /// Wrap a raw `0x00BBRRGG` word
    ///
    /// The top byte is discarded so no stray bits reach the strip.
    pub const fn from_packed(raw: u32) -> Self {
        Self(raw & DATA_MASK)
    }

    /// Raw `0x00BBRRGG` word
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(self) -> u8 {
        ((self.0 & RED_MASK) >> RED_SHIFT) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(self) -> u8 {
        (self.0 & GREEN_MASK) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(self) -> u8 {
        ((self.0 & BLUE_MASK) >> BLUE_SHIFT) as u8
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// Apply `adjust` to every channel independently
    ///
    /// Channels are unpacked, adjusted and re-packed, so a result can never
    /// carry into a neighbouring channel.
    #[must_use]
    pub fn map_channels(self, adjust: impl Fn(u8) -> u8) -> Self {
        Self::new(adjust(self.red()), adjust(self.green()), adjust(self.blue()))
    }

    /// Left-aligned wire word for a 24-bit shift-out: `0xGGRRBB00`
    pub const fn to_wire(self) -> u32 {
        ((self.green() as u32) << 24) | ((self.red() as u32) << 16) | ((self.blue() as u32) << 8)
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

/// Fill the whole frame with black
pub fn clear(frame: &mut [Color]) {
    frame.fill(Color::BLACK);
}
