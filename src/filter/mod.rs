use crate::color::Color;

mod brightness;

pub use brightness::{Brightness, BrightnessConfig, BrightnessFilter};

/// Post-processing applied to a freshly rendered frame
pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Color]);
}
