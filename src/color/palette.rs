use super::Color;

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const ORANGE: Color = Color::new(255, 128, 0);
pub const PURPLE: Color = Color::new(128, 0, 255);
pub const LIME: Color = Color::new(128, 255, 0);
pub const PINK: Color = Color::new(255, 0, 128);

/// Festive colors picked from by the twinkle animation
pub const PALETTE: [Color; 10] = [
    RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN, ORANGE, PURPLE, LIME, PINK,
];
