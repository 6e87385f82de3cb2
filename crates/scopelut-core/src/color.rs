//! RGB24 display color

use serde::{Deserialize, Serialize};

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure red, the hi/lo highlight color for saturated-high pixels
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Pure green
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    /// Pure blue, the hi/lo highlight color for saturated-low pixels
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Create a new color
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray color
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Unpack a 0xRRGGBB value (upper byte ignored)
    pub const fn from_packed(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }

    /// Pack into 0x00RRGGBB
    pub const fn to_packed(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Components as an array in R, G, B order
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Component-wise saturating sum, used for additive channel blending
    pub fn saturating_add(self, other: Rgb) -> Rgb {
        Rgb::new(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}
