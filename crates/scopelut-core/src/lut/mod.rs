//! Lut - 256-entry lookup table from quantized intensity to display color
//!
//! A LUT is a derived artifact: it is a pure function of the channel's
//! base [`ColorTable`], gamma and the hi/lo highlight flag. Scaling
//! (min/max) is not part of it; see [`crate::scale`].

mod generate;
mod table;

pub use generate::{apply_hi_lo, build_lut, gamma_remap};
pub use table::ColorTable;

use crate::color::Rgb;

/// Number of entries in every LUT and color table
pub const LUT_SIZE: usize = 256;

/// Cached per-channel lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    red: [u8; LUT_SIZE],
    green: [u8; LUT_SIZE],
    blue: [u8; LUT_SIZE],
}

impl Lut {
    /// Build a LUT from explicit component arrays.
    pub fn from_arrays(red: [u8; LUT_SIZE], green: [u8; LUT_SIZE], blue: [u8; LUT_SIZE]) -> Self {
        Self { red, green, blue }
    }

    /// LUT that shows one RGB component through its own color.
    ///
    /// `component` 0, 1 and 2 select red, green and blue; the other two
    /// arrays are zero.
    pub fn single_component(component: usize, table: [u8; LUT_SIZE]) -> Self {
        let zero = [0u8; LUT_SIZE];
        match component {
            0 => Self::from_arrays(table, zero, zero),
            1 => Self::from_arrays(zero, table, zero),
            _ => Self::from_arrays(zero, zero, table),
        }
    }

    /// Color at an index
    #[inline]
    pub fn get(&self, index: u8) -> Rgb {
        let i = index as usize;
        Rgb::new(self.red[i], self.green[i], self.blue[i])
    }

    /// Red component array
    pub fn red(&self) -> &[u8; LUT_SIZE] {
        &self.red
    }

    /// Green component array
    pub fn green(&self) -> &[u8; LUT_SIZE] {
        &self.green
    }

    /// Blue component array
    pub fn blue(&self) -> &[u8; LUT_SIZE] {
        &self.blue
    }

    pub(crate) fn set(&mut self, index: usize, color: Rgb) {
        self.red[index] = color.red;
        self.green[index] = color.green;
        self.blue[index] = color.blue;
    }
}

impl From<&ColorTable> for Lut {
    fn from(table: &ColorTable) -> Self {
        Self::from_arrays(*table.red(), *table.green(), *table.blue())
    }
}
