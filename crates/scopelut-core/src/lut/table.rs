//! ColorTable - base 256-entry RGB table a LUT is generated from
//!
//! A color table is either a black-to-color ramp (grayscale and
//! color-tinted channels) or an externally supplied palette. The gamma
//! remap in [`super::generate`] interpolates between its entries.

use super::LUT_SIZE;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::scale::round_half_up;

/// Validated 256-entry RGB table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    red: [u8; LUT_SIZE],
    green: [u8; LUT_SIZE],
    blue: [u8; LUT_SIZE],
}

impl ColorTable {
    /// Create a table from three component arrays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless every array has exactly
    /// 256 entries.
    pub fn new(red: &[u8], green: &[u8], blue: &[u8]) -> Result<Self> {
        Ok(Self {
            red: component_array("red", red)?,
            green: component_array("green", green)?,
            blue: component_array("blue", blue)?,
        })
    }

    /// Create a table from a list of 256 colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `colors.len() != 256`.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self> {
        if colors.len() != LUT_SIZE {
            return Err(Error::InvalidArgument(format!(
                "color table must have {LUT_SIZE} entries, got {}",
                colors.len()
            )));
        }
        let mut table = Self::filled(Rgb::BLACK);
        for (i, c) in colors.iter().enumerate() {
            table.set(i, *c);
        }
        Ok(table)
    }

    /// Linear ramp from black at index 0 to `color` at index 255.
    pub fn ramp(color: Rgb) -> Self {
        let mut table = Self::filled(Rgb::BLACK);
        for i in 0..LUT_SIZE {
            let scale = |c: u8| round_half_up(i as f64 * c as f64 / 255.0) as u8;
            table.set(i, Rgb::new(scale(color.red), scale(color.green), scale(color.blue)));
        }
        table
    }

    /// Gray ramp, the identity mapping.
    pub fn gray_ramp() -> Self {
        Self::ramp(Rgb::WHITE)
    }

    fn filled(color: Rgb) -> Self {
        Self {
            red: [color.red; LUT_SIZE],
            green: [color.green; LUT_SIZE],
            blue: [color.blue; LUT_SIZE],
        }
    }

    fn set(&mut self, index: usize, color: Rgb) {
        self.red[index] = color.red;
        self.green[index] = color.green;
        self.blue[index] = color.blue;
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

    pub(crate) fn components(&self) -> [&[u8; LUT_SIZE]; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

fn component_array(name: &str, values: &[u8]) -> Result<[u8; LUT_SIZE]> {
    <[u8; LUT_SIZE]>::try_from(values).map_err(|_| {
        Error::InvalidArgument(format!(
            "{name} table must have {LUT_SIZE} entries, got {}",
            values.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ramp_endpoints() {
        let table = ColorTable::ramp(Rgb::new(255, 128, 0));
        assert_eq!(table.get(0), Rgb::BLACK);
        assert_eq!(table.get(255), Rgb::new(255, 128, 0));
        // 128 * 128 / 255 = 64.25
        assert_eq!(table.get(128), Rgb::new(128, 64, 0));
    }

    #[test]
    fn test_gray_ramp_is_identity() {
        let table = ColorTable::gray_ramp();
        for i in 0..=255u8 {
            assert_eq!(table.get(i), Rgb::gray(i));
        }
    }

    #[test]
    fn test_new_rejects_short_component() {
        let full = vec![0u8; 256];
        let short = vec![0u8; 255];
        let err = ColorTable::new(&full, &short, &full).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_from_colors() {
        let colors: Vec<Rgb> = (0..=255u8).map(|i| Rgb::new(255 - i, i, 7)).collect();
        let table = ColorTable::from_colors(&colors).unwrap();
        assert_eq!(table.get(0), Rgb::new(255, 0, 7));
        assert_eq!(table.get(255), Rgb::new(0, 255, 7));

        assert!(ColorTable::from_colors(&colors[..100]).is_err());
    }
}
