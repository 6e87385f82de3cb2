//! Sample domain of a display session
//!
//! A session displays one pixel representation throughout. The maximum
//! representable intensity is a pure function of the representation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pixel representation of the raw samples fed to the display transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    /// 8-bit grayscale, one sample per pixel
    Gray8,
    /// 16-bit grayscale, one sample per pixel
    Gray16,
    /// Packed 24-bit RGB, three 8-bit components per pixel
    Rgb24,
}

impl SampleType {
    /// Create a `SampleType` from a bit depth per component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] if `bits` is not 8, 16 or 24.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(SampleType::Gray8),
            16 => Ok(SampleType::Gray16),
            24 => Ok(SampleType::Rgb24),
            _ => Err(Error::UnsupportedOperation(format!(
                "unrecognized pixel format: {bits} bits per pixel"
            ))),
        }
    }

    /// Create a `SampleType` from the number of bytes a camera reports per
    /// pixel.
    ///
    /// Four bytes per pixel is packed RGB with an unused padding byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for any other byte count.
    pub fn from_bytes_per_pixel(bytes: u32) -> Result<Self> {
        match bytes {
            1 => Ok(SampleType::Gray8),
            2 => Ok(SampleType::Gray16),
            4 => Ok(SampleType::Rgb24),
            _ => Err(Error::UnsupportedOperation(format!(
                "unrecognized pixel format: {bytes} bytes per pixel"
            ))),
        }
    }

    /// Maximum intensity representable by one component.
    pub fn max_value(self) -> u32 {
        match self {
            SampleType::Gray8 | SampleType::Rgb24 => 255,
            SampleType::Gray16 => 65535,
        }
    }

    /// Number of independently scaled components per pixel.
    pub fn components(self) -> usize {
        match self {
            SampleType::Gray8 | SampleType::Gray16 => 1,
            SampleType::Rgb24 => 3,
        }
    }

    /// Whether this is the packed RGB representation.
    #[inline]
    pub fn is_rgb(self) -> bool {
        self == SampleType::Rgb24
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_max_value() {
        assert_eq!(SampleType::Gray8.max_value(), 255);
        assert_eq!(SampleType::Gray16.max_value(), 65535);
        assert_eq!(SampleType::Rgb24.max_value(), 255);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(SampleType::from_bits(16).unwrap(), SampleType::Gray16);
        let err = SampleType::from_bits(12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn test_from_bytes_per_pixel() {
        assert_eq!(SampleType::from_bytes_per_pixel(1).unwrap(), SampleType::Gray8);
        assert_eq!(SampleType::from_bytes_per_pixel(4).unwrap(), SampleType::Rgb24);
        assert!(SampleType::from_bytes_per_pixel(3).is_err());
    }

    #[test]
    fn test_components() {
        assert_eq!(SampleType::Gray16.components(), 1);
        assert_eq!(SampleType::Rgb24.components(), 3);
        assert!(SampleType::Rgb24.is_rgb());
    }
}
