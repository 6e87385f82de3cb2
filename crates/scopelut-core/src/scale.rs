//! Linear intensity scaling and 8-bit quantization
//!
//! Scaling is applied downstream of the LUT: a raw sample is first mapped
//! to a fraction `t` in `[0, 1]` between the channel's min and effective
//! max, then quantized to a LUT index. Every display mode shares these
//! helpers; the modes only differ in how the LUT itself is generated.

use crate::sample::SampleType;

/// Round half away from zero for nonnegative values (`floor(x + 0.5)`).
///
/// All rounding in the display transform goes through this function so
/// that ramp generation, gamma interpolation and quantization agree at
/// exact `.5` ties.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Maximum actually applied at render time.
///
/// The stored max may exceed what the sample type can represent; it is
/// clamped here rather than when it is set.
#[inline]
pub fn effective_max(sample_type: SampleType, stored_max: u32) -> u32 {
    stored_max.min(sample_type.max_value())
}

/// Map a raw sample to a fraction in `[0, 1]`.
///
/// When the range is empty (`max <= min`) the result is a step: `0.0` for
/// samples below `min` and `1.0` otherwise.
pub fn scale_fraction(raw: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return if raw < min { 0.0 } else { 1.0 };
    }
    let t = (raw as f64 - min as f64) / (max as f64 - min as f64);
    t.clamp(0.0, 1.0)
}

/// Quantize a fraction to an 8-bit LUT index.
#[inline]
pub fn quantize(t: f64) -> u8 {
    round_half_up(t.clamp(0.0, 1.0) * 255.0) as u8
}

/// Scale and quantize in one step.
#[inline]
pub fn lut_index(raw: u32, min: u32, max: u32) -> u8 {
    quantize(scale_fraction(raw, min, max))
}

/// Table-driven form of [`lut_index`] for 8-bit inputs.
///
/// Entry `v` holds `lut_index(v, min, max)`. Packed RGB display uses one of
/// these per component instead of a gamma LUT.
pub fn component_table(min: u32, max: u32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (v, entry) in table.iter_mut().enumerate() {
        *entry = lut_index(v as u32, min, max);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_effective_max_clamps_to_sample_type() {
        assert_eq!(effective_max(SampleType::Gray8, 1000), 255);
        assert_eq!(effective_max(SampleType::Gray16, 1000), 1000);
    }

    #[test]
    fn test_scale_fraction_clips() {
        assert_eq!(scale_fraction(5, 10, 20), 0.0);
        assert_eq!(scale_fraction(25, 10, 20), 1.0);
        assert_eq!(scale_fraction(15, 10, 20), 0.5);
    }

    #[test]
    fn test_scale_fraction_empty_range() {
        assert_eq!(scale_fraction(9, 10, 10), 0.0);
        assert_eq!(scale_fraction(10, 10, 10), 1.0);
        assert_eq!(scale_fraction(11, 10, 10), 1.0);
        // max below min after clamping behaves the same way
        assert_eq!(scale_fraction(299, 300, 255), 0.0);
        assert_eq!(scale_fraction(300, 300, 255), 1.0);
    }

    #[test]
    fn test_lut_index_identity() {
        for v in 0..=255u32 {
            assert_eq!(lut_index(v, 0, 255) as u32, v);
        }
    }

    #[test]
    fn test_component_table() {
        let table = component_table(100, 200);
        assert_eq!(table[0], 0);
        assert_eq!(table[100], 0);
        assert_eq!(table[150], 128); // 127.5 rounds up
        assert_eq!(table[200], 255);
        assert_eq!(table[255], 255);
    }
}
