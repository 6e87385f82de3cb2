//! LUT generation: gamma remap and hi/lo highlight
//!
//! Gamma is applied to the index progression, not to the output colors:
//! output entry `i` samples the base table at position
//! `j = (i / 255)^gamma * 255`, linearly interpolating between the two
//! integer neighbors of `j`. A gamma of exactly 1.0 copies the base table.

use super::{ColorTable, LUT_SIZE, Lut};
use crate::color::Rgb;
use crate::scale::round_half_up;

/// Remap a base table through `gamma`.
///
/// The caller is responsible for validating `gamma` (nonnegative, finite).
/// A gamma of zero maps every entry to the top of the table.
pub fn gamma_remap(base: &ColorTable, gamma: f64) -> Lut {
    if gamma == 1.0 {
        return Lut::from(base);
    }

    let components = base.components();
    let mut out = [[0u8; LUT_SIZE]; 3];
    for i in 0..LUT_SIZE {
        let j = (i as f64 / 255.0).powf(gamma) * 255.0;
        let lo = (j.floor() as usize).min(LUT_SIZE - 1);
        let hi = (j.ceil() as usize).min(LUT_SIZE - 1);
        let frac = j - lo as f64;
        for (k, src) in components.iter().enumerate() {
            let v = src[lo] as f64 * (1.0 - frac) + src[hi] as f64 * frac;
            out[k][i] = round_half_up(v).clamp(0.0, 255.0) as u8;
        }
    }
    let [red, green, blue] = out;
    Lut::from_arrays(red, green, blue)
}

/// Force the endpoints to the highlight colors: index 0 becomes blue and
/// index 255 becomes red. The other 254 entries are untouched.
pub fn apply_hi_lo(lut: &mut Lut) {
    lut.set(0, Rgb::BLUE);
    lut.set(LUT_SIZE - 1, Rgb::RED);
}

/// Full LUT pipeline for a scalar channel.
pub fn build_lut(base: &ColorTable, gamma: f64, hi_lo: bool) -> Lut {
    let mut lut = gamma_remap(base, gamma);
    if hi_lo {
        apply_hi_lo(&mut lut);
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_gamma_is_plain_ramp() {
        let base = ColorTable::gray_ramp();
        let lut = gamma_remap(&base, 1.0);
        for i in 0..=255u8 {
            assert_eq!(lut.get(i), Rgb::gray(i));
        }
    }

    #[test]
    fn test_gamma_two_green_interpolation() {
        let base = ColorTable::ramp(Rgb::GREEN);
        let lut = gamma_remap(&base, 2.0);
        // j = (64/255)^2 * 255 = 16.06, ~94% toward index 16
        assert_eq!(lut.get(64), Rgb::new(0, 16, 0));
        // endpoints are fixed points of the remap
        assert_eq!(lut.get(0), Rgb::BLACK);
        assert_eq!(lut.get(255), Rgb::GREEN);
    }

    #[test]
    fn test_gamma_below_one_brightens() {
        let base = ColorTable::gray_ramp();
        let lut = gamma_remap(&base, 0.5);
        // j = sqrt(64/255) * 255 = 127.75
        assert_eq!(lut.get(64), Rgb::gray(128));
        assert!(lut.get(128).red > 128);
    }

    #[test]
    fn test_gamma_interpolates_between_table_entries() {
        let mut colors = vec![Rgb::BLACK; 256];
        colors[16] = Rgb::new(100, 0, 0);
        colors[17] = Rgb::new(200, 0, 0);
        let base = ColorTable::from_colors(&colors).unwrap();
        let lut = gamma_remap(&base, 2.0);
        // 100 * 0.937 + 200 * 0.063 = 106.3
        assert_eq!(lut.get(64).red, 106);
    }

    #[test]
    fn test_zero_gamma_saturates() {
        let base = ColorTable::gray_ramp();
        let lut = gamma_remap(&base, 0.0);
        assert_eq!(lut.get(0), Rgb::WHITE);
        assert_eq!(lut.get(100), Rgb::WHITE);
    }

    #[test]
    fn test_hi_lo_only_touches_endpoints() {
        let base = ColorTable::ramp(Rgb::GREEN);
        let plain = build_lut(&base, 1.5, false);
        let marked = build_lut(&base, 1.5, true);
        assert_eq!(marked.get(0), Rgb::BLUE);
        assert_eq!(marked.get(255), Rgb::RED);
        for i in 1..=254u8 {
            assert_eq!(marked.get(i), plain.get(i));
        }
    }
}
