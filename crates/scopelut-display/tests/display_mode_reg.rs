//! Display session regression test
//!
//! Scaling, gamma, highlight and mode rules of a display session, checked
//! through the rendered colors and the LUT cache counters.

use scopelut_core::{ColorTable, ErrorKind, LUT_SIZE, Rgb, SampleType};
use scopelut_display::{ColorModeKind, DisplaySession};
use scopelut_test::RegParams;

#[test]
fn display_scaling_reg() {
    let mut rp = RegParams::new("display_scaling");

    let mut s = DisplaySession::grayscale(SampleType::Gray8).unwrap();
    s.set_scaling(0, 0, 255).unwrap();
    rp.compare_colors(Rgb::gray(128), s.render(0, 128).unwrap());

    // At or below min renders LUT[0], at or above max renders LUT[255]
    s.set_scaling(0, 50, 150).unwrap();
    let low = s.lut(0).unwrap().get(0);
    let high = s.lut(0).unwrap().get(255);
    for v in [0, 49, 50] {
        rp.compare_colors(low, s.render(0, v).unwrap());
    }
    for v in [150, 151, 255] {
        rp.compare_colors(high, s.render(0, v).unwrap());
    }

    // Empty range renders the top entry at min
    s.set_scaling(0, 10, 10).unwrap();
    rp.compare_colors(Rgb::WHITE, s.render(0, 10).unwrap());

    // Max above the 16-bit range is stored but clamped on use
    let mut s = DisplaySession::grayscale(SampleType::Gray16).unwrap();
    s.set_scaling(2, 0, 100_000).unwrap();
    rp.compare_values(100_000.0, s.channel_state(2).max() as f64, 0.0);
    rp.compare_colors(Rgb::WHITE, s.render(2, 65535).unwrap());

    // Rejected ranges leave the channel alone
    let err = s.set_scaling(0, -1, 10).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::InvalidArgument) as u8 as f64, 0.0);
    let err = s.set_scaling(0, 20, 10).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::InvalidArgument) as u8 as f64, 0.0);
    rp.compare_values(65535.0, s.channel_state(0).max() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn display_gamma_cache_reg() {
    let mut rp = RegParams::new("display_gamma_cache");

    let mut s = DisplaySession::single_color(SampleType::Gray8, vec![Rgb::GREEN]).unwrap();
    s.set_gamma(0, 2.0).unwrap();
    let lut = s.lut(0).unwrap().clone();
    rp.display_lut("single color green, gamma 2.0", &lut);
    rp.compare_values(16.0, lut.get(64).green as f64, 0.0);

    // Repeating the same gamma keeps the cache and the counter
    let count = s.invalidation_count(0);
    s.set_gamma(0, 2.0).unwrap();
    rp.compare_values(count as f64, s.invalidation_count(0) as f64, 0.0);
    rp.compare_values(0.0, s.is_lut_dirty(0) as u8 as f64, 0.0);

    // Two reads without a mutation agree
    let first = s.lut(0).unwrap().clone();
    rp.compare_luts(&first, s.lut(0).unwrap());

    // A real change invalidates once
    s.set_gamma(0, 1.0).unwrap();
    rp.compare_values((count + 1) as f64, s.invalidation_count(0) as f64, 0.0);
    rp.compare_values(1.0, s.is_lut_dirty(0) as u8 as f64, 0.0);
    rp.compare_colors(Rgb::new(0, 64, 0), s.render(0, 64).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn display_hi_lo_reg() {
    let mut rp = RegParams::new("display_hi_lo");

    let mut s = DisplaySession::single_color(SampleType::Gray16, vec![Rgb::GREEN]).unwrap();
    s.set_scaling(0, 100, 200).unwrap();
    let plain = s.lut(0).unwrap().clone();

    s.set_hi_lo_highlight(true);
    rp.compare_colors(Rgb::BLUE, s.render(0, 50).unwrap());
    rp.compare_colors(Rgb::RED, s.render(0, 300).unwrap());
    rp.compare_colors(plain.get(128), s.render(0, 150).unwrap());

    // Switching modes keeps the highlight
    s.set_mode_grayscale().unwrap();
    rp.compare_colors(Rgb::BLUE, s.render(0, 0).unwrap());

    s.set_hi_lo_highlight(false);
    rp.compare_colors(Rgb::BLACK, s.render(0, 0).unwrap());
    rp.compare_colors(Rgb::WHITE, s.render(0, 65535).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn display_mode_rules_reg() {
    let mut rp = RegParams::new("display_mode_rules");

    // Grayscale ignores color
    let mut s = DisplaySession::grayscale(SampleType::Gray8).unwrap();
    s.set_color(0, Rgb::RED).unwrap();
    rp.compare_colors(Rgb::WHITE, s.render(0, 255).unwrap());

    // Mode switch discards channel state
    s.set_gamma(0, 3.0).unwrap();
    s.set_mode_single_color(vec![Rgb::new(255, 0, 255)]).unwrap();
    rp.compare_values(1.0, s.channel_state(0).gamma(), 0.0);
    rp.compare_colors(Rgb::new(255, 0, 255), s.render(0, 255).unwrap());

    // Custom palette: inverted gray
    let inverted: Vec<Rgb> = (0..LUT_SIZE).map(|i| Rgb::gray(255 - i as u8)).collect();
    let table = ColorTable::from_colors(&inverted).unwrap();
    s.set_mode_custom_lut(table).unwrap();
    rp.compare_values(
        1.0,
        (s.color_mode_kind() == ColorModeKind::CustomLut) as u8 as f64,
        0.0,
    );
    rp.compare_colors(Rgb::WHITE, s.render(0, 0).unwrap());
    rp.compare_colors(Rgb::BLACK, s.render(0, 255).unwrap());

    // Packed RGB cannot be entered from a scalar session
    let err = s.set_mode(scopelut_display::ColorMode::PackedRgb, Vec::new()).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::UnsupportedOperation) as u8 as f64, 0.0);

    // Nor can a scalar mode display packed pixels
    let err = DisplaySession::grayscale(SampleType::Rgb24).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::UnsupportedOperation) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn display_packed_rgb_reg() {
    let mut rp = RegParams::new("display_packed_rgb");

    let mut s = DisplaySession::packed_rgb();
    let err = s.set_gamma(0, 1.5).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::UnsupportedOperation) as u8 as f64, 0.0);
    rp.compare_values(1.0, s.set_gamma(0, 1.0).is_ok() as u8 as f64, 0.0);

    // Each component scales independently
    s.set_scaling(0, 100, 200).unwrap();
    s.set_scaling(2, 0, 127).unwrap();
    let out = s.render_rgb(Rgb::new(150, 150, 150)).unwrap();
    rp.compare_colors(Rgb::new(128, 150, 255), out);

    // Component index must be 0..3
    let err = s.set_scaling(3, 0, 10).unwrap_err();
    rp.compare_values(1.0, (err.kind() == ErrorKind::InvalidArgument) as u8 as f64, 0.0);

    // Scaling invalidates component tables only on change
    let count = s.invalidation_count(0);
    s.set_scaling(0, 100, 200).unwrap();
    rp.compare_values(count as f64, s.invalidation_count(0) as f64, 0.0);
    s.set_scaling(0, 0, 255).unwrap();
    rp.compare_values((count + 1) as f64, s.invalidation_count(0) as f64, 0.0);

    assert!(rp.cleanup());
}
