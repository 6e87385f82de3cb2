//! Intensity scaling regression test
//!
//! Scale-and-quantize of raw samples into LUT indices, including clipping,
//! empty ranges and per-component RGB tables.

use scopelut_core::{SampleType, component_table, effective_max, lut_index};
use scopelut_test::{RegParams, gradient_u16};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    // Identity scaling of 8-bit data
    for v in [0u32, 1, 127, 128, 254, 255] {
        rp.compare_values(v as f64, lut_index(v, 0, 255) as f64, 0.0);
    }

    // Clipping below min and above max
    rp.compare_values(0.0, lut_index(50, 100, 200) as f64, 0.0);
    rp.compare_values(0.0, lut_index(100, 100, 200) as f64, 0.0);
    rp.compare_values(255.0, lut_index(200, 100, 200) as f64, 0.0);
    rp.compare_values(255.0, lut_index(60000, 100, 200) as f64, 0.0);

    // Halfway rounds up: 0.5 * 255 = 127.5
    rp.compare_values(128.0, lut_index(150, 100, 200) as f64, 0.0);

    // Empty range is a step at min
    rp.compare_values(0.0, lut_index(9, 10, 10) as f64, 0.0);
    rp.compare_values(255.0, lut_index(10, 10, 10) as f64, 0.0);
    rp.compare_values(255.0, lut_index(11, 10, 10) as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn scale_monotone_reg() {
    let mut rp = RegParams::new("scale_monotone");

    // A 16-bit gradient maps to non-decreasing indices spanning 0..=255
    let samples = gradient_u16(4096, 4000);
    let max = effective_max(SampleType::Gray16, 4000);
    let indices: Vec<u8> = samples
        .iter()
        .map(|&v| lut_index(v as u32, 0, max))
        .collect();
    let monotone = indices.windows(2).all(|w| w[0] <= w[1]);
    rp.compare_values(1.0, if monotone { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, indices[0] as f64, 0.0);
    rp.compare_values(255.0, indices[indices.len() - 1] as f64, 0.0);

    // Stored max beyond the sample range is clamped when applied
    rp.compare_values(255.0, effective_max(SampleType::Gray8, 1000) as f64, 0.0);
    rp.compare_values(1000.0, effective_max(SampleType::Gray16, 1000) as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn component_table_reg() {
    let mut rp = RegParams::new("component_table");

    let table = component_table(100, 200);
    rp.compare_values(0.0, table[0] as f64, 0.0);
    rp.compare_values(0.0, table[100] as f64, 0.0);
    rp.compare_values(128.0, table[150] as f64, 0.0);
    rp.compare_values(255.0, table[200] as f64, 0.0);
    rp.compare_values(255.0, table[255] as f64, 0.0);

    // Full range is the identity
    let identity: Vec<u8> = (0..=255).collect();
    rp.compare_bytes(&identity, &component_table(0, 255));

    assert!(rp.cleanup());
}
