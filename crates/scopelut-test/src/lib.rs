//! scopelut-test - Regression test framework for scopelut
//!
//! Each regression test creates a [`RegParams`], runs a numbered sequence
//! of comparisons, and asserts on [`RegParams::cleanup`] at the end so that
//! every failing comparison is reported, not only the first.
//!
//! # Usage
//!
//! ```ignore
//! use scopelut_test::RegParams;
//!
//! let mut rp = RegParams::new("gamma");
//! rp.compare_values(16.0, lut.get(64).green as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"; display
//!   mode additionally prints the LUTs passed to [`RegParams::display_lut`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Linear 8-bit gradient of `len` samples spanning 0..=255.
pub fn gradient_u8(len: usize) -> Vec<u8> {
    gradient(len, 255).into_iter().map(|v| v as u8).collect()
}

/// Linear 16-bit gradient of `len` samples spanning 0..=`max`.
pub fn gradient_u16(len: usize, max: u16) -> Vec<u16> {
    gradient(len, max as u32)
        .into_iter()
        .map(|v| v as u16)
        .collect()
}

fn gradient(len: usize, max: u32) -> Vec<u32> {
    if len < 2 {
        return vec![0; len];
    }
    (0..len)
        .map(|i| (i as u64 * max as u64 / (len as u64 - 1)) as u32)
        .collect()
}
