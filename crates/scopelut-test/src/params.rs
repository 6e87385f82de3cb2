//! Regression test parameters and operations

use crate::error::TestError;
use scopelut_core::{LUT_SIZE, Lut, Rgb};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and report failures (default)
    #[default]
    Compare,
    /// Compare, and also print the LUTs under test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison, the mode,
/// and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "gamma")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, error: TestError) -> bool {
        eprintln!("Failure in {}_reg: {}", self.test_name, error);
        self.failures.push(error);
        false
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            })
        } else {
            true
        }
    }

    /// Compare two colors exactly
    ///
    /// Counts as three value comparisons, one per component.
    pub fn compare_colors(&mut self, expected: Rgb, actual: Rgb) -> bool {
        let mut ok = true;
        for (e, a) in expected.to_array().into_iter().zip(actual.to_array()) {
            ok &= self.compare_values(e as f64, a as f64, 0.0);
        }
        ok
    }

    /// Compare two LUTs entry by entry
    pub fn compare_luts(&mut self, expected: &Lut, actual: &Lut) -> bool {
        self.index += 1;
        match (0..LUT_SIZE).find(|&i| expected.get(i as u8) != actual.get(i as u8)) {
            Some(entry) => self.fail(TestError::LutMismatch {
                index: self.index,
                entry,
            }),
            None => true,
        }
    }

    /// Compare two byte arrays
    pub fn compare_bytes(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;
        if data1 != data2 {
            self.fail(TestError::BytesMismatch {
                index: self.index,
                left: data1.len(),
                right: data2.len(),
            })
        } else {
            true
        }
    }

    /// Print a LUT in display mode; does nothing otherwise
    pub fn display_lut(&self, label: &str, lut: &Lut) {
        if !self.display() {
            return;
        }
        eprintln!("{}_reg: {}", self.test_name, label);
        for i in (0..LUT_SIZE).step_by(32).chain(std::iter::once(LUT_SIZE - 1)) {
            let c = lut.get(i as u8);
            eprintln!("  [{:3}] {:3} {:3} {:3}", i, c.red, c.green, c.blue);
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("bogus"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 3);
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_luts() {
        let a = Lut::single_component(0, [7u8; LUT_SIZE]);
        let mut b_table = [7u8; LUT_SIZE];
        b_table[42] = 8;
        let b = Lut::single_component(0, b_table);

        let mut rp = RegParams::new("lut");
        assert!(rp.compare_luts(&a, &a.clone()));
        assert!(!rp.compare_luts(&a, &b));
        match &rp.failures()[0] {
            TestError::LutMismatch { entry, .. } => assert_eq!(*entry, 42),
            other => panic!("unexpected failure {other:?}"),
        }
    }

    #[test]
    fn test_compare_colors_counts_components() {
        let mut rp = RegParams::new("colors");
        assert!(rp.compare_colors(Rgb::RED, Rgb::RED));
        assert_eq!(rp.index(), 3);
        assert!(!rp.compare_colors(Rgb::RED, Rgb::BLUE));
        assert!(!rp.cleanup());
    }
}
