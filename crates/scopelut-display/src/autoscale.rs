//! Histogram-based automatic scaling
//!
//! Builds a full-resolution histogram of one channel (one bin per
//! representable intensity) and picks the scaling range that leaves a
//! given percentage of pixels saturated at each end.

use crate::error::{DisplayError, DisplayResult};
use crate::frame::{PixelSource, Samples};
use crate::session::DisplaySession;
use log::debug;
use scopelut_core::SampleType;

/// Largest extrema percentage accepted (exclusive): ignoring half the
/// pixels at each end would leave nothing to scale.
pub const MAX_EXTREMA_PERCENTAGE: f64 = 50.0;

pub(crate) fn check_extrema_percentage(percentage: f64) -> DisplayResult<()> {
    if !(0.0..MAX_EXTREMA_PERCENTAGE).contains(&percentage) {
        return Err(DisplayError::InvalidArgument(format!(
            "extrema percentage must be in [0, {MAX_EXTREMA_PERCENTAGE}), got {percentage}"
        )));
    }
    Ok(())
}

/// Intensity histogram of one channel or RGB component
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: Vec<u64>,
    count: u64,
    sum: u64,
}

impl Histogram {
    /// Empty histogram spanning every intensity of `sample_type`
    pub fn new(sample_type: SampleType) -> Self {
        Self {
            bins: vec![0; sample_type.max_value() as usize + 1],
            count: 0,
            sum: 0,
        }
    }

    /// Histogram of one component of `samples` (component 0 for gray).
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] if `component` is not a
    /// component of the sample type.
    pub fn from_samples(samples: &Samples<'_>, component: usize) -> DisplayResult<Self> {
        samples.check_component(component)?;
        let mut hist = Self::new(samples.sample_type());
        samples.for_each_value(component, |v| hist.add(v));
        Ok(hist)
    }

    /// Count one sample. Values beyond the last bin land in it.
    pub fn add(&mut self, value: u32) {
        let bin = (value as usize).min(self.bins.len() - 1);
        self.bins[bin] += 1;
        self.count += 1;
        self.sum += value as u64;
    }

    /// Per-intensity counts
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Number of samples counted
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Lowest intensity present
    pub fn min(&self) -> Option<u32> {
        self.bins.iter().position(|&n| n > 0).map(|i| i as u32)
    }

    /// Highest intensity present
    pub fn max(&self) -> Option<u32> {
        self.bins.iter().rposition(|&n| n > 0).map(|i| i as u32)
    }

    /// Mean intensity
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }

    /// Scaling range that ignores `extrema_percentage` percent of the
    /// pixels at each end.
    ///
    /// With a percentage of 0 this is simply `(min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] if the histogram is empty
    /// or the percentage is outside `[0, 50)`.
    pub fn contrast_limits(&self, extrema_percentage: f64) -> DisplayResult<(u32, u32)> {
        check_extrema_percentage(extrema_percentage)?;
        if self.count == 0 {
            return Err(DisplayError::InvalidArgument(
                "cannot compute contrast limits of an empty histogram".to_string(),
            ));
        }
        let ignored = self.count as f64 * 0.01 * extrema_percentage;
        let low = Self::skip(self.bins.iter().enumerate(), ignored);
        let high = Self::skip(self.bins.iter().enumerate().rev(), ignored);
        Ok((low, high.max(low)))
    }

    /// First bin reached after skipping `ignored` pixels in iteration order.
    fn skip<'a>(bins: impl Iterator<Item = (usize, &'a u64)>, ignored: f64) -> u32 {
        let mut remaining = ignored;
        let mut last = 0;
        for (i, &n) in bins {
            if n == 0 {
                continue;
            }
            last = i;
            if remaining >= n as f64 {
                remaining -= n as f64;
                continue;
            }
            return i as u32;
        }
        last as u32
    }
}

impl DisplaySession {
    /// Set a channel's scaling from its histogram, ignoring
    /// [`Self::extrema_percentage`] percent of the pixels at each end.
    ///
    /// In packed RGB mode `channel` is the component index, taken from the
    /// first image of `source`. Returns the range applied.
    pub fn autoscale(
        &mut self,
        source: &impl PixelSource,
        channel: usize,
    ) -> DisplayResult<(u32, u32)> {
        self.check_channel(channel)?;
        let (image, component) = if self.color_mode().is_rgb() {
            (0, channel)
        } else {
            (channel, 0)
        };
        let samples = self.check_source(source, image)?;
        let hist = Histogram::from_samples(&samples, component)?;
        let (min, max) = hist.contrast_limits(self.extrema_percentage())?;
        debug!("autoscale channel {}: [{}, {}]", channel, min, max);
        self.set_scaling(channel, min as i64, max as i64)?;
        Ok((min, max))
    }
}
