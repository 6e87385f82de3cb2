//! Frame rendering against a host pixel provider
//!
//! The host owns pixel storage and exposes it through [`PixelSource`]. A
//! session renders one channel (or the composite of all visible channels)
//! into an [`RgbFrame`], which the host canvas paints.

use crate::error::{DisplayError, DisplayResult};
use crate::mode::ColorModeKind;
use crate::session::DisplaySession;
use image::RgbImage;
use scopelut_core::{Rgb, SampleType, effective_max, lut_index};
use std::slice::ChunksExactMut;

/// Borrowed samples of one channel of a frame
#[derive(Debug, Clone, Copy)]
pub enum Samples<'a> {
    /// 8-bit gray samples
    Gray8(&'a [u8]),
    /// 16-bit gray samples
    Gray16(&'a [u16]),
    /// Packed RGB samples
    Rgb24(&'a [[u8; 3]]),
}

impl Samples<'_> {
    /// Sample type of these samples
    pub fn sample_type(&self) -> SampleType {
        match self {
            Samples::Gray8(_) => SampleType::Gray8,
            Samples::Gray16(_) => SampleType::Gray16,
            Samples::Rgb24(_) => SampleType::Rgb24,
        }
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        match self {
            Samples::Gray8(s) => s.len(),
            Samples::Gray16(s) => s.len(),
            Samples::Rgb24(s) => s.len(),
        }
    }

    /// Whether there are no pixels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that `component` names a component of these samples (0 for
    /// gray, 0..3 for packed RGB).
    pub fn check_component(&self, component: usize) -> DisplayResult<()> {
        let components = self.sample_type().components();
        if component >= components {
            return Err(DisplayError::InvalidArgument(format!(
                "component {component} out of range for {:?} samples (0..{components})",
                self.sample_type()
            )));
        }
        Ok(())
    }

    /// Visit the values of one component. Callers check `component` with
    /// [`Self::check_component`] first; gray samples ignore it.
    pub(crate) fn for_each_value(&self, component: usize, mut f: impl FnMut(u32)) {
        match self {
            Samples::Gray8(s) => s.iter().for_each(|&v| f(v as u32)),
            Samples::Gray16(s) => s.iter().for_each(|&v| f(v as u32)),
            Samples::Rgb24(s) => s
                .iter()
                .filter_map(|p| p.get(component))
                .for_each(|&v| f(v as u32)),
        }
    }
}

/// Host-side provider of raw pixels
pub trait PixelSource {
    /// Sample type shared by every channel
    fn sample_type(&self) -> SampleType;

    /// Frame width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Number of channels
    fn channel_count(&self) -> usize;

    /// Row-major samples of one channel
    fn samples(&self, channel: usize) -> DisplayResult<Samples<'_>>;
}

#[derive(Debug, Clone)]
enum ChannelData {
    Gray8(Vec<u8>),
    Gray16(Vec<u16>),
    Rgb24(Vec<[u8; 3]>),
}

impl ChannelData {
    fn samples(&self) -> Samples<'_> {
        match self {
            ChannelData::Gray8(v) => Samples::Gray8(v),
            ChannelData::Gray16(v) => Samples::Gray16(v),
            ChannelData::Rgb24(v) => Samples::Rgb24(v),
        }
    }
}

/// Owned multi-channel frame, the simplest [`PixelSource`]
#[derive(Debug, Clone)]
pub struct FrameStack {
    width: u32,
    height: u32,
    sample_type: SampleType,
    channels: Vec<ChannelData>,
}

impl FrameStack {
    /// Create an empty stack of `sample_type` frames.
    pub fn new(width: u32, height: u32, sample_type: SampleType) -> Self {
        Self {
            width,
            height,
            sample_type,
            channels: Vec::new(),
        }
    }

    fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn push(&mut self, data: ChannelData) -> DisplayResult<usize> {
        let samples = data.samples();
        if samples.sample_type() != self.sample_type {
            return Err(DisplayError::UnsupportedOperation(format!(
                "cannot add {:?} channel to a {:?} frame stack",
                samples.sample_type(),
                self.sample_type
            )));
        }
        if samples.len() != self.pixel_count() {
            return Err(DisplayError::DimensionMismatch {
                expected: self.pixel_count(),
                actual: samples.len(),
            });
        }
        self.channels.push(data);
        Ok(self.channels.len() - 1)
    }

    /// Append an 8-bit channel; returns its index.
    pub fn push_gray8(&mut self, pixels: Vec<u8>) -> DisplayResult<usize> {
        self.push(ChannelData::Gray8(pixels))
    }

    /// Append a 16-bit channel; returns its index.
    pub fn push_gray16(&mut self, pixels: Vec<u16>) -> DisplayResult<usize> {
        self.push(ChannelData::Gray16(pixels))
    }

    /// Append a packed RGB image; returns its index.
    pub fn push_rgb24(&mut self, pixels: Vec<[u8; 3]>) -> DisplayResult<usize> {
        self.push(ChannelData::Rgb24(pixels))
    }
}

impl PixelSource for FrameStack {
    fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn samples(&self, channel: usize) -> DisplayResult<Samples<'_>> {
        self.channels
            .get(channel)
            .map(ChannelData::samples)
            .ok_or_else(|| {
                DisplayError::InvalidArgument(format!(
                    "channel {channel} out of range (0..{})",
                    self.channels.len()
                ))
            })
    }
}

/// Rendered 24-bit frame, row-major RGB bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbFrame {
    fn black(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Frame width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Raw RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy into an `image` buffer for painting or export
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize * self.width as usize + x as usize) * 3;
            image::Rgb([self.data[i], self.data[i + 1], self.data[i + 2]])
        })
    }

    fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(3)
    }
}

impl DisplaySession {
    /// Samples of one channel, checked against the session and the
    /// source's dimensions.
    pub(crate) fn check_source<'a>(
        &self,
        source: &'a impl PixelSource,
        channel: usize,
    ) -> DisplayResult<Samples<'a>> {
        if source.sample_type() != self.sample_type() {
            return Err(DisplayError::UnsupportedOperation(format!(
                "session displays {:?} but source provides {:?}",
                self.sample_type(),
                source.sample_type()
            )));
        }
        let samples = source.samples(channel)?;
        let (width, height) = source.dimensions();
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(DisplayError::DimensionMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(samples)
    }

    /// Render one channel of `source`.
    ///
    /// For packed RGB sources `channel` selects the image and all three
    /// components are scaled.
    pub fn render_frame(
        &mut self,
        source: &impl PixelSource,
        channel: usize,
    ) -> DisplayResult<RgbFrame> {
        let samples = self.check_source(source, channel)?;
        let (width, height) = source.dimensions();
        let mut frame = RgbFrame::black(width, height);

        if let Samples::Rgb24(pixels) = samples {
            for (out, p) in frame.pixels_mut().zip(pixels) {
                out.copy_from_slice(&self.render_rgb(Rgb::from(*p))?.to_array());
            }
            return Ok(frame);
        }

        let state = self.channel_state(channel);
        let min = state.min();
        let max = effective_max(self.sample_type(), state.max());
        let lut = self.lut(channel)?;
        {
            let mut out = frame.pixels_mut();
            samples.for_each_value(0, |v| {
                if let Some(px) = out.next() {
                    px.copy_from_slice(&lut.get(lut_index(v, min, max)).to_array());
                }
            });
        }
        Ok(frame)
    }

    /// Additively blend every visible channel of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedOperation`] outside composite
    /// mode.
    pub fn render_composite_frame(&mut self, source: &impl PixelSource) -> DisplayResult<RgbFrame> {
        if self.color_mode_kind() != ColorModeKind::Composite {
            return Err(DisplayError::UnsupportedOperation(format!(
                "composite rendering requires composite mode, session is {:?}",
                self.color_mode_kind()
            )));
        }
        let (width, height) = source.dimensions();
        let mut frame = RgbFrame::black(width, height);
        for channel in 0..source.channel_count() {
            if !self.channel_state(channel).visible() {
                continue;
            }
            let layer = self.render_frame(source, channel)?;
            for (out, add) in frame.data.iter_mut().zip(layer.as_bytes()) {
                *out = out.saturating_add(*add);
            }
        }
        Ok(frame)
    }
}
