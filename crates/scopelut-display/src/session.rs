//! DisplaySession - the per-viewer display transform
//!
//! A session owns the active [`ColorMode`] and the display state of every
//! channel. It is driven serially by one owner (the viewer's event
//! thread); no call blocks and nothing is locked internally.
//!
//! # Render pipeline
//!
//! ```text
//! raw ──► t = clamp((raw - min) / (max' - min), 0, 1) ──► idx = round(t*255) ──► LUT[idx]
//!         max' = min(max, sample max)
//! ```
//!
//! In packed RGB mode the scaling is folded into per-component tables and
//! `raw` indexes them directly.
//!
//! # Mode transitions
//!
//! Switching between the four scalar modes discards every channel's
//! min/max/gamma/color and starts from defaults. Packed RGB cannot be
//! entered or left; create a new session instead.

use crate::channel::{ChannelMap, ChannelState};
use crate::error::{DisplayError, DisplayResult};
use crate::mode::{ColorMode, ColorModeKind};
use log::{debug, trace};
use scopelut_core::{ColorTable, Lut, Rgb, SampleType, effective_max, lut_index};

/// Number of components in a packed RGB sample
pub const RGB_COMPONENTS: usize = 3;

/// Display transform state for one viewer
#[derive(Debug, Clone)]
pub struct DisplaySession {
    sample_type: SampleType,
    mode: ColorMode,
    channels: ChannelMap,
    hi_lo: bool,
    extrema_percentage: f64,
}

impl DisplaySession {
    /// Create a session in an explicit mode.
    ///
    /// `colors` gives the initial color of channels `0..colors.len()`;
    /// further channels default to white.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedOperation`] if the mode cannot
    /// display `sample_type` (packed RGB needs [`SampleType::Rgb24`], the
    /// scalar modes need a gray type).
    pub fn new(sample_type: SampleType, mode: ColorMode, colors: Vec<Rgb>) -> DisplayResult<Self> {
        if !mode.accepts(sample_type) {
            return Err(DisplayError::UnsupportedOperation(format!(
                "{:?} mode cannot display {:?} samples",
                mode.kind(),
                sample_type
            )));
        }
        Ok(Self::with_mode(sample_type, mode, colors))
    }

    /// Build a session whose mode is already known to accept `sample_type`.
    fn with_mode(sample_type: SampleType, mode: ColorMode, colors: Vec<Rgb>) -> Self {
        debug!("new display session: {:?} {:?}", sample_type, mode.kind());
        Self {
            sample_type,
            channels: ChannelMap::new(sample_type.max_value(), colors),
            mode,
            hi_lo: false,
            extrema_percentage: 0.0,
        }
    }

    /// Grayscale session
    pub fn grayscale(sample_type: SampleType) -> DisplayResult<Self> {
        Self::new(sample_type, ColorMode::Grayscale, Vec::new())
    }

    /// Single-color session with per-channel colors
    pub fn single_color(sample_type: SampleType, colors: Vec<Rgb>) -> DisplayResult<Self> {
        Self::new(sample_type, ColorMode::SingleColor, colors)
    }

    /// Composite session with per-channel colors
    pub fn composite(sample_type: SampleType, colors: Vec<Rgb>) -> DisplayResult<Self> {
        Self::new(sample_type, ColorMode::Composite, colors)
    }

    /// Session displaying every channel through a custom palette
    pub fn custom_lut(sample_type: SampleType, table: ColorTable) -> DisplayResult<Self> {
        Self::new(sample_type, ColorMode::CustomLut(table), Vec::new())
    }

    /// Packed RGB session
    pub fn packed_rgb() -> Self {
        Self::with_mode(SampleType::Rgb24, ColorMode::PackedRgb, Vec::new())
    }

    // ---------------------------------------------------------------
    //  Queries
    // ---------------------------------------------------------------

    /// Sample type of this session
    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    /// Active color mode
    pub fn color_mode(&self) -> &ColorMode {
        &self.mode
    }

    /// Tag of the active color mode
    pub fn color_mode_kind(&self) -> ColorModeKind {
        self.mode.kind()
    }

    /// Whether hi/lo highlighting is enabled
    pub fn hi_lo_highlight(&self) -> bool {
        self.hi_lo
    }

    /// Percentage of pixels ignored at each end by [`Self::autoscale`]
    pub fn extrema_percentage(&self) -> f64 {
        self.extrema_percentage
    }

    /// Display state of a channel; channels never written report defaults.
    pub fn channel_state(&self, channel: usize) -> ChannelState {
        self.channels.get(channel)
    }

    /// Whether the channel's LUT will be rebuilt on next access
    pub fn is_lut_dirty(&self, channel: usize) -> bool {
        self.channels
            .existing(channel)
            .is_none_or(ChannelState::is_dirty)
    }

    /// Number of times the channel's LUT has been invalidated by a mutation
    pub fn invalidation_count(&self, channel: usize) -> u64 {
        self.channels
            .existing(channel)
            .map_or(0, ChannelState::invalidations)
    }

    /// Number of channels with display state (touched or given a color)
    pub fn channel_count(&self) -> usize {
        if self.mode.is_rgb() {
            RGB_COMPONENTS
        } else {
            self.channels.extent()
        }
    }

    /// Initial colors the active mode was created with
    pub fn palette(&self) -> &[Rgb] {
        self.channels.palette()
    }

    pub(crate) fn check_channel(&self, channel: usize) -> DisplayResult<()> {
        if self.mode.is_rgb() && channel >= RGB_COMPONENTS {
            return Err(DisplayError::InvalidArgument(format!(
                "RGB component index {channel} out of range (0..{RGB_COMPONENTS})"
            )));
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    //  Mutators
    // ---------------------------------------------------------------

    /// Set the intensity scaling range of a channel.
    ///
    /// `max` may exceed the sample maximum; it is clamped when applied.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] if `min < 0`, `max < min`
    /// or `max` does not fit in 32 bits. The stored range is unchanged on
    /// error.
    pub fn set_scaling(&mut self, channel: usize, min: i64, max: i64) -> DisplayResult<()> {
        self.check_channel(channel)?;
        if min < 0 {
            return Err(DisplayError::InvalidArgument(format!(
                "scaling min must be >= 0, got {min}"
            )));
        }
        if max < min {
            return Err(DisplayError::InvalidArgument(format!(
                "scaling max must be >= min, got min {min}, max {max}"
            )));
        }
        let max = u32::try_from(max).map_err(|_| {
            DisplayError::InvalidArgument(format!("scaling max {max} out of range"))
        })?;
        // min <= max, so it fits as well
        let min = min as u32;

        let range_in_lut = self.mode.is_rgb();
        self.channels.entry(channel).set_range(min, max, range_in_lut);
        Ok(())
    }

    /// Set the gamma of a channel.
    ///
    /// Setting the gamma already stored is a no-op that keeps the cached
    /// LUT.
    ///
    /// # Errors
    ///
    /// - [`DisplayError::InvalidArgument`] if `gamma` is negative or not
    ///   finite
    /// - [`DisplayError::UnsupportedOperation`] in packed RGB mode for any
    ///   gamma other than 1.0
    pub fn set_gamma(&mut self, channel: usize, gamma: f64) -> DisplayResult<()> {
        self.check_channel(channel)?;
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(DisplayError::InvalidArgument(format!(
                "gamma must be a finite value >= 0, got {gamma}"
            )));
        }
        if self.mode.is_rgb() {
            if gamma != 1.0 {
                return Err(DisplayError::UnsupportedOperation(
                    "gamma is not supported for packed RGB".to_string(),
                ));
            }
            return Ok(());
        }
        self.channels.entry(channel).set_gamma(gamma);
        Ok(())
    }

    /// Set the ramp color of a channel.
    ///
    /// Grayscale, custom-LUT and packed RGB modes ignore the call.
    pub fn set_color(&mut self, channel: usize, color: Rgb) -> DisplayResult<()> {
        self.check_channel(channel)?;
        if !self.mode.uses_channel_color() {
            trace!("{:?} mode ignores color for channel {}", self.mode.kind(), channel);
            return Ok(());
        }
        self.channels.entry(channel).set_color(color);
        Ok(())
    }

    /// Show or hide a channel in the composite render.
    ///
    /// Modes other than composite ignore the call.
    pub fn set_channel_visible(&mut self, channel: usize, visible: bool) -> DisplayResult<()> {
        self.check_channel(channel)?;
        if !self.mode.uses_visibility() {
            trace!("{:?} mode ignores visibility for channel {}", self.mode.kind(), channel);
            return Ok(());
        }
        self.channels.entry(channel).set_visible(visible);
        Ok(())
    }

    /// Enable or disable hi/lo highlighting.
    ///
    /// Always invalidates every cached LUT. Packed RGB component tables do
    /// not carry highlight colors.
    pub fn set_hi_lo_highlight(&mut self, enable: bool) {
        self.hi_lo = enable;
        for state in self.channels.states_mut() {
            state.invalidate();
        }
    }

    /// Set the percentage of pixels [`Self::autoscale`] ignores at each end
    /// of the histogram.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] unless
    /// `0 <= percentage < 50`.
    pub fn set_extrema_percentage(&mut self, percentage: f64) -> DisplayResult<()> {
        crate::autoscale::check_extrema_percentage(percentage)?;
        self.extrema_percentage = percentage;
        Ok(())
    }

    // ---------------------------------------------------------------
    //  Mode transitions
    // ---------------------------------------------------------------

    /// Switch to another color mode, discarding all channel state.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedOperation`] when switching into
    /// or out of packed RGB.
    pub fn set_mode(&mut self, mode: ColorMode, colors: Vec<Rgb>) -> DisplayResult<()> {
        if mode.is_rgb() != self.mode.is_rgb() {
            return Err(DisplayError::UnsupportedOperation(format!(
                "cannot switch from {:?} to {:?}; packed RGB requires a new session",
                self.mode.kind(),
                mode.kind()
            )));
        }
        debug!("color mode {:?} -> {:?}", self.mode.kind(), mode.kind());
        self.mode = mode;
        self.channels = ChannelMap::new(self.sample_type.max_value(), colors);
        Ok(())
    }

    /// Switch to grayscale
    pub fn set_mode_grayscale(&mut self) -> DisplayResult<()> {
        self.set_mode(ColorMode::Grayscale, Vec::new())
    }

    /// Switch to single-color with new channel colors
    pub fn set_mode_single_color(&mut self, colors: Vec<Rgb>) -> DisplayResult<()> {
        self.set_mode(ColorMode::SingleColor, colors)
    }

    /// Switch to composite with new channel colors
    pub fn set_mode_composite(&mut self, colors: Vec<Rgb>) -> DisplayResult<()> {
        self.set_mode(ColorMode::Composite, colors)
    }

    /// Switch to a custom palette
    pub fn set_mode_custom_lut(&mut self, table: ColorTable) -> DisplayResult<()> {
        self.set_mode(ColorMode::CustomLut(table), Vec::new())
    }

    /// Drop every cached LUT. The next access rebuilds them.
    pub fn release(&mut self) {
        debug!("releasing {} cached channel LUTs", self.channels.len());
        for state in self.channels.states_mut() {
            state.release();
        }
    }

    // ---------------------------------------------------------------
    //  LUT access and rendering
    // ---------------------------------------------------------------

    /// The channel's LUT, rebuilt first if a mutation invalidated it.
    ///
    /// In packed RGB mode `channel` is the component index and the LUT
    /// holds that component's scaling table in its own color array.
    pub fn lut(&mut self, channel: usize) -> DisplayResult<&Lut> {
        self.check_channel(channel)?;
        let mode = &self.mode;
        let sample_type = self.sample_type;
        let hi_lo = self.hi_lo;
        let state = self.channels.entry(channel);
        Ok(state.lut_or_build(|state| {
            trace!("rebuilding LUT for channel {}", channel);
            mode.generate_lut(channel, state, sample_type, hi_lo)
        }))
    }

    /// LUT index a raw sample maps to in this channel.
    ///
    /// In packed RGB mode `raw` is an 8-bit component value and indexes
    /// the component table directly.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] for an RGB component index
    /// past blue, or a packed RGB `raw` above 255.
    pub fn lut_index(&self, channel: usize, raw: u32) -> DisplayResult<u8> {
        self.check_channel(channel)?;
        if self.mode.is_rgb() {
            return u8::try_from(raw).map_err(|_| {
                DisplayError::InvalidArgument(format!(
                    "packed RGB component value {raw} out of range (0..=255)"
                ))
            });
        }
        let state = self.channels.existing(channel);
        let (min, max) = match state {
            Some(s) => (s.min(), s.max()),
            None => (0, self.sample_type.max_value()),
        };
        Ok(lut_index(raw, min, effective_max(self.sample_type, max)))
    }

    /// Display color of one raw sample in one channel.
    pub fn render(&mut self, channel: usize, raw: u32) -> DisplayResult<Rgb> {
        let index = self.lut_index(channel, raw)?;
        Ok(self.lut(channel)?.get(index))
    }

    /// Display color of one packed RGB pixel.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedOperation`] outside packed RGB
    /// mode.
    pub fn render_rgb(&mut self, pixel: Rgb) -> DisplayResult<Rgb> {
        if !self.mode.is_rgb() {
            return Err(DisplayError::UnsupportedOperation(format!(
                "render_rgb requires packed RGB mode, session is {:?}",
                self.mode.kind()
            )));
        }
        let mut out = [0u8; RGB_COMPONENTS];
        for (k, (slot, raw)) in out.iter_mut().zip(pixel.to_array()).enumerate() {
            *slot = self.lut(k)?.get(raw).to_array()[k];
        }
        Ok(Rgb::from(out))
    }

    /// Additive blend of every visible channel.
    ///
    /// `raws[c]` is the raw sample of channel `c`; components saturate at
    /// 255.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnsupportedOperation`] outside composite
    /// mode.
    pub fn render_composite(&mut self, raws: &[u32]) -> DisplayResult<Rgb> {
        if !self.mode.uses_visibility() {
            return Err(DisplayError::UnsupportedOperation(format!(
                "render_composite requires composite mode, session is {:?}",
                self.mode.kind()
            )));
        }
        let mut out = Rgb::BLACK;
        for (channel, &raw) in raws.iter().enumerate() {
            if self.channels.is_visible(channel) {
                out = out.saturating_add(self.render(channel, raw)?);
            }
        }
        Ok(out)
    }
}
