//! Persisted display settings
//!
//! A [`DisplaySettings`] value is a JSON-serializable snapshot of a
//! [`DisplaySession`]: the mode tag, every channel's range, gamma, color and
//! visibility, and the session-level highlight and autoscale options.
//! Custom palettes are not part of the snapshot; the caller keeps the
//! table and passes it back to [`DisplaySession::from_settings`].

use crate::autoscale::check_extrema_percentage;
use crate::error::{DisplayError, DisplayResult};
use crate::mode::{ColorMode, ColorModeKind};
use crate::session::{DisplaySession, RGB_COMPONENTS};
use log::{debug, warn};
use scopelut_core::{ColorTable, Rgb, SampleType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stored state of one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSettings {
    /// Lower scaling bound
    pub min: u32,
    /// Upper scaling bound as stored (clamped to the sample max on use)
    pub max: u32,
    /// Gamma exponent (1.0 is linear)
    pub gamma: f64,
    /// Ramp color; `None` in modes that ignore channel colors
    pub color: Option<Rgb>,
    /// Whether the channel is blended into a composite render
    pub visible: bool,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            min: 0,
            max: SampleType::Gray16.max_value(),
            gamma: 1.0,
            color: None,
            visible: true,
        }
    }
}

/// Stored state of a display session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Active color mode (custom palettes are stored separately)
    pub color_mode: ColorModeKind,
    /// Per-channel state, indexed by channel (component for packed RGB)
    pub channels: Vec<ChannelSettings>,
    /// Whether hi/lo highlighting is enabled
    pub highlight_saturated: bool,
    /// Percentage of pixels autoscale ignores at each end, in `[0, 50)`
    pub extrema_percentage: f64,
}

impl DisplaySettings {
    /// Check value ranges without building a session.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidArgument`] for a channel with
    /// `max < min` or a negative or non-finite gamma, or an extrema
    /// percentage outside `[0, 50)`.
    pub fn validate(&self) -> DisplayResult<()> {
        check_extrema_percentage(self.extrema_percentage)?;
        for (c, ch) in self.channels.iter().enumerate() {
            if ch.max < ch.min {
                return Err(DisplayError::InvalidArgument(format!(
                    "channel {c}: max {} < min {}",
                    ch.max, ch.min
                )));
            }
            if !ch.gamma.is_finite() || ch.gamma < 0.0 {
                return Err(DisplayError::InvalidArgument(format!(
                    "channel {c}: invalid gamma {}",
                    ch.gamma
                )));
            }
        }
        Ok(())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> DisplayResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate JSON settings.
    pub fn from_json(json: &str) -> DisplayResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write the settings to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> DisplayResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        debug!("saved display settings to {}", path.display());
        Ok(())
    }

    /// Read settings written by [`Self::save`].
    pub fn load(path: impl AsRef<Path>) -> DisplayResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        debug!("loaded display settings from {}", path.display());
        Self::from_json(&json)
    }
}

impl DisplaySession {
    /// Snapshot of this session's configuration.
    ///
    /// One entry is recorded for every channel in `0..channel_count()`.
    pub fn settings(&self) -> DisplaySettings {
        let keep_color = self.color_mode().uses_channel_color();
        let channels = (0..self.channel_count())
            .map(|c| {
                let state = self.channel_state(c);
                ChannelSettings {
                    min: state.min(),
                    max: state.max(),
                    gamma: state.gamma(),
                    color: keep_color.then(|| state.color()),
                    visible: state.visible(),
                }
            })
            .collect();
        DisplaySettings {
            color_mode: self.color_mode_kind(),
            channels,
            highlight_saturated: self.hi_lo_highlight(),
            extrema_percentage: self.extrema_percentage(),
        }
    }

    /// Rebuild a session from stored settings.
    ///
    /// Every channel goes through the same validating mutators as
    /// interactive edits. `table` is required for
    /// [`ColorModeKind::CustomLut`] and ignored otherwise.
    ///
    /// # Errors
    ///
    /// - [`DisplayError::InvalidArgument`] for out-of-range channel values
    ///   or a missing custom table
    /// - [`DisplayError::UnsupportedOperation`] if the stored mode cannot
    ///   display `sample_type`, or a packed RGB channel has gamma != 1.0
    pub fn from_settings(
        sample_type: SampleType,
        settings: &DisplaySettings,
        table: Option<ColorTable>,
    ) -> DisplayResult<Self> {
        let colors: Vec<Rgb> = settings
            .channels
            .iter()
            .map(|ch| ch.color.unwrap_or(Rgb::WHITE))
            .collect();
        let (mode, colors) = match settings.color_mode {
            ColorModeKind::Grayscale => (ColorMode::Grayscale, Vec::new()),
            ColorModeKind::SingleColor => (ColorMode::SingleColor, colors),
            ColorModeKind::Composite => (ColorMode::Composite, colors),
            ColorModeKind::CustomLut => {
                let table = table.ok_or_else(|| {
                    DisplayError::InvalidArgument(
                        "custom LUT settings need a color table".to_string(),
                    )
                })?;
                (ColorMode::CustomLut(table), Vec::new())
            }
            ColorModeKind::PackedRgb => (ColorMode::PackedRgb, Vec::new()),
        };
        let mut session = Self::new(sample_type, mode, colors)?;

        let mut channels = settings.channels.as_slice();
        if session.color_mode().is_rgb() && channels.len() > RGB_COMPONENTS {
            warn!(
                "settings list {} channels, packed RGB has {}; ignoring the rest",
                channels.len(),
                RGB_COMPONENTS
            );
            channels = &channels[..RGB_COMPONENTS];
        }
        for (c, ch) in channels.iter().enumerate() {
            session.set_scaling(c, i64::from(ch.min), i64::from(ch.max))?;
            session.set_gamma(c, ch.gamma)?;
            session.set_channel_visible(c, ch.visible)?;
            if let Some(color) = ch.color {
                session.set_color(c, color)?;
            }
        }
        session.set_hi_lo_highlight(settings.highlight_saturated);
        session.set_extrema_percentage(settings.extrema_percentage)?;
        Ok(session)
    }
}
