//! Color modes and LUT generation dispatch
//!
//! Every mode shares the same scale-and-quantize step; they differ only in
//! how a channel's 256-entry LUT is generated and in which mutators they
//! honor:
//!
//! | mode        | color   | visibility | gamma          |
//! |-------------|---------|------------|----------------|
//! | Grayscale   | ignored | ignored    | yes            |
//! | SingleColor | yes     | ignored    | yes            |
//! | Composite   | yes     | yes        | yes            |
//! | CustomLut   | ignored | ignored    | yes            |
//! | PackedRgb   | ignored | ignored    | only 1.0       |

use crate::channel::ChannelState;
use scopelut_core::{
    ColorTable, Lut, SampleType, build_lut, component_table, effective_max,
};
use serde::{Deserialize, Serialize};

/// Active color mode of a display session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// Black-to-white ramp for every channel
    Grayscale,
    /// Black-to-color ramp, one channel shown at a time
    SingleColor,
    /// Black-to-color ramps, visible channels blended additively
    Composite,
    /// Externally supplied palette
    CustomLut(ColorTable),
    /// Three independently scaled 8-bit components, no gamma
    PackedRgb,
}

/// Data-free tag of a [`ColorMode`], used in persisted settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorModeKind {
    /// See [`ColorMode::Grayscale`]
    #[default]
    Grayscale,
    /// See [`ColorMode::SingleColor`]
    SingleColor,
    /// See [`ColorMode::Composite`]
    Composite,
    /// See [`ColorMode::CustomLut`]
    CustomLut,
    /// See [`ColorMode::PackedRgb`]
    PackedRgb,
}

impl ColorMode {
    /// Tag of this mode
    pub fn kind(&self) -> ColorModeKind {
        match self {
            ColorMode::Grayscale => ColorModeKind::Grayscale,
            ColorMode::SingleColor => ColorModeKind::SingleColor,
            ColorMode::Composite => ColorModeKind::Composite,
            ColorMode::CustomLut(_) => ColorModeKind::CustomLut,
            ColorMode::PackedRgb => ColorModeKind::PackedRgb,
        }
    }

    /// Whether `set_color` changes anything in this mode
    pub fn uses_channel_color(&self) -> bool {
        matches!(self, ColorMode::SingleColor | ColorMode::Composite)
    }

    /// Whether `set_channel_visible` changes anything in this mode
    pub fn uses_visibility(&self) -> bool {
        matches!(self, ColorMode::Composite)
    }

    /// Whether this is the packed RGB mode
    pub fn is_rgb(&self) -> bool {
        matches!(self, ColorMode::PackedRgb)
    }

    /// Whether this mode can display samples of `sample_type`
    pub fn accepts(&self, sample_type: SampleType) -> bool {
        self.is_rgb() == sample_type.is_rgb()
    }

    /// Generate the LUT for one channel (or, for packed RGB, one
    /// component).
    pub(crate) fn generate_lut(
        &self,
        channel: usize,
        state: &ChannelState,
        sample_type: SampleType,
        hi_lo: bool,
    ) -> Lut {
        match self {
            ColorMode::Grayscale => build_lut(&ColorTable::gray_ramp(), state.gamma(), hi_lo),
            ColorMode::SingleColor | ColorMode::Composite => {
                build_lut(&ColorTable::ramp(state.color()), state.gamma(), hi_lo)
            }
            ColorMode::CustomLut(table) => build_lut(table, state.gamma(), hi_lo),
            ColorMode::PackedRgb => {
                let max = effective_max(sample_type, state.max());
                Lut::single_component(channel, component_table(state.min(), max))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_names() {
        let mode = ColorMode::CustomLut(ColorTable::gray_ramp());
        assert_eq!(mode.kind(), ColorModeKind::CustomLut);
        assert_eq!(ColorMode::PackedRgb.kind(), ColorModeKind::PackedRgb);
    }

    #[test]
    fn test_mutator_table() {
        assert!(!ColorMode::Grayscale.uses_channel_color());
        assert!(ColorMode::SingleColor.uses_channel_color());
        assert!(ColorMode::Composite.uses_visibility());
        assert!(!ColorMode::SingleColor.uses_visibility());
        assert!(!ColorMode::CustomLut(ColorTable::gray_ramp()).uses_channel_color());
    }

    #[test]
    fn test_accepts_sample_type() {
        assert!(ColorMode::Grayscale.accepts(SampleType::Gray16));
        assert!(!ColorMode::Grayscale.accepts(SampleType::Rgb24));
        assert!(ColorMode::PackedRgb.accepts(SampleType::Rgb24));
        assert!(!ColorMode::PackedRgb.accepts(SampleType::Gray8));
    }
}
