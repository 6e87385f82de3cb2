//! Per-channel display state and the sparse channel map
//!
//! Channels may be touched in any order. Reads of a channel that was never
//! written synthesize its defaults; writes insert it on demand.
//!
//! Each state caches its LUT. The cache is dropped only when a mutator
//! detects an actual value change; writing the value already stored leaves
//! both the cache and the invalidation counter alone.

use scopelut_core::{Lut, Rgb};
use std::collections::BTreeMap;

/// Value equality used for change detection.
///
/// Floats compare bit for bit, so `0.0` and `-0.0` are different values
/// and `NaN` equals itself.
pub(crate) trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

impl SameValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl SameValue for u32 {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl SameValue for bool {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl SameValue for Rgb {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

/// Store `value` in `slot` unless it is already there. Returns whether the
/// slot changed.
fn update<T: SameValue>(slot: &mut T, value: T) -> bool {
    if slot.same_value(&value) {
        return false;
    }
    *slot = value;
    true
}

/// Display state of one channel (or one packed RGB component)
#[derive(Debug, Clone)]
pub struct ChannelState {
    min: u32,
    max: u32,
    gamma: f64,
    color: Rgb,
    visible: bool,
    lut: Option<Lut>,
    invalidations: u64,
}

impl ChannelState {
    pub(crate) fn new(max: u32, color: Rgb) -> Self {
        Self {
            min: 0,
            max,
            gamma: 1.0,
            color,
            visible: true,
            lut: None,
            invalidations: 0,
        }
    }

    /// Lower scaling bound
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper scaling bound as stored (may exceed the sample maximum)
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Gamma exponent
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Ramp color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Whether the channel is blended into a composite render
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the LUT must be rebuilt before its next use
    pub fn is_dirty(&self) -> bool {
        self.lut.is_none()
    }

    /// Number of times a mutation has invalidated this channel's LUT
    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }

    pub(crate) fn invalidate(&mut self) {
        self.lut = None;
        self.invalidations += 1;
    }

    fn invalidate_if(&mut self, changed: bool) -> bool {
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Set the scaling range. Only modes whose LUT depends on the range
    /// (packed RGB) pass `range_in_lut`; the others keep their cache.
    pub(crate) fn set_range(&mut self, min: u32, max: u32, range_in_lut: bool) -> bool {
        let changed = update(&mut self.min, min) | update(&mut self.max, max);
        if range_in_lut {
            self.invalidate_if(changed)
        } else {
            changed
        }
    }

    pub(crate) fn set_gamma(&mut self, gamma: f64) -> bool {
        let changed = update(&mut self.gamma, gamma);
        self.invalidate_if(changed)
    }

    pub(crate) fn set_color(&mut self, color: Rgb) -> bool {
        let changed = update(&mut self.color, color);
        self.invalidate_if(changed)
    }

    /// Visibility does not feed into the LUT.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        update(&mut self.visible, visible)
    }

    /// The cached LUT, built by `build` first if the cache is empty.
    pub(crate) fn lut_or_build(&mut self, build: impl FnOnce(&ChannelState) -> Lut) -> &Lut {
        let lut = match self.lut.take() {
            Some(lut) => lut,
            None => build(self),
        };
        self.lut.insert(lut)
    }

    /// Drop the cached LUT without counting it as an invalidation.
    pub(crate) fn release(&mut self) {
        self.lut = None;
    }
}

/// Sparse map from channel index to state, defaulting absent entries
#[derive(Debug, Clone)]
pub(crate) struct ChannelMap {
    states: BTreeMap<usize, ChannelState>,
    default_max: u32,
    palette: Vec<Rgb>,
}

impl ChannelMap {
    pub(crate) fn new(default_max: u32, palette: Vec<Rgb>) -> Self {
        Self {
            states: BTreeMap::new(),
            default_max,
            palette,
        }
    }

    /// Default color of a channel: its palette entry, or white.
    pub(crate) fn default_color(&self, channel: usize) -> Rgb {
        self.palette.get(channel).copied().unwrap_or(Rgb::WHITE)
    }

    pub(crate) fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    fn default_state(&self, channel: usize) -> ChannelState {
        ChannelState::new(self.default_max, self.default_color(channel))
    }

    /// State of a channel, synthesized if it was never written.
    pub(crate) fn get(&self, channel: usize) -> ChannelState {
        match self.states.get(&channel) {
            Some(state) => state.clone(),
            None => self.default_state(channel),
        }
    }

    /// Whether a channel is visible; absent channels are.
    pub(crate) fn is_visible(&self, channel: usize) -> bool {
        self.states.get(&channel).is_none_or(ChannelState::visible)
    }

    /// Existing state of a channel, if it was ever written.
    pub(crate) fn existing(&self, channel: usize) -> Option<&ChannelState> {
        self.states.get(&channel)
    }

    /// Mutable state of a channel, inserting defaults on first touch.
    pub(crate) fn entry(&mut self, channel: usize) -> &mut ChannelState {
        let default = self.default_state(channel);
        self.states.entry(channel).or_insert(default)
    }

    /// Number of channels that have been touched.
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Highest channel index touched, plus one.
    pub(crate) fn extent(&self) -> usize {
        self.states
            .keys()
            .next_back()
            .map_or(0, |&last| last + 1)
            .max(self.palette.len())
    }

    pub(crate) fn states_mut(&mut self) -> impl Iterator<Item = &mut ChannelState> {
        self.states.values_mut()
    }
}
