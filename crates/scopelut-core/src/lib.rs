//! scopelut-core - Data model for per-channel display transforms
//!
//! A raw microscope sample becomes a displayed color in three steps:
//!
//! 1. **Scale** ([`scale`]): clip `raw` to the channel's `[min, max]` and
//!    normalize to `t` in `[0, 1]`
//! 2. **Quantize** ([`scale::quantize`]): `idx = round(t * 255)`
//! 3. **Look up** ([`lut`]): `LUT[idx]`, where the LUT was generated from a
//!    base [`ColorTable`], a gamma and the hi/lo highlight flag
//!
//! # Example
//!
//! ```
//! use scopelut_core::{ColorTable, Rgb, build_lut, lut_index};
//!
//! let lut = build_lut(&ColorTable::ramp(Rgb::GREEN), 1.0, false);
//! let idx = lut_index(128, 0, 255);
//! assert_eq!(lut.get(idx), Rgb::new(0, 128, 0));
//! ```

pub mod color;
pub mod error;
pub mod lut;
pub mod sample;
pub mod scale;

pub use color::Rgb;
pub use error::{Error, ErrorKind, Result};
pub use lut::{ColorTable, LUT_SIZE, Lut, apply_hi_lo, build_lut, gamma_remap};
pub use sample::SampleType;
pub use scale::{
    component_table, effective_max, lut_index, quantize, round_half_up, scale_fraction,
};
