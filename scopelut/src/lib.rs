//! scopelut - Per-channel display transforms for microscope images
//!
//! Maps raw 8-bit, 16-bit and packed RGB samples to display colors through
//! per-channel intensity scaling, gamma and 256-entry color lookup tables.
//!
//! # Overview
//!
//! - Core data model (samples, colors, scaling, LUT generation) from
//!   `scopelut-core`, re-exported at the top level
//! - Display sessions, color modes, frame rendering, autoscale and
//!   settings persistence under [`display`]
//!
//! # Example
//!
//! ```
//! use scopelut::display::DisplaySession;
//! use scopelut::{Rgb, SampleType};
//!
//! let mut session = DisplaySession::grayscale(SampleType::Gray8).unwrap();
//! session.set_hi_lo_highlight(true);
//! assert_eq!(session.render(0, 0).unwrap(), Rgb::BLUE);
//! assert_eq!(session.render(0, 255).unwrap(), Rgb::RED);
//! assert_eq!(session.render(0, 128).unwrap(), Rgb::gray(128));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scopelut_core::*;

// Re-export the display crate as a module
pub use scopelut_display as display;
