//! scopelut-display - Display sessions for multichannel microscope images
//!
//! This crate turns raw samples into displayed colors:
//!
//! - **Sessions** ([`session`]): per-viewer state, scaling, gamma and LUT access
//! - **Color modes** ([`mode`]): grayscale, single color, composite, custom LUT, packed RGB
//! - **Channel state** ([`channel`]): per-channel range, gamma, color and the cached LUT
//! - **Frames** ([`frame`]): pixel sources and whole-frame rendering
//! - **Autoscale** ([`autoscale`]): histograms and contrast limits
//! - **Settings** ([`settings`]): JSON persistence of a session's configuration
//!
//! # Example
//!
//! ```
//! use scopelut_display::DisplaySession;
//! use scopelut_display::scopelut_core::{Rgb, SampleType};
//!
//! let mut session = DisplaySession::single_color(SampleType::Gray16, vec![Rgb::GREEN]).unwrap();
//! session.set_scaling(0, 1000, 2000).unwrap();
//! assert_eq!(session.render(0, 2000).unwrap(), Rgb::GREEN);
//! assert_eq!(session.render(0, 500).unwrap(), Rgb::BLACK);
//! ```

pub mod autoscale;
pub mod channel;
pub mod error;
pub mod frame;
pub mod mode;
pub mod session;
pub mod settings;

// Re-export core types
pub use scopelut_core;

// Re-export error types
pub use error::{DisplayError, DisplayResult};

// Re-export session and modes
pub use channel::ChannelState;
pub use mode::{ColorMode, ColorModeKind};
pub use session::{DisplaySession, RGB_COMPONENTS};

// Re-export frame rendering
pub use frame::{FrameStack, PixelSource, RgbFrame, Samples};

// Re-export autoscale and settings
pub use autoscale::{Histogram, MAX_EXTREMA_PERCENTAGE};
pub use settings::{ChannelSettings, DisplaySettings};
