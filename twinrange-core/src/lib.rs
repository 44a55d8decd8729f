//! twinrange core — value reconciliation for a dual-thumb range slider.
//!
//! This crate contains everything that is not rendering:
//! - `RangeState`: committed low/high pair, tooltip drafts, validation and
//!   the minimum-separation repair pass
//! - `PresentationMapper`: percentages, tooltip offsets and widths, z-order
//! - `DoubleRangeSlider`: event adapter with change notification
//! - `SliderConfig` / `SliderSet`: construction parameters and TOML loading

pub mod config;
pub mod error;
pub mod presentation;
pub mod slider;
pub mod state;
pub mod thumb;

pub use config::{SliderConfig, SliderSet};
pub use error::{ConfigError, Rejection};
pub use presentation::{
    CenteredThumbCalibration, NativeThumbCalibration, PresentationMapper, SliderView,
    ThumbCalibration, ThumbView,
};
pub use slider::{ChangeListener, DoubleRangeSlider};
pub use state::{Commit, CommitResult, DraftRejection, RangeState};
pub use thumb::{ActiveThumb, Thumb};
