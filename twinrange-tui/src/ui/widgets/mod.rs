//! Reusable widgets.

pub mod range_slider;

pub use range_slider::RangeSliderWidget;
