//! Presentation mapping — pure derived views of a [`RangeState`].
//!
//! Everything here is a function of the committed pair, the drafts and the
//! domain. The rendering layer consumes a [`SliderView`] per frame and never
//! reaches back into the state.

use serde::Serialize;

use crate::state::RangeState;
use crate::thumb::{ActiveThumb, Thumb};

/// Tooltip offset at 0 %, in pixels.
pub const NATIVE_THUMB_OFFSET_PX: f64 = 8.0;
/// Offset lost per percent of travel.
pub const NATIVE_THUMB_OFFSET_SLOPE: f64 = 0.15;

/// Approximate width of one monospace digit in a tooltip.
pub const TOOLTIP_DIGIT_PX: u32 = 7;
/// Approximate width of one unit-label character.
pub const TOOLTIP_UNIT_CHAR_PX: u32 = 13;
/// Unit labels shorter than this are measured as this many characters.
pub const TOOLTIP_MIN_UNIT_CHARS: u32 = 3;
/// Base width of a tooltip without a unit label.
pub const TOOLTIP_BARE_BASE_PX: u32 = 28;

pub const Z_INDEX_FRONT: u32 = 100;
pub const Z_INDEX_BACK: u32 = 99;

/// Pixel correction that centers a tooltip over a rendered thumb.
///
/// Native thumbs have their own width, so the visual thumb center drifts
/// relative to the linear percentage. Platforms with different thumb
/// geometry supply their own calibration.
pub trait ThumbCalibration {
    fn offset_px(&self, percent: f64) -> f64;
}

/// Calibration for the stock browser range input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NativeThumbCalibration;

impl ThumbCalibration for NativeThumbCalibration {
    fn offset_px(&self, percent: f64) -> f64 {
        NATIVE_THUMB_OFFSET_PX - percent * NATIVE_THUMB_OFFSET_SLOPE
    }
}

/// No correction at all; for renderers whose thumbs are zero-width glyphs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CenteredThumbCalibration;

impl ThumbCalibration for CenteredThumbCalibration {
    fn offset_px(&self, _percent: f64) -> f64 {
        0.0
    }
}

impl ThumbCalibration for Box<dyn ThumbCalibration> {
    fn offset_px(&self, percent: f64) -> f64 {
        (**self).offset_px(percent)
    }
}

/// Derived values for one thumb and its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbView {
    pub value: i64,
    pub draft: String,
    pub percent: f64,
    pub offset_px: f64,
    pub tooltip_width_px: u32,
    pub z_index: Option<u32>,
    pub active: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub min: i64,
    pub max: i64,
    pub unit: String,
    pub low: ThumbView,
    pub high: ThumbView,
    pub track_left_percent: f64,
    pub track_width_percent: f64,
    pub active: ActiveThumb,
}

impl SliderView {
    pub fn thumb(&self, thumb: Thumb) -> &ThumbView {
        match thumb {
            Thumb::Low => &self.low,
            Thumb::High => &self.high,
        }
    }
}

/// Maps domain values to percentages, offsets and tooltip widths.
#[derive(Debug, Clone)]
pub struct PresentationMapper<C = NativeThumbCalibration> {
    domain_min: i64,
    domain_max: i64,
    unit: String,
    calibration: C,
}

impl PresentationMapper<NativeThumbCalibration> {
    /// Mapper for `[domain_min, domain_max]` using the native thumb calibration.
    pub fn new(domain_min: i64, domain_max: i64, unit: impl Into<String>) -> Self {
        Self {
            domain_min,
            domain_max,
            unit: unit.into(),
            calibration: NativeThumbCalibration,
        }
    }
}

impl<C: ThumbCalibration> PresentationMapper<C> {
    /// Swap the thumb calibration, keeping domain and unit.
    pub fn with_calibration<D: ThumbCalibration>(self, calibration: D) -> PresentationMapper<D> {
        PresentationMapper {
            domain_min: self.domain_min,
            domain_max: self.domain_max,
            unit: self.unit,
            calibration,
        }
    }

    /// Unit label shown in tooltips; empty for bare numbers.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    fn span(&self) -> f64 {
        self.domain_max as f64 - self.domain_min as f64
    }

    /// Linear position of `value` in `[0, 100]`. Values outside the domain
    /// are clamped for display only.
    pub fn to_percentage(&self, value: i64) -> f64 {
        let clamped = value.max(self.domain_min).min(self.domain_max);
        (clamped as f64 - self.domain_min as f64) * 100.0 / self.span()
    }

    /// Left edge of the highlighted band.
    pub fn track_left_percent(&self, low: i64) -> f64 {
        (low as f64 - self.domain_min as f64).abs() / (self.span() / 100.0)
    }

    /// Width of the highlighted band between the thumbs.
    pub fn track_width_percent(&self, low: i64, high: i64) -> f64 {
        (low as f64 - high as f64).abs() / (self.span() / 100.0)
    }

    /// Pixel correction that centers a tooltip over the thumb at `value`.
    pub fn thumb_offset_hint(&self, value: i64) -> f64 {
        self.calibration.offset_px(self.to_percentage(value))
    }

    /// Tooltip width for `text`; an empty draft measures as one digit.
    pub fn tooltip_width(&self, text: &str) -> u32 {
        let digits = text.chars().count().max(1) as u32;
        let base = if self.unit.is_empty() {
            TOOLTIP_BARE_BASE_PX
        } else {
            let unit_chars = (self.unit.chars().count() as u32).max(TOOLTIP_MIN_UNIT_CHARS);
            unit_chars * TOOLTIP_UNIT_CHAR_PX
        };
        base + digits * TOOLTIP_DIGIT_PX
    }

    /// Everything the renderer needs for one frame: per-thumb positions,
    /// tooltip widths and stacking, plus the highlighted band.
    pub fn view(&self, state: &RangeState) -> SliderView {
        let active = state.last_active_thumb();
        let front = state.front_thumb();
        let thumb_view = |thumb: Thumb| {
            let value = state.value(thumb);
            let draft = state.draft(thumb).to_string();
            ThumbView {
                value,
                percent: self.to_percentage(value),
                offset_px: self.thumb_offset_hint(value),
                tooltip_width_px: self.tooltip_width(&draft),
                draft,
                z_index: z_index(thumb, front),
                active: active.is(thumb),
            }
        };

        SliderView {
            min: self.domain_min,
            max: self.domain_max,
            unit: self.unit.clone(),
            low: thumb_view(Thumb::Low),
            high: thumb_view(Thumb::High),
            track_left_percent: self.track_left_percent(state.low()),
            track_width_percent: self.track_width_percent(state.low(), state.high()),
            active,
        }
    }
}

/// Stacking order of a thumb's tooltip; unset until some thumb has been
/// brought to the front.
pub fn z_index(thumb: Thumb, front: Option<Thumb>) -> Option<u32> {
    front.map(|f| if f == thumb { Z_INDEX_FRONT } else { Z_INDEX_BACK })
}
