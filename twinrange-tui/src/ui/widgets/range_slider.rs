//! Dual-thumb range slider widget.
//!
//! Draws a [`SliderView`] into three rows:
//!
//! ```text
//!        [25]      [50]          tooltips (front thumb drawn last)
//! ───────●━━━━━━━━━●─────────    track with highlighted band
//! 0                       80     domain labels
//! ```
//!
//! Tooltip widths and offsets come from the view in pixels and are converted
//! to cells at one digit per cell.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use twinrange_core::presentation::TOOLTIP_DIGIT_PX;
use twinrange_core::{SliderView, Thumb};

use crate::theme;

const TRACK: &str = "─";
const BAND: &str = "━";
const THUMB: &str = "●";

/// Rows the widget needs.
pub const HEIGHT: u16 = 3;

pub struct RangeSliderWidget<'a> {
    view: &'a SliderView,
    focused: Option<Thumb>,
}

impl<'a> RangeSliderWidget<'a> {
    pub fn new(view: &'a SliderView) -> Self {
        Self { view, focused: None }
    }

    /// Mark `thumb` as the keyboard-focused one.
    pub fn focused(mut self, thumb: Option<Thumb>) -> Self {
        self.focused = thumb;
        self
    }
}

/// Column of a percentage on a track `width` cells wide.
pub fn column(percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = f64::from(width - 1);
    (percent.clamp(0.0, 100.0) / 100.0 * last).round() as u16
}

/// Pixels to whole cells.
pub fn px_to_cells(px: f64) -> i32 {
    (px / f64::from(TOOLTIP_DIGIT_PX)).round() as i32
}

/// Start column of a tooltip `len` cells wide centered on `center`, kept
/// inside `[0, width)`.
pub fn tooltip_start(center: i32, len: u16, width: u16) -> u16 {
    let len = i32::from(len.min(width));
    let start = center - len / 2;
    start.clamp(0, i32::from(width) - len) as u16
}

fn tooltip_text(draft: &str, unit: &str) -> String {
    if unit.is_empty() {
        format!("[{draft}]")
    } else {
        format!("[{draft} {unit}]")
    }
}

impl Widget for RangeSliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < HEIGHT || area.width < 2 {
            return;
        }
        let view = self.view;
        let width = area.width;
        let tooltip_row = area.y;
        let track_row = area.y + 1;
        let label_row = area.y + 2;

        // Track and band.
        buf.set_string(area.x, track_row, TRACK.repeat(width as usize), theme::muted());
        let band_start = column(view.track_left_percent, width);
        let band_end = column(view.track_left_percent + view.track_width_percent, width);
        if band_end > band_start {
            let band = BAND.repeat((band_end - band_start + 1) as usize);
            buf.set_string(area.x + band_start, track_row, band, theme::positive());
        }

        // Back thumb first so the front one wins where they overlap.
        let mut order = [Thumb::Low, Thumb::High];
        order.sort_by_key(|t| view.thumb(*t).z_index.unwrap_or(0));

        for thumb in order {
            let tv = view.thumb(thumb);
            let focused = self.focused == Some(thumb);
            let style: Style = theme::thumb(focused, tv.active);
            let col = column(tv.percent, width);
            buf.set_string(area.x + col, track_row, THUMB, style);

            let text = tooltip_text(&tv.draft, &view.unit);
            let cells = text.chars().count() as u16;
            let center = i32::from(col) + px_to_cells(tv.offset_px);
            let start = tooltip_start(center, cells, width);
            buf.set_stringn(area.x + start, tooltip_row, &text, (width - start) as usize, style);
        }

        // Domain labels.
        let (min_label, max_label) = if view.unit.is_empty() {
            (view.min.to_string(), view.max.to_string())
        } else {
            (format!("{} {}", view.min, view.unit), format!("{} {}", view.max, view.unit))
        };
        buf.set_string(area.x, label_row, &min_label, theme::muted());
        let max_len = max_label.chars().count() as u16;
        if max_len < width {
            buf.set_string(area.x + width - max_len, label_row, &max_label, theme::muted());
        }
    }
}
