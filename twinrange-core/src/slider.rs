//! Event adapter — maps discrete input events onto [`RangeState`] transitions.
//!
//! Each event handler runs to completion: commit (or reject), then the
//! separation repair pass, then listener notification. Views computed after
//! an event therefore always observe the repaired pair.

use std::fmt;

use tracing::debug;

use crate::config::SliderConfig;
use crate::presentation::{NativeThumbCalibration, PresentationMapper, SliderView, ThumbCalibration};
use crate::state::{Commit, CommitResult, RangeState};
use crate::thumb::Thumb;

/// Receives every committed pair, including repairs. Never called for
/// rejected or merely drafted input.
pub trait ChangeListener {
    fn on_change(&mut self, low: i64, high: i64);
}

impl<F: FnMut(i64, i64)> ChangeListener for F {
    fn on_change(&mut self, low: i64, high: i64) {
        self(low, high)
    }
}

/// One slider widget: range state, presentation mapper and an optional
/// change listener, driven by discrete input events.
pub struct DoubleRangeSlider {
    id: String,
    state: RangeState,
    mapper: PresentationMapper<Box<dyn ThumbCalibration>>,
    listener: Option<Box<dyn ChangeListener>>,
}

impl DoubleRangeSlider {
    /// Build without a listener. The initial pair is re-validated.
    pub fn new(config: &SliderConfig) -> Self {
        let (state, _) = RangeState::reconciled(config);
        Self::assemble(config, state)
    }

    /// Build with a listener attached; a construction-time repair is
    /// reported to it like any other commit.
    pub fn with_listener(config: &SliderConfig, listener: impl ChangeListener + 'static) -> Self {
        let (state, repair) = RangeState::reconciled(config);
        let mut slider = Self::assemble(config, state);
        slider.listener = Some(Box::new(listener));
        if let Some(commit) = repair {
            slider.notify(commit);
        }
        slider
    }

    fn assemble(config: &SliderConfig, state: RangeState) -> Self {
        let calibration: Box<dyn ThumbCalibration> = Box::new(NativeThumbCalibration);
        Self {
            id: config.id.clone(),
            state,
            mapper: PresentationMapper::new(config.min, config.max, config.unit.clone())
                .with_calibration(calibration),
            listener: None,
        }
    }

    /// Replace the change listener. Nothing is replayed to it.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Swap the thumb offset calibration used by [`DoubleRangeSlider::view`].
    pub fn set_calibration(&mut self, calibration: impl ThumbCalibration + 'static) {
        let calibration: Box<dyn ThumbCalibration> = Box::new(calibration);
        let mapper = PresentationMapper::new(
            self.state.domain_min(),
            self.state.domain_max(),
            self.mapper.unit().to_string(),
        );
        self.mapper = mapper.with_calibration(calibration);
    }

    /// Identifier from the config.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read-only access to the underlying range state.
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    pub fn unit(&self) -> &str {
        self.mapper.unit()
    }

    /// Derived view of the current state for rendering.
    pub fn view(&self) -> SliderView {
        self.mapper.view(&self.state)
    }

    // ── Events ─────────────────────────────────────────────────────────

    /// Thumb dragged to `value`.
    pub fn drag(&mut self, thumb: Thumb, value: i64) -> CommitResult {
        let result = self.state.set_thumb_value(thumb, value);
        self.settle(&result);
        result
    }

    /// Tooltip text changed by a keystroke.
    pub fn type_text(&mut self, thumb: Thumb, text: &str) -> bool {
        self.state.edit_draft(thumb, text)
    }

    /// Enter pressed inside a tooltip.
    pub fn press_enter(&mut self, thumb: Thumb) -> CommitResult {
        let result = self.state.commit_draft(thumb);
        self.settle(&result);
        result
    }

    /// Tooltip lost focus. Nothing happens when the draft is unchanged.
    pub fn blur(&mut self, thumb: Thumb) -> Option<CommitResult> {
        if !self.state.is_draft_dirty(thumb) {
            return None;
        }
        Some(self.press_enter(thumb))
    }

    /// Thumb or tooltip gained focus.
    pub fn focus(&mut self, thumb: Thumb) {
        self.state.focus(thumb);
    }

    /// Pointer entered a thumb.
    pub fn hover(&mut self, thumb: Thumb) {
        self.state.hover(thumb);
    }

    /// Supply a fresh pair from outside (e.g. restored settings).
    ///
    /// The listener hears about it only when the committed pair changed.
    pub fn set_values(&mut self, low: i64, high: i64) -> Commit {
        let before = self.state.pair();
        self.state.reset(low, high);
        let after = self.state.pair();
        if after != before {
            self.notify(after);
        }
        after
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn settle(&mut self, result: &CommitResult) {
        if let Some(commit) = result.commit() {
            self.notify(commit);
        }
        if let Some(repair) = self.state.maintain_min_separation() {
            self.notify(repair);
        }
    }

    fn notify(&mut self, commit: Commit) {
        debug!(slider = %self.id, low = commit.low, high = commit.high, "change");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(commit.low, commit.high);
        }
    }
}

impl fmt::Debug for DoubleRangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleRangeSlider")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("unit", &self.mapper.unit())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
