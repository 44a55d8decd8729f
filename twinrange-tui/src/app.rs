//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Sliders report committed changes into a shared
//! change log through their listeners; everything else is plain fields.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::info;

use twinrange_core::{CommitResult, DoubleRangeSlider, Rejection, SliderSet, Thumb};

/// Oldest entries are dropped past this many changes.
pub const CHANGE_LOG_CAPACITY: usize = 50;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// One `on_change` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub slider: String,
    pub low: i64,
    pub high: i64,
}

pub type ChangeLog = Rc<RefCell<VecDeque<ChangeRecord>>>;

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub sliders: Vec<DoubleRangeSlider>,
    pub selected: usize,
    pub thumb: Thumb,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub changes: ChangeLog,
}

impl AppState {
    pub fn new(set: &SliderSet) -> Self {
        let changes: ChangeLog = Rc::new(RefCell::new(VecDeque::new()));
        let sliders = set
            .slider
            .iter()
            .map(|config| {
                let log = Rc::clone(&changes);
                let id = config.id.clone();
                DoubleRangeSlider::with_listener(config, move |low: i64, high: i64| {
                    let mut log = log.borrow_mut();
                    if log.len() == CHANGE_LOG_CAPACITY {
                        log.pop_front();
                    }
                    log.push_back(ChangeRecord {
                        slider: id.clone(),
                        low,
                        high,
                    });
                })
            })
            .collect();

        let mut app = Self {
            running: true,
            sliders,
            selected: 0,
            thumb: Thumb::Low,
            overlay: Overlay::None,
            status_message: None,
            changes,
        };
        app.focus_current();
        app
    }

    pub fn current(&self) -> Option<&DoubleRangeSlider> {
        self.sliders.get(self.selected)
    }

    fn current_mut(&mut self) -> Option<&mut DoubleRangeSlider> {
        self.sliders.get_mut(self.selected)
    }

    pub fn last_change(&self) -> Option<ChangeRecord> {
        self.changes.borrow().back().cloned()
    }

    // ── Navigation ─────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sliders.len() {
            self.leave_current();
            self.selected += 1;
            self.focus_current();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.leave_current();
            self.selected -= 1;
            self.focus_current();
        }
    }

    /// Move focus to the other thumb; the tooltip being left is blurred.
    pub fn switch_thumb(&mut self) {
        self.blur();
        self.thumb = self.thumb.other();
        self.focus_current();
    }

    fn leave_current(&mut self) {
        self.blur();
        self.thumb = Thumb::Low;
    }

    fn focus_current(&mut self) {
        let thumb = self.thumb;
        if let Some(slider) = self.current_mut() {
            slider.focus(thumb);
        }
    }

    // ── Slider events ──────────────────────────────────────────────────

    /// Drag the focused thumb by `delta`, stopping at its travel limit.
    pub fn nudge(&mut self, delta: i64) {
        let thumb = self.thumb;
        let Some(slider) = self.current_mut() else {
            return;
        };
        let state = slider.state();
        let (floor, ceiling) = match thumb {
            Thumb::Low => (state.domain_min(), state.high() - state.min_separation()),
            Thumb::High => (state.low() + state.min_separation(), state.domain_max()),
        };
        let current = state.value(thumb);
        let target = (current + delta).max(floor).min(ceiling);
        if target == current {
            self.set_warning(format!("{thumb} thumb is at its limit ({current})"));
            return;
        }
        let result = slider.drag(thumb, target);
        self.report(&result);
    }

    /// Append a typed character to the focused tooltip.
    pub fn type_char(&mut self, c: char) {
        let thumb = self.thumb;
        let Some(slider) = self.current_mut() else {
            return;
        };
        let mut text = slider.state().draft(thumb).to_string();
        text.push(c);
        slider.type_text(thumb, &text);
    }

    pub fn backspace(&mut self) {
        let thumb = self.thumb;
        let Some(slider) = self.current_mut() else {
            return;
        };
        let mut text = slider.state().draft(thumb).to_string();
        text.pop();
        slider.type_text(thumb, &text);
    }

    pub fn enter(&mut self) {
        let thumb = self.thumb;
        let Some(slider) = self.current_mut() else {
            return;
        };
        let result = slider.press_enter(thumb);
        self.report(&result);
    }

    /// Commit-on-blur for the focused tooltip.
    pub fn blur(&mut self) {
        let thumb = self.thumb;
        let Some(slider) = self.current_mut() else {
            return;
        };
        if let Some(result) = slider.blur(thumb) {
            self.report(&result);
        }
    }

    fn report(&mut self, result: &CommitResult) {
        let id = self.current().map(|s| s.id().to_string()).unwrap_or_default();
        match result {
            CommitResult::Committed(c) => {
                info!(slider = %id, low = c.low, high = c.high, "committed");
                self.set_status(format!("{id}: {}..{}", c.low, c.high));
            }
            CommitResult::Rejected(Rejection::EmptyDraft) => {
                self.set_warning(format!("{id}: empty value, reverted"));
            }
            CommitResult::Rejected(reason) => {
                info!(slider = %id, %reason, "rejected");
                self.set_error(format!("{id}: {reason}, reverted"));
            }
        }
    }

    // ── Status ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    pub fn quit(&mut self) {
        self.blur();
        self.running = false;
    }
}
