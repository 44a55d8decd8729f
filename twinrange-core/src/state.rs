//! Range state — the authoritative model behind a dual-thumb slider.
//!
//! `RangeState` holds the committed `low`/`high` pair, the raw tooltip drafts
//! and the presentation-only active/front thumb markers. Every mutation of the
//! committed pair goes through one of the transition functions below, which
//! either commit a validated value or return a [`Rejection`] and leave the
//! pair untouched.
//!
//! Invariant for every reachable state (given `max - min >= min_separation`):
//! `min <= low`, `low + min_separation <= high`, `high <= max`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::error::Rejection;
use crate::thumb::{ActiveThumb, Thumb};

/// A committed pair, as reported to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub low: i64,
    pub high: i64,
}

/// Outcome of a commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitResult {
    Committed(Commit),
    Rejected(Rejection),
}

impl CommitResult {
    /// True for `Committed`.
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitResult::Committed(_))
    }

    /// The committed pair, if any.
    pub fn commit(&self) -> Option<Commit> {
        match self {
            CommitResult::Committed(c) => Some(*c),
            CommitResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            CommitResult::Committed(_) => None,
            CommitResult::Rejected(r) => Some(r),
        }
    }
}

/// A draft that failed validation.
///
/// `clamp_hint` is the clamp-adjacent text (draft minus its last typed
/// character) the tooltip should briefly show, when the rules call for one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRejection {
    pub reason: Rejection,
    pub clamp_hint: Option<String>,
}

impl DraftRejection {
    fn new(reason: Rejection) -> Self {
        Self {
            reason,
            clamp_hint: None,
        }
    }

    fn with_hint(reason: Rejection, draft: &str) -> Self {
        let mut hint = draft.to_string();
        hint.pop();
        Self {
            reason,
            clamp_hint: Some(hint),
        }
    }
}

/// Committed pair, drafts and presentation markers of one slider.
///
/// Fields are private; mutate only through the transition functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeState {
    domain_min: i64,
    domain_max: i64,
    min_separation: i64,
    low: i64,
    high: i64,
    low_draft: String,
    high_draft: String,
    last_active_thumb: ActiveThumb,
    front_thumb: Option<Thumb>,
}

impl RangeState {
    /// Build a state from config, re-validating the initial pair.
    ///
    /// Precondition: `config.min < config.max` (see [`SliderConfig::validate`]).
    pub fn new(config: &SliderConfig) -> Self {
        Self::reconciled(config).0
    }

    /// Like [`RangeState::new`], also reporting the construction-time repair
    /// when the initial pair had to be changed.
    pub fn reconciled(config: &SliderConfig) -> (Self, Option<Commit>) {
        debug_assert!(config.min < config.max, "slider domain must be non-empty");
        let mut state = Self {
            domain_min: config.min,
            domain_max: config.max,
            min_separation: config.min_range.max(0),
            low: config.low_value,
            high: config.high_value,
            low_draft: String::new(),
            high_draft: String::new(),
            last_active_thumb: ActiveThumb::None,
            front_thumb: None,
        };
        let repair = state.reset(config.low_value, config.high_value);
        (state, repair)
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Lower domain bound.
    pub fn domain_min(&self) -> i64 {
        self.domain_min
    }

    /// Upper domain bound.
    pub fn domain_max(&self) -> i64 {
        self.domain_max
    }

    /// Minimum allowed `high - low`.
    pub fn min_separation(&self) -> i64 {
        self.min_separation
    }

    /// Committed low value.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Committed high value.
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Committed pair as a [`Commit`].
    pub fn pair(&self) -> Commit {
        Commit {
            low: self.low,
            high: self.high,
        }
    }

    /// Committed value of `thumb`.
    pub fn value(&self, thumb: Thumb) -> i64 {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    /// Text currently shown in the tooltip of `thumb`.
    pub fn draft(&self, thumb: Thumb) -> &str {
        match thumb {
            Thumb::Low => &self.low_draft,
            Thumb::High => &self.high_draft,
        }
    }

    /// True when the draft differs from the committed value's text.
    pub fn is_draft_dirty(&self, thumb: Thumb) -> bool {
        self.draft(thumb) != self.value(thumb).to_string()
    }

    /// Thumb that last committed or gained focus. Presentation only.
    pub fn last_active_thumb(&self) -> ActiveThumb {
        self.last_active_thumb
    }

    /// Thumb whose tooltip is stacked on top, if any.
    pub fn front_thumb(&self) -> Option<Thumb> {
        self.front_thumb
    }

    // ── Commits ────────────────────────────────────────────────────────

    /// Try to commit `raw` to `thumb`.
    ///
    /// Domain checks run before separation checks, so a value that is both
    /// out of domain and too close to its sibling reports `OutOfDomain`.
    pub fn set_thumb_value(&mut self, thumb: Thumb, raw: i64) -> CommitResult {
        if let Err(reason) = self.validate(thumb, raw) {
            trace!(%thumb, raw, %reason, "value rejected");
            return CommitResult::Rejected(reason);
        }
        self.write(thumb, raw);
        self.last_active_thumb = thumb.into();
        self.front_thumb = Some(thumb);
        debug!(%thumb, low = self.low, high = self.high, "value committed");
        CommitResult::Committed(self.pair())
    }

    /// Replace the committed pair with a caller-supplied one.
    ///
    /// The pair is ordered, clamped into the domain and repaired for
    /// separation. Returns the resulting pair when it differs from the
    /// arguments as given, so a swapped pair is reported too.
    pub fn reset(&mut self, low: i64, high: i64) -> Option<Commit> {
        let supplied = Commit { low, high };
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        self.low = lo.max(self.domain_min).min(self.domain_max);
        self.high = hi.max(self.domain_min).min(self.domain_max);
        self.revert_draft(Thumb::Low);
        self.revert_draft(Thumb::High);
        self.maintain_min_separation();
        let result = self.pair();
        (result != supplied).then_some(result)
    }

    /// Repair pass: push the pair apart when it sits closer than the minimum
    /// separation.
    ///
    /// The low thumb moves down to `high - min_separation` when
    /// `low > min_separation - 1` and the move stays inside the domain;
    /// otherwise the high thumb moves up to `low + min_separation`, capped
    /// at the domain max.
    ///
    /// Returns the repaired pair, or `None` when the pair already satisfied
    /// the separation. Calling it again right after is a no-op.
    pub fn maintain_min_separation(&mut self) -> Option<Commit> {
        let sep = self.min_separation;
        let lo = self.low.min(self.high);
        let hi = self.low.max(self.high);
        if hi.saturating_sub(lo) >= sep {
            return None;
        }

        let pull_low = lo > sep - 1 && hi.saturating_sub(sep) >= self.domain_min;
        let (low, high) = if pull_low {
            (hi.saturating_sub(sep), hi)
        } else {
            let high = lo.saturating_add(sep).min(self.domain_max);
            (lo.min(high.saturating_sub(sep)), high)
        };
        self.write(Thumb::Low, low);
        self.write(Thumb::High, high);
        debug!(low, high, min_separation = sep, "separation repaired");
        Some(self.pair())
    }

    // ── Drafts ─────────────────────────────────────────────────────────

    /// Record a keystroke's resulting text. A lone `"0"` is ignored.
    pub fn edit_draft(&mut self, thumb: Thumb, text: &str) -> bool {
        if text == "0" {
            trace!(%thumb, "lone zero ignored");
            return false;
        }
        *self.draft_mut(thumb) = text.to_string();
        trace!(%thumb, draft = text, "draft edited");
        true
    }

    /// Discard the draft and show the committed value again.
    pub fn revert_draft(&mut self, thumb: Thumb) {
        let text = self.value(thumb).to_string();
        *self.draft_mut(thumb) = text;
    }

    /// Validate the draft of `thumb` without committing it.
    pub fn check_draft(&self, thumb: Thumb) -> Result<i64, DraftRejection> {
        let text = self.draft(thumb);
        if text.is_empty() {
            return Err(DraftRejection::new(Rejection::EmptyDraft));
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DraftRejection::new(Rejection::MalformedInput(text.to_string())));
        }

        let value = match text.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                let reason = Rejection::OutOfDomain {
                    value: None,
                    min: self.domain_min,
                    max: self.domain_max,
                };
                return Err(DraftRejection::with_hint(reason, text));
            }
        };

        match self.validate(thumb, value) {
            Ok(()) => Ok(value),
            Err(reason) => {
                let hint = match &reason {
                    Rejection::OutOfDomain { .. } => value > self.domain_max,
                    Rejection::SeparationViolation { limit, .. } => match thumb {
                        Thumb::Low => true,
                        // High only hints once as many digits were typed as
                        // the smallest valid value has.
                        Thumb::High => text.len() >= limit.to_string().len(),
                    },
                    _ => false,
                };
                if hint {
                    Err(DraftRejection::with_hint(reason, text))
                } else {
                    Err(DraftRejection::new(reason))
                }
            }
        }
    }

    /// Commit the draft of `thumb` (enter key or blur). Any rejection,
    /// including an empty draft, reverts the draft to the committed value.
    pub fn commit_draft(&mut self, thumb: Thumb) -> CommitResult {
        match self.check_draft(thumb) {
            Ok(value) => self.set_thumb_value(thumb, value),
            Err(rejected) => {
                trace!(
                    %thumb,
                    reason = %rejected.reason,
                    hint = rejected.clamp_hint.as_deref().unwrap_or(""),
                    "draft reverted"
                );
                self.revert_draft(thumb);
                CommitResult::Rejected(rejected.reason)
            }
        }
    }

    // ── Presentation markers ───────────────────────────────────────────

    /// Thumb or its tooltip gained focus.
    pub fn focus(&mut self, thumb: Thumb) {
        self.last_active_thumb = thumb.into();
        self.front_thumb = Some(thumb);
    }

    /// Pointer moved over a thumb: bring it to the front without activating it.
    pub fn hover(&mut self, thumb: Thumb) {
        self.front_thumb = Some(thumb);
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn validate(&self, thumb: Thumb, raw: i64) -> Result<(), Rejection> {
        if raw < self.domain_min || raw > self.domain_max {
            return Err(Rejection::OutOfDomain {
                value: Some(raw),
                min: self.domain_min,
                max: self.domain_max,
            });
        }
        match thumb {
            Thumb::Low => {
                let limit = self.high.saturating_sub(self.min_separation);
                if raw > limit {
                    return Err(Rejection::SeparationViolation { thumb, value: raw, limit });
                }
            }
            Thumb::High => {
                let limit = self.low.saturating_add(self.min_separation);
                if raw < limit {
                    return Err(Rejection::SeparationViolation { thumb, value: raw, limit });
                }
            }
        }
        Ok(())
    }

    fn write(&mut self, thumb: Thumb, value: i64) {
        match thumb {
            Thumb::Low => self.low = value,
            Thumb::High => self.high = value,
        }
        self.revert_draft(thumb);
    }

    fn draft_mut(&mut self, thumb: Thumb) -> &mut String {
        match thumb {
            Thumb::Low => &mut self.low_draft,
            Thumb::High => &mut self.high_draft,
        }
    }
}
