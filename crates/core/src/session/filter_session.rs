//! Debounced filter state for one dashboard session.
//!
//! Input changes are recorded as pending criteria. They become the applied
//! criteria only after no further change has arrived for the quiescence
//! window; until then the previously applied criteria stay in effect.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_DEBOUNCE_WINDOW;
use crate::filters::FilterCriteria;

#[derive(Debug, Clone)]
pub struct FilterSession {
    applied: FilterCriteria,
    pending: Option<FilterCriteria>,
    last_change: Option<Instant>,
    window: Duration,
}

impl FilterSession {
    pub fn new(initial: FilterCriteria) -> Self {
        Self::with_window(initial, DEFAULT_DEBOUNCE_WINDOW)
    }

    pub fn with_window(initial: FilterCriteria, window: Duration) -> Self {
        Self {
            applied: initial,
            pending: None,
            last_change: None,
            window,
        }
    }

    /// Criteria currently in effect.
    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    /// The latest input, applied or not.
    pub fn current(&self) -> &FilterCriteria {
        self.pending.as_ref().unwrap_or(&self.applied)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a change. Each change restarts the quiescence window. A change
    /// back to the applied criteria cancels the pending update.
    pub fn update(&mut self, criteria: FilterCriteria, now: Instant) {
        if criteria == self.applied {
            self.pending = None;
            self.last_change = None;
            return;
        }
        self.pending = Some(criteria);
        self.last_change = Some(now);
    }

    /// Applies a copy of the current criteria changed by `edit`.
    pub fn edit(&mut self, now: Instant, edit: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.current().clone();
        edit(&mut next);
        self.update(next, now);
    }

    /// When the pending change becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_change.map(|changed| changed + self.window)
    }

    /// Promotes the pending criteria once the window has elapsed. Returns
    /// true when the applied criteria changed and results need recomputing.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(due) if now >= due => self.flush(),
            _ => false,
        }
    }

    /// Promotes the pending criteria immediately.
    pub fn flush(&mut self) -> bool {
        self.last_change = None;
        match self.pending.take() {
            Some(next) => {
                self.applied = next;
                true
            }
            None => false,
        }
    }

    /// Drops the pending change, keeping the applied criteria.
    pub fn discard_pending(&mut self) {
        self.pending = None;
        self.last_change = None;
    }
}

impl Default for FilterSession {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}
