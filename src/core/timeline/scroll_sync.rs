//! Debounced synchronization between the experience list's scroll position
//! and the shared timeline selection.
//!
//! Scroll events restart a short timer; when it expires the entry nearest the
//! top of the list viewport pushes its date into the selection. The reverse
//! direction (selection to animated scroll-to-entry) sets a guard so its own
//! scroll events do not bounce a date back.

pub const SCROLL_SYNC_DEBOUNCE_MS: f64 = 90.0;
pub const SCROLL_TOP_PADDING_PX: f64 = 8.0;
pub const LIST_SCROLL_ANIMATE_MS: f64 = 220.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSync {
    pending_since_ms: Option<f64>,
    selection_scroll_active: bool,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a list report by its kind. Only genuine `"scroll"` events arm
    /// the debounce; attach-time and scroll-to-entry measurements arrive as
    /// `"measure"` and must not move the selection.
    pub fn note_report(&mut self, kind: &str, now_ms: f64) {
        if kind == "scroll" {
            self.note_scroll(now_ms);
        }
    }

    /// Record a user scroll event, restarting the debounce window. Events
    /// produced by the selection-driven scroll animation are ignored.
    pub fn note_scroll(&mut self, now_ms: f64) {
        if self.selection_scroll_active {
            return;
        }
        self.pending_since_ms = Some(now_ms);
    }

    /// True once the debounce window has elapsed; consumes the pending event.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.pending_since_ms {
            Some(since) if now_ms - since >= SCROLL_SYNC_DEBOUNCE_MS => {
                self.pending_since_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn begin_selection_scroll(&mut self) {
        self.selection_scroll_active = true;
        self.pending_since_ms = None;
    }

    pub fn end_selection_scroll(&mut self) {
        self.selection_scroll_active = false;
    }

    pub fn is_selection_scroll_active(&self) -> bool {
        self.selection_scroll_active
    }
}

/// Index of the entry to treat as "current" for a scroll position: the last
/// entry whose top sits at or above the padding line, else the first one
/// below it.
pub fn entry_nearest_top(entry_tops: &[f64], scroll_top: f64) -> Option<usize> {
    if entry_tops.is_empty() {
        return None;
    }
    let line = scroll_top + SCROLL_TOP_PADDING_PX;
    let mut best_above: Option<(usize, f64)> = None;
    let mut best_below: Option<(usize, f64)> = None;
    for (index, &top) in entry_tops.iter().enumerate() {
        if top <= line {
            if best_above.map(|(_, t)| top >= t).unwrap_or(true) {
                best_above = Some((index, top));
            }
        } else if best_below.map(|(_, t)| top < t).unwrap_or(true) {
            best_below = Some((index, top));
        }
    }
    best_above.or(best_below).map(|(index, _)| index)
}

/// Clamp a scroll-to-entry target so the list never overscrolls.
pub fn clamp_scroll_target(target: f64, viewport_height: f64, content_height: f64) -> f64 {
    if !target.is_finite() {
        return 0.0;
    }
    let max = (content_height - viewport_height).max(0.0);
    target.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_restarts_on_each_scroll() {
        let mut sync = ScrollSync::new();
        sync.note_scroll(0.0);
        assert!(!sync.take_due(50.0));
        sync.note_scroll(50.0);
        // The earlier event no longer counts.
        assert!(!sync.take_due(100.0));
        assert!(sync.take_due(140.0));
        // Consumed: a second poll stays quiet.
        assert!(!sync.take_due(200.0));
    }

    #[test]
    fn test_measure_reports_do_not_arm_debounce() {
        let mut sync = ScrollSync::new();
        // The list sends one measurement when it attaches; it must not read
        // as a user scroll, or opening the page would reset the selection.
        sync.note_report("measure", 0.0);
        assert!(!sync.take_due(1_000.0));
        sync.note_report("scroll", 1_000.0);
        assert!(sync.take_due(1_000.0 + SCROLL_SYNC_DEBOUNCE_MS));
    }

    #[test]
    fn test_selection_scroll_guard_swallows_events() {
        let mut sync = ScrollSync::new();
        sync.begin_selection_scroll();
        sync.note_scroll(10.0);
        assert!(!sync.take_due(1_000.0));
        sync.end_selection_scroll();
        sync.note_scroll(1_000.0);
        assert!(sync.take_due(1_000.0 + SCROLL_SYNC_DEBOUNCE_MS));
    }

    #[test]
    fn test_entry_nearest_top_prefers_at_or_above_padding_line() {
        let tops = [0.0, 120.0, 240.0, 360.0];
        assert_eq!(entry_nearest_top(&tops, 0.0), Some(0));
        assert_eq!(entry_nearest_top(&tops, 115.0), Some(1));
        assert_eq!(entry_nearest_top(&tops, 130.0), Some(1));
        assert_eq!(entry_nearest_top(&tops, 345.0), Some(2));
        assert_eq!(entry_nearest_top(&tops, 500.0), Some(3));
    }

    #[test]
    fn test_entry_nearest_top_falls_back_to_first_below() {
        let tops = [100.0, 200.0];
        assert_eq!(entry_nearest_top(&tops, 0.0), Some(0));
        assert_eq!(entry_nearest_top(&[], 0.0), None);
    }

    #[test]
    fn test_clamp_scroll_target_bounds() {
        assert_eq!(clamp_scroll_target(-50.0, 300.0, 900.0), 0.0);
        assert_eq!(clamp_scroll_target(5_000.0, 300.0, 900.0), 600.0);
        assert_eq!(clamp_scroll_target(200.0, 300.0, 900.0), 200.0);
        // Content shorter than the viewport pins to zero.
        assert_eq!(clamp_scroll_target(50.0, 900.0, 300.0), 0.0);
        assert_eq!(clamp_scroll_target(f64::NAN, 300.0, 900.0), 0.0);
    }
}
