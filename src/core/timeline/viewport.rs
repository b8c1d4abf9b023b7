use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::item::TimeFrameItem;

/// Hard zoom bounds in pixels per day. The effective lower bound is raised to
/// the fit zoom when the whole range already fits the content width.
pub const MIN_ZOOM_PX_PER_DAY: f64 = 0.08;
pub const MAX_ZOOM_PX_PER_DAY: f64 = 48.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fractional days from `from` to `to`.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Shift a timestamp by a fractional number of days.
pub fn add_days(at: NaiveDateTime, days: f64) -> NaiveDateTime {
    if !days.is_finite() {
        return at;
    }
    at + Duration::seconds((days * SECONDS_PER_DAY).round() as i64)
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Lower date bound: the explicit override if present, else the earliest item
/// start, else one year before today.
pub fn resolve_min_date(
    explicit: Option<NaiveDate>,
    items: &[TimeFrameItem],
    today: NaiveDate,
) -> NaiveDate {
    if let Some(date) = explicit {
        return date;
    }
    items
        .iter()
        .map(|item| item.start_date())
        .min()
        .unwrap_or_else(|| today - Duration::days(365))
}

/// Visible date window: zoom (px/day) plus a sub-day start timestamp, both
/// always coerced into the valid range for the current bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    start: NaiveDateTime,
    min_date: NaiveDate,
    today: NaiveDate,
}

impl Viewport {
    pub fn new(min_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            zoom: MAX_ZOOM_PX_PER_DAY,
            start: midnight(min_date),
            min_date,
            today,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whole-range span in days, never less than one.
    pub fn range_days(&self) -> f64 {
        ((self.today - self.min_date).num_days() as f64).max(1.0)
    }

    /// Zoom at which the full range exactly fills the content width.
    pub fn fit_zoom(&self, content_width: f64) -> f64 {
        if !content_width.is_finite() || content_width <= 0.0 {
            return MIN_ZOOM_PX_PER_DAY;
        }
        content_width / self.range_days()
    }

    /// Clamp a requested zoom to `[max(0.08, fit), max(48.0, fit)]`. The
    /// control never zooms out past "whole range fits exactly".
    pub fn coerce_zoom(&self, requested: f64, content_width: f64) -> f64 {
        let fallback = self.zoom;
        let requested = if requested.is_finite() { requested } else { fallback };
        let fit = self.fit_zoom(content_width);
        let lo = MIN_ZOOM_PX_PER_DAY.max(fit);
        let hi = MAX_ZOOM_PX_PER_DAY.max(fit);
        requested.clamp(lo, hi)
    }

    pub fn set_zoom(&mut self, requested: f64, content_width: f64) {
        self.zoom = self.coerce_zoom(requested, content_width);
        self.start = self.coerce_start(self.start, content_width);
    }

    /// Days covered by the content width at the current zoom.
    pub fn visible_days(&self, content_width: f64) -> f64 {
        content_width.max(0.0) / self.zoom.max(MIN_ZOOM_PX_PER_DAY)
    }

    /// Clamp a candidate start to `[min_date, max(min_date, today - visible)]`.
    pub fn coerce_start(&self, candidate: NaiveDateTime, content_width: f64) -> NaiveDateTime {
        let lo = midnight(self.min_date);
        let hi_raw = add_days(midnight(self.today), -self.visible_days(content_width));
        let hi = hi_raw.max(lo);
        candidate.clamp(lo, hi)
    }

    pub fn set_start(&mut self, candidate: NaiveDateTime, content_width: f64) {
        self.start = self.coerce_start(candidate, content_width);
    }

    /// Update bounds, then re-clamp zoom and start against them.
    pub fn set_bounds(&mut self, min_date: NaiveDate, today: NaiveDate, content_width: f64) {
        self.min_date = min_date;
        self.today = today.max(min_date);
        self.zoom = self.coerce_zoom(self.zoom, content_width);
        self.start = self.coerce_start(self.start, content_width);
    }

    pub fn datetime_to_pixel(&self, at: NaiveDateTime) -> f64 {
        days_between(self.start, at) * self.zoom
    }

    pub fn date_to_pixel(&self, date: NaiveDate) -> f64 {
        self.datetime_to_pixel(midnight(date))
    }

    /// Inverse transform without date clamping, for pan math.
    pub fn pixel_to_datetime(&self, x: f64) -> NaiveDateTime {
        if !x.is_finite() {
            return self.start;
        }
        add_days(self.start, x / self.zoom.max(MIN_ZOOM_PX_PER_DAY))
    }

    /// Inverse transform clamped to `[min_date, today]`.
    pub fn pixel_to_date(&self, x: f64) -> NaiveDate {
        self.pixel_to_datetime(x)
            .date()
            .clamp(self.min_date, self.today)
    }

    /// Recenter the viewport on `date` when it falls outside the visible
    /// window. Returns true when the viewport moved.
    pub fn ensure_date_visible(&mut self, date: NaiveDate, content_width: f64) -> bool {
        let visible = self.visible_days(content_width);
        let at = midnight(date);
        let offset = days_between(self.start, at);
        if offset >= 0.0 && offset <= visible {
            return false;
        }
        let recentred = add_days(at, -visible / 2.0);
        let coerced = self.coerce_start(recentred, content_width);
        let moved = coerced != self.start;
        self.start = coerced;
        moved
    }
}
