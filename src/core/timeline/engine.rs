use std::collections::VecDeque;

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::animation::{
    Animation, FitAnimation, Inertia, INERTIA_START_DAYS_PER_SEC,
};
use super::item::{EntryRef, TimeFrameItem};
use super::layout::{self, TimelineLayout};
use super::selection::SelectionSync;
use super::ticks::{self, TickMark, TickUnit};
use super::viewport::{add_days, midnight, resolve_min_date, Viewport};

/// Pointer movement below this stays a click.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;
/// Press-to-release time above this is never a click.
pub const CLICK_MAX_MS: f64 = 320.0;
/// Pan samples older than this are pruned before velocity estimation.
pub const PAN_SAMPLE_WINDOW_MS: f64 = 120.0;
pub const PAN_SAMPLE_CAP: usize = 6;
/// Multiplicative zoom factor per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.12;
/// Vertical space reserved under the lanes for the baseline ruler.
pub const BASELINE_AREA_PX: f64 = 26.0;

/// Keyboard navigation keys the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKey {
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanSample {
    at_ms: f64,
    x: f64,
}

#[derive(Debug, Clone, Default)]
struct GestureState {
    pointer_down: bool,
    drag_active: bool,
    down_x: f64,
    down_y: f64,
    down_at_ms: f64,
    down_viewport: Option<NaiveDateTime>,
    down_hit: Option<Uuid>,
    samples: VecDeque<PanSample>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Upper date bound; injected so tests can pin the clock.
    pub today: NaiveDate,
    /// Frame the full range on first sized display, until the user interacts.
    pub auto_fit: bool,
}

/// The timeline visualization engine: viewport, gestures, animations, and
/// selection in one headless state machine. The hosting view feeds it pointer,
/// wheel, and keyboard events with explicit millisecond timestamps and reads
/// geometry back out; no UI toolkit types cross this boundary.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: EngineConfig,
    items: Vec<TimeFrameItem>,
    entries: Vec<EntryRef>,
    explicit_min_date: Option<NaiveDate>,
    viewport: Viewport,
    selection: SelectionSync,
    gesture: GestureState,
    animation: Animation,
    content_width: f64,
    content_height: f64,
    user_interacted: bool,
    fit_pending: bool,
    last_frame_ms: Option<f64>,
}

impl TimelineEngine {
    pub fn new(config: EngineConfig) -> Self {
        let min_date = resolve_min_date(None, &[], config.today);
        Self {
            config,
            items: Vec::new(),
            entries: Vec::new(),
            explicit_min_date: None,
            viewport: Viewport::new(min_date, config.today),
            selection: SelectionSync::new(config.today),
            gesture: GestureState::default(),
            animation: Animation::None,
            content_width: 0.0,
            content_height: 0.0,
            user_interacted: false,
            fit_pending: config.auto_fit,
            last_frame_ms: None,
        }
    }

    // ------------------------------------------------------------------
    // Bindable inputs
    // ------------------------------------------------------------------

    pub fn set_items(&mut self, items: Vec<TimeFrameItem>) {
        self.items = items;
        self.refresh_bounds();
        self.selection.retain_known(&self.items, &self.entries);
    }

    pub fn items(&self) -> &[TimeFrameItem] {
        &self.items
    }

    pub fn set_entries(&mut self, entries: Vec<EntryRef>) {
        self.entries = entries;
        self.selection.retain_known(&self.items, &self.entries);
    }

    /// Entries in the order the paired list renders them.
    pub fn entries(&self) -> &[EntryRef] {
        &self.entries
    }

    pub fn set_min_date(&mut self, min_date: Option<NaiveDate>) {
        self.explicit_min_date = min_date;
        self.refresh_bounds();
    }

    pub fn set_content_size(&mut self, width: f64, height: f64) {
        self.content_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.content_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.refresh_bounds();
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Host-driven zoom write; opts out of the pending auto-fit.
    pub fn set_zoom(&mut self, requested: f64) {
        self.fit_pending = false;
        self.viewport.set_zoom(requested, self.content_width);
    }

    pub fn viewport_start(&self) -> NaiveDateTime {
        self.viewport.start()
    }

    pub fn set_viewport_start(&mut self, candidate: NaiveDateTime) {
        self.fit_pending = false;
        self.viewport.set_start(candidate, self.content_width);
    }

    pub fn min_date(&self) -> NaiveDate {
        self.viewport.min_date()
    }

    pub fn today(&self) -> NaiveDate {
        self.config.today
    }

    fn refresh_bounds(&mut self) {
        let min_date = resolve_min_date(self.explicit_min_date, &self.items, self.config.today);
        self.viewport
            .set_bounds(min_date, self.config.today, self.content_width);
        self.selection.clamp_date(min_date, self.config.today);
    }

    // ------------------------------------------------------------------
    // Selection facade
    // ------------------------------------------------------------------

    pub fn selected_date(&self) -> NaiveDate {
        self.selection.selected_date()
    }

    pub fn selected_frame(&self) -> Option<Uuid> {
        self.selection.selected_frame()
    }

    pub fn selected_entry(&self) -> Option<Uuid> {
        self.selection.selected_entry()
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        let date = date.clamp(self.viewport.min_date(), self.config.today);
        self.selection.set_date(date, &self.items, &self.entries);
        self.viewport.ensure_date_visible(date, self.content_width);
    }

    pub fn select_frame(&mut self, id: Uuid) {
        self.selection.select_frame(id, &self.items, &self.entries);
        self.viewport
            .ensure_date_visible(self.selection.selected_date(), self.content_width);
    }

    /// External list selection (e.g. a click on an experience card).
    pub fn select_entry(&mut self, id: Uuid) {
        self.selection.select_entry(id, &self.items, &self.entries);
        self.viewport
            .ensure_date_visible(self.selection.selected_date(), self.content_width);
    }

    pub fn is_entry_sync_suppressed(&self) -> bool {
        self.selection.is_entry_sync_suppressed()
    }

    /// Clear a suppression window; stale tokens are ignored.
    pub fn clear_suppression(&mut self, token: u64) {
        self.selection.clear_suppression(token);
    }

    // ------------------------------------------------------------------
    // Geometry outputs
    // ------------------------------------------------------------------

    pub fn layout(&self) -> TimelineLayout {
        layout::layout(&self.items, &self.viewport, self.content_width)
    }

    pub fn tick_marks(&self) -> Vec<TickMark> {
        let schedule = ticks::select_schedule(&self.viewport, self.content_width);
        ticks::schedule_ticks(schedule, &self.viewport, self.content_width)
    }

    pub fn lane_height(&self, lane_count: usize) -> f64 {
        let available = (self.content_height - BASELINE_AREA_PX).max(0.0);
        layout::effective_lane_height(lane_count, available)
    }

    pub fn date_to_pixel(&self, date: NaiveDate) -> f64 {
        self.viewport.date_to_pixel(date)
    }

    pub fn pixel_to_date(&self, x: f64) -> NaiveDate {
        self.viewport.pixel_to_date(x)
    }

    /// Largest-width bar under the given point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Uuid> {
        let layout = self.layout();
        if layout.frames.is_empty() {
            return None;
        }
        let lane_height = self.lane_height(layout.lane_count);
        layout
            .frames
            .iter()
            .filter(|frame| x >= frame.start_x && x <= frame.end_x)
            .filter(|frame| {
                let top = frame.lane as f64 * lane_height;
                y >= top && y < top + lane_height
            })
            .max_by(|a, b| a.width().total_cmp(&b.width()))
            .map(|frame| frame.id)
    }

    // ------------------------------------------------------------------
    // Interaction controller
    // ------------------------------------------------------------------

    /// Every interaction entry point cancels automation first: user intent
    /// overrides fit/inertia, and auto-fit never fires after this.
    fn interact(&mut self) {
        self.user_interacted = true;
        self.fit_pending = false;
        self.animation = Animation::None;
        self.last_frame_ms = None;
    }

    pub fn user_interacted(&self) -> bool {
        self.user_interacted
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64, now_ms: f64) {
        self.interact();
        let mut samples = VecDeque::with_capacity(PAN_SAMPLE_CAP);
        samples.push_back(PanSample { at_ms: now_ms, x });
        self.gesture = GestureState {
            pointer_down: true,
            drag_active: false,
            down_x: x,
            down_y: y,
            down_at_ms: now_ms,
            down_viewport: Some(self.viewport.start()),
            down_hit: self.hit_test(x, y),
            samples,
        };
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: f64) {
        if !self.gesture.pointer_down {
            return;
        }
        if !self.gesture.drag_active {
            let dx = x - self.gesture.down_x;
            let dy = y - self.gesture.down_y;
            if (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD_PX {
                self.gesture.drag_active = true;
            }
        }
        if self.gesture.drag_active {
            if let Some(origin) = self.gesture.down_viewport {
                let delta_days = (self.gesture.down_x - x) / self.viewport.zoom().max(f64::EPSILON);
                self.viewport
                    .set_start(add_days(origin, delta_days), self.content_width);
            }
            self.push_pan_sample(x, now_ms);
        }
    }

    fn push_pan_sample(&mut self, x: f64, now_ms: f64) {
        let samples = &mut self.gesture.samples;
        samples.push_back(PanSample { at_ms: now_ms, x });
        while samples.len() > PAN_SAMPLE_CAP {
            samples.pop_front();
        }
        while let Some(front) = samples.front() {
            if now_ms - front.at_ms > PAN_SAMPLE_WINDOW_MS && samples.len() > 1 {
                samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Release the pointer. Returns a suppression token when the gesture
    /// resolved to a selection change the host must un-suppress next tick.
    pub fn on_pointer_up(&mut self, x: f64, y: f64, now_ms: f64) -> Option<u64> {
        if !self.gesture.pointer_down {
            return None;
        }
        let gesture = std::mem::take(&mut self.gesture);
        if !gesture.drag_active && now_ms - gesture.down_at_ms <= CLICK_MAX_MS {
            let up_hit = self.hit_test(x, y);
            match (gesture.down_hit, up_hit) {
                (Some(down), Some(up)) if down == up => self.select_frame(down),
                _ => {
                    let date = self.viewport.pixel_to_date(x);
                    self.select_date(date);
                }
            }
            return Some(self.selection.suppress_entry_sync());
        }
        if gesture.drag_active {
            if let Some(velocity) = fling_velocity(&gesture.samples, now_ms) {
                let viewport_velocity = -velocity / self.viewport.zoom().max(f64::EPSILON);
                if viewport_velocity.abs() > INERTIA_START_DAYS_PER_SEC {
                    self.animation = Animation::Inertia(Inertia::new(viewport_velocity));
                    self.last_frame_ms = Some(now_ms);
                }
            }
        }
        None
    }

    /// Zoom anchored at the pointer: the date under the cursor stays put.
    pub fn on_wheel(&mut self, x: f64, notches: f64, _now_ms: f64) {
        if !notches.is_finite() || notches == 0.0 {
            return;
        }
        self.interact();
        let anchor = self.viewport.pixel_to_datetime(x);
        let requested = self.viewport.zoom() * WHEEL_ZOOM_STEP.powf(notches);
        self.viewport.set_zoom(requested, self.content_width);
        let new_start = add_days(anchor, -x / self.viewport.zoom().max(f64::EPSILON));
        self.viewport.set_start(new_start, self.content_width);
    }

    /// Keyboard stepping. `coarse` promotes the step one unit coarser.
    pub fn on_key(&mut self, key: StepKey, coarse: bool) -> Option<u64> {
        self.interact();
        let date = match key {
            StepKey::Home => self.viewport.min_date(),
            StepKey::End => self.config.today,
            StepKey::Left | StepKey::Right => {
                let mut unit = step_unit_for_zoom(self.viewport.zoom());
                if coarse {
                    unit = promote(unit);
                }
                let direction = if key == StepKey::Left { -1 } else { 1 };
                step_date(self.selection.selected_date(), unit, direction)
            }
        };
        self.select_date(date);
        Some(self.selection.suppress_entry_sync())
    }

    // ------------------------------------------------------------------
    // Animation driver
    // ------------------------------------------------------------------

    /// Arm the fit-to-range transition once the control is sized, unless the
    /// host disabled auto-fit, set an explicit zoom/viewport, or the user
    /// already interacted.
    pub fn maybe_start_fit(&mut self, now_ms: f64) {
        if !self.fit_pending || self.user_interacted || self.content_width <= 0.0 {
            return;
        }
        self.fit_pending = false;
        let target_zoom = self
            .viewport
            .coerce_zoom(self.viewport.fit_zoom(self.content_width), self.content_width);
        let target_viewport = midnight(self.viewport.min_date());
        self.animation = Animation::Fit(FitAnimation {
            start_zoom: self.viewport.zoom(),
            target_zoom,
            start_viewport: self.viewport.start(),
            target_viewport,
            started_at_ms: now_ms,
        });
        self.last_frame_ms = Some(now_ms);
    }

    /// True while the frame callback must stay subscribed.
    pub fn needs_frame(&self) -> bool {
        self.animation.is_active()
    }

    /// Advance the active animation. Returns [`Self::needs_frame`] afterwards.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.animation.clone() {
            Animation::None => {}
            Animation::Fit(fit) => {
                let (zoom, viewport, done) = fit.sample(now_ms);
                self.viewport.set_zoom(zoom, self.content_width);
                self.viewport.set_start(viewport, self.content_width);
                if done {
                    self.animation = Animation::None;
                    self.last_frame_ms = None;
                } else {
                    self.last_frame_ms = Some(now_ms);
                }
            }
            Animation::Inertia(mut inertia) => {
                let dt = (now_ms - self.last_frame_ms.unwrap_or(now_ms)).max(0.0) / 1_000.0;
                let delta_days = inertia.advance(dt);
                let proposed = add_days(self.viewport.start(), delta_days);
                self.viewport.set_start(proposed, self.content_width);
                let hit_edge = dt > 0.0 && delta_days != 0.0 && self.viewport.start() != proposed;
                if inertia.is_done() || hit_edge {
                    self.animation = Animation::None;
                    self.last_frame_ms = None;
                } else {
                    self.animation = Animation::Inertia(inertia);
                    self.last_frame_ms = Some(now_ms);
                }
            }
        }
        self.needs_frame()
    }
}

/// Pointer velocity in px/sec over the most recent sample window.
fn fling_velocity(samples: &VecDeque<PanSample>, now_ms: f64) -> Option<f64> {
    let recent: Vec<&PanSample> = samples
        .iter()
        .filter(|s| now_ms - s.at_ms <= PAN_SAMPLE_WINDOW_MS)
        .collect();
    let first = recent.first()?;
    let last = recent.last()?;
    let dt_ms = last.at_ms - first.at_ms;
    if dt_ms <= 0.0 {
        return None;
    }
    Some((last.x - first.x) / dt_ms * 1_000.0)
}

fn step_unit_for_zoom(zoom: f64) -> TickUnit {
    if zoom >= 8.0 {
        TickUnit::Day
    } else if zoom >= 1.5 {
        TickUnit::Week
    } else if zoom >= 0.3 {
        TickUnit::Month
    } else {
        TickUnit::Year
    }
}

fn promote(unit: TickUnit) -> TickUnit {
    match unit {
        TickUnit::Day => TickUnit::Week,
        TickUnit::Week => TickUnit::Month,
        TickUnit::Month | TickUnit::Year => TickUnit::Year,
    }
}

fn step_date(date: NaiveDate, unit: TickUnit, direction: i32) -> NaiveDate {
    match unit {
        TickUnit::Day => date + Duration::days(direction as i64),
        TickUnit::Week => date + Duration::days(7 * direction as i64),
        TickUnit::Month => shift_months(date, direction),
        TickUnit::Year => shift_months(date, direction * 12),
    }
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new((-months) as u32))
            .unwrap_or(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timeline::animation::FIT_DURATION_MS;
    use crate::core::timeline::item::AccentKey;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> TimelineEngine {
        let mut engine = TimelineEngine::new(EngineConfig {
            today: date(2024, 1, 1),
            auto_fit: false,
        });
        engine.set_min_date(Some(date(2019, 1, 1)));
        engine.set_content_size(800.0, 200.0);
        engine
    }

    fn item(start: NaiveDate, end: NaiveDate, title: &str) -> TimeFrameItem {
        TimeFrameItem::new(Uuid::new_v4(), start, end, title, AccentKey::Work)
    }

    #[test]
    fn test_wheel_zoom_keeps_anchor_date_under_cursor() {
        let mut engine = engine();
        engine.set_zoom(2.0);
        engine.set_viewport_start(midnight(date(2021, 10, 1)));
        let x = engine.date_to_pixel(date(2022, 1, 1));
        engine.on_wheel(x, 3.0, 0.0);
        let after = engine.pixel_to_date(x);
        let drift = (after - date(2022, 1, 1)).num_days().abs();
        assert!(drift <= 1, "anchor drifted {} days", drift);
    }

    #[test]
    fn test_click_on_empty_area_selects_date_under_pointer() {
        let mut engine = engine();
        engine.set_zoom(2.0);
        engine.set_viewport_start(midnight(date(2021, 1, 1)));
        engine.on_pointer_down(100.0, 150.0, 0.0);
        engine.on_pointer_move(101.0, 150.0, 50.0); // under the drag threshold
        let token = engine.on_pointer_up(101.0, 150.0, 100.0);
        assert!(token.is_some());
        assert_eq!(engine.selected_date(), engine.pixel_to_date(101.0));
        assert_eq!(engine.selected_frame(), None);
    }

    #[test]
    fn test_click_on_bar_selects_frame_and_start_date() {
        let mut engine = engine();
        let items = vec![item(date(2021, 3, 1), date(2022, 3, 1), "Role")];
        let id = items[0].id;
        engine.set_items(items);
        engine.set_zoom(2.0);
        engine.set_viewport_start(midnight(date(2021, 1, 1)));
        let x = engine.date_to_pixel(date(2021, 6, 1));
        let lane_y = engine.lane_height(1) / 2.0;
        engine.on_pointer_down(x, lane_y, 0.0);
        engine.on_pointer_up(x, lane_y, 120.0);
        assert_eq!(engine.selected_frame(), Some(id));
        assert_eq!(engine.selected_date(), date(2021, 3, 1));
    }

    #[test]
    fn test_slow_release_is_not_a_click() {
        let mut engine = engine();
        engine.set_zoom(2.0);
        let before = engine.selected_date();
        engine.on_pointer_down(100.0, 50.0, 0.0);
        engine.on_pointer_up(100.0, 50.0, CLICK_MAX_MS + 100.0);
        assert_eq!(engine.selected_date(), before);
    }

    #[test]
    fn test_drag_pans_viewport_by_pixel_delta() {
        let mut engine = engine();
        engine.set_zoom(2.0);
        engine.set_viewport_start(midnight(date(2021, 1, 1)));
        let before = engine.viewport_start();
        engine.on_pointer_down(400.0, 50.0, 0.0);
        engine.on_pointer_move(300.0, 50.0, 40.0);
        engine.on_pointer_up(300.0, 50.0, 900.0);
        // 100px right-to-left drag at 2 px/day pans 50 days forward.
        let moved = super::super::viewport::days_between(before, engine.viewport_start());
        assert!((moved - 50.0).abs() < 0.5, "moved {} days", moved);
        assert_eq!(engine.selected_frame(), None);
    }

    #[test]
    fn test_fast_fling_starts_inertia_and_settles() {
        let mut engine = engine();
        engine.set_zoom(2.0);
        engine.set_viewport_start(midnight(date(2021, 1, 1)));
        engine.on_pointer_down(400.0, 50.0, 0.0);
        for step in 1..=5 {
            engine.on_pointer_move(400.0 - step as f64 * 30.0, 50.0, step as f64 * 20.0);
        }
        engine.on_pointer_up(250.0, 50.0, 100.0);
        assert!(engine.needs_frame());
        let mut now = 100.0;
        for _ in 0..600 {
            now += 16.0;
            if !engine.tick(now) {
                break;
            }
        }
        assert!(!engine.needs_frame());
    }

    #[test]
    fn test_fit_animation_lands_on_exact_target() {
        let mut engine = TimelineEngine::new(EngineConfig {
            today: date(2024, 1, 1),
            auto_fit: true,
        });
        engine.set_min_date(Some(date(2019, 1, 1)));
        engine.set_content_size(500.0, 200.0);
        engine.maybe_start_fit(0.0);
        assert!(engine.needs_frame());
        engine.tick(FIT_DURATION_MS / 2.0);
        engine.tick(FIT_DURATION_MS + 1.0);
        assert!(!engine.needs_frame());
        let fit = 500.0 / 1826.0;
        assert!((engine.zoom() - fit).abs() < 1e-9);
        assert_eq!(engine.viewport_start(), midnight(date(2019, 1, 1)));
    }

    #[test]
    fn test_interaction_cancels_pending_fit() {
        let mut engine = TimelineEngine::new(EngineConfig {
            today: date(2024, 1, 1),
            auto_fit: true,
        });
        engine.set_min_date(Some(date(2019, 1, 1)));
        engine.set_content_size(500.0, 200.0);
        engine.on_pointer_down(10.0, 10.0, 0.0);
        engine.on_pointer_up(10.0, 10.0, 10.0);
        engine.maybe_start_fit(20.0);
        assert!(!engine.needs_frame());
    }

    #[test]
    fn test_keyboard_step_unit_follows_zoom() {
        let mut engine = engine();
        engine.set_zoom(10.0);
        engine.select_date(date(2021, 6, 15));
        engine.on_key(StepKey::Right, false);
        assert_eq!(engine.selected_date(), date(2021, 6, 16));
        engine.on_key(StepKey::Right, true);
        assert_eq!(engine.selected_date(), date(2021, 6, 23));
        engine.set_zoom(0.5);
        engine.on_key(StepKey::Left, false);
        assert_eq!(engine.selected_date(), date(2021, 5, 23));
    }

    #[test]
    fn test_home_and_end_jump_to_bounds() {
        let mut engine = engine();
        engine.on_key(StepKey::Home, false);
        assert_eq!(engine.selected_date(), date(2019, 1, 1));
        engine.on_key(StepKey::End, false);
        assert_eq!(engine.selected_date(), date(2024, 1, 1));
    }

    #[test]
    fn test_selecting_frame_recenters_offscreen_date() {
        let mut engine = engine();
        let items = vec![item(date(2021, 6, 15), date(2022, 1, 1), "Role")];
        let id = items[0].id;
        engine.set_items(items);
        engine.set_zoom(8.0); // 100 visible days
        engine.set_viewport_start(midnight(date(2019, 1, 1)));
        engine.select_frame(id);
        assert_eq!(engine.selected_date(), date(2021, 6, 15));
        let x = engine.date_to_pixel(date(2021, 6, 15));
        assert!(x >= 0.0 && x <= engine.content_width());
    }

    #[test]
    fn test_hit_test_prefers_widest_bar() {
        let mut engine = engine();
        let wide = item(date(2020, 6, 1), date(2023, 6, 1), "Wide");
        let narrow = item(date(2021, 6, 1), date(2021, 8, 1), "Narrow");
        let wide_id = wide.id;
        engine.set_items(vec![wide, narrow]);
        engine.set_zoom(0.5);
        engine.set_viewport_start(midnight(date(2020, 1, 1)));
        // Probe inside the wide bar's lane at a date both bars span.
        let x = engine.date_to_pixel(date(2021, 7, 1));
        let layout = engine.layout();
        let lane_height = engine.lane_height(layout.lane_count);
        let wide_lane = layout
            .frames
            .iter()
            .find(|f| f.id == wide_id)
            .map(|f| f.lane)
            .unwrap();
        let y = wide_lane as f64 * lane_height + lane_height / 2.0;
        assert_eq!(engine.hit_test(x, y), Some(wide_id));
    }
}
