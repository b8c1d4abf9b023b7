use chrono::NaiveDateTime;

use super::viewport::{add_days, days_between};

/// Fit-to-range easing duration.
pub const FIT_DURATION_MS: f64 = 240.0;
/// Per-second velocity retention for inertial panning (`v *= 0.12^dt`).
pub const INERTIA_FRICTION_BASE: f64 = 0.12;
/// Inertia stops once |velocity| drops below this (days/second).
pub const INERTIA_STOP_DAYS_PER_SEC: f64 = 0.02;
/// Minimum fling velocity required to start inertia (days/second).
pub const INERTIA_START_DAYS_PER_SEC: f64 = 0.08;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased interpolation from the state at trigger time to a precomputed
/// target zoom + viewport start.
#[derive(Debug, Clone, PartialEq)]
pub struct FitAnimation {
    pub start_zoom: f64,
    pub target_zoom: f64,
    pub start_viewport: NaiveDateTime,
    pub target_viewport: NaiveDateTime,
    pub started_at_ms: f64,
}

impl FitAnimation {
    /// Sample the animation at `now_ms`. The final frame lands exactly on the
    /// target, not an interpolated approximation.
    pub fn sample(&self, now_ms: f64) -> (f64, NaiveDateTime, bool) {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        if elapsed >= FIT_DURATION_MS {
            return (self.target_zoom, self.target_viewport, true);
        }
        let t = ease_out_cubic(elapsed / FIT_DURATION_MS);
        let zoom = self.start_zoom + (self.target_zoom - self.start_zoom) * t;
        let span_days = days_between(self.start_viewport, self.target_viewport);
        let viewport = add_days(self.start_viewport, span_days * t);
        (zoom, viewport, false)
    }
}

/// Exponential friction: advance returns the viewport delta in days for this
/// frame and decays the stored velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inertia {
    pub velocity_days_per_sec: f64,
}

impl Inertia {
    pub fn new(velocity_days_per_sec: f64) -> Self {
        Self { velocity_days_per_sec }
    }

    pub fn advance(&mut self, dt_secs: f64) -> f64 {
        let dt = dt_secs.max(0.0);
        let delta = self.velocity_days_per_sec * dt;
        self.velocity_days_per_sec *= INERTIA_FRICTION_BASE.powf(dt);
        delta
    }

    pub fn is_done(&self) -> bool {
        self.velocity_days_per_sec.abs() < INERTIA_STOP_DAYS_PER_SEC
    }
}

/// Which animation owns the frame callback, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Animation {
    #[default]
    None,
    Fit(FitAnimation),
    Inertia(Inertia),
}

impl Animation {
    pub fn is_active(&self) -> bool {
        !matches!(self, Animation::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fit_starts_at_start_state() {
        let fit = FitAnimation {
            start_zoom: 4.0,
            target_zoom: 0.5,
            start_viewport: at(2021, 6, 1),
            target_viewport: at(2019, 1, 1),
            started_at_ms: 1_000.0,
        };
        let (zoom, viewport, done) = fit.sample(1_000.0);
        assert_eq!(zoom, 4.0);
        assert_eq!(viewport, at(2021, 6, 1));
        assert!(!done);
    }

    #[test]
    fn test_fit_lands_exactly_on_target() {
        let fit = FitAnimation {
            start_zoom: 4.0,
            target_zoom: 0.5,
            start_viewport: at(2021, 6, 1),
            target_viewport: at(2019, 1, 1),
            started_at_ms: 1_000.0,
        };
        for now in [1_000.0 + FIT_DURATION_MS, 1_000.0 + FIT_DURATION_MS + 500.0] {
            let (zoom, viewport, done) = fit.sample(now);
            assert_eq!(zoom, 0.5);
            assert_eq!(viewport, at(2019, 1, 1));
            assert!(done);
        }
    }

    #[test]
    fn test_fit_progress_is_monotonic() {
        let fit = FitAnimation {
            start_zoom: 1.0,
            target_zoom: 10.0,
            start_viewport: at(2019, 1, 1),
            target_viewport: at(2021, 1, 1),
            started_at_ms: 0.0,
        };
        let mut last_zoom = 0.0;
        for step in 0..=10 {
            let (zoom, _, _) = fit.sample(step as f64 * FIT_DURATION_MS / 10.0);
            assert!(zoom >= last_zoom);
            last_zoom = zoom;
        }
    }

    #[test]
    fn test_inertia_decays_to_rest_in_finite_time() {
        for initial in [12.0, -30.0, 0.5, -0.09] {
            let mut inertia = Inertia::new(initial);
            let mut elapsed = 0.0;
            while !inertia.is_done() {
                inertia.advance(1.0 / 60.0);
                elapsed += 1.0 / 60.0;
                assert!(elapsed < 30.0, "inertia failed to settle from {}", initial);
            }
        }
    }

    #[test]
    fn test_inertia_decay_rate_matches_friction_base() {
        let mut inertia = Inertia::new(10.0);
        inertia.advance(0.22);
        let ratio = inertia.velocity_days_per_sec / 10.0;
        assert!(ratio > 0.4 && ratio < 0.7, "ratio was {}", ratio);
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
