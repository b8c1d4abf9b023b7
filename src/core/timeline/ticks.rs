use chrono::{Datelike, Duration, NaiveDate};

use super::layout::approx_text_width;
use super::viewport::Viewport;

/// Minimum clearance between two rendered tick labels.
pub const TICK_LABEL_MIN_GAP_PX: f64 = 20.0;
pub const TICK_LABEL_FONT_PX: f64 = 10.0;

// Generation guard for absurd windows; real windows stay far below this.
const MAX_TICKS_PER_WINDOW: usize = 20_000;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickUnit {
    Day,
    Week,
    Month,
    Year,
}

/// One candidate granularity for the baseline ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    pub unit: TickUnit,
    pub step: u32,
}

/// Candidate schedules, finest first. Selection takes the first whose labels
/// fit the visible window without crowding.
pub const TICK_SCHEDULES: [TickSchedule; 15] = [
    TickSchedule { unit: TickUnit::Day, step: 1 },
    TickSchedule { unit: TickUnit::Day, step: 2 },
    TickSchedule { unit: TickUnit::Day, step: 7 },
    TickSchedule { unit: TickUnit::Day, step: 14 },
    TickSchedule { unit: TickUnit::Week, step: 1 },
    TickSchedule { unit: TickUnit::Week, step: 2 },
    TickSchedule { unit: TickUnit::Week, step: 4 },
    TickSchedule { unit: TickUnit::Month, step: 1 },
    TickSchedule { unit: TickUnit::Month, step: 2 },
    TickSchedule { unit: TickUnit::Month, step: 4 },
    TickSchedule { unit: TickUnit::Month, step: 6 },
    TickSchedule { unit: TickUnit::Year, step: 1 },
    TickSchedule { unit: TickUnit::Year, step: 2 },
    TickSchedule { unit: TickUnit::Year, step: 5 },
    TickSchedule { unit: TickUnit::Year, step: 10 },
];

/// A baseline tick. Major ticks carry a label; minors are bare marks at the
/// unit step between labeled positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub date: NaiveDate,
    pub x: f64,
    pub label: Option<String>,
}

fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS[date.month0() as usize])
}

/// First calendar-aligned unit boundary at or after `from`.
fn align_forward(unit: TickUnit, from: NaiveDate) -> NaiveDate {
    match unit {
        TickUnit::Day => from,
        TickUnit::Week => {
            let back = from.weekday().num_days_from_monday() as i64;
            let monday = from - Duration::days(back);
            if monday < from {
                monday + Duration::days(7)
            } else {
                monday
            }
        }
        TickUnit::Month => {
            if from.day() == 1 {
                from
            } else {
                next_month_start(from)
            }
        }
        TickUnit::Year => {
            let jan1 = NaiveDate::from_ymd_opt(from.year(), 1, 1).unwrap_or(from);
            if jan1 < from {
                NaiveDate::from_ymd_opt(from.year() + 1, 1, 1).unwrap_or(from)
            } else {
                jan1
            }
        }
    }
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn next_unit(unit: TickUnit, date: NaiveDate) -> NaiveDate {
    match unit {
        TickUnit::Day => date + Duration::days(1),
        TickUnit::Week => date + Duration::days(7),
        TickUnit::Month => next_month_start(date),
        TickUnit::Year => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(date),
    }
}

/// Whether a unit boundary is a labeled (major) position for the schedule.
/// Alignment is absolute so labels do not jump while panning.
fn is_major(schedule: TickSchedule, date: NaiveDate) -> bool {
    let step = schedule.step.max(1) as i64;
    match schedule.unit {
        TickUnit::Day => date.num_days_from_ce() as i64 % step == 0,
        TickUnit::Week => (date.num_days_from_ce() as i64 / 7) % step == 0,
        TickUnit::Month => (date.year() as i64 * 12 + date.month0() as i64) % step == 0,
        TickUnit::Year => date.year() as i64 % step == 0,
    }
}

fn label_for(schedule: TickSchedule, date: NaiveDate) -> String {
    match schedule.unit {
        TickUnit::Day | TickUnit::Week => day_label(date),
        TickUnit::Month => month_label(date),
        TickUnit::Year => date.year().to_string(),
    }
}

/// All tick marks for a schedule across the visible window.
pub fn schedule_ticks(
    schedule: TickSchedule,
    viewport: &Viewport,
    content_width: f64,
) -> Vec<TickMark> {
    let window_start = viewport.start().date();
    let visible = viewport.visible_days(content_width).ceil() as i64;
    let window_end = window_start + Duration::days(visible.clamp(0, 365_000) + 1);

    let mut marks = Vec::new();
    let mut cursor = align_forward(schedule.unit, window_start);
    while cursor <= window_end && marks.len() < MAX_TICKS_PER_WINDOW {
        let label = if is_major(schedule, cursor) {
            Some(label_for(schedule, cursor))
        } else {
            None
        };
        marks.push(TickMark {
            date: cursor,
            x: viewport.date_to_pixel(cursor),
            label,
        });
        let next = next_unit(schedule.unit, cursor);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    marks
}

/// Pick the finest schedule whose labels keep [`TICK_LABEL_MIN_GAP_PX`] of
/// clearance across the window; fall back to the coarsest when all overlap.
pub fn select_schedule(viewport: &Viewport, content_width: f64) -> TickSchedule {
    for schedule in TICK_SCHEDULES {
        if labels_fit(schedule, viewport, content_width) {
            return schedule;
        }
    }
    TICK_SCHEDULES[TICK_SCHEDULES.len() - 1]
}

fn labels_fit(schedule: TickSchedule, viewport: &Viewport, content_width: f64) -> bool {
    let mut previous_end: Option<f64> = None;
    for mark in schedule_ticks(schedule, viewport, content_width) {
        let Some(label) = &mark.label else { continue };
        let width = approx_text_width(label, TICK_LABEL_FONT_PX);
        if let Some(end) = previous_end {
            if mark.x - end < TICK_LABEL_MIN_GAP_PX {
                return false;
            }
        }
        previous_end = Some(mark.x + width);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn viewport_at(zoom: f64, width: f64) -> Viewport {
        let mut vp = Viewport::new(date(2015, 1, 1), date(2024, 1, 1));
        vp.set_zoom(zoom, width);
        vp
    }

    #[test]
    fn test_high_zoom_selects_day_schedule() {
        let vp = viewport_at(48.0, 800.0);
        let schedule = select_schedule(&vp, 800.0);
        assert_eq!(schedule.unit, TickUnit::Day);
    }

    #[test]
    fn test_low_zoom_selects_coarse_schedule() {
        let vp = viewport_at(0.08, 300.0);
        let schedule = select_schedule(&vp, 300.0);
        assert!(matches!(schedule.unit, TickUnit::Month | TickUnit::Year));
    }

    #[test]
    fn test_selected_schedule_labels_do_not_crowd() {
        for (zoom, width) in [(0.1, 400.0), (0.5, 700.0), (4.0, 900.0), (48.0, 1200.0)] {
            let vp = viewport_at(zoom, width);
            let schedule = select_schedule(&vp, width);
            let marks = schedule_ticks(schedule, &vp, width);
            let mut previous_end: Option<f64> = None;
            let mut crowded = false;
            for mark in &marks {
                let Some(label) = &mark.label else { continue };
                if let Some(end) = previous_end {
                    if mark.x - end < TICK_LABEL_MIN_GAP_PX {
                        crowded = true;
                    }
                }
                previous_end = Some(mark.x + approx_text_width(label, TICK_LABEL_FONT_PX));
            }
            // The coarsest fallback may legitimately crowd; anything finer may not.
            if schedule != TICK_SCHEDULES[TICK_SCHEDULES.len() - 1] {
                assert!(!crowded, "schedule {:?} crowded at zoom {}", schedule, zoom);
            }
        }
    }

    #[test]
    fn test_month_ticks_align_to_month_starts() {
        let vp = viewport_at(1.0, 900.0);
        let marks = schedule_ticks(TickSchedule { unit: TickUnit::Month, step: 1 }, &vp, 900.0);
        assert!(!marks.is_empty());
        assert!(marks.iter().all(|m| m.date.day() == 1));
    }

    #[test]
    fn test_week_ticks_fall_on_mondays() {
        let vp = viewport_at(4.0, 900.0);
        let marks = schedule_ticks(TickSchedule { unit: TickUnit::Week, step: 2 }, &vp, 900.0);
        assert!(!marks.is_empty());
        assert!(marks.iter().all(|m| m.date.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_step_schedules_label_a_subset() {
        let vp = viewport_at(1.0, 900.0);
        let marks = schedule_ticks(TickSchedule { unit: TickUnit::Month, step: 2 }, &vp, 900.0);
        let majors = marks.iter().filter(|m| m.label.is_some()).count();
        let minors = marks.iter().filter(|m| m.label.is_none()).count();
        assert!(majors > 0);
        assert!(minors > 0);
    }
}
