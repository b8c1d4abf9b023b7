use chrono::NaiveDate;
use uuid::Uuid;

use super::item::{AccentKey, TimeFrameItem};
use super::viewport::Viewport;

/// Minimum horizontal clearance between two bars sharing a lane.
pub const LANE_GAP_PX: f64 = 8.0;
/// Preferred lane height; compressed when lanes overflow the content area.
pub const DESIRED_LANE_HEIGHT_PX: f64 = 30.0;
pub const MIN_LANE_HEIGHT_PX: f64 = 12.0;

pub const LABEL_FONT_PX: f64 = 11.0;
pub const LABEL_DOT_PX: f64 = 6.0;
pub const LABEL_DOT_GAP_PX: f64 = 5.0;
const LABEL_INNER_PAD_PX: f64 = 6.0;
const LABEL_MIN_SPACING_PX: f64 = 6.0;
const LABEL_SHIFT_ATTEMPTS: usize = 6;

/// Rough text width for a fixed-size UI font; the renderer clips labels to
/// their bar, so an estimate is sufficient here.
pub fn approx_text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * 0.6
}

/// A time frame clipped to the date bounds and projected into the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTimeFrame {
    pub id: Uuid,
    pub title: String,
    pub accent: AccentKey,
    pub clipped_start: NaiveDate,
    pub clipped_end: NaiveDate,
    pub start_x: f64,
    pub end_x: f64,
    pub lane: usize,
}

impl VisibleTimeFrame {
    pub fn width(&self) -> f64 {
        (self.end_x - self.start_x).max(0.0)
    }

    pub fn center_x(&self) -> f64 {
        (self.start_x + self.end_x) / 2.0
    }
}

/// Collision-resolved title label (marker dot + text), positioned in content
/// pixels. `x` is the left edge of the dot.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub frame_id: Uuid,
    pub lane: usize,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineLayout {
    pub frames: Vec<VisibleTimeFrame>,
    pub labels: Vec<LabelPlacement>,
    pub lane_count: usize,
}

/// Compute visible geometry for the given items and viewport. Pure; degenerate
/// input (no items, zero width) yields an empty layout instead of failing.
pub fn layout(items: &[TimeFrameItem], viewport: &Viewport, content_width: f64) -> TimelineLayout {
    if items.is_empty() || !content_width.is_finite() || content_width <= 0.0 {
        return TimelineLayout::default();
    }

    let min_date = viewport.min_date();
    let max_date = viewport.today();
    let window_start = viewport.start();
    let window_end = super::viewport::add_days(window_start, viewport.visible_days(content_width));

    let mut frames: Vec<VisibleTimeFrame> = Vec::new();
    for item in items {
        let clipped_start = item.start_date().max(min_date);
        let clipped_end = item.end_date().min(max_date);
        if clipped_end < clipped_start {
            continue;
        }
        // Drop frames entirely outside the visible window.
        if super::viewport::midnight(clipped_end) < window_start
            || super::viewport::midnight(clipped_start) > window_end
        {
            continue;
        }
        frames.push(VisibleTimeFrame {
            id: item.id,
            title: item.title.clone(),
            accent: item.accent,
            clipped_start,
            clipped_end,
            start_x: viewport.date_to_pixel(clipped_start),
            end_x: viewport.date_to_pixel(clipped_end),
            lane: 0,
        });
    }

    // Deterministic order: start asc, longer bars first, title as tie-break.
    frames.sort_by(|a, b| {
        a.start_x
            .total_cmp(&b.start_x)
            .then(b.end_x.total_cmp(&a.end_x))
            .then_with(|| a.title.cmp(&b.title))
    });

    // Greedy interval partitioning: first lane whose last bar ends early
    // enough takes the frame, otherwise a new lane opens.
    let mut lane_ends: Vec<f64> = Vec::new();
    for frame in frames.iter_mut() {
        let lane = lane_ends
            .iter()
            .position(|&end| end <= frame.start_x - LANE_GAP_PX);
        match lane {
            Some(lane) => {
                lane_ends[lane] = frame.end_x;
                frame.lane = lane;
            }
            None => {
                frame.lane = lane_ends.len();
                lane_ends.push(frame.end_x);
            }
        }
    }

    let labels = place_labels(&frames);
    TimelineLayout {
        frames,
        labels,
        lane_count: lane_ends.len(),
    }
}

/// Lane height after compressing the desired height into the available space.
pub fn effective_lane_height(lane_count: usize, available_height: f64) -> f64 {
    if lane_count == 0 || !available_height.is_finite() || available_height <= 0.0 {
        return DESIRED_LANE_HEIGHT_PX;
    }
    (available_height / lane_count as f64)
        .min(DESIRED_LANE_HEIGHT_PX)
        .max(MIN_LANE_HEIGHT_PX)
}

/// Best-effort 1-D label de-collision within each lane. Candidates are
/// processed in (lane, center, title) order; a label that cannot be cleared
/// within the attempt budget keeps its clamped desired position even if it
/// still overlaps.
fn place_labels(frames: &[VisibleTimeFrame]) -> Vec<LabelPlacement> {
    let mut candidates: Vec<&VisibleTimeFrame> =
        frames.iter().filter(|f| !f.title.is_empty()).collect();
    candidates.sort_by(|a, b| {
        a.lane
            .cmp(&b.lane)
            .then(a.center_x().total_cmp(&b.center_x()))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut placed: Vec<LabelPlacement> = Vec::new();
    for frame in candidates {
        let width = LABEL_DOT_PX + LABEL_DOT_GAP_PX + approx_text_width(&frame.title, LABEL_FONT_PX);
        let lo = frame.start_x + LABEL_INNER_PAD_PX;
        let hi = frame.end_x - LABEL_INNER_PAD_PX - width;
        let clamp_into_bar = |x: f64| if hi > lo { x.clamp(lo, hi) } else { lo };
        let desired = clamp_into_bar(frame.center_x() - width / 2.0);

        let mut x = desired;
        let mut resolved = false;
        for _ in 0..LABEL_SHIFT_ATTEMPTS {
            let conflicts: Vec<&LabelPlacement> = placed
                .iter()
                .filter(|p| p.lane == frame.lane)
                .filter(|p| {
                    x - LABEL_MIN_SPACING_PX < p.x + p.width && x + width + LABEL_MIN_SPACING_PX > p.x
                })
                .collect();
            if conflicts.is_empty() {
                resolved = true;
                break;
            }
            let rightmost = conflicts
                .iter()
                .map(|p| p.x + p.width)
                .fold(f64::NEG_INFINITY, f64::max);
            let leftmost = conflicts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let shift_right = clamp_into_bar(rightmost + LABEL_MIN_SPACING_PX);
            let shift_left = clamp_into_bar(leftmost - LABEL_MIN_SPACING_PX - width);
            let next = if (shift_right - desired).abs() <= (shift_left - desired).abs() {
                shift_right
            } else {
                shift_left
            };
            if next == x {
                // Clamping leaves no room to move; give up on this label.
                break;
            }
            x = next;
        }
        if !resolved && x != desired {
            // Exhausted the budget without clearing: fall back to the clamped
            // desired position rather than an arbitrary shifted one.
            x = desired;
        }
        placed.push(LabelPlacement {
            frame_id: frame.id,
            lane: frame.lane,
            x,
            width,
        });
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(start: NaiveDate, end: NaiveDate, title: &str) -> TimeFrameItem {
        TimeFrameItem::new(Uuid::new_v4(), start, end, title, AccentKey::Work)
    }

    fn wide_viewport() -> Viewport {
        let mut vp = Viewport::new(date(2020, 1, 1), date(2024, 1, 1));
        vp.set_zoom(1.0, 1461.0);
        vp
    }

    #[test]
    fn test_overlapping_items_take_two_lanes() {
        let items = vec![
            item(date(2020, 1, 1), date(2020, 6, 1), "A"),
            item(date(2020, 3, 1), date(2020, 9, 1), "B"),
        ];
        let result = layout(&items, &wide_viewport(), 1461.0);
        assert_eq!(result.lane_count, 2);
        let a = result.frames.iter().find(|f| f.title == "A").unwrap();
        let b = result.frames.iter().find(|f| f.title == "B").unwrap();
        assert_eq!(a.lane, 0);
        assert_eq!(b.lane, 1);
    }

    #[test]
    fn test_disjoint_items_share_a_lane() {
        let items = vec![
            item(date(2020, 1, 1), date(2020, 2, 1), "A"),
            item(date(2020, 3, 1), date(2020, 4, 1), "B"),
        ];
        let result = layout(&items, &wide_viewport(), 1461.0);
        assert_eq!(result.lane_count, 1);
        assert!(result.frames.iter().all(|f| f.lane == 0));
    }

    #[test]
    fn test_same_lane_frames_never_overlap() {
        let items = vec![
            item(date(2020, 1, 1), date(2020, 5, 1), "A"),
            item(date(2020, 2, 1), date(2020, 8, 1), "B"),
            item(date(2020, 4, 1), date(2021, 1, 1), "C"),
            item(date(2020, 9, 1), date(2021, 3, 1), "D"),
            item(date(2021, 2, 1), date(2021, 6, 1), "E"),
        ];
        let result = layout(&items, &wide_viewport(), 1461.0);
        for a in &result.frames {
            for b in &result.frames {
                if a.id == b.id || a.lane != b.lane {
                    continue;
                }
                let disjoint = a.end_x + LANE_GAP_PX <= b.start_x
                    || b.end_x + LANE_GAP_PX <= a.start_x;
                assert!(disjoint, "{} and {} overlap in lane {}", a.title, b.title, a.lane);
            }
        }
    }

    #[test]
    fn test_items_outside_bounds_are_dropped() {
        let items = vec![
            item(date(2015, 1, 1), date(2016, 1, 1), "Past"),
            item(date(2021, 1, 1), date(2021, 6, 1), "Kept"),
        ];
        let result = layout(&items, &wide_viewport(), 1461.0);
        assert_eq!(result.frames.len(), 1);
        assert_eq!(result.frames[0].title, "Kept");
    }

    #[test]
    fn test_degenerate_input_yields_empty_layout() {
        assert_eq!(layout(&[], &wide_viewport(), 1461.0), TimelineLayout::default());
        let items = vec![item(date(2021, 1, 1), date(2021, 6, 1), "A")];
        assert_eq!(layout(&items, &wide_viewport(), 0.0), TimelineLayout::default());
        assert_eq!(
            layout(&items, &wide_viewport(), f64::NAN),
            TimelineLayout::default()
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut items = vec![
            item(date(2020, 1, 1), date(2020, 6, 1), "A"),
            item(date(2020, 1, 1), date(2020, 6, 1), "B"),
            item(date(2020, 2, 1), date(2020, 7, 1), "C"),
        ];
        let first = layout(&items, &wide_viewport(), 1461.0);
        items.reverse();
        let second = layout(&items, &wide_viewport(), 1461.0);
        let lanes_of = |l: &TimelineLayout| {
            let mut v: Vec<(String, usize)> = l
                .frames
                .iter()
                .map(|f| (f.title.clone(), f.lane))
                .collect();
            v.sort();
            v
        };
        assert_eq!(lanes_of(&first), lanes_of(&second));
    }

    #[test]
    fn test_labels_in_same_lane_keep_spacing() {
        let items = vec![
            item(date(2020, 1, 1), date(2020, 12, 1), "Alpha"),
            item(date(2021, 1, 15), date(2021, 12, 1), "Beta"),
        ];
        let result = layout(&items, &wide_viewport(), 1461.0);
        assert_eq!(result.labels.len(), 2);
        let a = &result.labels[0];
        let b = &result.labels[1];
        if a.lane == b.lane {
            let gap = if a.x < b.x {
                b.x - (a.x + a.width)
            } else {
                a.x - (b.x + b.width)
            };
            assert!(gap >= 0.0);
        }
    }

    #[test]
    fn test_oversized_label_pins_to_bar_start_for_clipping() {
        let items = vec![item(
            date(2020, 1, 1),
            date(2020, 1, 10),
            "An unreasonably long role title",
        )];
        let result = layout(&items, &wide_viewport(), 1461.0);
        let frame = &result.frames[0];
        let label = &result.labels[0];
        // Wider than its bar: the label sits at the bar's padded left edge
        // and the renderer clips the overflow to the bar's extent.
        assert!(label.width > frame.width());
        assert!((label.x - (frame.start_x + LABEL_INNER_PAD_PX)).abs() < 1e-9);
    }

    #[test]
    fn test_effective_lane_height_compresses() {
        assert_eq!(effective_lane_height(2, 200.0), DESIRED_LANE_HEIGHT_PX);
        assert!(effective_lane_height(10, 200.0) < DESIRED_LANE_HEIGHT_PX);
        assert!(effective_lane_height(100, 200.0) >= MIN_LANE_HEIGHT_PX);
        assert_eq!(effective_lane_height(0, 200.0), DESIRED_LANE_HEIGHT_PX);
    }
}
