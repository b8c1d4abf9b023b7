use std::sync::OnceLock;
use std::time::{Duration, Instant};

use chrono::Datelike;
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::constants::{FRAME_INTERVAL_MS, TIMELINE_MIN_HEIGHT, TIMELINE_SURFACE_SCRIPT};
use crate::core::timeline::engine::BASELINE_AREA_PX;
use crate::core::timeline::layout::{LABEL_DOT_GAP_PX, LABEL_DOT_PX, LABEL_FONT_PX};
use crate::core::timeline::{StepKey, TimelineEngine};
use crate::state::{month_abbrev, ResourceStore, ThemeService};

/// Milliseconds since process start; the engine only ever compares
/// timestamps, so the epoch is arbitrary.
pub fn now_ms() -> f64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = *EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_secs_f64() * 1_000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct SurfaceSize {
    width: f64,
    height: f64,
}

/// Clear a selection-suppression window on the next frame. Stale tokens are
/// ignored by the engine, so overlapping gestures are safe.
fn clear_suppression_later(mut engine: Signal<TimelineEngine>, token: u64) {
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
        engine.write().clear_suppression(token);
    });
}

fn wheel_notches(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(v) => -v.y / 100.0,
        WheelDelta::Lines(v) => -v.y,
        WheelDelta::Pages(v) => -v.y * 3.0,
    }
}

/// The interactive career timeline: bars in packed lanes, de-collided title
/// labels, a baseline ruler, and the selected-date cursor. All input maps to
/// engine calls; this component renders whatever geometry the engine reports.
#[component]
pub fn TimelineView(
    mut engine: Signal<TimelineEngine>,
    theme: ThemeService,
    resources: ResourceStore,
) -> Element {
    let mut surface_eval = use_signal(|| None::<document::Eval>);
    let mut dragging = use_signal(|| false);
    // Client-to-surface coordinate offset, captured at pointer down so the
    // full-window drag overlay can keep reporting surface-local positions.
    let mut drag_offset = use_signal(|| (0.0_f64, 0.0_f64));
    let mut focused = use_signal(|| false);

    use_effect(move || {
        if surface_eval().is_some() {
            return;
        }
        surface_eval.set(Some(document::eval(TIMELINE_SURFACE_SCRIPT)));
    });

    // Surface size reports feed the engine; the first sized report arms the
    // auto-fit animation.
    use_future(move || {
        let mut engine = engine.clone();
        let surface_eval = surface_eval.clone();
        async move {
            loop {
                let Some(eval) = surface_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<SurfaceSize>().await {
                        Ok(size) => {
                            let mut engine = engine.write();
                            engine.set_content_size(size.width, size.height);
                            engine.maybe_start_fit(now_ms());
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Animation drive loop, active only while the engine reports a running
    // fit or inertia animation.
    use_future(move || {
        let mut engine = engine.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
                if engine.peek().needs_frame() {
                    engine.write().tick(now_ms());
                }
            }
        }
    });

    let palette = theme.palette();
    let language = resources.language();

    let snapshot = engine.read();
    let layout = snapshot.layout();
    let lane_height = snapshot.lane_height(layout.lane_count.max(1));
    let ticks = snapshot.tick_marks();
    let selected_date = snapshot.selected_date();
    let selected_frame = snapshot.selected_frame();
    let selected_x = snapshot.date_to_pixel(selected_date);
    drop(snapshot);

    let selected_label = format!(
        "{} {} {}",
        selected_date.day(),
        month_abbrev(language, selected_date.month0() as usize),
        selected_date.year()
    );

    // Labels carry their bar's accent for the marker dot and the bar's
    // extent so the renderer can clip them to it.
    let labels: Vec<(f64, usize, String, &'static str, f64, f64)> = layout
        .labels
        .iter()
        .filter_map(|label| {
            layout
                .frames
                .iter()
                .find(|frame| frame.id == label.frame_id)
                .map(|frame| {
                    (
                        label.x,
                        label.lane,
                        frame.title.clone(),
                        theme.accent(frame.accent),
                        frame.start_x,
                        frame.width().max(2.0),
                    )
                })
        })
        .collect();

    let border_color = if focused() {
        palette.selection
    } else {
        palette.border_default
    };
    let cursor = if dragging() { "grabbing" } else { "grab" };

    rsx! {
        div {
            id: "timeline-surface",
            tabindex: "0",
            style: "
                position: relative; flex: 1;
                min-height: {TIMELINE_MIN_HEIGHT}px;
                background-color: {palette.bg_elevated};
                border: 1px solid {border_color};
                border-radius: 6px;
                overflow: hidden; outline: none;
                cursor: {cursor};
                user-select: none;
            ",
            onfocusin: move |_| focused.set(true),
            onfocusout: move |_| focused.set(false),
            onmousedown: move |e| {
                e.prevent_default();
                let surface = e.element_coordinates();
                let client = e.client_coordinates();
                drag_offset.set((client.x - surface.x, client.y - surface.y));
                engine.write().on_pointer_down(surface.x, surface.y, now_ms());
                dragging.set(true);
            },
            onwheel: move |e| {
                e.prevent_default();
                let x = e.element_coordinates().x;
                engine.write().on_wheel(x, wheel_notches(e.delta()), now_ms());
            },
            onkeydown: move |e| {
                let key = match e.key() {
                    Key::ArrowLeft => Some(StepKey::Left),
                    Key::ArrowRight => Some(StepKey::Right),
                    Key::Home => Some(StepKey::Home),
                    Key::End => Some(StepKey::End),
                    _ => None,
                };
                if let Some(key) = key {
                    e.prevent_default();
                    let token = engine.write().on_key(key, e.modifiers().shift());
                    if let Some(token) = token {
                        clear_suppression_later(engine, token);
                    }
                }
            },

            // Bars
            for frame in layout.frames.iter() {
                {
                    let top = frame.lane as f64 * lane_height + 2.0;
                    let height = (lane_height - 4.0).max(4.0);
                    let width = frame.width().max(2.0);
                    let color = theme.accent(frame.accent);
                    let outline = if selected_frame == Some(frame.id) {
                        format!("box-shadow: 0 0 0 2px {};", palette.selection)
                    } else {
                        String::new()
                    };
                    rsx! {
                        div {
                            key: "{frame.id}",
                            style: "
                                position: absolute;
                                left: {frame.start_x}px; top: {top}px;
                                width: {width}px; height: {height}px;
                                background-color: {color};
                                opacity: 0.85;
                                border-radius: 4px;
                                {outline}
                            ",
                        }
                    }
                }
            }

            // De-collided title labels (dot + text), clipped to their bar
            for (x, lane, title, accent, bar_left, bar_width) in labels.iter() {
                {
                    let lane_top = *lane as f64 * lane_height;
                    let dot_left = x - bar_left;
                    let dot_top = lane_height / 2.0 - LABEL_DOT_PX / 2.0;
                    let text_left = dot_left + LABEL_DOT_PX + LABEL_DOT_GAP_PX;
                    let text_top = lane_height / 2.0 - LABEL_FONT_PX * 0.7;
                    rsx! {
                        div {
                            style: "
                                position: absolute;
                                left: {bar_left}px; top: {lane_top}px;
                                width: {bar_width}px; height: {lane_height}px;
                                overflow: hidden; pointer-events: none;
                            ",
                            div {
                                style: "
                                    position: absolute;
                                    left: {dot_left}px; top: {dot_top}px;
                                    width: {LABEL_DOT_PX}px; height: {LABEL_DOT_PX}px;
                                    border-radius: 50%;
                                    background-color: {accent};
                                    border: 1px solid {palette.bg_elevated};
                                ",
                            }
                            span {
                                style: "
                                    position: absolute;
                                    left: {text_left}px; top: {text_top}px;
                                    font-size: {LABEL_FONT_PX}px; color: {palette.text_primary};
                                    white-space: nowrap;
                                ",
                                "{title}"
                            }
                        }
                    }
                }
            }

            // Selected date cursor
            div {
                style: "
                    position: absolute;
                    left: {selected_x}px; top: 0; bottom: 0;
                    width: 1px;
                    background-color: {palette.selection};
                    pointer-events: none;
                ",
            }
            div {
                style: "
                    position: absolute;
                    left: {selected_x + 5.0}px; top: 6px;
                    padding: 1px 6px;
                    background-color: {palette.selection};
                    color: {palette.bg_surface};
                    font-size: 10px; border-radius: 3px;
                    white-space: nowrap; pointer-events: none;
                ",
                "{selected_label}"
            }

            super::ruler::TimelineRuler { ticks, height: BASELINE_AREA_PX, theme }
        }

        // Global drag overlay - captures mouse events while the pointer is down
        if dragging() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let (ox, oy) = drag_offset();
                    let c = e.client_coordinates();
                    engine.write().on_pointer_move(c.x - ox, c.y - oy, now_ms());
                },
                onmouseup: move |e| {
                    let (ox, oy) = drag_offset();
                    let c = e.client_coordinates();
                    let token = engine.write().on_pointer_up(c.x - ox, c.y - oy, now_ms());
                    dragging.set(false);
                    if let Some(token) = token {
                        clear_suppression_later(engine, token);
                    }
                },
            }
        }
    }
}
