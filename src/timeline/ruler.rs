use dioxus::prelude::*;

use crate::core::timeline::TickMark;
use crate::state::ThemeService;

/// Baseline ruler under the lanes: tick marks at calendar boundaries, labels
/// on the major ones. Purely visual; the surface above owns all input.
#[component]
pub fn TimelineRuler(ticks: Vec<TickMark>, height: f64, theme: ThemeService) -> Element {
    let palette = theme.palette();
    rsx! {
        div {
            style: "
                position: absolute; left: 0; right: 0; bottom: 0;
                height: {height}px;
                border-top: 1px solid {palette.timeline_baseline};
                pointer-events: none;
                overflow: hidden;
            ",
            for tick in ticks.iter() {
                {
                    let tick_height = if tick.label.is_some() { 8.0 } else { 4.0 };
                    rsx! {
                        div {
                            key: "{tick.date}",
                            style: "
                                position: absolute;
                                left: {tick.x}px; top: 0;
                                width: 1px; height: {tick_height}px;
                                background-color: {palette.timeline_tick};
                            ",
                        }
                        if let Some(label) = &tick.label {
                            span {
                                style: "
                                    position: absolute;
                                    left: {tick.x + 3.0}px; top: 8px;
                                    font-size: 10px; color: {palette.text_muted};
                                    white-space: nowrap;
                                ",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
