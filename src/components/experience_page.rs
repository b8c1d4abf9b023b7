use std::time::Duration;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{EXPERIENCE_LIST_WIDTH, EXPERIENCE_LIST_SCRIPT, FRAME_INTERVAL_MS};
use crate::core::timeline::scroll_sync::{
    clamp_scroll_target, entry_nearest_top, ScrollSync, LIST_SCROLL_ANIMATE_MS,
    SCROLL_TOP_PADDING_PX,
};
use crate::core::timeline::TimelineEngine;
use crate::state::{ExperienceCard, ResourceStore, ThemeService};
use crate::timeline::{now_ms, TimelineView};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListScrollReport {
    kind: String,
    scroll_top: f64,
    viewport_height: f64,
    content_height: f64,
    tops: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ScrollToMsg {
    kind: &'static str,
    top: f64,
}

/// The Experience page: the interactive timeline above, the scrolling list of
/// stations beside it, selection synchronized in both directions.
#[component]
pub fn ExperiencePage(
    mut engine: Signal<TimelineEngine>,
    cards: Vec<ExperienceCard>,
    theme: ThemeService,
    resources: ResourceStore,
) -> Element {
    let mut list_eval = use_signal(|| None::<document::Eval>);
    let list_metrics = use_signal(|| None::<ListScrollReport>);
    let scroll_sync = use_signal(ScrollSync::new);
    // Entry the list was last aligned to, in either direction; breaks the
    // scroll -> selection -> scroll feedback cycle.
    let last_aligned_entry = use_signal(|| None::<Uuid>);

    use_effect(move || {
        if list_eval().is_some() {
            return;
        }
        list_eval.set(Some(document::eval(EXPERIENCE_LIST_SCRIPT)));
    });

    // Scroll reports from the list.
    use_future(move || {
        let mut list_metrics = list_metrics.clone();
        let mut scroll_sync = scroll_sync.clone();
        let list_eval = list_eval.clone();
        async move {
            loop {
                let Some(eval) = list_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<ListScrollReport>().await {
                        Ok(report) => {
                            scroll_sync.write().note_report(&report.kind, now_ms());
                            list_metrics.set(Some(report));
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Debounced scroll -> selection direction.
    use_future(move || {
        let mut engine = engine.clone();
        let mut scroll_sync = scroll_sync.clone();
        let list_metrics = list_metrics.clone();
        let mut last_aligned_entry = last_aligned_entry.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
                if !scroll_sync.write().take_due(now_ms()) {
                    continue;
                }
                let Some(metrics) = list_metrics.peek().clone() else {
                    continue;
                };
                let Some(index) = entry_nearest_top(&metrics.tops, metrics.scroll_top) else {
                    continue;
                };
                let id = engine.peek().entries().get(index).map(|entry| entry.id);
                if let Some(id) = id {
                    last_aligned_entry.set(Some(id));
                    engine.write().select_entry(id);
                }
            }
        }
    });

    // Selection -> animated list scroll direction.
    use_effect(move || {
        let selected = engine.read().selected_entry();
        let Some(id) = selected else {
            return;
        };
        if last_aligned_entry() == Some(id) {
            return;
        }
        let Some(metrics) = list_metrics() else {
            return;
        };
        let index = engine
            .peek()
            .entries()
            .iter()
            .position(|entry| entry.id == id);
        let Some(index) = index else {
            return;
        };
        let Some(&top) = metrics.tops.get(index) else {
            return;
        };
        let target = clamp_scroll_target(
            top - SCROLL_TOP_PADDING_PX,
            metrics.viewport_height,
            metrics.content_height,
        );
        let mut last_aligned_entry = last_aligned_entry.clone();
        last_aligned_entry.set(Some(id));
        let mut scroll_sync = scroll_sync.clone();
        scroll_sync.write().begin_selection_scroll();
        if let Some(eval) = list_eval() {
            let _ = eval.send(ScrollToMsg {
                kind: "scrollTo",
                top: target,
            });
        }
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(LIST_SCROLL_ANIMATE_MS as u64)).await;
            scroll_sync.write().end_selection_scroll();
        });
    });

    let palette = theme.palette();
    let selected_entry = engine.read().selected_entry();

    rsx! {
        div {
            style: "display: flex; flex: 1; overflow: hidden;",

            // Timeline column
            div {
                style: "
                    display: flex; flex-direction: column; flex: 1;
                    padding: 20px; gap: 10px; overflow: hidden;
                ",
                h2 {
                    style: "margin: 0; font-size: 18px; color: {palette.text_primary};",
                    "{resources.lookup(\"experience.heading\")}"
                }
                TimelineView { engine, theme, resources }
                span {
                    style: "font-size: 10px; color: {palette.text_muted};",
                    "{resources.lookup(\"timeline.hint\")}"
                }
            }

            // Station list
            div {
                id: "experience-list",
                style: "
                    width: {EXPERIENCE_LIST_WIDTH}px; min-width: {EXPERIENCE_LIST_WIDTH}px;
                    overflow-y: auto; padding: 20px 16px;
                    display: flex; flex-direction: column; gap: 10px;
                    border-left: 1px solid {palette.border_default};
                ",
                for card in cards.iter() {
                    {
                        let accent = theme.accent(card.accent);
                        let selected = selected_entry == Some(card.id);
                        let border = if selected { palette.selection } else { palette.border_subtle };
                        let id = card.id;
                        rsx! {
                            div {
                                key: "{card.id}",
                                style: "
                                    border: 1px solid {border};
                                    border-left: 3px solid {accent};
                                    border-radius: 6px; padding: 10px 12px;
                                    background-color: {palette.bg_surface};
                                    cursor: pointer;
                                ",
                                onclick: move |_| {
                                    engine.write().select_entry(id);
                                },
                                div {
                                    style: "font-size: 13px; font-weight: 600; color: {palette.text_primary};",
                                    "{card.title}"
                                }
                                div {
                                    style: "font-size: 11px; color: {palette.text_secondary}; margin-top: 2px;",
                                    "{card.organization} · {card.period}"
                                }
                                div {
                                    style: "font-size: 11px; color: {palette.text_muted}; margin-top: 6px; line-height: 1.5;",
                                    "{card.summary}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
