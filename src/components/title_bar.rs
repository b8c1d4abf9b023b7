use dioxus::desktop::use_window;
use dioxus::prelude::*;

use crate::constants::TITLE_BAR_HEIGHT;
use crate::state::{ResourceStore, ThemeService};

/// Custom window chrome: drag region, theme + language controls, and the
/// minimize/close buttons. The window itself is undecorated.
#[component]
pub fn TitleBar(
    title: String,
    theme: ThemeService,
    resources: ResourceStore,
    on_toggle_theme: EventHandler<MouseEvent>,
    on_cycle_language: EventHandler<MouseEvent>,
) -> Element {
    let palette = theme.palette();
    let window = use_window();
    let window_for_minimize = window.clone();
    let window_for_close = window.clone();

    let theme_icon = if theme.is_dark() { "☀" } else { "☾" };
    let theme_tooltip = if theme.is_dark() {
        resources.lookup("titlebar.theme_light")
    } else {
        resources.lookup("titlebar.theme_dark")
    };
    let language_code = resources.language().code();

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {TITLE_BAR_HEIGHT}px; padding: 0 4px 0 14px;
                background-color: {palette.bg_surface};
                border-bottom: 1px solid {palette.border_default};
                user-select: none; flex-shrink: 0;
            ",
            // Drag region
            div {
                style: "display: flex; align-items: center; gap: 10px; flex: 1; height: 100%;",
                onmousedown: move |_| {
                    let _ = window.drag_window();
                },
                span {
                    style: "font-size: 13px; font-weight: 600; color: {palette.text_secondary};",
                    "{title}"
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 4px;",
                button {
                    title: "{theme_tooltip}",
                    style: "
                        width: 30px; height: 26px; border: none; border-radius: 4px;
                        background: transparent; color: {palette.text_secondary};
                        font-size: 13px; cursor: pointer;
                    ",
                    onclick: move |e| on_toggle_theme.call(e),
                    "{theme_icon}"
                }
                button {
                    title: "{resources.lookup(\"titlebar.language\")}",
                    style: "
                        width: 34px; height: 26px; border: none; border-radius: 4px;
                        background: transparent; color: {palette.text_secondary};
                        font-size: 11px; font-weight: 600; cursor: pointer;
                    ",
                    onclick: move |e| on_cycle_language.call(e),
                    "{language_code}"
                }
                div {
                    style: "width: 1px; height: 18px; background-color: {palette.border_default}; margin: 0 4px;",
                }
                button {
                    title: "{resources.lookup(\"titlebar.minimize\")}",
                    style: "
                        width: 34px; height: 26px; border: none; border-radius: 4px;
                        background: transparent; color: {palette.text_secondary};
                        font-size: 13px; cursor: pointer;
                    ",
                    onclick: move |_| window_for_minimize.set_minimized(true),
                    "–"
                }
                button {
                    title: "{resources.lookup(\"titlebar.close\")}",
                    style: "
                        width: 34px; height: 26px; border: none; border-radius: 4px;
                        background: transparent; color: {palette.text_secondary};
                        font-size: 13px; cursor: pointer;
                    ",
                    onclick: move |_| window_for_close.close(),
                    "✕"
                }
            }
        }
    }
}
