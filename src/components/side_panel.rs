use dioxus::prelude::*;

use crate::constants::SIDE_PANEL_WIDTH;
use crate::state::{ResourceStore, ThemeService};

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Experience,
    Projects,
    Skills,
    Photos,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::About,
        Page::Experience,
        Page::Projects,
        Page::Skills,
        Page::Photos,
    ];

    pub fn nav_key(self) -> &'static str {
        match self {
            Page::About => "nav.about",
            Page::Experience => "nav.experience",
            Page::Projects => "nav.projects",
            Page::Skills => "nav.skills",
            Page::Photos => "nav.photos",
        }
    }
}

#[component]
pub fn SidePanel(
    active: Page,
    owner_name: String,
    tagline: String,
    theme: ThemeService,
    resources: ResourceStore,
    on_navigate: EventHandler<Page>,
) -> Element {
    let palette = theme.palette();
    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {SIDE_PANEL_WIDTH}px; min-width: {SIDE_PANEL_WIDTH}px;
                background-color: {palette.bg_elevated};
                border-right: 1px solid {palette.border_default};
                overflow: hidden;
            ",
            div {
                style: "padding: 20px 16px 12px 16px; border-bottom: 1px solid {palette.border_subtle};",
                div {
                    style: "font-size: 15px; font-weight: 600; color: {palette.text_primary};",
                    "{owner_name}"
                }
                div {
                    style: "font-size: 11px; color: {palette.text_muted}; margin-top: 4px; line-height: 1.4;",
                    "{tagline}"
                }
            }
            div {
                style: "display: flex; flex-direction: column; padding: 8px; gap: 2px;",
                for page in Page::ALL {
                    {
                        let is_active = page == active;
                        let bg = if is_active { palette.bg_hover } else { "transparent" };
                        let color = if is_active { palette.text_primary } else { palette.text_secondary };
                        rsx! {
                            button {
                                style: "
                                    text-align: left; padding: 8px 10px;
                                    border: none; border-radius: 4px;
                                    background-color: {bg}; color: {color};
                                    font-size: 12px; cursor: pointer;
                                ",
                                onclick: move |_| on_navigate.call(page),
                                "{resources.lookup(page.nav_key())}"
                            }
                        }
                    }
                }
            }
        }
    }
}
