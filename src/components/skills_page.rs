use dioxus::prelude::*;

use crate::state::{Profile, ResourceStore, ThemeService};

#[component]
pub fn SkillsPage(profile: Profile, theme: ThemeService, resources: ResourceStore) -> Element {
    let palette = theme.palette();
    let language = resources.language();
    rsx! {
        div {
            style: "flex: 1; overflow-y: auto; padding: 28px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 20px; color: {palette.text_primary};",
                "{resources.lookup(\"skills.heading\")}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 20px;",
                for group in profile.skills.iter() {
                    div {
                        key: "{group.name.en}",
                        style: "
                            min-width: 260px; flex: 1; max-width: 360px;
                            border: 1px solid {palette.border_subtle}; border-radius: 6px;
                            background-color: {palette.bg_surface}; padding: 14px 16px;
                        ",
                        div {
                            style: "font-size: 13px; font-weight: 600; color: {palette.text_primary}; margin-bottom: 10px;",
                            "{group.name.get(language)}"
                        }
                        for skill in group.skills.iter() {
                            {
                                let percent = (skill.level.min(5) as f64 / 5.0) * 100.0;
                                rsx! {
                                    div {
                                        key: "{skill.name}",
                                        style: "margin-bottom: 8px;",
                                        div {
                                            style: "display: flex; justify-content: space-between; font-size: 11px; color: {palette.text_secondary}; margin-bottom: 3px;",
                                            span { "{skill.name}" }
                                        }
                                        div {
                                            style: "height: 4px; border-radius: 2px; background-color: {palette.bg_hover}; overflow: hidden;",
                                            div {
                                                style: "height: 100%; width: {percent}%; background-color: {palette.accent_work};",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
