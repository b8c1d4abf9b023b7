use dioxus::prelude::*;

use crate::state::{Profile, ResourceStore, ThemeService};

#[component]
pub fn ProjectsPage(profile: Profile, theme: ThemeService, resources: ResourceStore) -> Element {
    let palette = theme.palette();
    let language = resources.language();
    rsx! {
        div {
            style: "flex: 1; overflow-y: auto; padding: 28px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 20px; color: {palette.text_primary};",
                "{resources.lookup(\"projects.heading\")}"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; max-width: 720px;",
                for project in profile.projects.iter() {
                    {
                        let accent = theme.accent(project.accent);
                        rsx! {
                            div {
                                key: "{project.id}",
                                style: "
                                    border: 1px solid {palette.border_subtle};
                                    border-left: 3px solid {accent};
                                    border-radius: 6px; padding: 12px 14px;
                                    background-color: {palette.bg_surface};
                                ",
                                div {
                                    style: "display: flex; align-items: baseline; gap: 10px;",
                                    span {
                                        style: "font-size: 14px; font-weight: 600; color: {palette.text_primary};",
                                        "{project.name}"
                                    }
                                    for tag in project.tags.iter() {
                                        span {
                                            style: "
                                                font-size: 10px; color: {palette.text_muted};
                                                border: 1px solid {palette.border_default};
                                                border-radius: 999px; padding: 1px 8px;
                                            ",
                                            "{tag}"
                                        }
                                    }
                                }
                                p {
                                    style: "margin: 8px 0 0 0; font-size: 12px; color: {palette.text_secondary}; line-height: 1.6;",
                                    "{project.description.get(language)}"
                                }
                                if let Some(link) = &project.link {
                                    a {
                                        href: "{link}",
                                        style: "font-size: 11px; color: {palette.selection}; margin-top: 8px; display: inline-block;",
                                        "{resources.lookup(\"projects.visit\")} ↗"
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
