use dioxus::prelude::*;

use crate::state::{Profile, ResourceStore, ThemeService};

#[component]
pub fn AboutPage(profile: Profile, theme: ThemeService, resources: ResourceStore) -> Element {
    let palette = theme.palette();
    let language = resources.language();
    rsx! {
        div {
            style: "flex: 1; overflow-y: auto; padding: 28px; max-width: 720px;",
            h2 {
                style: "margin: 0 0 6px 0; font-size: 20px; color: {palette.text_primary};",
                "{resources.lookup(\"about.heading\")}"
            }
            div {
                style: "font-size: 13px; color: {palette.text_secondary}; margin-bottom: 18px;",
                "{profile.tagline.get(language)}"
            }
            p {
                style: "font-size: 13px; color: {palette.text_primary}; line-height: 1.7; white-space: pre-wrap;",
                "{profile.about.get(language)}"
            }
        }
    }
}
