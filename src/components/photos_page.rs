use dioxus::prelude::*;

use crate::state::{Profile, ResourceStore, ThemeService};
use crate::utils::photo_url;

#[component]
pub fn PhotosPage(profile: Profile, theme: ThemeService, resources: ResourceStore) -> Element {
    let palette = theme.palette();
    let language = resources.language();
    rsx! {
        div {
            style: "flex: 1; overflow-y: auto; padding: 28px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 20px; color: {palette.text_primary};",
                "{resources.lookup(\"photos.heading\")}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 14px;",
                for photo in profile.photos.iter() {
                    {
                        let url = photo_url(&photo.path);
                        rsx! {
                            figure {
                                key: "{photo.path}",
                                style: "
                                    margin: 0; border: 1px solid {palette.border_subtle};
                                    border-radius: 6px; overflow: hidden;
                                    background-color: {palette.bg_surface};
                                ",
                                img {
                                    src: "{url}",
                                    style: "display: block; width: 100%; height: 180px; object-fit: cover;",
                                }
                                figcaption {
                                    style: "padding: 8px 10px; font-size: 11px; color: {palette.text_secondary};",
                                    "{photo.caption.get(language)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
