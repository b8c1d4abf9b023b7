//! Root application component
//!
//! This defines the main App component and the overall layout structure.

use chrono::Local;
use dioxus::prelude::*;

use crate::components::{
    AboutPage, ExperiencePage, Page, PhotosPage, ProjectsPage, SidePanel, SkillsPage, TitleBar,
};
use crate::core::timeline::{EngineConfig, TimelineEngine};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{Profile, ResourceStore, ThemeService, UserSettings};

const HOTKEY_ZOOM_STEP: f64 = 1.25;

/// Main application component
#[component]
pub fn App() -> Element {
    let loaded = use_hook(UserSettings::load);
    let mut theme = use_signal(|| ThemeService::new(loaded.dark_theme));
    let mut resources = use_signal(|| ResourceStore::new(loaded.language));
    let profile = use_signal(Profile::load_or_builtin);
    let mut page = use_signal(|| Page::About);
    let today = use_hook(|| Local::now().date_naive());
    let engine = use_signal(|| {
        TimelineEngine::new(EngineConfig {
            today,
            auto_fit: true,
        })
    });
    let mut last_saved = use_signal(|| None::<UserSettings>);

    // Feed the engine whenever the profile or the language changes: item
    // titles and entry cards are language-resolved.
    use_effect(move || {
        let resources = resources.read();
        let profile = profile.read();
        let language = resources.language();
        let items = profile.timeline_items(language, today);
        let cards = profile.experience_cards(language, &resources);
        let refs = Profile::entry_refs(&cards);
        let min_date = profile.earliest_date();
        let mut engine = engine;
        let mut engine = engine.write();
        engine.set_min_date(min_date);
        engine.set_items(items);
        engine.set_entries(refs);
    });

    // Persist settings on change; the initial load is not re-written.
    use_effect(move || {
        let current = UserSettings {
            dark_theme: theme.read().is_dark(),
            language: resources.read().language(),
        };
        match last_saved.peek().as_ref() {
            Some(saved) if *saved == current => return,
            Some(_) => current.save(),
            None => {}
        }
        last_saved.set(Some(current));
    });

    let theme_now = *theme.read();
    let resources_now = *resources.read();
    let palette = theme_now.palette();
    let profile_now = profile.read().clone();
    let cards = profile_now.experience_cards(resources_now.language(), &resources_now);
    let owner_name = profile_now.name.clone();
    let tagline = profile_now.tagline.get(resources_now.language()).to_string();

    let on_keydown = move |e: KeyboardEvent| {
        let context = HotkeyContext {
            timeline_visible: *page.peek() == Page::Experience,
            input_focused: false,
        };
        let modifiers = e.modifiers();
        let result = handle_hotkey(
            &e.key(),
            modifiers.shift(),
            modifiers.ctrl(),
            modifiers.alt(),
            modifiers.meta(),
            &context,
        );
        match result {
            HotkeyResult::Action(HotkeyAction::ToggleTheme) => theme.write().toggle(),
            HotkeyResult::Action(HotkeyAction::CycleLanguage) => {
                let next = resources.peek().language().cycle();
                resources.write().set_language(next);
            }
            HotkeyResult::Action(HotkeyAction::TimelineZoomIn) => {
                let mut engine = engine;
                let zoom = engine.peek().zoom();
                engine.write().set_zoom(zoom * HOTKEY_ZOOM_STEP);
            }
            HotkeyResult::Action(HotkeyAction::TimelineZoomOut) => {
                let mut engine = engine;
                let zoom = engine.peek().zoom();
                engine.write().set_zoom(zoom / HOTKEY_ZOOM_STEP);
            }
            HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
        }
    };

    rsx! {
        div {
            tabindex: "0",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {palette.bg_base};
                color: {palette.text_primary};
                font-family: 'Segoe UI', 'Helvetica Neue', system-ui, sans-serif;
                overflow: hidden; outline: none;
            ",
            onkeydown: on_keydown,

            TitleBar {
                title: owner_name.clone(),
                theme: theme_now,
                resources: resources_now,
                on_toggle_theme: move |_| theme.write().toggle(),
                on_cycle_language: move |_| {
                    let next = resources.peek().language().cycle();
                    resources.write().set_language(next);
                },
            }

            div {
                style: "display: flex; flex: 1; overflow: hidden;",

                SidePanel {
                    active: page(),
                    owner_name,
                    tagline,
                    theme: theme_now,
                    resources: resources_now,
                    on_navigate: move |next| page.set(next),
                }

                match page() {
                    Page::About => rsx! {
                        AboutPage { profile: profile_now.clone(), theme: theme_now, resources: resources_now }
                    },
                    Page::Experience => rsx! {
                        ExperiencePage { engine, cards: cards.clone(), theme: theme_now, resources: resources_now }
                    },
                    Page::Projects => rsx! {
                        ProjectsPage { profile: profile_now.clone(), theme: theme_now, resources: resources_now }
                    },
                    Page::Skills => rsx! {
                        SkillsPage { profile: profile_now.clone(), theme: theme_now, resources: resources_now }
                    },
                    Page::Photos => rsx! {
                        PhotosPage { profile: profile_now.clone(), theme: theme_now, resources: resources_now }
                    },
                }
            }
        }
    }
}
