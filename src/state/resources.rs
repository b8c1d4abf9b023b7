use serde::{Deserialize, Serialize};

/// UI language. English is the fallback for every missing translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn cycle(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    /// Short code shown on the title-bar language button.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::De => "DE",
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_DE: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Month abbreviation for period strings in list cards and headings.
pub fn month_abbrev(language: Language, month0: usize) -> &'static str {
    let table = match language {
        Language::En => &MONTHS_EN,
        Language::De => &MONTHS_DE,
    };
    table[month0.min(11)]
}

// (key, english, german). Empty german falls back to english.
const STRINGS: &[(&str, &str, &str)] = &[
    ("nav.about", "About", "Über mich"),
    ("nav.experience", "Experience", "Werdegang"),
    ("nav.projects", "Projects", "Projekte"),
    ("nav.skills", "Skills", "Fähigkeiten"),
    ("nav.photos", "Photography", "Fotografie"),
    ("about.heading", "About", "Über mich"),
    ("experience.heading", "Experience", "Werdegang"),
    ("experience.present", "Present", "Heute"),
    ("projects.heading", "Projects", "Projekte"),
    ("projects.visit", "Visit", "Öffnen"),
    ("skills.heading", "Skills", "Fähigkeiten"),
    ("photos.heading", "Photography", "Fotografie"),
    ("timeline.hint", "Drag to pan, scroll to zoom", "Ziehen zum Schwenken, Scrollen zum Zoomen"),
    ("titlebar.theme_dark", "Switch to dark theme", "Zum dunklen Design wechseln"),
    ("titlebar.theme_light", "Switch to light theme", "Zum hellen Design wechseln"),
    ("titlebar.language", "Switch language", "Sprache wechseln"),
    ("titlebar.minimize", "Minimize", "Minimieren"),
    ("titlebar.close", "Close", "Schließen"),
    ("accent.work", "Employment", "Anstellung"),
    ("accent.freelance", "Freelance", "Freiberuflich"),
    ("accent.education", "Education", "Ausbildung"),
    ("accent.personal", "Personal", "Privat"),
];

/// Static string table with per-language lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceStore {
    language: Language,
}

impl ResourceStore {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolve a UI string. Unknown keys echo the key itself so a missing
    /// entry is visible in the UI instead of panicking.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        for (entry_key, en, de) in STRINGS {
            if *entry_key == key {
                return match self.language {
                    Language::En => en,
                    Language::De if !de.is_empty() => de,
                    Language::De => en,
                };
            }
        }
        key
    }
}
