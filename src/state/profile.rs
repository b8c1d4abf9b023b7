use std::fs;
use std::io;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::timeline::{AccentKey, DatedEntry, EntryRef, TimeFrameItem};
use crate::state::resources::{month_abbrev, Language, ResourceStore};

/// A piece of profile text with translations. German is optional and falls
/// back to English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub de: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: Some(de.into()),
        }
    }

    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: None,
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::De => self.de.as_deref().unwrap_or(&self.en),
        }
    }
}

/// One employment/education station. `end_date: None` means ongoing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub role: LocalizedText,
    pub organization: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub summary: LocalizedText,
    #[serde(default)]
    pub accent: AccentKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: LocalizedText,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub accent: AccentKey,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: LocalizedText,
    pub skills: Vec<Skill>,
}

/// `level` is 0..=5, rendered as a filled bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub path: String,
    pub caption: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: LocalizedText,
    pub about: LocalizedText,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub photos: Vec<Photo>,
}

/// Language-resolved experience entry as shown in the list next to the
/// timeline. Feeds the engine's entry references for selection sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceCard {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
    pub start_date: NaiveDate,
    pub accent: AccentKey,
}

impl DatedEntry for ExperienceCard {
    fn entry_id(&self) -> Uuid {
        self.id
    }

    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn title(&self) -> &str {
        &self.title
    }
}

fn format_month(language: Language, date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(language, date.month0() as usize), date.year())
}

fn format_period(
    language: Language,
    resources: &ResourceStore,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> String {
    let from = format_month(language, start);
    let to = match end {
        Some(end) => format_month(language, end),
        None => resources.lookup("experience.present").to_string(),
    };
    format!("{} – {}", from, to)
}

impl Profile {
    /// Bars for the timeline: every experience and project, ongoing ranges
    /// clamped to `today`.
    pub fn timeline_items(&self, language: Language, today: NaiveDate) -> Vec<TimeFrameItem> {
        let mut items: Vec<TimeFrameItem> = self
            .experiences
            .iter()
            .map(|exp| {
                TimeFrameItem::new(
                    exp.id,
                    exp.start_date,
                    exp.end_date.unwrap_or(today),
                    exp.role.get(language),
                    exp.accent,
                )
            })
            .collect();
        items.extend(self.projects.iter().map(|project| {
            TimeFrameItem::new(
                project.id,
                project.start_date,
                project.end_date.unwrap_or(today),
                project.name.clone(),
                project.accent,
            )
        }));
        items
    }

    /// Experience list cards, newest first.
    pub fn experience_cards(
        &self,
        language: Language,
        resources: &ResourceStore,
    ) -> Vec<ExperienceCard> {
        let mut cards: Vec<ExperienceCard> = self
            .experiences
            .iter()
            .map(|exp| ExperienceCard {
                id: exp.id,
                title: exp.role.get(language).to_string(),
                organization: exp.organization.clone(),
                period: format_period(language, resources, exp.start_date, exp.end_date),
                summary: exp.summary.get(language).to_string(),
                start_date: exp.start_date,
                accent: exp.accent,
            })
            .collect();
        cards.sort_by(|a, b| b.start_date.cmp(&a.start_date).then_with(|| a.title.cmp(&b.title)));
        cards
    }

    pub fn entry_refs(cards: &[ExperienceCard]) -> Vec<EntryRef> {
        cards.iter().map(EntryRef::from_entry).collect()
    }

    /// Earliest date across all dated content, used as the timeline lower
    /// bound when present.
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        let experiences = self.experiences.iter().map(|e| e.start_date);
        let projects = self.projects.iter().map(|p| p.start_date);
        experiences.chain(projects).min()
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&json)?;
        Ok(profile)
    }

    /// User-supplied profile from the config dir, else the built-in one.
    pub fn load_or_builtin() -> Self {
        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("vitaline").join("profile.json");
            if path.exists() {
                match Self::load(&path) {
                    Ok(profile) => return profile,
                    Err(err) => {
                        eprintln!("[PROFILE WARN] Failed to load {}: {}", path.display(), err);
                    }
                }
            }
        }
        Self::builtin()
    }

    pub fn builtin() -> Self {
        let date = |y: i32, m: u32, d: u32| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
        };
        Profile {
            name: "Jonas Keller".to_string(),
            tagline: LocalizedText::new(
                "Software engineer with a soft spot for tooling and typography",
                "Softwareentwickler mit einer Schwäche für Tooling und Typografie",
            ),
            about: LocalizedText::new(
                "I build desktop tools and data-heavy interfaces. Over the last decade I have \
                 moved between product teams and infrastructure work, and I care most about \
                 software that stays fast and predictable under real workloads. Outside of work \
                 I shoot landscape photography and maintain a couple of small open source \
                 libraries.",
                "Ich baue Desktop-Werkzeuge und datenintensive Oberflächen. Im letzten \
                 Jahrzehnt habe ich mich zwischen Produktteams und Infrastrukturarbeit bewegt; \
                 am wichtigsten ist mir Software, die auch unter realer Last schnell und \
                 vorhersehbar bleibt. Abseits der Arbeit fotografiere ich Landschaften und \
                 pflege einige kleine Open-Source-Bibliotheken.",
            ),
            experiences: vec![
                Experience {
                    id: Uuid::new_v4(),
                    role: LocalizedText::new("Senior Systems Engineer", "Senior-Systemingenieur"),
                    organization: "Helio Analytics".to_string(),
                    start_date: date(2021, 4, 1),
                    end_date: None,
                    summary: LocalizedText::new(
                        "Own the ingestion pipeline and the desktop client's rendering layer; \
                         cut cold-start time by two thirds.",
                        "Verantwortlich für die Ingestion-Pipeline und die Rendering-Schicht \
                         des Desktop-Clients; Kaltstartzeit um zwei Drittel gesenkt.",
                    ),
                    accent: AccentKey::Work,
                },
                Experience {
                    id: Uuid::new_v4(),
                    role: LocalizedText::new("Software Engineer", "Softwareentwickler"),
                    organization: "Brandt & Söhne GmbH".to_string(),
                    start_date: date(2018, 9, 1),
                    end_date: Some(date(2021, 3, 31)),
                    summary: LocalizedText::new(
                        "Built the production planning frontend and its reporting backend for \
                         a mid-sized manufacturer.",
                        "Frontend für die Produktionsplanung und das zugehörige \
                         Reporting-Backend für einen Mittelständler aufgebaut.",
                    ),
                    accent: AccentKey::Work,
                },
                Experience {
                    id: Uuid::new_v4(),
                    role: LocalizedText::new("Freelance Developer", "Freiberuflicher Entwickler"),
                    organization: "Self-employed".to_string(),
                    start_date: date(2016, 6, 1),
                    end_date: Some(date(2018, 8, 31)),
                    summary: LocalizedText::new(
                        "Shipped custom visualization dashboards and a point-of-sale system \
                         for clients across three countries.",
                        "Individuelle Visualisierungs-Dashboards und ein Kassensystem für \
                         Kunden in drei Ländern umgesetzt.",
                    ),
                    accent: AccentKey::Freelance,
                },
                Experience {
                    id: Uuid::new_v4(),
                    role: LocalizedText::new(
                        "M.Sc. Computer Science",
                        "M.Sc. Informatik",
                    ),
                    organization: "TU Dresden".to_string(),
                    start_date: date(2014, 10, 1),
                    end_date: Some(date(2016, 9, 30)),
                    summary: LocalizedText::new(
                        "Focus on computer graphics and distributed systems; thesis on \
                         incremental layout algorithms.",
                        "Schwerpunkt Computergrafik und verteilte Systeme; Abschlussarbeit \
                         über inkrementelle Layout-Algorithmen.",
                    ),
                    accent: AccentKey::Education,
                },
                Experience {
                    id: Uuid::new_v4(),
                    role: LocalizedText::new(
                        "B.Sc. Computer Science",
                        "B.Sc. Informatik",
                    ),
                    organization: "TU Dresden".to_string(),
                    start_date: date(2011, 10, 1),
                    end_date: Some(date(2014, 9, 30)),
                    summary: LocalizedText::new(
                        "Minor in media design; student assistant in the HPC group.",
                        "Nebenfach Mediengestaltung; studentische Hilfskraft in der \
                         HPC-Gruppe.",
                    ),
                    accent: AccentKey::Education,
                },
            ],
            projects: vec![
                Project {
                    id: Uuid::new_v4(),
                    name: "gridline".to_string(),
                    description: LocalizedText::new(
                        "A Rust crate for constraint-based text layout in terminal UIs.",
                        "Eine Rust-Bibliothek für constraint-basiertes Textlayout in \
                         Terminal-Oberflächen.",
                    ),
                    start_date: date(2020, 2, 1),
                    end_date: None,
                    accent: AccentKey::Personal,
                    link: Some("https://github.com/jkllr/gridline".to_string()),
                    tags: vec!["rust".to_string(), "tui".to_string()],
                },
                Project {
                    id: Uuid::new_v4(),
                    name: "lichtbild".to_string(),
                    description: LocalizedText::new(
                        "Batch EXIF tooling and gallery generator for my photography archive.",
                        "Batch-EXIF-Werkzeuge und Galerie-Generator für mein Fotoarchiv.",
                    ),
                    start_date: date(2017, 5, 1),
                    end_date: Some(date(2019, 12, 1)),
                    accent: AccentKey::Personal,
                    link: None,
                    tags: vec!["photography".to_string(), "cli".to_string()],
                },
            ],
            skills: vec![
                SkillGroup {
                    name: LocalizedText::new("Languages", "Sprachen"),
                    skills: vec![
                        Skill { name: "Rust".to_string(), level: 5 },
                        Skill { name: "TypeScript".to_string(), level: 4 },
                        Skill { name: "C#".to_string(), level: 4 },
                        Skill { name: "SQL".to_string(), level: 3 },
                    ],
                },
                SkillGroup {
                    name: LocalizedText::new("Systems", "Systeme"),
                    skills: vec![
                        Skill { name: "Desktop UI".to_string(), level: 5 },
                        Skill { name: "Data pipelines".to_string(), level: 4 },
                        Skill { name: "GPU rendering".to_string(), level: 3 },
                    ],
                },
            ],
            photos: vec![
                Photo {
                    path: "photos/elbsandstein.jpg".to_string(),
                    caption: LocalizedText::new(
                        "Elbe Sandstone Mountains at dawn",
                        "Elbsandsteingebirge im Morgengrauen",
                    ),
                },
                Photo {
                    path: "photos/ostsee.jpg".to_string(),
                    caption: LocalizedText::new("Baltic coast in winter", "Ostseeküste im Winter"),
                },
                Photo {
                    path: "photos/dresden nacht.jpg".to_string(),
                    caption: LocalizedText::new("Dresden at night", "Dresden bei Nacht"),
                },
            ],
        }
    }
}
