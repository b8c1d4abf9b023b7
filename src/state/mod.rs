//! Application state module
//!
//! Domain data behind the UI:
//! - Profile: the portfolio content (experiences, projects, skills, photos)
//! - Resources: UI string table and language handling
//! - UserSettings: persisted theme/language preferences
//! - ThemeService: palette resolution for the active theme

mod profile;
mod resources;
mod settings;
mod theme;

pub use profile::*;
pub use resources::*;
pub use settings::*;
pub use theme::*;
