mod about_page;
mod experience_page;
mod photos_page;
mod projects_page;
mod side_panel;
mod skills_page;
mod title_bar;

pub use about_page::AboutPage;
pub use experience_page::ExperiencePage;
pub use photos_page::PhotosPage;
pub use projects_page::ProjectsPage;
pub use side_panel::{Page, SidePanel};
pub use skills_page::SkillsPage;
pub use title_bar::TitleBar;
