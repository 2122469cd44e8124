//! Static content catalog for the portfolio pages.
//!
//! Everything here is read-only data plus a few lookups over it. Screens
//! borrow from a [`Catalog`] and never mutate it.

mod data;
mod project;

use pf_core::SiteError;
use pf_core::SiteResult;
use url::Url;

pub use project::Project;

/// Number of projects shown before the "show all" toggle is used.
pub const FEATURED_PROJECT_COUNT: usize = 3;

/// Navigation entry: label plus the anchor id of the section it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// How visitors reach the site owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub owner: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub whatsapp_number: &'static str,
    pub whatsapp_greeting: &'static str,
    pub socials: &'static [SocialLink],
}

impl ContactDetails {
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `https://wa.me/<number>?text=<message>` with the message form-encoded.
    pub fn whatsapp_url(&self, message: &str) -> SiteResult<Url> {
        let base = format!("https://wa.me/{}", self.whatsapp_number);
        Url::parse_with_params(&base, &[("text", message)]).map_err(|error| {
            SiteError::new(
                "content.invalid_whatsapp_url",
                format!("cannot build WhatsApp link from `{base}`: {error}"),
            )
        })
    }
}

/// Read-only view over the site content.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    nav: &'static [NavLink],
    page_order: &'static [&'static str],
    projects: &'static [Project],
    skills: &'static [SkillCategory],
    process: &'static [ProcessStep],
    stats: &'static [Stat],
    contact: ContactDetails,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            nav: data::NAV_LINKS,
            page_order: data::PAGE_SECTIONS,
            projects: data::PROJECTS,
            skills: data::SKILL_CATEGORIES,
            process: data::PROCESS_STEPS,
            stats: data::STATS,
            contact: data::CONTACT,
        }
    }

    /// Navigation entries, in navigation and tracking order.
    pub fn nav_links(&self) -> &'static [NavLink] {
        self.nav
    }

    /// Anchor ids of the home page sections, top to bottom.
    pub fn page_sections(&self) -> &'static [&'static str] {
        self.page_order
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn project(&self, id: &str) -> Option<&'static Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Projects listed on the home page: the first few, or all of them.
    pub fn featured(&self, show_all: bool) -> &'static [Project] {
        if show_all {
            return self.projects;
        }
        &self.projects[..self.projects.len().min(FEATURED_PROJECT_COUNT)]
    }

    pub fn has_hidden_projects(&self) -> bool {
        self.projects.len() > FEATURED_PROJECT_COUNT
    }

    pub fn skills(&self) -> &'static [SkillCategory] {
        self.skills
    }

    pub fn process_steps(&self) -> &'static [ProcessStep] {
        self.process
    }

    pub fn stats(&self) -> &'static [Stat] {
        self.stats
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }
}

pub fn copyright_line(owner: &str, year: i32) -> String {
    format!("\u{a9} {year} {owner}. Conçu et développé avec passion.")
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use super::FEATURED_PROJECT_COUNT;
    use super::copyright_line;
    use std::collections::HashSet;

    #[test]
    fn nav_links_have_unique_anchors_present_on_page() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for link in catalog.nav_links() {
            assert!(seen.insert(link.anchor_id), "duplicate anchor {}", link.anchor_id);
            assert!(catalog.page_sections().contains(&link.anchor_id));
        }
        assert_eq!(catalog.nav_links()[0].anchor_id, "hero");
    }

    #[test]
    fn project_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.projects().iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), catalog.projects().len());
    }

    #[test]
    fn featured_limits_listing_until_show_all() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_hidden_projects());
        assert_eq!(catalog.featured(false).len(), FEATURED_PROJECT_COUNT);
        assert_eq!(catalog.featured(true).len(), catalog.projects().len());
        assert_eq!(catalog.featured(false)[0].id, catalog.projects()[0].id);
    }

    #[test]
    fn finds_projects_by_id() {
        let catalog = Catalog::builtin();
        let first = &catalog.projects()[0];
        assert_eq!(catalog.project(first.id).map(|p| p.title), Some(first.title));
        assert!(catalog.project("does-not-exist").is_none());
    }

    #[test]
    fn whatsapp_url_encodes_message() {
        let catalog = Catalog::builtin();
        let url = catalog
            .contact()
            .whatsapp_url("Bonjour, j'ai un projet !")
            .expect("valid link");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/237698961910");
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(text.as_deref(), Some("Bonjour, j'ai un projet !"));
    }

    #[test]
    fn copyright_mentions_year_and_owner() {
        let line = copyright_line("Jul", 2026);
        assert!(line.starts_with("\u{a9} 2026 Jul."));
    }
}
