//! Projects listing: "show all" toggle and the details modal.

use pf_content::Catalog;
use pf_content::Project;
use std::time::Duration;
use std::time::Instant;
use url::Url;

/// How long the closed modal keeps its project, so the closing transition
/// still has content to show.
pub const MODAL_CLEAR_DELAY: Duration = Duration::from_millis(300);

/// What the primary button of a project card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Visit(Url),
    Details(&'static str),
}

impl CardAction {
    pub fn for_project(project: &'static Project) -> Self {
        match project.live_url() {
            Some(url) => Self::Visit(url),
            None => Self::Details(project.id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Visit(_) => "Voir le projet",
            Self::Details(_) => "Voir les détails",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectsSection {
    show_all: bool,
    selected: Option<&'static str>,
    modal_open: bool,
    clear_at: Option<Instant>,
}

impl ProjectsSection {
    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_all {
            "← Voir moins"
        } else {
            "Voir tous les projets →"
        }
    }

    pub fn visible(&self, catalog: &Catalog) -> &'static [Project] {
        catalog.featured(self.show_all)
    }

    pub fn open_details(&mut self, project_id: &'static str) {
        self.selected = Some(project_id);
        self.modal_open = true;
        self.clear_at = None;
    }

    pub fn close_details(&mut self, now: Instant) {
        if !self.modal_open {
            return;
        }
        self.modal_open = false;
        self.clear_at = Some(now + MODAL_CLEAR_DELAY);
    }

    /// Drops the selection once the close delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.clear_at.is_some_and(|deadline| now >= deadline) {
            self.selected = None;
            self.clear_at = None;
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn selected_project(&self, catalog: &Catalog) -> Option<&'static Project> {
        self.selected.and_then(|id| catalog.project(id))
    }
}

#[cfg(test)]
mod tests {
    use super::CardAction;
    use super::MODAL_CLEAR_DELAY;
    use super::ProjectsSection;
    use pf_content::Catalog;
    use pf_content::FEATURED_PROJECT_COUNT;
    use std::time::Duration;
    use std::time::Instant;

    #[test]
    fn toggle_reveals_every_project() {
        let catalog = Catalog::builtin();
        let mut section = ProjectsSection::default();
        assert_eq!(section.visible(&catalog).len(), FEATURED_PROJECT_COUNT);
        assert_eq!(section.toggle_label(), "Voir tous les projets →");

        section.toggle_show_all();
        assert_eq!(section.visible(&catalog).len(), catalog.projects().len());
        assert_eq!(section.toggle_label(), "← Voir moins");
    }

    #[test]
    fn selection_survives_close_until_delay_elapses() {
        let catalog = Catalog::builtin();
        let mut section = ProjectsSection::default();
        let start = Instant::now();

        section.open_details("atlas-immo");
        assert!(section.is_modal_open());
        section.close_details(start);
        assert!(!section.is_modal_open());

        section.tick(start + Duration::from_millis(100));
        assert!(section.selected_project(&catalog).is_some());

        section.tick(start + MODAL_CLEAR_DELAY);
        assert!(section.selected_project(&catalog).is_none());
    }

    #[test]
    fn reopening_cancels_pending_clear() {
        let catalog = Catalog::builtin();
        let mut section = ProjectsSection::default();
        let start = Instant::now();

        section.open_details("atlas-immo");
        section.close_details(start);
        section.open_details("edutrack");
        section.tick(start + Duration::from_secs(1));

        assert_eq!(
            section.selected_project(&catalog).map(|project| project.id),
            Some("edutrack")
        );
    }

    #[test]
    fn card_action_prefers_live_site() {
        let catalog = Catalog::builtin();
        let live = catalog.project("kora-pay").expect("kora-pay exists");
        assert!(matches!(CardAction::for_project(live), CardAction::Visit(_)));

        let placeholder = catalog.project("edutrack").expect("edutrack exists");
        assert_eq!(
            CardAction::for_project(placeholder),
            CardAction::Details("edutrack")
        );
        assert_eq!(CardAction::Details("edutrack").label(), "Voir les détails");
    }
}
