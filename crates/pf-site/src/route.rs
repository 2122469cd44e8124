//! Site paths: `/`, `/#<anchor>`, `/projets/<id>`.

use pf_content::Catalog;

const PROJECT_PREFIX: &str = "/projets/";

/// A screen of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Project(String),
    NotFound,
}

impl Route {
    /// Replaces project routes whose id is not in the catalog with
    /// [`Route::NotFound`].
    pub fn resolve(self, catalog: &Catalog) -> Self {
        match self {
            Self::Project(id) if catalog.project(&id).is_none() => {
                tracing::info!(project_id = %id, "unknown project requested");
                Self::NotFound
            }
            other => other,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Project(id) => format!("{PROJECT_PREFIX}{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }
}

/// A parsed path: the screen plus an optional section anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub anchor: Option<String>,
}

impl Location {
    pub fn home() -> Self {
        Self {
            route: Route::Home,
            anchor: None,
        }
    }

    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, anchor) = match input.split_once('#') {
            Some((path, fragment)) => (path, non_empty(fragment)),
            None => (input, None),
        };
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let path = path.trim_end_matches('/');

        let route = if path.is_empty() {
            Route::Home
        } else if let Some(id) = path.strip_prefix(PROJECT_PREFIX) {
            if id.is_empty() || id.contains('/') {
                Route::NotFound
            } else {
                Route::Project(id.to_owned())
            }
        } else {
            Route::NotFound
        };

        Self { route, anchor }
    }
}

fn non_empty(fragment: &str) -> Option<String> {
    let fragment = fragment.trim();
    (!fragment.is_empty()).then(|| fragment.to_owned())
}

/// One route per catalog project, in catalog order.
pub fn static_project_routes(catalog: &Catalog) -> Vec<Route> {
    catalog
        .projects()
        .iter()
        .map(|project| Route::Project(project.id.to_owned()))
        .collect()
}
