use url::Url;

/// A portfolio entry, shown as a card on the home page and as a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub screenshots: &'static [&'static str],
    pub context: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub client: &'static str,
    pub year: u16,
    pub link: Option<&'static str>,
    pub repo: Option<&'static str>,
}

impl Project {
    pub fn live_url(&self) -> Option<Url> {
        parse_link(self.id, self.link)
    }

    pub fn repo_url(&self) -> Option<Url> {
        parse_link(self.id, self.repo)
    }

    /// Neither a live site nor a public repository yet.
    pub fn is_in_development(&self) -> bool {
        self.live_url().is_none() && self.repo_url().is_none()
    }

    pub fn detail_path(&self) -> String {
        format!("/projets/{}", self.id)
    }
}

// `#` is the placeholder used for "no link yet".
fn parse_link(project_id: &str, raw: Option<&str>) -> Option<Url> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "#" {
        return None;
    }

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            tracing::warn!(project_id, scheme = url.scheme(), "ignoring non-web project link");
            None
        }
        Err(error) => {
            tracing::warn!(project_id, %error, "ignoring malformed project link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Project;

    fn project(link: Option<&'static str>, repo: Option<&'static str>) -> Project {
        Project {
            id: "sample",
            title: "Sample",
            subtitle: "",
            description: "",
            tags: &[],
            image: "",
            screenshots: &[],
            context: "",
            solution: "",
            results: "",
            client: "",
            year: 2025,
            link,
            repo,
        }
    }

    #[test]
    fn placeholder_links_count_as_missing() {
        let sample = project(Some("#"), Some("  "));
        assert!(sample.live_url().is_none());
        assert!(sample.repo_url().is_none());
        assert!(sample.is_in_development());
    }

    #[test]
    fn malformed_or_non_web_links_are_ignored() {
        assert!(project(Some("not a url"), None).live_url().is_none());
        assert!(project(Some("javascript:alert(1)"), None).live_url().is_none());
    }

    #[test]
    fn repo_alone_is_enough_to_leave_development() {
        let sample = project(None, Some("https://example.com/code"));
        assert!(!sample.is_in_development());
        assert_eq!(
            sample.repo_url().map(|url| url.to_string()),
            Some("https://example.com/code".to_owned())
        );
    }

    #[test]
    fn detail_path_uses_project_id() {
        assert_eq!(project(None, None).detail_path(), "/projets/sample");
    }
}
