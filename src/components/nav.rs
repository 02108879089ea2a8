use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub label: String,
    pub to: String,
}

impl NavTab {
    pub fn new(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub label: String,
    pub to: String,
    pub active: bool,
}

/// Marks the tab whose target equals `current_path` exactly. Prefixes do
/// not count: `/jobs` is not active on `/jobs/new`.
pub fn render_tabs(tabs: &[NavTab], current_path: &str) -> Vec<TabView> {
    let mut matched = false;
    tabs.iter()
        .map(|tab| {
            let active = !matched && tab.to == current_path;
            matched |= active;
            TabView {
                label: tab.label.clone(),
                to: tab.to.clone(),
                active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<NavTab> {
        vec![
            NavTab::new("Jobs", "/jobs"),
            NavTab::new("Applications", "/job-applications"),
            NavTab::new("New job", "/jobs/new"),
        ]
    }

    fn active(views: &[TabView]) -> Vec<&str> {
        views
            .iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.label.as_str())
            .collect()
    }

    #[test]
    fn exact_match_is_the_only_active_tab() {
        assert_eq!(active(&render_tabs(&tabs(), "/jobs")), vec!["Jobs"]);
        assert_eq!(active(&render_tabs(&tabs(), "/jobs/new")), vec!["New job"]);
        assert_eq!(
            active(&render_tabs(&tabs(), "/job-applications")),
            vec!["Applications"]
        );
    }

    #[test]
    fn no_match_means_no_active_tab() {
        assert!(active(&render_tabs(&tabs(), "/jobs/edit/4")).is_empty());
        assert!(active(&render_tabs(&tabs(), "/job")).is_empty());
        assert!(active(&render_tabs(&[], "/jobs")).is_empty());
    }

    #[test]
    fn duplicate_targets_activate_only_the_first() {
        let tabs = vec![NavTab::new("A", "/x"), NavTab::new("B", "/x")];
        assert_eq!(active(&render_tabs(&tabs, "/x")), vec!["A"]);
    }
}
