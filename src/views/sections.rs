//! Grouping of the record types into the console's navigation.

use serde::Serialize;

use crate::components::nav::{NavTab, TabView, render_tabs};
use crate::domain::entity::EntityKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub kinds: &'static [EntityKind],
}

pub const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Fleet",
        kinds: &[
            EntityKind::Vehicle,
            EntityKind::Category,
            EntityKind::Brand,
            EntityKind::Series,
        ],
    },
    NavSection {
        title: "Partners",
        kinds: &[EntityKind::Company, EntityKind::State],
    },
    NavSection {
        title: "Content",
        kinds: &[
            EntityKind::Blog,
            EntityKind::Promotion,
            EntityKind::Link,
            EntityKind::MetaData,
        ],
    },
    NavSection {
        title: "Careers",
        kinds: &[EntityKind::Job, EntityKind::JobApplication],
    },
    NavSection {
        title: "SRM",
        kinds: &[EntityKind::SrmCustomer, EntityKind::SrmAgent, EntityKind::SrmTrip],
    },
];

impl NavSection {
    pub fn tabs(&self) -> Vec<NavTab> {
        self.kinds
            .iter()
            .map(|kind| NavTab::new(kind.plural(), kind.list_path()))
            .collect()
    }
}

pub fn section_of(kind: EntityKind) -> Option<&'static NavSection> {
    SECTIONS.iter().find(|section| section.kinds.contains(&kind))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: &'static str,
    pub tabs: Vec<TabView>,
}

/// The sidebar with the tab for `current_path` marked active.
pub fn render_sidebar(current_path: &str) -> Vec<SectionView> {
    SECTIONS
        .iter()
        .map(|section| SectionView {
            title: section.title,
            tabs: render_tabs(&section.tabs(), current_path),
        })
        .collect()
}

/// Tab strip over the sibling listings of `kind`.
pub fn section_tabs(kind: EntityKind, current_path: &str) -> Vec<TabView> {
    section_of(kind)
        .map(|section| render_tabs(&section.tabs(), current_path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_belongs_to_exactly_one_section() {
        for kind in EntityKind::ALL {
            let count = SECTIONS
                .iter()
                .filter(|section| section.kinds.contains(&kind))
                .count();
            assert_eq!(count, 1, "{kind}");
        }
    }

    #[test]
    fn sidebar_marks_only_the_current_listing() {
        let sidebar = render_sidebar("/brands");
        let active: Vec<_> = sidebar
            .iter()
            .flat_map(|section| section.tabs.iter())
            .filter(|tab| tab.active)
            .map(|tab| tab.label.as_str())
            .collect();
        assert_eq!(active, vec!["Brands"]);

        let none_active = render_sidebar("/brands/new")
            .iter()
            .flat_map(|section| section.tabs.iter())
            .all(|tab| !tab.active);
        assert!(none_active);
    }

    #[test]
    fn section_tabs_cover_siblings() {
        let tabs = section_tabs(EntityKind::JobApplication, "/job-applications");
        assert_eq!(tabs.len(), 2);
        assert!(tabs[1].active);
    }
}
