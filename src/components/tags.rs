//! Controlled single-select chip list.
//!
//! The selector never stores the selection itself: the caller passes the
//! selected value when rendering and receives clicked values through a
//! setter, so exactly the chip matching the caller's value is active.

use serde::Serialize;

use crate::domain::types::WireEnum;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub value: String,
    pub label: String,
}

impl TagOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The chip that clears the filter.
    pub fn all() -> Self {
        Self::new("", "All")
    }
}

/// One option per variant of an enumerated attribute.
pub fn enum_options<E: WireEnum>() -> Vec<TagOption> {
    E::variants()
        .iter()
        .map(|variant| TagOption::new(variant.wire(), variant.display_label()))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub value: String,
    pub label: String,
    pub active: bool,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSelector {
    options: Vec<TagOption>,
}

impl TagSelector {
    /// Later options repeating an earlier value are dropped.
    pub fn new(options: Vec<TagOption>) -> Self {
        let mut unique: Vec<TagOption> = Vec::with_capacity(options.len());
        for option in options {
            if !unique.iter().any(|seen| seen.value == option.value) {
                unique.push(option);
            }
        }
        Self { options: unique }
    }

    pub fn options(&self) -> &[TagOption] {
        &self.options
    }

    /// Passes the clicked chip's value to `on_select`. Returns `false` and
    /// leaves the selection alone when no chip carries `value`.
    pub fn click<F>(&self, value: &str, on_select: F) -> bool
    where
        F: FnOnce(&str),
    {
        match self.options.iter().find(|option| option.value == value) {
            Some(option) => {
                on_select(&option.value);
                true
            }
            None => false,
        }
    }

    /// Renders every option; a chip is active exactly when its value equals
    /// `selected`. `href` builds the link that selects the chip.
    pub fn chips<H>(&self, selected: &str, href: H) -> Vec<Chip>
    where
        H: Fn(&str) -> String,
    {
        self.options
            .iter()
            .map(|option| Chip {
                value: option.value.clone(),
                label: option.label.clone(),
                active: option.value == selected,
                href: href(&option.value),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::BlogCategory;

    fn categories() -> TagSelector {
        TagSelector::new(vec![
            TagOption::new("cars", "Cars"),
            TagOption::new("bikes", "Bikes"),
        ])
    }

    fn active_values(chips: &[Chip]) -> Vec<&str> {
        chips
            .iter()
            .filter(|chip| chip.active)
            .map(|chip| chip.value.as_str())
            .collect()
    }

    #[test]
    fn clicking_moves_the_single_active_chip() {
        let selector = categories();
        let mut selected = String::new();

        assert!(active_values(&selector.chips(&selected, str::to_string)).is_empty());

        assert!(selector.click("bikes", |value| selected = value.to_string()));
        assert_eq!(selected, "bikes");
        assert_eq!(
            active_values(&selector.chips(&selected, str::to_string)),
            vec!["bikes"]
        );

        assert!(selector.click("cars", |value| selected = value.to_string()));
        let chips = selector.chips(&selected, str::to_string);
        assert_eq!(active_values(&chips), vec!["cars"]);
        assert!(!chips[1].active);
    }

    #[test]
    fn any_click_sequence_leaves_the_last_click_active() {
        let selector = TagSelector::new(enum_options::<BlogCategory>());
        let mut selected = String::new();

        for value in ["news", "cars", "cars", "travel", "bikes", "news"] {
            selector.click(value, |v| selected = v.to_string());
            let chips = selector.chips(&selected, str::to_string);
            assert_eq!(active_values(&chips), vec![value]);
        }
    }

    #[test]
    fn unknown_values_and_duplicates_are_ignored() {
        let selector = TagSelector::new(vec![
            TagOption::all(),
            TagOption::new("cars", "Cars"),
            TagOption::new("cars", "Cars again"),
        ]);
        assert_eq!(selector.options().len(), 2);

        let mut selected = "cars".to_string();
        assert!(!selector.click("boats", |v| selected = v.to_string()));
        assert_eq!(selected, "cars");

        let chips = selector.chips("", |value| format!("/blogs?category={value}"));
        assert_eq!(active_values(&chips), vec![""]);
        assert_eq!(chips[1].href, "/blogs?category=cars");
    }
}
