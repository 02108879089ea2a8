//! Per-record page descriptions: table columns, chip filters and form
//! fields. These are plain data consumed by the generic components.

use crate::components::table::{BadgeTone, Column, RowAction};
use crate::components::tags::TagOption;
use crate::domain::entity::{EntityKind, Resource};
use crate::domain::types::ApprovalStatus;
use crate::forms::EntityForm;
use crate::views::form::FormField;

pub mod careers;
pub mod catalog;
pub mod content;
pub mod form;
pub mod partners;
pub mod sections;
pub mod srm;

/// A chip row above a listing that sets one filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagFilter {
    pub param: &'static str,
    pub label: &'static str,
    pub options: Vec<TagOption>,
}

impl TagFilter {
    /// Prepends the "All" chip that clears the filter.
    pub fn new(param: &'static str, label: &'static str, options: Vec<TagOption>) -> Self {
        let mut all = vec![TagOption::all()];
        all.extend(options);
        Self {
            param,
            label,
            options: all,
        }
    }

    pub fn active_flag(param: &'static str, label: &'static str) -> Self {
        Self::new(
            param,
            label,
            vec![
                TagOption::new("true", "Active"),
                TagOption::new("false", "Inactive"),
            ],
        )
    }
}

/// How a record type is listed and edited in the console.
pub trait ListingView: Resource<Fields: EntityForm> {
    fn columns() -> Vec<Column<Self>>;

    fn tag_filters() -> Vec<TagFilter> {
        Vec::new()
    }

    fn form_fields() -> Vec<FormField>;
}

/// Message shown when a listing came back without records.
pub fn empty_message(kind: EntityKind) -> String {
    format!("No {} Found!", kind.plural())
}

pub fn edit_href<T: Resource>(record: &T) -> String {
    T::KIND.edit_path(record.id())
}

pub fn delete_href<T: Resource>(record: &T) -> String {
    T::KIND.delete_path(record.id())
}

/// Title cell linking to the edit page.
pub fn title_column<T: Resource>(header: &'static str) -> Column<T> {
    Column::link(header, |record: &T| record.title(), edit_href::<T>)
}

/// Edit and delete actions, preceded by any record specific ones.
pub fn manage_column<T: Resource>(mut actions: Vec<RowAction<T>>) -> Column<T> {
    actions.push(RowAction::link("Edit", edit_href::<T>));
    actions.push(
        RowAction::post("Delete", delete_href::<T>)
            .confirm("Delete this record? This cannot be undone."),
    );
    Column::actions("Actions", actions)
}

pub fn approval_tone(status: ApprovalStatus) -> BadgeTone {
    match status {
        ApprovalStatus::Pending => BadgeTone::Warning,
        ApprovalStatus::Approved => BadgeTone::Success,
        ApprovalStatus::Rejected => BadgeTone::Danger,
    }
}

pub fn flag_tone(flag: bool) -> BadgeTone {
    if flag {
        BadgeTone::Success
    } else {
        BadgeTone::Neutral
    }
}

pub fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

pub fn optional_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_name_the_collection() {
        assert_eq!(empty_message(EntityKind::Job), "No Jobs Found!");
        assert_eq!(empty_message(EntityKind::Blog), "No Blogs Found!");
    }

    #[test]
    fn tag_filters_start_with_all() {
        let filter = TagFilter::active_flag("active", "Status");
        assert_eq!(filter.options[0], TagOption::all());
        assert_eq!(filter.options.len(), 3);
    }
}
