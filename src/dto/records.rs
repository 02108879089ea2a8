//! Data handed to the create/edit form template.

use serde::Serialize;

use crate::domain::entity::EntityKind;
use crate::domain::types::EntityId;
use crate::views::form::FormFieldView;

#[derive(Clone, Debug, Serialize)]
pub struct EditPageData {
    pub kind: EntityKind,
    pub heading: String,
    /// Where the form posts to.
    pub action: String,
    pub fields: Vec<FormFieldView>,
    pub record_id: Option<String>,
    pub delete_href: Option<String>,
    pub back_href: String,
    pub not_found: bool,
}

impl EditPageData {
    /// Form for `id`, or the blank creation form when `id` is `None`.
    pub fn new(kind: EntityKind, id: Option<&EntityId>, fields: Vec<FormFieldView>) -> Self {
        let (heading, action) = match id {
            Some(id) => (format!("Edit {}", kind.singular()), kind.edit_path(id)),
            None => (format!("New {}", kind.singular()), kind.new_path()),
        };
        Self {
            kind,
            heading,
            action,
            fields,
            record_id: id.map(ToString::to_string),
            delete_href: id.map(|id| kind.delete_path(id)),
            back_href: kind.list_path(),
            not_found: false,
        }
    }

    /// Placeholder page for an identifier the backend does not know.
    pub fn missing(kind: EntityKind, id: &EntityId) -> Self {
        Self {
            heading: format!("{} Not Found", kind.singular()),
            delete_href: None,
            not_found: true,
            ..Self::new(kind, Some(id), Vec::new())
        }
    }
}
