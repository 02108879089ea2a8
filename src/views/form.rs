//! Form field descriptors and their rendering against a record's values.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::components::tags::{TagOption, enum_options};
use crate::domain::entity::EntityKind;
use crate::domain::types::WireEnum;

/// Options offered for each referenced record type, as `(id, title)`.
pub type ReferenceOptions = HashMap<EntityKind, Vec<TagOption>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Url,
    Phone,
    TextArea,
    RichText,
    Number,
    Decimal,
    Date,
    Checkbox,
    /// Comma separated values.
    List,
    Select(Vec<TagOption>),
    /// Identifier of another record, picked from its listing.
    Reference(EntityKind),
}

impl InputKind {
    fn template_name(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Url => "url",
            InputKind::Phone => "tel",
            InputKind::TextArea => "textarea",
            InputKind::RichText => "richtext",
            InputKind::Number => "number",
            InputKind::Decimal => "decimal",
            InputKind::Date => "date",
            InputKind::Checkbox => "checkbox",
            InputKind::List => "list",
            InputKind::Select(_) | InputKind::Reference(_) => "select",
        }
    }
}

/// One input of a record form. `name` is the attribute's wire name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self {
            name,
            label,
            input,
            required: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Text)
    }

    pub fn select<E: WireEnum>(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Select(enum_options::<E>())).required()
    }

    pub fn reference(name: &'static str, label: &'static str, kind: EntityKind) -> Self {
        Self::new(name, label, InputKind::Reference(kind))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input: &'static str,
    pub required: bool,
    pub value: String,
    pub checked: bool,
    pub options: Vec<SelectOption>,
}

/// Textual form of a serialised attribute as an input expects it.
fn input_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| input_value(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn select_options(options: &[TagOption], current: &str, placeholder: Option<&str>) -> Vec<SelectOption> {
    let mut result = Vec::with_capacity(options.len() + 1);
    if let Some(label) = placeholder {
        result.push(SelectOption {
            value: String::new(),
            label: label.to_string(),
            selected: current.is_empty(),
        });
    }
    // The current value is always an option, listed or not.
    if !current.is_empty() && !options.iter().any(|option| option.value == current) {
        result.push(SelectOption {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
        });
    }
    result.extend(options.iter().map(|option| SelectOption {
        value: option.value.clone(),
        label: option.label.clone(),
        selected: option.value == current,
    }));
    result
}

/// Fills the descriptors with the values of `record`, a serialised
/// `*Fields` object.
pub fn render_form(
    fields: &[FormField],
    record: &Value,
    references: &ReferenceOptions,
) -> Vec<FormFieldView> {
    fields
        .iter()
        .map(|field| {
            let raw = record.get(field.name);
            let value = input_value(raw);
            let options = match &field.input {
                InputKind::Select(options) => select_options(options, &value, None),
                InputKind::Reference(kind) => {
                    let placeholder = if field.required { "Select..." } else { "None" };
                    let known = references.get(kind).map(Vec::as_slice).unwrap_or_default();
                    select_options(known, &value, Some(placeholder))
                }
                _ => Vec::new(),
            };
            FormFieldView {
                name: field.name,
                label: field.label,
                input: field.input.template_name(),
                required: field.required,
                checked: matches!(raw, Some(Value::Bool(true))),
                value,
                options,
            }
        })
        .collect()
}

/// Record types whose listings a form needs for its dropdowns.
pub fn referenced_kinds(fields: &[FormField]) -> Vec<EntityKind> {
    let mut kinds = Vec::new();
    for field in fields {
        if let InputKind::Reference(kind) = field.input {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}
