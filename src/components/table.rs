//! Entity-agnostic listing table.
//!
//! Pages describe their table as an ordered list of [`Column`]s whose cells
//! are plain data: accessors and actions with their targets already bound.
//! [`render_table`] turns that description plus a page of records into a
//! [`TableView`] the template draws without further logic.

use serde::Serialize;

use crate::domain::entity::Resource;

/// Placeholder rows drawn while a listing loads.
pub const SKELETON_ROWS: usize = 10;

pub type Accessor<T> = fn(&T) -> String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMethod {
    Get,
    Post,
}

/// A per-row button or link.
#[derive(Clone, Debug)]
pub struct RowAction<T> {
    pub label: &'static str,
    pub method: ActionMethod,
    pub href: Accessor<T>,
    /// Confirmation prompt shown before a destructive action.
    pub confirm: Option<&'static str>,
    /// Extra form values submitted with a `Post` action.
    pub hidden: &'static [(&'static str, &'static str)],
}

impl<T> RowAction<T> {
    pub fn link(label: &'static str, href: Accessor<T>) -> Self {
        Self {
            label,
            method: ActionMethod::Get,
            href,
            confirm: None,
            hidden: &[],
        }
    }

    pub fn post(label: &'static str, href: Accessor<T>) -> Self {
        Self {
            label,
            method: ActionMethod::Post,
            href,
            confirm: None,
            hidden: &[],
        }
    }

    pub fn confirm(mut self, prompt: &'static str) -> Self {
        self.confirm = Some(prompt);
        self
    }

    pub fn with_values(mut self, hidden: &'static [(&'static str, &'static str)]) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Where a column takes its cell content from.
#[derive(Clone, Debug)]
pub enum CellSource<T> {
    Field(Accessor<T>),
    Link {
        text: Accessor<T>,
        href: Accessor<T>,
    },
    Badge {
        text: Accessor<T>,
        tone: fn(&T) -> BadgeTone,
    },
    Actions(Vec<RowAction<T>>),
}

#[derive(Clone, Debug)]
pub struct Column<T> {
    pub header: &'static str,
    pub cell: CellSource<T>,
}

impl<T> Column<T> {
    pub fn field(header: &'static str, accessor: Accessor<T>) -> Self {
        Self {
            header,
            cell: CellSource::Field(accessor),
        }
    }

    pub fn link(header: &'static str, text: Accessor<T>, href: Accessor<T>) -> Self {
        Self {
            header,
            cell: CellSource::Link { text, href },
        }
    }

    pub fn badge(header: &'static str, text: Accessor<T>, tone: fn(&T) -> BadgeTone) -> Self {
        Self {
            header,
            cell: CellSource::Badge { text, tone },
        }
    }

    pub fn actions(header: &'static str, actions: Vec<RowAction<T>>) -> Self {
        Self {
            header,
            cell: CellSource::Actions(actions),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionView {
    pub label: &'static str,
    pub method: ActionMethod,
    pub href: String,
    pub confirm: Option<&'static str>,
    pub hidden: Vec<(&'static str, &'static str)>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellView {
    Text { text: String },
    Link { text: String, href: String },
    Badge { text: String, tone: BadgeTone },
    Actions { actions: Vec<ActionView> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<CellView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowView>,
    pub skeleton_rows: usize,
}

impl TableView {
    pub fn is_loading(&self) -> bool {
        self.skeleton_rows > 0
    }
}

fn render_cell<T>(source: &CellSource<T>, record: &T) -> CellView {
    match source {
        CellSource::Field(accessor) => CellView::Text {
            text: accessor(record),
        },
        CellSource::Link { text, href } => CellView::Link {
            text: text(record),
            href: href(record),
        },
        CellSource::Badge { text, tone } => CellView::Badge {
            text: text(record),
            tone: tone(record),
        },
        CellSource::Actions(actions) => CellView::Actions {
            actions: actions
                .iter()
                .map(|action| ActionView {
                    label: action.label,
                    method: action.method,
                    href: (action.href)(record),
                    confirm: action.confirm,
                    hidden: action.hidden.to_vec(),
                })
                .collect(),
        },
    }
}

/// Lays out `records` in the given order. While `loading`, only the
/// skeleton is produced and `records` is ignored.
pub fn render_table<T: Resource>(columns: &[Column<T>], records: &[T], loading: bool) -> TableView {
    let headers = columns.iter().map(|column| column.header).collect();
    if loading {
        return TableView {
            headers,
            rows: Vec::new(),
            skeleton_rows: SKELETON_ROWS,
        };
    }

    let rows = records
        .iter()
        .map(|record| RowView {
            id: record.id().to_string(),
            cells: columns
                .iter()
                .map(|column| render_cell(&column.cell, record))
                .collect(),
        })
        .collect();

    TableView {
        headers,
        rows,
        skeleton_rows: 0,
    }
}
