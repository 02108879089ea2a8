use crate::components::table::{BadgeTone, Column};
use crate::components::tags::{TagOption, enum_options};
use crate::domain::content::{Blog, BlogCategory, Link, LinkPlacement, MetaData, Promotion};
use crate::views::form::{FormField, InputKind};
use crate::views::{ListingView, TagFilter, flag_tone, manage_column, title_column, yes_no};

impl ListingView for Blog {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Title"),
            Column::badge(
                "Category",
                |b: &Blog| b.fields.category.label().to_string(),
                |_| BadgeTone::Info,
            ),
            Column::field("Author", |b: &Blog| b.fields.author.clone()),
            Column::badge(
                "Published",
                |b: &Blog| yes_no(b.fields.published),
                |b: &Blog| flag_tone(b.fields.published),
            ),
            Column::field("Created", |b: &Blog| {
                b.created_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new(
            "category",
            "Category",
            enum_options::<BlogCategory>(),
        )]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("title", "Title").required(),
            FormField::text("slug", "Slug"),
            FormField::select::<BlogCategory>("category", "Category"),
            FormField::text("author", "Author"),
            FormField::new("summary", "Summary", InputKind::TextArea),
            FormField::new("content", "Content", InputKind::RichText).required(),
            FormField::new("thumbnail", "Thumbnail URL", InputKind::Url),
            FormField::new("tags", "Tags", InputKind::List),
            FormField::new("published", "Published", InputKind::Checkbox),
        ]
    }
}

impl ListingView for Promotion {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Code"),
            Column::field("Title", |p: &Promotion| p.fields.title.clone()),
            Column::field("Discount", |p: &Promotion| {
                format!("{}%", p.fields.discount_percent)
            }),
            Column::field("Valid", |p: &Promotion| {
                format!("{} to {}", p.fields.valid_from, p.fields.valid_until)
            }),
            Column::badge(
                "Active",
                |p: &Promotion| yes_no(p.fields.active),
                |p: &Promotion| flag_tone(p.fields.active),
            ),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::active_flag("active", "Status")]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("title", "Title").required(),
            FormField::text("code", "Code").required(),
            FormField::new("description", "Description", InputKind::TextArea),
            FormField::new("discountPercent", "Discount (%)", InputKind::Number).required(),
            FormField::new("validFrom", "Valid from", InputKind::Date).required(),
            FormField::new("validUntil", "Valid until", InputKind::Date).required(),
            FormField::new("active", "Active", InputKind::Checkbox),
        ]
    }
}

impl ListingView for Link {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Label"),
            Column::field("URL", |l: &Link| l.fields.url.clone()),
            Column::badge(
                "Placement",
                |l: &Link| l.fields.placement.label().to_string(),
                |_| BadgeTone::Info,
            ),
            Column::field("Position", |l: &Link| l.fields.position.to_string()),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new(
            "placement",
            "Placement",
            enum_options::<LinkPlacement>(),
        )]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("label", "Label").required(),
            FormField::new("url", "URL", InputKind::Url).required(),
            FormField::select::<LinkPlacement>("placement", "Placement"),
            FormField::new("position", "Position", InputKind::Number),
            FormField::new("openInNewTab", "Open in new tab", InputKind::Checkbox),
        ]
    }
}

impl ListingView for MetaData {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Page"),
            Column::field("Title", |m: &MetaData| m.fields.title.clone()),
            Column::field("Description", |m: &MetaData| m.fields.description.clone()),
            Column::field("Keywords", |m: &MetaData| m.fields.keywords.join(", ")),
            manage_column(Vec::new()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("pagePath", "Page path").required(),
            FormField::text("title", "Title").required(),
            FormField::new("description", "Description", InputKind::TextArea),
            FormField::new("keywords", "Keywords", InputKind::List),
        ]
    }
}
