use crate::components::table::Column;
use crate::components::tags::enum_options;
use crate::domain::entity::EntityKind;
use crate::domain::partners::{Company, State};
use crate::domain::types::ApprovalStatus;
use crate::views::form::{FormField, InputKind};
use crate::views::{
    ListingView, TagFilter, approval_tone, flag_tone, manage_column, title_column, yes_no,
};

impl ListingView for Company {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Email", |c: &Company| c.fields.email.clone()),
            Column::field("Phone", |c: &Company| c.fields.phone.clone()),
            Column::field("City", |c: &Company| c.fields.city.clone()),
            Column::badge(
                "Approval",
                |c: &Company| c.fields.approval_status.label().to_string(),
                |c: &Company| approval_tone(c.fields.approval_status),
            ),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new(
            "approvalStatus",
            "Approval",
            enum_options::<ApprovalStatus>(),
        )]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::new("email", "Email", InputKind::Email).required(),
            FormField::new("phone", "Phone", InputKind::Phone).required(),
            FormField::reference("stateId", "State", EntityKind::State).required(),
            FormField::text("city", "City"),
            FormField::new("address", "Address", InputKind::TextArea),
            FormField::new("website", "Website", InputKind::Url),
            FormField::new("logo", "Logo URL", InputKind::Url),
            FormField::select::<ApprovalStatus>("approvalStatus", "Approval"),
        ]
    }
}

impl ListingView for State {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Code", |s: &State| s.fields.code.clone()),
            Column::badge(
                "Active",
                |s: &State| yes_no(s.fields.active),
                |s: &State| flag_tone(s.fields.active),
            ),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::active_flag("active", "Status")]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::text("code", "Code").required(),
            FormField::new("active", "Active", InputKind::Checkbox),
        ]
    }
}
