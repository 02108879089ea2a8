use crate::components::table::{BadgeTone, Column, RowAction};
use crate::components::tags::enum_options;
use crate::domain::careers::{ApplicationStatus, EmploymentType, Job, JobApplication};
use crate::domain::entity::EntityKind;
use crate::views::form::{FormField, InputKind};
use crate::views::{ListingView, TagFilter, flag_tone, manage_column, title_column, yes_no};

fn application_tone(status: ApplicationStatus) -> BadgeTone {
    match status {
        ApplicationStatus::Applied => BadgeTone::Info,
        ApplicationStatus::Shortlisted => BadgeTone::Warning,
        ApplicationStatus::Rejected => BadgeTone::Danger,
        ApplicationStatus::Hired => BadgeTone::Success,
    }
}

fn status_href(application: &JobApplication) -> String {
    format!("/job-applications/{}/status", application.id)
}

impl ListingView for Job {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Title"),
            Column::field("Department", |j: &Job| j.fields.department.clone()),
            Column::field("Location", |j: &Job| j.fields.location.clone()),
            Column::badge(
                "Type",
                |j: &Job| j.fields.employment_type.label().to_string(),
                |_| BadgeTone::Info,
            ),
            Column::field("Openings", |j: &Job| j.fields.openings.to_string()),
            Column::badge(
                "Open",
                |j: &Job| yes_no(j.fields.open),
                |j: &Job| flag_tone(j.fields.open),
            ),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new(
            "employmentType",
            "Type",
            enum_options::<EmploymentType>(),
        )]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("title", "Title").required(),
            FormField::text("department", "Department"),
            FormField::text("location", "Location").required(),
            FormField::select::<EmploymentType>("employmentType", "Employment type"),
            FormField::new("description", "Description", InputKind::RichText).required(),
            FormField::new("openings", "Openings", InputKind::Number).required(),
            FormField::new("open", "Accepting applications", InputKind::Checkbox),
        ]
    }
}

impl ListingView for JobApplication {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Applicant"),
            Column::field("Email", |a: &JobApplication| a.fields.email.clone()),
            Column::field("Phone", |a: &JobApplication| a.fields.phone.clone()),
            Column::badge(
                "Status",
                |a: &JobApplication| a.fields.status.label().to_string(),
                |a: &JobApplication| application_tone(a.fields.status),
            ),
            Column::field("Applied", |a: &JobApplication| {
                a.applied_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }),
            manage_column(vec![
                RowAction::post("Shortlist", status_href)
                    .with_values(&[("status", "shortlisted")]),
                RowAction::post("Hire", status_href).with_values(&[("status", "hired")]),
                RowAction::post("Reject", status_href)
                    .with_values(&[("status", "rejected")])
                    .confirm("Reject this application?"),
            ]),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new(
            "status",
            "Status",
            enum_options::<ApplicationStatus>(),
        )]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::reference("jobId", "Job", EntityKind::Job).required(),
            FormField::text("applicantName", "Name").required(),
            FormField::new("email", "Email", InputKind::Email).required(),
            FormField::new("phone", "Phone", InputKind::Phone),
            FormField::new("resumeUrl", "Resume URL", InputKind::Url),
            FormField::select::<ApplicationStatus>("status", "Status"),
        ]
    }
}
