//! Job openings published on the careers page and the applications
//! received for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entity::{EntityKind, impl_resource};
use crate::domain::types::{EntityId, blank_id_as_none, wire_enum};

wire_enum!(
    EmploymentType {
        FullTime => ("full-time", "Full time"),
        PartTime => ("part-time", "Part time"),
        Contract => ("contract", "Contract"),
        Internship => ("internship", "Internship"),
    }
);

wire_enum!(
    /// Review stage of a job application.
    ApplicationStatus {
        Applied => ("applied", "Applied"),
        Shortlisted => ("shortlisted", "Shortlisted"),
        Rejected => ("rejected", "Rejected"),
        Hired => ("hired", "Hired"),
    }
);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobFields {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub employment_type: EmploymentType,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub openings: u32,
    #[serde(default)]
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: JobFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl_resource!(Job, JobFields, EntityKind::Job, |f| f.title.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationFields {
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_id: Option<EntityId>,
    #[validate(length(min = 1))]
    pub applicant_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    #[validate(url)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: JobApplicationFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

impl_resource!(
    JobApplication,
    JobApplicationFields,
    EntityKind::JobApplication,
    |f| f.applicant_name.clone()
);
