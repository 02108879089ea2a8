//! The set of record types the console manages and the trait tying a record
//! to its backend endpoint.

use std::fmt::{Debug, Display, Formatter};

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::types::{EntityId, TypeConstraintError};

/// Every record type the console can list and edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Blog,
    Promotion,
    Link,
    MetaData,
    Job,
    JobApplication,
    Company,
    State,
    Vehicle,
    Category,
    Brand,
    Series,
    SrmCustomer,
    SrmAgent,
    SrmTrip,
}

impl EntityKind {
    pub const ALL: [EntityKind; 15] = [
        EntityKind::Blog,
        EntityKind::Promotion,
        EntityKind::Link,
        EntityKind::MetaData,
        EntityKind::Job,
        EntityKind::JobApplication,
        EntityKind::Company,
        EntityKind::State,
        EntityKind::Vehicle,
        EntityKind::Category,
        EntityKind::Brand,
        EntityKind::Series,
        EntityKind::SrmCustomer,
        EntityKind::SrmAgent,
        EntityKind::SrmTrip,
    ];

    /// First path segment of the console pages for this kind.
    pub const fn route(self) -> &'static str {
        match self {
            EntityKind::Blog => "blogs",
            EntityKind::Promotion => "promotions",
            EntityKind::Link => "links",
            EntityKind::MetaData => "meta-data",
            EntityKind::Job => "jobs",
            EntityKind::JobApplication => "job-applications",
            EntityKind::Company => "companies",
            EntityKind::State => "states",
            EntityKind::Vehicle => "vehicles",
            EntityKind::Category => "categories",
            EntityKind::Brand => "brands",
            EntityKind::Series => "series",
            EntityKind::SrmCustomer => "srm-customers",
            EntityKind::SrmAgent => "srm-agents",
            EntityKind::SrmTrip => "srm-trips",
        }
    }

    /// Collection path on the backend, relative to the API base URL.
    pub const fn api_path(self) -> &'static str {
        match self {
            EntityKind::SrmCustomer => "srm/customers",
            EntityKind::SrmAgent => "srm/agents",
            EntityKind::SrmTrip => "srm/trips",
            other => other.route(),
        }
    }

    /// Plural label used in headings and the "No X Found!" message.
    pub const fn plural(self) -> &'static str {
        match self {
            EntityKind::Blog => "Blogs",
            EntityKind::Promotion => "Promotions",
            EntityKind::Link => "Links",
            EntityKind::MetaData => "Meta Data",
            EntityKind::Job => "Jobs",
            EntityKind::JobApplication => "Applications",
            EntityKind::Company => "Companies",
            EntityKind::State => "States",
            EntityKind::Vehicle => "Vehicles",
            EntityKind::Category => "Categories",
            EntityKind::Brand => "Brands",
            EntityKind::Series => "Series",
            EntityKind::SrmCustomer => "Customers",
            EntityKind::SrmAgent => "Agents",
            EntityKind::SrmTrip => "Trips",
        }
    }

    pub const fn singular(self) -> &'static str {
        match self {
            EntityKind::Blog => "Blog",
            EntityKind::Promotion => "Promotion",
            EntityKind::Link => "Link",
            EntityKind::MetaData => "Meta Data",
            EntityKind::Job => "Job",
            EntityKind::JobApplication => "Application",
            EntityKind::Company => "Company",
            EntityKind::State => "State",
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Category => "Category",
            EntityKind::Brand => "Brand",
            EntityKind::Series => "Series",
            EntityKind::SrmCustomer => "Customer",
            EntityKind::SrmAgent => "Agent",
            EntityKind::SrmTrip => "Trip",
        }
    }

    pub fn from_route(segment: &str) -> Result<Self, TypeConstraintError> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.route() == segment)
            .ok_or_else(|| TypeConstraintError::UnknownVariant {
                kind: "EntityKind",
                value: segment.to_string(),
            })
    }

    pub fn list_path(self) -> String {
        format!("/{}", self.route())
    }

    pub fn new_path(self) -> String {
        format!("/{}/new", self.route())
    }

    pub fn edit_path(self, id: &EntityId) -> String {
        format!("/{}/edit/{}", self.route(), id)
    }

    pub fn delete_path(self, id: &EntityId) -> String {
        format!("/{}/delete/{}", self.route(), id)
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}

/// A record owned by the backend and managed through the console.
///
/// Records keep their editable attributes in `Fields`, which doubles as the
/// create/update payload and as the form the console decodes.
pub trait Resource:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    type Fields: Clone
        + Debug
        + Default
        + Serialize
        + DeserializeOwned
        + Validate
        + Send
        + Sync
        + 'static;

    fn id(&self) -> &EntityId;

    fn fields(&self) -> &Self::Fields;

    /// Short human readable name of the record.
    fn title(&self) -> String;
}

/// Implements [`Resource`] for a record with `id` and flattened `fields`.
macro_rules! impl_resource {
    ($record:ty, $fields:ty, $kind:expr, |$this:ident| $title:expr) => {
        impl $crate::domain::entity::Resource for $record {
            const KIND: $crate::domain::entity::EntityKind = $kind;

            type Fields = $fields;

            fn id(&self) -> &$crate::domain::types::EntityId {
                &self.id
            }

            fn fields(&self) -> &Self::Fields {
                &self.fields
            }

            fn title(&self) -> String {
                let $this = &self.fields;
                $title
            }
        }
    };
}

pub(crate) use impl_resource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_route(kind.route()), Ok(kind));
        }
        assert!(EntityKind::from_route("spaceships").is_err());
    }

    #[test]
    fn srm_records_live_under_a_nested_api_path() {
        assert_eq!(EntityKind::SrmTrip.api_path(), "srm/trips");
        assert_eq!(EntityKind::SrmTrip.route(), "srm-trips");
        assert_eq!(EntityKind::Blog.api_path(), "blogs");
    }

    #[test]
    fn paths_carry_the_identifier_verbatim() {
        let id = EntityId::new("a1b2/c3").unwrap();
        assert_eq!(EntityKind::Vehicle.edit_path(&id), "/vehicles/edit/a1b2/c3");
        assert_eq!(EntityKind::Vehicle.new_path(), "/vehicles/new");
    }
}
