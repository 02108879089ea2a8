//! Sales relationship management: customers, field agents and the trips
//! booked through them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entity::{EntityKind, impl_resource};
use crate::domain::types::{EntityId, blank_id_as_none, wire_enum};

wire_enum!(
    TripStatus {
        Booked => ("booked", "Booked"),
        Ongoing => ("ongoing", "Ongoing"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SrmCustomerFields {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_id: Option<EntityId>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SrmCustomer {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: SrmCustomerFields,
}

impl_resource!(SrmCustomer, SrmCustomerFields, EntityKind::SrmCustomer, |f| {
    f.name.clone()
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SrmAgentFields {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SrmAgent {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: SrmAgentFields,
}

impl_resource!(SrmAgent, SrmAgentFields, EntityKind::SrmAgent, |f| f.name.clone());

fn validate_trip_dates(fields: &SrmTripFields) -> Result<(), ValidationError> {
    if fields.end_date < fields.start_date {
        return Err(ValidationError::new("trip_dates"));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_trip_dates"))]
pub struct SrmTripFields {
    #[validate(length(min = 1, max = 40))]
    pub booking_ref: String,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_id: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_id: Option<EntityId>,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_id: Option<EntityId>,
    #[validate(length(min = 1))]
    pub pickup_location: String,
    #[serde(default)]
    pub drop_location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub fare: f64,
    #[serde(default)]
    pub status: TripStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SrmTrip {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: SrmTripFields,
}

impl_resource!(SrmTrip, SrmTripFields, EntityKind::SrmTrip, |f| f.booking_ref.clone());
