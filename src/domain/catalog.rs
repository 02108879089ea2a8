//! The rentable fleet and its taxonomy: categories, brands, model series
//! and the vehicles themselves.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entity::{EntityKind, impl_resource};
use crate::domain::types::{ApprovalStatus, EntityId, blank_id_as_none, wire_enum};

wire_enum!(
    FuelType {
        Petrol => ("petrol", "Petrol"),
        Diesel => ("diesel", "Diesel"),
        Electric => ("electric", "Electric"),
        Hybrid => ("hybrid", "Hybrid"),
        Cng => ("cng", "CNG"),
    }
);

wire_enum!(
    Transmission {
        Manual => ("manual", "Manual"),
        Automatic => ("automatic", "Automatic"),
    }
);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFields {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: CategoryFields,
}

impl_resource!(Category, CategoryFields, EntityKind::Category, |f| f.name.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandFields {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: BrandFields,
}

impl_resource!(Brand, BrandFields, EntityKind::Brand, |f| f.name.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeriesFields {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_id: Option<EntityId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: SeriesFields,
}

impl_resource!(Series, SeriesFields, EntityKind::Series, |f| f.name.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFields {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 4, max = 16))]
    pub registration_number: String,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_id: Option<EntityId>,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<EntityId>,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_id: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub series_id: Option<EntityId>,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_id: Option<EntityId>,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[validate(range(min = 1, max = 60))]
    pub seats: u8,
    #[validate(range(min = 0.0))]
    pub price_per_day: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: VehicleFields,
}

impl_resource!(Vehicle, VehicleFields, EntityKind::Vehicle, |f| format!(
    "{} ({})",
    f.name, f.registration_number
));

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::entity::Resource;

    fn vehicle_json() -> serde_json::Value {
        json!({
            "_id": "veh-1",
            "name": "Thar LX",
            "registrationNumber": "GA07AB1234",
            "companyId": "cmp-1",
            "categoryId": "cat-suv",
            "brandId": "brd-mahindra",
            "stateId": "st-goa",
            "fuelType": "diesel",
            "transmission": "manual",
            "seats": 4,
            "pricePerDay": 3499.0,
            "approvalStatus": "approved"
        })
    }

    #[test]
    fn vehicle_decodes_with_optional_series() {
        let vehicle: Vehicle = serde_json::from_value(vehicle_json()).unwrap();
        assert_eq!(vehicle.fields.series_id, None);
        assert_eq!(vehicle.fields.approval_status, ApprovalStatus::Approved);
        assert_eq!(vehicle.fields.fuel_type, FuelType::Diesel);
        assert_eq!(vehicle.title(), "Thar LX (GA07AB1234)");
        assert!(vehicle.fields.validate().is_ok());
    }

    #[test]
    fn vehicle_serializes_flat() {
        let vehicle: Vehicle = serde_json::from_value(vehicle_json()).unwrap();
        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(value["id"], "veh-1");
        assert_eq!(value["registrationNumber"], "GA07AB1234");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn vehicle_without_company_is_invalid() {
        let mut vehicle: Vehicle = serde_json::from_value(vehicle_json()).unwrap();
        vehicle.fields.company_id = None;
        assert!(vehicle.fields.validate().is_err());
    }
}
