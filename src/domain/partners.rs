//! Rental companies listed on the marketplace and the states they operate in.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entity::{EntityKind, impl_resource};
use crate::domain::types::{ApprovalStatus, EntityId, blank_id_as_none};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFields {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(required)]
    #[serde(
        default,
        deserialize_with = "blank_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_id: Option<EntityId>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: CompanyFields,
}

impl_resource!(Company, CompanyFields, EntityKind::Company, |f| f.name.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StateFields {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 2, max = 3))]
    pub code: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: StateFields,
}

impl_resource!(State, StateFields, EntityKind::State, |f| f.name.clone());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_code_length_is_checked() {
        let fields = StateFields {
            name: "Goa".into(),
            code: "G".into(),
            active: true,
        };
        assert!(fields.validate().is_err());
        let fields = StateFields {
            code: "GA".into(),
            ..fields
        };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn company_website_is_optional_but_checked() {
        let mut fields = CompanyFields {
            name: "Coastal Wheels".into(),
            email: "ops@coastal.example".into(),
            phone: "+918888888888".into(),
            state_id: Some(EntityId::new("st-goa").unwrap()),
            ..CompanyFields::default()
        };
        assert!(fields.validate().is_ok());
        fields.website = Some("coastal wheels".into());
        assert!(fields.validate().is_err());
    }
}
