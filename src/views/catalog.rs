use crate::components::table::{Column, RowAction};
use crate::components::tags::enum_options;
use crate::domain::catalog::{Brand, Category, FuelType, Series, Transmission, Vehicle};
use crate::domain::entity::EntityKind;
use crate::domain::types::ApprovalStatus;
use crate::views::form::{FormField, InputKind};
use crate::views::{ListingView, TagFilter, approval_tone, manage_column, optional_text, title_column};

fn approval_href(vehicle: &Vehicle) -> String {
    format!("/vehicles/{}/approval", vehicle.id)
}

impl ListingView for Category {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Slug", |c: &Category| c.fields.slug.clone()),
            Column::field("Icon", |c: &Category| optional_text(&c.fields.icon)),
            manage_column(Vec::new()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::text("slug", "Slug"),
            FormField::new("icon", "Icon URL", InputKind::Url),
        ]
    }
}

impl ListingView for Brand {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Slug", |b: &Brand| b.fields.slug.clone()),
            Column::field("Logo", |b: &Brand| optional_text(&b.fields.logo)),
            manage_column(Vec::new()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::text("slug", "Slug"),
            FormField::new("logo", "Logo URL", InputKind::Url),
        ]
    }
}

impl ListingView for Series {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Slug", |s: &Series| s.fields.slug.clone()),
            Column::field("Brand", |s: &Series| {
                s.fields
                    .brand_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            }),
            manage_column(Vec::new()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::text("slug", "Slug"),
            FormField::reference("brandId", "Brand", EntityKind::Brand).required(),
        ]
    }
}

impl ListingView for Vehicle {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Vehicle"),
            Column::field("Fuel", |v: &Vehicle| v.fields.fuel_type.label().to_string()),
            Column::field("Transmission", |v: &Vehicle| {
                v.fields.transmission.label().to_string()
            }),
            Column::field("Seats", |v: &Vehicle| v.fields.seats.to_string()),
            Column::field("Price / day", |v: &Vehicle| {
                format!("{:.2}", v.fields.price_per_day)
            }),
            Column::badge(
                "Approval",
                |v: &Vehicle| v.fields.approval_status.label().to_string(),
                |v: &Vehicle| approval_tone(v.fields.approval_status),
            ),
            manage_column(vec![
                RowAction::post("Approve", approval_href).with_values(&[("status", "approved")]),
                RowAction::post("Reject", approval_href)
                    .with_values(&[("status", "rejected")])
                    .confirm("Reject this vehicle?"),
            ]),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![
            TagFilter::new(
                "approvalStatus",
                "Approval",
                enum_options::<ApprovalStatus>(),
            ),
            TagFilter::new("fuelType", "Fuel", enum_options::<FuelType>()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::text("registrationNumber", "Registration number").required(),
            FormField::reference("companyId", "Company", EntityKind::Company).required(),
            FormField::reference("categoryId", "Category", EntityKind::Category).required(),
            FormField::reference("brandId", "Brand", EntityKind::Brand).required(),
            FormField::reference("seriesId", "Series", EntityKind::Series),
            FormField::reference("stateId", "State", EntityKind::State).required(),
            FormField::select::<FuelType>("fuelType", "Fuel"),
            FormField::select::<Transmission>("transmission", "Transmission"),
            FormField::new("seats", "Seats", InputKind::Number).required(),
            FormField::new("pricePerDay", "Price per day", InputKind::Decimal).required(),
            FormField::new("images", "Image URLs", InputKind::List),
            FormField::select::<ApprovalStatus>("approvalStatus", "Approval"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::table::{CellView, render_table};
    use crate::domain::catalog::VehicleFields;
    use crate::domain::types::EntityId;
    use crate::views::form::referenced_kinds;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: EntityId::new("v1").unwrap(),
            fields: VehicleFields {
                name: "Thar".to_string(),
                registration_number: "GA07A1234".to_string(),
                price_per_day: 3200.0,
                approval_status: ApprovalStatus::Pending,
                ..Default::default()
            },
        }
    }

    #[test]
    fn vehicle_row_carries_moderation_actions() {
        let view = render_table(&Vehicle::columns(), &[vehicle()], false);
        let row = &view.rows[0];

        assert_eq!(
            row.cells[0],
            CellView::Link {
                text: "Thar (GA07A1234)".to_string(),
                href: "/vehicles/edit/v1".to_string(),
            }
        );
        assert_eq!(
            row.cells[4],
            CellView::Text {
                text: "3200.00".to_string()
            }
        );

        let CellView::Actions { actions } = &row.cells[6] else {
            panic!("expected actions");
        };
        let labels: Vec<_> = actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Approve", "Reject", "Edit", "Delete"]);
        assert_eq!(actions[0].href, "/vehicles/v1/approval");
        assert_eq!(actions[1].hidden, vec![("status", "rejected")]);
    }

    #[test]
    fn vehicle_form_needs_five_reference_lists() {
        assert_eq!(
            referenced_kinds(&Vehicle::form_fields()),
            vec![
                EntityKind::Company,
                EntityKind::Category,
                EntityKind::Brand,
                EntityKind::Series,
                EntityKind::State,
            ]
        );
    }

    #[test]
    fn vehicle_form_fields_match_the_wire_names() {
        let id = |value: &str| Some(EntityId::new(value).unwrap());
        let fields = VehicleFields {
            company_id: id("c1"),
            category_id: id("k1"),
            brand_id: id("b1"),
            series_id: id("s1"),
            state_id: id("st1"),
            ..VehicleFields::default()
        };
        let value = serde_json::to_value(fields).unwrap();
        for field in Vehicle::form_fields() {
            assert!(value.get(field.name).is_some(), "{}", field.name);
        }
    }
}
