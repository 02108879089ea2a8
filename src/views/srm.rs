use crate::components::table::{BadgeTone, Column};
use crate::components::tags::enum_options;
use crate::domain::entity::EntityKind;
use crate::domain::srm::{SrmAgent, SrmCustomer, SrmTrip, TripStatus};
use crate::views::form::{FormField, InputKind};
use crate::views::{ListingView, TagFilter, flag_tone, manage_column, title_column, yes_no};

fn trip_tone(status: TripStatus) -> BadgeTone {
    match status {
        TripStatus::Booked => BadgeTone::Info,
        TripStatus::Ongoing => BadgeTone::Warning,
        TripStatus::Completed => BadgeTone::Success,
        TripStatus::Cancelled => BadgeTone::Danger,
    }
}

impl ListingView for SrmCustomer {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Email", |c: &SrmCustomer| c.fields.email.clone()),
            Column::field("Phone", |c: &SrmCustomer| c.fields.phone.clone()),
            manage_column(Vec::new()),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::new("email", "Email", InputKind::Email).required(),
            FormField::new("phone", "Phone", InputKind::Phone).required(),
            FormField::reference("stateId", "State", EntityKind::State),
            FormField::new("notes", "Notes", InputKind::TextArea),
        ]
    }
}

impl ListingView for SrmAgent {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Name"),
            Column::field("Email", |a: &SrmAgent| a.fields.email.clone()),
            Column::field("Phone", |a: &SrmAgent| a.fields.phone.clone()),
            Column::field("Region", |a: &SrmAgent| a.fields.region.clone()),
            Column::badge(
                "Active",
                |a: &SrmAgent| yes_no(a.fields.active),
                |a: &SrmAgent| flag_tone(a.fields.active),
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
            FormField::new("email", "Email", InputKind::Email).required(),
            FormField::new("phone", "Phone", InputKind::Phone).required(),
            FormField::text("region", "Region"),
            FormField::new("active", "Active", InputKind::Checkbox),
        ]
    }
}

impl ListingView for SrmTrip {
    fn columns() -> Vec<Column<Self>> {
        vec![
            title_column("Booking"),
            Column::field("Pickup", |t: &SrmTrip| t.fields.pickup_location.clone()),
            Column::field("Drop", |t: &SrmTrip| t.fields.drop_location.clone()),
            Column::field("Dates", |t: &SrmTrip| {
                format!("{} to {}", t.fields.start_date, t.fields.end_date)
            }),
            Column::field("Fare", |t: &SrmTrip| format!("{:.2}", t.fields.fare)),
            Column::badge(
                "Status",
                |t: &SrmTrip| t.fields.status.label().to_string(),
                |t: &SrmTrip| trip_tone(t.fields.status),
            ),
            manage_column(Vec::new()),
        ]
    }

    fn tag_filters() -> Vec<TagFilter> {
        vec![TagFilter::new("status", "Status", enum_options::<TripStatus>())]
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("bookingRef", "Booking reference").required(),
            FormField::reference("customerId", "Customer", EntityKind::SrmCustomer).required(),
            FormField::reference("agentId", "Agent", EntityKind::SrmAgent),
            FormField::reference("vehicleId", "Vehicle", EntityKind::Vehicle).required(),
            FormField::text("pickupLocation", "Pickup").required(),
            FormField::text("dropLocation", "Drop"),
            FormField::new("startDate", "Start", InputKind::Date).required(),
            FormField::new("endDate", "End", InputKind::Date).required(),
            FormField::new("fare", "Fare", InputKind::Decimal).required(),
            FormField::select::<TripStatus>("status", "Status"),
        ]
    }
}
