use crate::domain::catalog::{BrandFields, CategoryFields, SeriesFields, VehicleFields};
use crate::domain::types::slugify;
use crate::forms::{EntityForm, FormError, blank_to_none, split_list};

/// Uses the given slug, or derives one from the name when left blank.
fn slug_or_name(slug: &str, name: &str) -> String {
    if slug.trim().is_empty() {
        slugify(name)
    } else {
        slugify(slug)
    }
}

impl EntityForm for CategoryFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        self.slug = slug_or_name(&self.slug, &self.name);
        blank_to_none(&mut self.icon);
        Ok(())
    }
}

impl EntityForm for BrandFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        self.slug = slug_or_name(&self.slug, &self.name);
        blank_to_none(&mut self.logo);
        Ok(())
    }
}

impl EntityForm for SeriesFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        self.slug = slug_or_name(&self.slug, &self.name);
        Ok(())
    }
}

impl EntityForm for VehicleFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        self.registration_number = self
            .registration_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        self.images = split_list(&self.images);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{FuelType, Transmission};
    use crate::domain::types::ApprovalStatus;
    use crate::forms::parse_form;

    #[test]
    fn slug_defaults_to_the_name() {
        let category: CategoryFields = parse_form(b"name=Luxury+SUVs&slug=&icon=").unwrap();
        assert_eq!(category.slug, "luxury-suvs");
        assert_eq!(category.icon, None);

        let brand: BrandFields = parse_form(b"name=Royal+Enfield&slug=RE+Bikes").unwrap();
        assert_eq!(brand.slug, "re-bikes");
    }

    #[test]
    fn series_requires_a_brand() {
        assert!(matches!(
            parse_form::<SeriesFields>(b"name=Classic"),
            Err(FormError::Validation(_))
        ));
        let series: SeriesFields = parse_form(b"name=Classic+350&brandId=b-1").unwrap();
        assert_eq!(series.brand_id.unwrap().as_str(), "b-1");
    }

    #[test]
    fn vehicle_form_decodes_every_attribute() {
        let body = "name=Creta&registrationNumber=mh+12+ab+1234&companyId=c1&categoryId=k1\
                    &brandId=b1&seriesId=&stateId=s1&fuelType=diesel&transmission=automatic\
                    &seats=5&pricePerDay=2499.5&images=a.jpg%2C+b.jpg&approvalStatus=pending";
        let vehicle: VehicleFields = parse_form(body.as_bytes()).unwrap();

        assert_eq!(vehicle.registration_number, "MH12AB1234");
        assert_eq!(vehicle.series_id, None);
        assert_eq!(vehicle.fuel_type, FuelType::Diesel);
        assert_eq!(vehicle.transmission, Transmission::Automatic);
        assert_eq!(vehicle.seats, 5);
        assert_eq!(vehicle.price_per_day, 2499.5);
        assert_eq!(vehicle.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(vehicle.approval_status, ApprovalStatus::Pending);
    }

    #[test]
    fn blank_required_references_are_rejected() {
        let body = "name=Creta&registrationNumber=MH12AB1234&companyId=&categoryId=\
                    &brandId=&stateId=&fuelType=diesel&transmission=manual&seats=5\
                    &pricePerDay=100";
        assert!(matches!(
            parse_form::<VehicleFields>(body.as_bytes()),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            parse_form::<SeriesFields>(b"name=Classic&brandId="),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn blank_optional_reference_is_left_out_of_the_payload() {
        let body = "name=Creta&registrationNumber=MH12AB1234&companyId=c1&categoryId=k1\
                    &brandId=b1&seriesId=&stateId=s1&fuelType=diesel&transmission=manual\
                    &seats=5&pricePerDay=100";
        let vehicle: VehicleFields = parse_form(body.as_bytes()).unwrap();
        assert_eq!(vehicle.series_id, None);

        let payload = serde_json::to_value(&vehicle).unwrap();
        assert!(payload.get("seriesId").is_none());
        assert_eq!(payload["brandId"], "b1");
    }

    #[test]
    fn vehicle_without_references_is_rejected() {
        let body = "name=Creta&registrationNumber=MH12AB1234&fuelType=diesel\
                    &transmission=manual&seats=5&pricePerDay=100";
        assert!(matches!(
            parse_form::<VehicleFields>(body.as_bytes()),
            Err(FormError::Validation(_))
        ));
    }
}
