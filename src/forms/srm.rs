use crate::domain::srm::{SrmAgentFields, SrmCustomerFields, SrmTripFields};
use crate::forms::{EntityForm, FormError, normalize_contact};

impl EntityForm for SrmCustomerFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        normalize_contact(&mut self.email, &mut self.phone)?;
        self.notes = ammonia::clean(self.notes.trim());
        Ok(())
    }
}

impl EntityForm for SrmAgentFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        normalize_contact(&mut self.email, &mut self.phone)?;
        self.region = self.region.trim().to_string();
        Ok(())
    }
}

impl EntityForm for SrmTripFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.booking_ref = self.booking_ref.trim().to_uppercase();
        self.pickup_location = self.pickup_location.trim().to_string();
        self.drop_location = self.drop_location.trim().to_string();
        Ok(())
    }
}
