use crate::domain::partners::{CompanyFields, StateFields};
use crate::forms::{EntityForm, FormError, blank_to_none, normalize_contact};

impl EntityForm for CompanyFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        normalize_contact(&mut self.email, &mut self.phone)?;
        self.city = self.city.trim().to_string();
        self.address = self.address.trim().to_string();
        blank_to_none(&mut self.website);
        blank_to_none(&mut self.logo);
        Ok(())
    }
}

impl EntityForm for StateFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.name = self.name.trim().to_string();
        self.code = self.code.trim().to_uppercase();
        Ok(())
    }
}
