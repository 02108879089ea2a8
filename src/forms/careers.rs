use crate::domain::careers::{JobApplicationFields, JobFields};
use crate::domain::types::{normalize_email, normalize_phone_to_e164};
use crate::forms::{EntityForm, FormError, blank_to_none, clean_rich_text};

impl EntityForm for JobFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.title = self.title.trim().to_string();
        self.department = self.department.trim().to_string();
        self.location = self.location.trim().to_string();
        self.description = clean_rich_text(&self.description);
        Ok(())
    }
}

impl EntityForm for JobApplicationFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.applicant_name = self.applicant_name.trim().to_string();
        self.email = normalize_email(self.email.as_str())?;
        // Phone is optional on applications.
        if !self.phone.trim().is_empty() {
            self.phone = normalize_phone_to_e164(&self.phone)?;
        }
        blank_to_none(&mut self.resume_url);
        Ok(())
    }
}
